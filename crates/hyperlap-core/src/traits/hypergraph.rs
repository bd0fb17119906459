use crate::models::{NodeId, NodeSet};

/// Read-only view of a hypergraph consumed by the inter-order overlap engine.
///
/// `edge_sizes` and `edge_members` must enumerate edges in the same stable
/// order, so that the i-th size belongs to the i-th member entry.
pub trait HypergraphView {
    /// Opaque hyperedge identifier.
    type EdgeId: Clone + std::fmt::Debug;

    /// Size (member count) of every edge, in stable edge order.
    fn edge_sizes(&self) -> Vec<usize>;

    /// Total number of nodes.
    fn num_nodes(&self) -> usize;

    /// `(id, members)` for every edge, in stable edge order.
    fn edge_members(&self) -> Vec<(Self::EdgeId, Vec<NodeId>)>;

    /// Members of every edge as canonical node sets, in stable edge order.
    fn edge_sets(&self) -> Vec<(Self::EdgeId, NodeSet)> {
        self.edge_members()
            .into_iter()
            .map(|(id, members)| (id, NodeSet::new(members)))
            .collect()
    }
}
