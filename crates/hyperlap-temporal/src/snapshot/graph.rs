use hyperlap_core::models::NodeId;
use petgraph::graphmap::UnGraphMap;

/// Undirected simple graph of every contact observed in one time bucket.
///
/// Inserting an existing edge is a no-op; self-loops are stored as given.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    graph: UnGraphMap<NodeId, ()>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert the edge `a - b`. Returns `true` when the edge was new.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> bool {
        self.graph.add_edge(a, b, ()).is_none()
    }

    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.graph.contains_edge(a, b)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Nodes in ascending order.
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.graph.nodes().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Edges as `(low, high)` pairs in ascending order.
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut edges: Vec<(NodeId, NodeId)> = self
            .graph
            .all_edges()
            .map(|(a, b, _)| if a <= b { (a, b) } else { (b, a) })
            .collect();
        edges.sort_unstable();
        edges
    }

    pub(crate) fn graph(&self) -> &UnGraphMap<NodeId, ()> {
        &self.graph
    }
}
