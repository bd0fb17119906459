//! In-memory hypergraph container.

use std::collections::BTreeSet;
use std::path::Path;

use hyperlap_core::artifact;
use hyperlap_core::errors::HyperlapResult;
use hyperlap_core::models::{NodeId, NodeSet, WeightedCliques};
use hyperlap_core::traits::HypergraphView;

/// Hyperedges with stable integer ids (insertion order) over a node set.
#[derive(Debug, Clone, Default)]
pub struct Hypergraph {
    edges: Vec<NodeSet>,
    nodes: BTreeSet<NodeId>,
}

impl Hypergraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a hyperedge and return its id. Duplicate member sets are kept as
    /// distinct edges.
    pub fn add_edge(&mut self, members: impl IntoIterator<Item = NodeId>) -> usize {
        let members = NodeSet::new(members);
        self.nodes.extend(members.nodes().iter().copied());
        self.edges.push(members);
        self.edges.len() - 1
    }

    /// Register a node that may belong to no edge.
    pub fn add_node(&mut self, node: NodeId) {
        self.nodes.insert(node);
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn edge(&self, id: usize) -> Option<&NodeSet> {
        self.edges.get(id)
    }

    /// One edge per node list.
    pub fn from_edge_lists<L>(lists: impl IntoIterator<Item = L>) -> Self
    where
        L: IntoIterator<Item = u64>,
    {
        let mut hypergraph = Self::new();
        for list in lists {
            hypergraph.add_edge(list.into_iter().map(NodeId));
        }
        hypergraph
    }

    /// One edge per distinct clique, ignoring weights.
    pub fn from_cliques(cliques: &WeightedCliques) -> Self {
        let mut hypergraph = Self::new();
        for clique in cliques.cliques() {
            hypergraph.add_edge(clique.nodes().iter().copied());
        }
        hypergraph
    }

    /// Read a JSON list of node lists, such as an exported clique artifact.
    pub fn from_json_file(path: &Path) -> HyperlapResult<Self> {
        Ok(Self::from_edge_lists(artifact::read_node_lists(path)?))
    }
}

impl HypergraphView for Hypergraph {
    type EdgeId = usize;

    fn edge_sizes(&self) -> Vec<usize> {
        self.edges.iter().map(NodeSet::len).collect()
    }

    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    fn edge_members(&self) -> Vec<(usize, Vec<NodeId>)> {
        self.edges
            .iter()
            .enumerate()
            .map(|(id, members)| (id, members.nodes().to_vec()))
            .collect()
    }

    fn edge_sets(&self) -> Vec<(usize, NodeSet)> {
        self.edges.iter().cloned().enumerate().collect()
    }
}
