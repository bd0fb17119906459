mod hypergraph;

pub use hypergraph::HypergraphView;
