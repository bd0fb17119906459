//! # hyperlap-overlap
//!
//! Inter-order overlap of a hypergraph: hyperedges are partitioned by order
//! (`size - 1`) and, for every pair of orders `m < n`, the fraction of
//! `(m + 1)`-subsets of `n`-edges realised as actual `m`-edges is computed.

pub mod alpha;
pub mod combinations;
pub mod engine;
pub mod grouping;
pub mod hypergraph;
pub mod interorder;

pub use alpha::alpha_matrix;
pub use engine::OverlapEngine;
pub use grouping::list_edges_by_order;
pub use hypergraph::Hypergraph;
pub use interorder::interorder_overlap;
