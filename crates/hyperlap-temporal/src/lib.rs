//! # hyperlap-temporal
//!
//! Temporal contact network pipeline: edge-list parsing → time-bucketed
//! snapshots → per-snapshot maximal cliques → weighted clique multiset →
//! maximality filter → list-of-lists export.

pub mod cliques;
pub mod edgelist;
pub mod engine;
pub mod export;
pub mod snapshot;

pub use cliques::{average_clique_size, clean_non_maximal, clique_weights, extract_cliques};
pub use edgelist::ContactEvent;
pub use engine::{TemporalEngine, TemporalReport};
pub use export::ExportParams;
pub use snapshot::{aggregate, AggregationResult, Snapshot, Snapshots};
