//! Time-bucketed graph snapshots of a contact stream.

pub mod aggregate;
mod graph;

pub use aggregate::{aggregate, aggregate_file, AggregationResult};
pub use graph::Snapshot;

use std::collections::BTreeMap;

use hyperlap_core::models::Timestamp;

/// Snapshots keyed by bucket start time, iterated in ascending time order.
pub type Snapshots = BTreeMap<Timestamp, Snapshot>;
