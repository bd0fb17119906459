//! Maximal clique enumeration per snapshot.

use std::collections::BTreeMap;

use hyperlap_core::models::{Clique, Timestamp};
use petgraph::algo;

use crate::snapshot::{Snapshot, Snapshots};

/// Maximal cliques of every snapshot, keyed like the snapshots.
pub type CliquesBySnapshot = BTreeMap<Timestamp, Vec<Clique>>;

/// List the maximal cliques of every snapshot, visiting buckets in ascending
/// key order.
pub fn extract_cliques(snapshots: &Snapshots) -> CliquesBySnapshot {
    snapshots
        .iter()
        .map(|(t, snapshot)| (*t, maximal_cliques(snapshot)))
        .collect()
}

/// All maximal cliques of `snapshot`, sorted.
///
/// Self-loops never extend a clique, so a node whose only contacts are with
/// itself forms a singleton clique.
pub fn maximal_cliques(snapshot: &Snapshot) -> Vec<Clique> {
    // An empty graph yields one empty clique.
    let mut cliques: Vec<Clique> = algo::maximal_cliques(snapshot.graph())
        .into_iter()
        .filter(|members| !members.is_empty())
        .map(|members| members.into_iter().collect())
        .collect();
    cliques.sort();
    cliques
}
