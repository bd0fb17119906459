//! Clique weighting across snapshots.

use hyperlap_core::models::{Clique, WeightedCliques};

use super::CliquesBySnapshot;

/// Count how many snapshots produced each distinct clique.
pub fn clique_weights(cliques: &CliquesBySnapshot) -> WeightedCliques {
    cliques.values().flatten().cloned().collect()
}

/// Weighted mean clique size: `Σ w(c)·|c| / Σ w(c)`. `NaN` when empty.
pub fn average_clique_size(weights: &WeightedCliques) -> f64 {
    let total_weight = weights.total_weight();
    if total_weight == 0 {
        return f64::NAN;
    }
    let weighted_sizes: f64 = weights
        .iter()
        .map(|(clique, &w)| w as f64 * clique.len() as f64)
        .sum();
    weighted_sizes / total_weight as f64
}

/// Cliques with weight at least `threshold`, or all of them when `None`,
/// in ascending clique order.
pub fn select_by_threshold(weights: &WeightedCliques, threshold: Option<usize>) -> Vec<&Clique> {
    weights
        .iter()
        .filter(|&(_, &w)| threshold.map_or(true, |thr| w >= thr))
        .map(|(clique, _)| clique)
        .collect()
}
