//! Maximality filter over a weighted clique multiset.

use hyperlap_core::models::WeightedCliques;
use tracing::debug;

/// Drop every clique that is a proper subset of another observed clique.
///
/// Pairwise over all distinct cliques, O(k²) subset tests. Survivors keep
/// their weight; nothing is merged or re-weighted, and cliques absent from
/// `weights` are never synthesized.
pub fn clean_non_maximal(weights: &WeightedCliques) -> WeightedCliques {
    let mut maximal = WeightedCliques::new();
    for (x, &w) in weights {
        let dominated = weights
            .cliques()
            .any(|xx| x.len() < xx.len() && x.is_proper_subset_of(xx));
        if !dominated {
            maximal.insert(x.clone(), w);
        }
    }
    debug!(
        input = weights.len(),
        retained = maximal.len(),
        "maximality filter applied"
    );
    maximal
}
