//! Inter-order overlap between two edge orders.

use std::collections::HashSet;

use hyperlap_core::models::{NodeSet, OrderGroups};

use crate::combinations::for_each_combination;

/// Overlap between `m`-edges and `n`-edges:
///
/// ```text
/// |{ e_m : ∃ e_n ⊇ e_m }| / |distinct (m+1)-subsets of all n-edges|
/// ```
///
/// Each `m`-edge counts at most once. `NaN` when either group is empty or no
/// `n`-edge has `m + 1` members.
pub fn interorder_overlap(groups: &OrderGroups, m: usize, n: usize) -> f64 {
    let lower = groups.get(m);
    let upper = groups.get(n);
    if lower.is_empty() || upper.is_empty() {
        return f64::NAN;
    }

    let realised = lower
        .iter()
        .filter(|e_m| upper.iter().any(|e_n| e_m.is_subset_of(e_n)))
        .count();

    let possible = possible_subsets(upper, m + 1);
    if possible.is_empty() {
        return f64::NAN;
    }
    realised as f64 / possible.len() as f64
}

/// Distinct `k`-subsets drawn from every edge in `edges`.
pub fn possible_subsets(edges: &[NodeSet], k: usize) -> HashSet<NodeSet> {
    let mut subsets = HashSet::new();
    for edge in edges {
        for_each_combination(edge.nodes(), k, |subset| {
            subsets.insert(subset.iter().copied().collect::<NodeSet>());
        });
    }
    subsets
}
