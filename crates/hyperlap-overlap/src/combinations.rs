//! k-subsets of a sorted node slice.

use hyperlap_core::models::{NodeId, NodeSet};

/// Call `visit` with every `k`-subset of `nodes`, in lexicographic index order.
///
/// Nothing is visited when `k > nodes.len()`. `k == 0` visits the empty set once.
pub fn for_each_combination<F>(nodes: &[NodeId], k: usize, mut visit: F)
where
    F: FnMut(&[NodeId]),
{
    let n = nodes.len();
    if k > n {
        return;
    }
    let mut indices: Vec<usize> = (0..k).collect();
    let mut buffer: Vec<NodeId> = Vec::with_capacity(k);
    loop {
        buffer.clear();
        buffer.extend(indices.iter().map(|&i| nodes[i]));
        visit(&buffer);

        // Rightmost index that can still move forward.
        let Some(pos) = (0..k).rev().find(|&pos| indices[pos] != pos + n - k) else {
            return;
        };
        indices[pos] += 1;
        for next in pos + 1..k {
            indices[next] = indices[next - 1] + 1;
        }
    }
}

/// Every `k`-subset of `set` as a canonical node set.
pub fn combinations(set: &NodeSet, k: usize) -> Vec<NodeSet> {
    let mut out = Vec::new();
    for_each_combination(set.nodes(), k, |subset| {
        out.push(subset.iter().copied().collect())
    });
    out
}
