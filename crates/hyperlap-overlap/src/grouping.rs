//! Partition hyperedges by order.

use hyperlap_core::models::{NodeSet, OrderGroups};
use hyperlap_core::traits::HypergraphView;

/// Member sets of `hypergraph` with their orders (`size - 1`), in stable
/// edge order. Edges of size zero have no order and are skipped.
pub fn edge_orders<H: HypergraphView>(
    hypergraph: &H,
) -> (Vec<(H::EdgeId, NodeSet)>, Vec<usize>) {
    hypergraph
        .edge_sets()
        .into_iter()
        .zip(hypergraph.edge_sizes())
        .filter_map(|(edge, size)| size.checked_sub(1).map(|order| (edge, order)))
        .unzip()
}

/// Group member sets by their precomputed order over `[min_order, max_order]`.
///
/// `orders[i]` is the order of `edges[i]`. Orders in the range without edges
/// map to an empty group; edges whose order falls outside the range (above a
/// `max_order` cap) are left out.
pub fn list_edges_by_order<Id>(
    edges: &[(Id, NodeSet)],
    orders: &[usize],
    min_order: usize,
    max_order: usize,
) -> OrderGroups {
    let mut groups = OrderGroups::with_range(min_order, max_order);
    for ((_, members), &order) in edges.iter().zip(orders) {
        groups.push(order, members.clone());
    }
    groups
}
