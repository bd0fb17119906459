//! Alpha matrix: inter-order overlap for every pair of orders.

use hyperlap_core::models::AlphaMatrix;
use hyperlap_core::traits::HypergraphView;
use tracing::{debug, info};

use crate::grouping::{edge_orders, list_edges_by_order};
use crate::interorder::interorder_overlap;

/// Build the alpha matrix of `hypergraph`.
///
/// Orders are `size - 1` per edge; `max_order` caps the largest order
/// considered. The matrix has dimension `max_order - min_order` and order `o`
/// maps to index `o - 1`. Only entries `(m - 1, n - 1)` for
/// `1 <= m < n < max_order` are filled; everything else stays `NaN`, as do
/// entries whose index falls outside the matrix. Empty edges are ignored.
pub fn alpha_matrix<H: HypergraphView>(hypergraph: &H, max_order: Option<usize>) -> AlphaMatrix {
    let (edges, orders) = edge_orders(hypergraph);

    let (Some(&min_order), Some(&largest)) = (orders.iter().min(), orders.iter().max()) else {
        info!("hypergraph has no edges, alpha matrix is empty");
        return AlphaMatrix::undefined(0, 0);
    };
    let max_order = max_order.unwrap_or(largest);
    let _span = hyperlap_observability::overlap_span!(edges.len(), Some(max_order)).entered();
    info!(max_order, min_order, nodes = hypergraph.num_nodes(), "computing alpha matrix");

    let groups = list_edges_by_order(&edges, &orders, min_order, max_order);
    let mut matrix = AlphaMatrix::undefined(min_order, max_order);

    for m in 1..max_order {
        debug!(order = m, max_order, "computing overlaps for order");
        for n in (m + 1)..max_order {
            let value = interorder_overlap(&groups, m, n);
            if !matrix.set(m - 1, n - 1, value) {
                debug!(m, n, "overlap index outside matrix, skipped");
            }
        }
    }

    matrix
}
