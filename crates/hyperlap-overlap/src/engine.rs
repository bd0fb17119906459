use hyperlap_core::config::OverlapConfig;
use hyperlap_core::models::{AlphaMatrix, OrderGroups};
use hyperlap_core::traits::HypergraphView;

use crate::{alpha, grouping, interorder};

/// Inter-order overlap analysis driven by [`OverlapConfig`].
pub struct OverlapEngine {
    config: OverlapConfig,
}

impl OverlapEngine {
    pub fn new(config: OverlapConfig) -> Self {
        Self { config }
    }

    /// Alpha matrix of `hypergraph` under the configured order cap.
    pub fn alpha_matrix<H: HypergraphView>(&self, hypergraph: &H) -> AlphaMatrix {
        alpha::alpha_matrix(hypergraph, self.config.max_order)
    }

    /// Order groups of `hypergraph` over its full order range, capped like
    /// [`alpha_matrix`](Self::alpha_matrix).
    pub fn order_groups<H: HypergraphView>(&self, hypergraph: &H) -> OrderGroups {
        let (edges, orders) = grouping::edge_orders(hypergraph);
        let min_order = orders.iter().copied().min().unwrap_or(0);
        let max_order = self
            .config
            .max_order
            .or_else(|| orders.iter().copied().max())
            .unwrap_or(0);
        grouping::list_edges_by_order(&edges, &orders, min_order, max_order)
    }

    /// Overlap between orders `m` and `n` of `hypergraph`.
    pub fn overlap<H: HypergraphView>(&self, hypergraph: &H, m: usize, n: usize) -> f64 {
        interorder::interorder_overlap(&self.order_groups(hypergraph), m, n)
    }
}

impl Default for OverlapEngine {
    fn default() -> Self {
        Self::new(OverlapConfig::default())
    }
}
