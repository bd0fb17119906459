//! Property tests for inter-order overlap.

use proptest::prelude::*;

use hyperlap_core::models::{NodeSet, OrderGroups};
use hyperlap_core::traits::HypergraphView;
use hyperlap_overlap::{alpha_matrix, interorder_overlap, Hypergraph};

/// Hypergraphs without repeated edges, sizes 1..=5.
fn hypergraph_strategy() -> impl Strategy<Value = Hypergraph> {
    prop::collection::btree_set(prop::collection::btree_set(0_u64..10, 1..6), 0..30)
        .prop_map(|edges| Hypergraph::from_edge_lists(edges))
}

fn groups_of(h: &Hypergraph) -> OrderGroups {
    let mut groups = OrderGroups::with_range(0, 5);
    for (_, members) in h.edge_sets() {
        let order = members.order().unwrap();
        groups.push(order, members);
    }
    groups
}

proptest! {
    #[test]
    fn overlap_is_a_fraction_when_defined(h in hypergraph_strategy()) {
        let groups = groups_of(&h);
        for m in 0..5 {
            for n in (m + 1)..=5 {
                let value = interorder_overlap(&groups, m, n);
                if !value.is_nan() {
                    prop_assert!((0.0..=1.0).contains(&value), "overlap({m},{n}) = {value}");
                }
            }
        }
    }

    #[test]
    fn overlap_is_undefined_exactly_for_empty_groups(h in hypergraph_strategy()) {
        let groups = groups_of(&h);
        for m in 0..5 {
            for n in (m + 1)..=5 {
                let empty = groups.get(m).is_empty() || groups.get(n).is_empty();
                prop_assert_eq!(interorder_overlap(&groups, m, n).is_nan(), empty);
            }
        }
    }

    #[test]
    fn matrix_lower_triangle_is_undefined(
        h in hypergraph_strategy(),
        cap in prop::option::of(1_usize..7),
    ) {
        let matrix = alpha_matrix(&h, cap);
        for row in 0..matrix.dimension() {
            for col in 0..=row {
                prop_assert!(matrix.get(row, col).is_some_and(f64::is_nan));
            }
        }
    }
}

#[test]
fn groups_helper_sees_every_edge() {
    let h = Hypergraph::from_edge_lists(vec![vec![1_u64], vec![1, 2, 3, 4, 5, 6]]);
    let groups = groups_of(&h);
    assert_eq!(groups.edge_count(), 2);
    assert_eq!(groups.get(5), &[NodeSet::new((1..=6).map(hyperlap_core::models::NodeId))]);
}
