//! Property tests for aggregation and the maximality filter.

use proptest::prelude::*;

use hyperlap_core::config::{AdvanceMode, AggregationConfig};
use hyperlap_core::models::{Clique, NodeId, Timestamp, WeightedCliques};
use hyperlap_temporal::cliques::clean_non_maximal;
use hyperlap_temporal::snapshot::{aggregate, Snapshot};
use hyperlap_temporal::ContactEvent;

/// Non-decreasing integer timestamps built from non-negative gaps.
fn timestamps_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0_u32..200, 1..40).prop_map(|gaps| {
        let mut t = 1_000.0;
        gaps.into_iter()
            .map(|gap| {
                t += f64::from(gap);
                t
            })
            .collect()
    })
}

fn advance_strategy() -> impl Strategy<Value = AdvanceMode> {
    prop_oneof![Just(AdvanceMode::SingleStep), Just(AdvanceMode::CatchUp)]
}

fn weighted_strategy() -> impl Strategy<Value = WeightedCliques> {
    let clique = prop::collection::btree_set(0_u64..8, 1..5)
        .prop_map(|labels| labels.into_iter().collect::<Clique>());
    prop::collection::vec((clique, 1_usize..5), 0..25).prop_map(|entries| {
        let mut weighted = WeightedCliques::new();
        for (clique, weight) in entries {
            weighted.insert(clique, weight);
        }
        weighted
    })
}

proptest! {
    // Each record lands in exactly one window, windows never go backwards,
    // and window keys sit whole widths after the first timestamp.
    #[test]
    fn every_record_maps_to_one_bucket(
        times in timestamps_strategy(),
        advance in advance_strategy(),
    ) {
        // A unique edge per record identifies where it landed.
        let events: Vec<ContactEvent> = times
            .iter()
            .enumerate()
            .map(|(idx, &t)| ContactEvent::new(t, 2 * idx as u64, 2 * idx as u64 + 1))
            .collect();
        let config = AggregationConfig { window_minutes: 1.0, keep_originals: false, advance };
        let result = aggregate(events.clone(), &config, "prop").unwrap();

        let t0 = times[0];
        let mut previous = f64::NEG_INFINITY;
        for event in &events {
            let homes: Vec<&Timestamp> = result
                .aggregated
                .iter()
                .filter(|(_, s)| s.has_edge(event.i, event.j))
                .map(|(t, _)| t)
                .collect();
            prop_assert_eq!(homes.len(), 1);

            let key = homes[0].value();
            prop_assert!(key >= previous);
            prop_assert!(key <= event.t.value());
            prop_assert_eq!((key - t0) % 60.0, 0.0);
            previous = key;
        }
    }

    #[test]
    fn repeated_insertion_is_idempotent(
        pairs in prop::collection::vec((0_u64..10, 0_u64..10), 0..30)
    ) {
        let mut once = Snapshot::new();
        let mut twice = Snapshot::new();
        for &(a, b) in &pairs {
            once.add_edge(NodeId(a), NodeId(b));
            twice.add_edge(NodeId(a), NodeId(b));
            twice.add_edge(NodeId(a), NodeId(b));
        }
        prop_assert_eq!(once.edges(), twice.edges());
        prop_assert_eq!(once.nodes(), twice.nodes());
    }

    // No retained clique strictly contains another; every survivor keeps its
    // input weight.
    #[test]
    fn maximality_filter_is_sound(weights in weighted_strategy()) {
        let maximal = clean_non_maximal(&weights);
        for (x, w) in &maximal {
            prop_assert_eq!(weights.weight(x), Some(*w));
            for y in maximal.cliques() {
                prop_assert!(!x.is_proper_subset_of(y));
            }
        }
    }

    // Every input clique strictly inside another input clique is dropped, and
    // every clique that is not is kept.
    #[test]
    fn maximality_filter_is_complete(weights in weighted_strategy()) {
        let maximal = clean_non_maximal(&weights);
        for x in weights.cliques() {
            let dominated = weights.cliques().any(|y| x.is_proper_subset_of(y));
            prop_assert_eq!(maximal.contains(x), !dominated);
        }
    }
}
