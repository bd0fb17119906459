use criterion::{criterion_group, criterion_main, Criterion};

use hyperlap_core::models::{Clique, NodeId, WeightedCliques};
use hyperlap_temporal::cliques::{clean_non_maximal, maximal_cliques};
use hyperlap_temporal::snapshot::Snapshot;

/// ~1K distinct cliques over 60 nodes: sliding windows of sizes 2..=5.
fn build_weighted_cliques() -> WeightedCliques {
    let mut weighted = WeightedCliques::new();
    for size in 2..=5_u64 {
        for start in 0..250_u64 {
            let clique: Clique = (0..size).map(|k| (start + k * 7) % 60).collect();
            weighted.insert(clique, (start % 4 + 1) as usize);
        }
    }
    weighted
}

/// Dense-ish contact snapshot: 80 nodes, each linked to its next 6 neighbours.
fn build_snapshot() -> Snapshot {
    let mut snapshot = Snapshot::new();
    for i in 0..80_u64 {
        for j in 1..=6 {
            snapshot.add_edge(NodeId(i), NodeId((i + j) % 80));
        }
    }
    snapshot
}

fn bench_maximality_filter(c: &mut Criterion) {
    let weighted = build_weighted_cliques();
    c.bench_function("clean_non_maximal_1k_cliques", |b| {
        b.iter(|| clean_non_maximal(&weighted))
    });
}

fn bench_maximal_cliques(c: &mut Criterion) {
    let snapshot = build_snapshot();
    c.bench_function("maximal_cliques_80_nodes", |b| {
        b.iter(|| maximal_cliques(&snapshot))
    });
}

criterion_group!(benches, bench_maximality_filter, bench_maximal_cliques);
criterion_main!(benches);
