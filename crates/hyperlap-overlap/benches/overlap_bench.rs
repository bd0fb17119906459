use criterion::{criterion_group, criterion_main, Criterion};

use hyperlap_overlap::{alpha_matrix, Hypergraph};

/// ~1K edges of sizes 2..=6 over 120 nodes, sliding with a fixed stride.
fn build_hypergraph() -> Hypergraph {
    let mut lists = Vec::new();
    for size in 2..=6_u64 {
        for start in 0..200_u64 {
            lists.push((0..size).map(|k| (start + k * 11) % 120).collect::<Vec<u64>>());
        }
    }
    Hypergraph::from_edge_lists(lists)
}

fn bench_alpha_matrix(c: &mut Criterion) {
    let hypergraph = build_hypergraph();
    c.bench_function("alpha_matrix_1k_edges", |b| {
        b.iter(|| alpha_matrix(&hypergraph, None))
    });
}

fn bench_alpha_matrix_capped(c: &mut Criterion) {
    let hypergraph = build_hypergraph();
    c.bench_function("alpha_matrix_1k_edges_cap_3", |b| {
        b.iter(|| alpha_matrix(&hypergraph, Some(3)))
    });
}

criterion_group!(benches, bench_alpha_matrix, bench_alpha_matrix_capped);
criterion_main!(benches);
