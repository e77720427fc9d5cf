//! Seed-finding strategy benchmarks over synthetic regular nearest-neighbour
//! graphs, comparing all five strategies at the same graph sizes.
#![allow(missing_docs, reason = "Criterion macros generate undocumented items")]
#![allow(
    clippy::expect_used,
    reason = "benchmark setup is infallible for valid constants"
)]
#![allow(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use nngseed_benches::{generate_regular_nng, SyntheticNngConfig};
use nngseed_core::{get_seed_clustering, SeedStrategy};

/// Seed used for all synthetic data generation in this benchmark.
const SEED: u64 = 42;

/// Out-degree of every vertex in the generated graphs.
const ARCS_PER_VERTEX: usize = 10;

/// Vertex counts to benchmark.
const VERTEX_COUNTS: &[usize] = &[100, 1_000, 10_000];

const STRATEGIES: &[(&str, SeedStrategy)] = &[
    ("lexical", SeedStrategy::Lexical),
    ("inwards_order", SeedStrategy::InwardsOrder),
    ("inwards_updating", SeedStrategy::InwardsUpdating),
    ("exclusion_order", SeedStrategy::ExclusionOrder),
    ("exclusion_updating", SeedStrategy::ExclusionUpdating),
];

fn bench_seed_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("seed_strategies");
    group.sample_size(20);

    for &vertices in VERTEX_COUNTS {
        let nng = generate_regular_nng(&SyntheticNngConfig {
            vertices,
            arcs_per_vertex: ARCS_PER_VERTEX,
            seed: SEED,
        })
        .expect("synthetic graph generation must succeed");

        for &(label, strategy) in STRATEGIES {
            group.bench_with_input(
                BenchmarkId::new(label, vertices),
                &nng,
                |b, nng| {
                    b.iter(|| {
                        get_seed_clustering(nng, strategy, 0)
                            .expect("seed-finding must succeed")
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_seed_strategies);
criterion_main!(benches);
