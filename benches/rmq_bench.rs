//! Build and query benchmarks

use cartree::{CartesianTree, QueryMode};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn lcg_values(len: usize) -> Vec<u32> {
    let mut state = 0x2545_f491_4f6c_dd1d_u64;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 32) as u32
        })
        .collect()
}

fn benchmark_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for len in [1_000, 100_000] {
        let values = lcg_values(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| CartesianTree::build(black_box(values.iter().copied())));
        });
    }
    group.finish();
}

fn benchmark_queries(c: &mut Criterion) {
    let len = 100_000;
    let tree = CartesianTree::build(lcg_values(len));
    let ranges: Vec<(usize, usize)> = lcg_values(256)
        .chunks(2)
        .map(|pair| {
            let (a, b) = (pair[0] as usize % len, pair[1] as usize % len);
            (a.min(b), a.max(b))
        })
        .collect();

    let mut group = c.benchmark_group("range_min");
    for mode in [QueryMode::Pruned, QueryMode::Exhaustive] {
        group.bench_function(mode.to_string(), |b| {
            b.iter(|| {
                for &(lo, hi) in &ranges {
                    black_box(tree.range_min_with(mode, lo, hi));
                }
            });
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_build, benchmark_queries);
criterion_main!(benches);
