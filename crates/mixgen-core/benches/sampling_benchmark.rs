//! Sampling throughput benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mixgen_core::{
    archimedean_spiral, circular_gaussian, grid_gaussian, CircleConfig, GridConfig, SpiralConfig,
};

fn bench_layouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("layouts");

    for samples in [1_000usize, 10_000, 100_000] {
        let grid = GridConfig {
            samples,
            random_state: Some(42),
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("grid", samples), &grid, |b, config| {
            b.iter(|| grid_gaussian(black_box(config)))
        });

        let circle = CircleConfig {
            samples,
            random_state: Some(42),
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("circle", samples), &circle, |b, config| {
            b.iter(|| circular_gaussian(black_box(config)))
        });

        let spiral = SpiralConfig {
            samples,
            random_state: Some(42),
            ..Default::default()
        };
        group.bench_with_input(BenchmarkId::new("spiral", samples), &spiral, |b, config| {
            b.iter(|| archimedean_spiral(black_box(config)))
        });
    }

    group.finish();
}

fn bench_weighted_grid(c: &mut Criterion) {
    let weights: Vec<f64> = (1..=100).map(|i| i as f64).collect();
    let config = GridConfig {
        rows: 10,
        cols: 10,
        samples: 10_000,
        sample_weights: Some(weights),
        random_state: Some(7),
        ..Default::default()
    };
    c.bench_function("grid_10x10_weighted", |b| {
        b.iter(|| grid_gaussian(black_box(&config)))
    });
}

criterion_group!(benches, bench_layouts, bench_weighted_grid);
criterion_main!(benches);
