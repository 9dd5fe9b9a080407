//! Benchmarks for the breakout scanners.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use edm_breakout::{edm_multi, edm_percent, edm_tail, edm_x};

fn generate_step_series(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let level = if i < n / 2 { 0.0 } else { 10.0 };
            level + ((i * 13) % 7) as f64 * 0.1
        })
        .collect()
}

fn bench_scanners(c: &mut Criterion) {
    let mut group = c.benchmark_group("scanners");

    for size in [128, 512, 2048].iter() {
        let series = generate_step_series(*size);
        let min_size = size / 16;

        group.bench_with_input(BenchmarkId::new("edm_multi", size), size, |b, _| {
            b.iter(|| edm_multi(black_box(&series), min_size, 0.5, 0))
        });

        group.bench_with_input(BenchmarkId::new("edm_percent", size), size, |b, _| {
            b.iter(|| edm_percent(black_box(&series), min_size, 5.0, 0))
        });

        group.bench_with_input(BenchmarkId::new("edm_tail", size), size, |b, _| {
            b.iter(|| edm_tail(black_box(&series), min_size, 0.05, 0.95))
        });

        group.bench_with_input(BenchmarkId::new("edm_x", size), size, |b, _| {
            b.iter(|| edm_x(black_box(&series), min_size, 0.05))
        });
    }

    group.finish();
}

fn bench_trend_degrees(c: &mut Criterion) {
    let mut group = c.benchmark_group("trend_degrees");
    let series = generate_step_series(1024);

    for degree in [0usize, 1, 2].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(degree), degree, |b, &d| {
            b.iter(|| edm_multi(black_box(&series), 64, 0.5, d))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_scanners, bench_trend_degrees);
criterion_main!(benches);
