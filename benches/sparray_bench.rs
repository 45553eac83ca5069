//! Criterion-based benchmarks for sparray operations
//!
//! Every operation copies into a fresh container, so these track the cost of
//! that copy next to the equivalent hand-written `Vec` code.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

use sparray::{range, HistogramRange, Sparray, Value};

// =============================================================================
// BENCHMARK CONFIGURATION
// =============================================================================

const SMALL_SIZE: usize = 1_000;
const MEDIUM_SIZE: usize = 10_000;
const LARGE_SIZE: usize = 100_000;
const SIZES: &[usize] = &[SMALL_SIZE, MEDIUM_SIZE, LARGE_SIZE];

fn numbers(size: usize) -> Sparray<i64> {
    range(size as i64)
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let data: Vec<i64> = (0..size as i64).collect();
        let mixed: Vec<Value> = (0..size)
            .map(|i| if i == size - 1 { Value::from("tail") } else { Value::from(i) })
            .collect();

        group.bench_with_input(BenchmarkId::new("Sparray::new numeric", size), &data, |b, data| {
            b.iter(|| black_box(Sparray::new(data.clone())));
        });

        group.bench_with_input(BenchmarkId::new("Sparray::new generic", size), &mixed, |b, mixed| {
            b.iter(|| black_box(Sparray::new(mixed.clone())));
        });

        group.bench_with_input(BenchmarkId::new("std::Vec clone", size), &data, |b, data| {
            b.iter(|| black_box(data.clone()));
        });
    }

    group.finish();
}

// =============================================================================
// TRANSFORMS
// =============================================================================

fn bench_map_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_filter");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let s = numbers(size);

        group.bench_with_input(BenchmarkId::new("Sparray", size), &s, |b, s| {
            b.iter(|| {
                let out = s.map(|x, _, _| x * 3).filter(|x, _, _| x % 2 == 0);
                black_box(out)
            });
        });

        let v = s.to_vec();
        group.bench_with_input(BenchmarkId::new("std::Vec", size), &v, |b, v| {
            b.iter(|| {
                let out: Vec<i64> = v.iter().map(|x| x * 3).filter(|x| x % 2 == 0).collect();
                black_box(out)
            });
        });
    }

    group.finish();
}

fn bench_sort_by_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_by_key");
    group.measurement_time(Duration::from_secs(5));

    for &size in &[SMALL_SIZE, MEDIUM_SIZE] {
        group.throughput(Throughput::Elements(size as u64));
        let s = numbers(size).map(|x, _, _| (x % 97, x % 13));

        group.bench_with_input(BenchmarkId::new("two keys", size), &s, |b, s| {
            b.iter(|| black_box(s.sort_by_key(|p, _, _| (p.0, p.1), false)));
        });

        group.bench_with_input(BenchmarkId::new("sort_by", size), &s, |b, s| {
            b.iter(|| black_box(s.sort_by(|a, b| a.cmp(b))));
        });
    }

    group.finish();
}

// =============================================================================
// GROUPING, WINDOWS, SAMPLING
// =============================================================================

fn bench_group_by(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_by");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let s = numbers(size);

        group.bench_with_input(BenchmarkId::new("mod 16", size), &s, |b, s| {
            b.iter(|| black_box(s.group_by(|x, _, _| x % 16)));
        });
    }

    group.finish();
}

fn bench_sliding(c: &mut Criterion) {
    let mut group = c.benchmark_group("sliding");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let s = numbers(size);

        group.bench_with_input(BenchmarkId::new("size 8 step 4", size), &s, |b, s| {
            b.iter(|| black_box(s.sliding_step(8, 4)));
        });
    }

    group.finish();
}

fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_n");

    for &size in &[SMALL_SIZE, MEDIUM_SIZE] {
        let s = numbers(size);
        let draws = size / 10;
        group.throughput(Throughput::Elements(draws as u64));

        group.bench_with_input(BenchmarkId::new("without replacement", size), &s, |b, s| {
            let mut rng = StdRng::seed_from_u64(17);
            b.iter(|| black_box(s.sample_n_with(&mut rng, draws, false)));
        });

        group.bench_with_input(BenchmarkId::new("with replacement", size), &s, |b, s| {
            let mut rng = StdRng::seed_from_u64(17);
            b.iter(|| black_box(s.sample_n_with(&mut rng, draws, true)));
        });
    }

    group.finish();
}

// =============================================================================
// NUMERIC
// =============================================================================

fn bench_numeric(c: &mut Criterion) {
    let mut group = c.benchmark_group("numeric");

    for &size in SIZES {
        group.throughput(Throughput::Elements(size as u64));
        let s = numbers(size);

        group.bench_with_input(BenchmarkId::new("sum", size), &s, |b, s| {
            b.iter(|| black_box(s.sum()));
        });

        group.bench_with_input(BenchmarkId::new("histogram 32", size), &s, |b, s| {
            b.iter(|| black_box(s.histogram(32, HistogramRange::default())));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_construction,
    bench_map_filter,
    bench_sort_by_key,
    bench_group_by,
    bench_sliding,
    bench_sample,
    bench_numeric
);
criterion_main!(benches);
