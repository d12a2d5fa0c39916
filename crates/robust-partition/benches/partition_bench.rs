//! Benchmarks for fitting range and category partitioners

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use robust_partition::{
    CategoryPartitioner, ContinuousRangePartitioner, IntegerRangePartitioner, Partitioner,
};

/// Normal samples with a sprinkling of large outliers
fn generate_continuous(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(100.0, 15.0).unwrap();
    (0..size)
        .map(|i| {
            if i % 100 == 0 {
                normal.sample(&mut rng) * 1000.0
            } else {
                normal.sample(&mut rng)
            }
        })
        .collect()
}

fn generate_integers(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.gen_range(-5_000..5_000)).collect()
}

fn generate_categories(size: usize, n_categories: u32, seed: u64) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    // squaring skews the draws toward low ids
    (0..size)
        .map(|_| {
            let u: f64 = rng.gen();
            (u * u * n_categories as f64) as u32
        })
        .collect()
}

fn bench_continuous_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("continuous_fit");

    for &size in &[1_000, 10_000, 100_000] {
        let data = generate_continuous(size, 42);

        group.bench_with_input(BenchmarkId::new("inferred_bounds", size), &data, |b, data| {
            let mut partitioner = ContinuousRangePartitioner::new(20).unwrap();
            b.iter(|| {
                partitioner.fit(black_box(data)).unwrap();
                black_box(partitioner.len().unwrap())
            });
        });

        group.bench_with_input(BenchmarkId::new("explicit_bounds", size), &data, |b, data| {
            let mut partitioner =
                ContinuousRangePartitioner::with_bounds(20, Some(50.0), Some(150.0)).unwrap();
            b.iter(|| {
                partitioner.fit(black_box(data)).unwrap();
                black_box(partitioner.len().unwrap())
            });
        });
    }

    group.finish();
}

fn bench_integer_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_fit");

    for &max_partitions in &[5, 20, 100] {
        let data = generate_integers(10_000, 7);
        group.bench_with_input(
            BenchmarkId::new("max_partitions", max_partitions),
            &data,
            |b, data| {
                let mut partitioner = IntegerRangePartitioner::new(max_partitions).unwrap();
                b.iter(|| {
                    partitioner.fit(black_box(data)).unwrap();
                    black_box(partitioner.len().unwrap())
                });
            },
        );
    }

    group.finish();
}

fn bench_category_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("category_fit");

    for &n_categories in &[10, 1_000, 50_000] {
        let data = generate_categories(100_000, n_categories, 3);
        group.bench_with_input(BenchmarkId::new("distinct", n_categories), &data, |b, data| {
            let mut partitioner = CategoryPartitioner::new(20).unwrap();
            b.iter(|| {
                partitioner.fit(black_box(data)).unwrap();
                black_box(partitioner.len().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_continuous_fit, bench_integer_fit, bench_category_fit);
criterion_main!(benches);
