//! Benchmark for the slice helpers `map`, `flat_map` and `ap`, and for
//! pulling values from the lazy random sequence.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use jargon::control::random_numbers;
use jargon::typeclass::{ap, flat_map, map};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::hint::black_box;

// =============================================================================
// Slice Helper Benchmarks
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in [10, 1_000, 100_000] {
        let elements: Vec<i64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("helper", size), &elements, |bencher, elements| {
            bencher.iter(|| map(|n: &i64| n * 2, black_box(elements)));
        });
        group.bench_with_input(BenchmarkId::new("iterator", size), &elements, |bencher, elements| {
            bencher.iter(|| {
                black_box(elements)
                    .iter()
                    .map(|n| n * 2)
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

fn benchmark_flat_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flat_map");

    for size in [10, 1_000, 100_000] {
        let elements: Vec<i64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("pairs", size), &elements, |bencher, elements| {
            bencher.iter(|| flat_map(|n: &i64| [*n, -*n], black_box(elements)));
        });
    }

    group.finish();
}

fn benchmark_ap(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("ap");
    let functions: [fn(&i64) -> i64; 3] = [|n| n + 1, |n| n * 2, |n| n - 3];

    for size in [10, 1_000, 100_000] {
        let elements: Vec<i64> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("three_functions", size), &elements, |bencher, elements| {
            bencher.iter(|| ap(black_box(&functions), black_box(elements)));
        });
    }

    group.finish();
}

// =============================================================================
// Lazy Sequence Benchmarks
// =============================================================================

fn benchmark_random_numbers(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("random_numbers");

    for count in [10, 1_000] {
        group.bench_with_input(BenchmarkId::new("take", count), &count, |bencher, &count| {
            bencher.iter(|| {
                random_numbers(SmallRng::seed_from_u64(7))
                    .take(count)
                    .collect::<Vec<_>>()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map,
    benchmark_flat_map,
    benchmark_ap,
    benchmark_random_numbers,
);

criterion_main!(benches);
