use algos_select::select::{deterministic_select, randomized_select};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SIZES: [usize; 4] = [100, 1_000, 10_000, 50_000];
const SEED: u64 = 42;

fn random_input(n: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    (0..n).map(|_| rng.gen_range(1..1000)).collect()
}

fn sorted_input(n: usize) -> Vec<i32> {
    (1..=n as i32).collect()
}

fn reverse_sorted_input(n: usize) -> Vec<i32> {
    (1..=n as i32).rev().collect()
}

fn nearly_sorted_input(n: usize) -> Vec<i32> {
    let mut data = sorted_input(n);
    let mut rng = StdRng::seed_from_u64(SEED);
    for _ in 0..10 {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        data.swap(i, j);
    }
    data
}

fn duplicate_heavy_input(n: usize) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let values: Vec<i32> = (0..10).map(|_| rng.gen_range(1..1000)).collect();
    (0..n)
        .map(|_| values[rng.gen_range(0..values.len())])
        .collect()
}

fn bench_distribution(c: &mut Criterion, name: &str, generate: fn(usize) -> Vec<i32>) {
    let mut group = c.benchmark_group(format!("select_{name}"));
    // Lomuto partitioning is quadratic on long runs of equal keys.
    group.sample_size(20);

    for size in SIZES {
        let data = generate(size);
        let k = (size / 2).max(1);

        group.bench_with_input(BenchmarkId::new("deterministic", size), &data, |b, data| {
            b.iter(|| deterministic_select(black_box(data), black_box(k)))
        });

        group.bench_with_input(BenchmarkId::new("randomized", size), &data, |b, data| {
            b.iter(|| randomized_select(black_box(data), black_box(k), Some(SEED)))
        });
    }

    group.finish();
}

fn benchmark_selection(c: &mut Criterion) {
    bench_distribution(c, "random", random_input);
    bench_distribution(c, "sorted", sorted_input);
    bench_distribution(c, "reverse_sorted", reverse_sorted_input);
    bench_distribution(c, "nearly_sorted", nearly_sorted_input);
    bench_distribution(c, "duplicate_heavy", duplicate_heavy_input);
}

criterion_group!(benches, benchmark_selection);
criterion_main!(benches);
