//! Benchmark comparing sequential vs sharded pair co-occurrence counting
//!
//! Run with: cargo bench --bench pairs_benchmark

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand::SeedableRng;

use cobasket::pipeline::{
    compute_pair_statistics, compute_pair_statistics_sharded, count_item_frequencies,
    TransactionRecord,
};

/// Generate a synthetic transaction log with a skewed item popularity
fn generate_transactions(
    n_transactions: usize,
    catalog: usize,
    max_basket: usize,
    seed: u64,
) -> Vec<TransactionRecord> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut records = Vec::with_capacity(n_transactions * max_basket / 2);

    for t in 0..n_transactions {
        let basket_size = rng.gen_range(1..=max_basket);
        for _ in 0..basket_size {
            // Squaring a uniform sample favours low item ids, like best sellers
            let u: f64 = rng.gen();
            let item = ((u * u) * catalog as f64) as usize;
            records.push(TransactionRecord::new(
                t.to_string(),
                format!("item_{}", item),
            ));
        }
    }

    records
}

/// Benchmark the engines for a growing number of transactions
fn benchmark_pairs_by_transactions(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairs_by_transactions");
    group.sample_size(20);

    let transaction_counts = [1_000, 10_000, 50_000];

    for n_transactions in transaction_counts {
        let records = generate_transactions(n_transactions, 150, 8, 42);

        group.throughput(Throughput::Elements(records.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", n_transactions),
            &records,
            |b, records| {
                b.iter(|| {
                    let _ = compute_pair_statistics(black_box(records));
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("sharded_8", n_transactions),
            &records,
            |b, records| {
                b.iter(|| {
                    let _ = compute_pair_statistics_sharded(black_box(records), black_box(8));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the effect of basket size, the dominant cost of pair enumeration
fn benchmark_pairs_by_basket_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairs_by_basket_size");
    group.sample_size(20);

    for max_basket in [2, 8, 32] {
        let records = generate_transactions(5_000, 300, max_basket, 7);

        group.bench_with_input(
            BenchmarkId::new("sequential", max_basket),
            &records,
            |b, records| {
                b.iter(|| {
                    let _ = compute_pair_statistics(black_box(records));
                });
            },
        );
    }

    group.finish();
}

/// Benchmark the item frequency counter on its own
fn benchmark_item_frequencies(c: &mut Criterion) {
    let records = generate_transactions(50_000, 150, 8, 42);

    c.bench_function("item_frequencies_50k", |b| {
        b.iter(|| count_item_frequencies(black_box(&records)));
    });
}

criterion_group!(
    benches,
    benchmark_pairs_by_transactions,
    benchmark_pairs_by_basket_size,
    benchmark_item_frequencies
);
criterion_main!(benches);
