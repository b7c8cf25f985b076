//! Criterion benchmarks for the knapsack solvers.
//!
//! Instances are generated from a fixed seed with weakly correlated prices
//! (price ≈ weight ± 10), which keeps branch-and-bound honest without
//! making it explode.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_knapsack::bnb::BnbRunner;
use u_knapsack::ga::{GaConfig, GaRunner, ParallelGaRunner};
use u_knapsack::greedy::GreedyRunner;
use u_knapsack::random::create_rng;
use u_knapsack::{Instance, Item};

fn weakly_correlated(n: usize, seed: u64) -> Instance {
    let mut rng = create_rng(seed);
    let items: Vec<Item> = (0..n)
        .map(|_| {
            let weight: u64 = rng.random_range(10..=100);
            let price = (weight + rng.random_range(0..=20)).saturating_sub(10);
            Item::new(price, weight)
        })
        .collect();
    let capacity = items.iter().map(|it| it.weight).sum::<u64>() / 2;
    Instance::new(capacity, items).expect("generated instance is valid")
}

fn ga_config() -> GaConfig {
    GaConfig::default()
        .with_population_size(200)
        .with_max_generations(30)
        .with_tournament_size(20)
        .with_seed(42)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &n in &[100usize, 1_000, 10_000] {
        let instance = weakly_correlated(n, 1);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, inst| {
            b.iter(|| black_box(GreedyRunner::run(black_box(inst))))
        });
    }
    group.finish();
}

fn bench_bnb(c: &mut Criterion) {
    let mut group = c.benchmark_group("branch_and_bound");
    group.sample_size(10);

    for &n in &[20usize, 40, 60] {
        let instance = weakly_correlated(n, 2);
        group.bench_with_input(BenchmarkId::from_parameter(n), &instance, |b, inst| {
            b.iter(|| black_box(BnbRunner::run(black_box(inst))))
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    group.sample_size(10);

    for &n in &[50usize, 200] {
        let instance = weakly_correlated(n, 3);
        let config = ga_config();
        group.bench_with_input(
            BenchmarkId::new("sequential", n),
            &(instance.clone(), config.clone()),
            |b, (inst, cfg)| b.iter(|| black_box(GaRunner::run(black_box(inst), black_box(cfg)))),
        );
        group.bench_with_input(
            BenchmarkId::new("parallel", n),
            &(instance, config),
            |b, (inst, cfg)| {
                b.iter(|| black_box(ParallelGaRunner::run(black_box(inst), black_box(cfg))))
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_greedy, bench_bnb, bench_ga);
criterion_main!(benches);
