//! Data-parallel GA loop.
//!
//! Same algorithm as [`GaRunner`](super::GaRunner), with the two expensive
//! phases split across rayon workers:
//!
//! - **Initialization**: the population buffer is cut into `workers`
//!   contiguous slices; worker `w` fills slice `w`.
//! - **Offspring production**: the offspring region of the new buffer
//!   (everything after the elites) is cut into slices whose length is a
//!   multiple of two, so every parent pair writes both its children into
//!   the same slice.
//!
//! Each worker owns a random stream seeded from `(seed, worker, generation)`
//! and writes only through its own `&mut` slice. The previous population is
//! shared read-only. The join at the end of each parallel phase is the
//! generation barrier: generation `g + 1` only starts once every slice of
//! generation `g` has been written.
//!
//! Culling and elite extraction run on the calling thread, using the extra
//! stream `workers`.

use super::config::GaConfig;
use super::runner::{breed, breeding_pool, GaResult};
use super::selection::{elites, fittest};
use super::types::Candidate;
use crate::instance::Instance;
use crate::random::stream_rng;
use rayon::prelude::*;
use rayon::ThreadPoolBuilder;

/// Executes the data-parallel GA.
///
/// For a fixed `seed` and `workers`, results are identical from run to run
/// regardless of how rayon schedules the slices. They differ from
/// [`GaRunner`](super::GaRunner) with the same seed (the random streams are
/// laid out differently) but follow the same distribution.
///
/// # Usage
///
/// ```
/// use u_knapsack::ga::{GaConfig, ParallelGaRunner};
/// use u_knapsack::instance::{Instance, Item};
///
/// let instance = Instance::new(50, vec![
///     Item::new(60, 10),
///     Item::new(100, 20),
///     Item::new(120, 30),
/// ]).unwrap();
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_max_generations(20)
///     .with_tournament_size(10)
///     .with_workers(4)
///     .with_seed(42);
/// let result = ParallelGaRunner::run(&instance, &config);
/// assert!(result.best_price <= 220);
/// ```
pub struct ParallelGaRunner;

impl ParallelGaRunner {
    /// Runs the GA in parallel.
    ///
    /// When [`GaConfig::workers`] is set, a dedicated rayon pool with that
    /// many threads runs the work. Otherwise the ambient rayon pool is used.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`] first
    /// to get a descriptive error).
    pub fn run(instance: &Instance, config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let seed = config.seed.unwrap_or_else(rand::random);
        let Some(workers) = config.workers else {
            return evolve(instance, config, rayon::current_num_threads(), seed);
        };

        match ThreadPoolBuilder::new().num_threads(workers).build() {
            Ok(pool) => pool.install(|| evolve(instance, config, workers, seed)),
            Err(err) => {
                tracing::warn!(%err, workers, "cannot build worker pool, using the global pool");
                evolve(instance, config, workers, seed)
            }
        }
    }
}

fn evolve(instance: &Instance, config: &GaConfig, workers: usize, seed: u64) -> GaResult {
    let workers = workers.max(1);

    // 1. Initialize population
    let mut population = vec![Candidate::default(); config.population_size];
    let chunk = slice_len(population.len(), workers);
    population
        .par_chunks_mut(chunk)
        .enumerate()
        .for_each(|(worker, slice)| {
            let mut rng = stream_rng(seed, worker, 0);
            for slot in slice.iter_mut() {
                *slot = Candidate::random(instance, &mut rng);
            }
        });

    let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
    fitness_history.push(fittest(&population).fitness());

    // 2. Evolutionary loop
    for gen in 0..config.max_generations {
        population = next_generation(instance, &population, config, workers, seed, gen + 1);

        let gen_best = fittest(&population).fitness();
        fitness_history.push(gen_best);
        tracing::trace!(generation = gen + 1, best = gen_best, workers, "generation complete");
    }

    // 3. Finalize
    let best = fittest(&population).clone();
    tracing::debug!(
        price = best.fitness(),
        generations = config.max_generations,
        population = config.population_size,
        workers,
        "parallel genetic algorithm finished"
    );

    GaResult {
        best_price: best.fitness(),
        best,
        generations: config.max_generations,
        fitness_history,
    }
}

/// Builds the population of `generation` (1-based) from the previous one.
fn next_generation(
    instance: &Instance,
    population: &[Candidate],
    config: &GaConfig,
    workers: usize,
    seed: u64,
    generation: usize,
) -> Vec<Candidate> {
    let mut coordinator = stream_rng(seed, workers, generation);
    let parents = breeding_pool(population, config, &mut coordinator);
    let parents: &[Candidate] = &parents;

    let mut next = elites(population, config.elite_count());
    let elite_count = next.len();
    next.resize(config.population_size, Candidate::default());

    let offspring = &mut next[elite_count..];
    let chunk = pair_slice_len(offspring.len(), workers);
    offspring
        .par_chunks_mut(chunk)
        .enumerate()
        .for_each(|(worker, slice)| {
            let mut rng = stream_rng(seed, worker, generation);
            for pair in slice.chunks_mut(2) {
                let (son, daughter) = breed(instance, parents, config, &mut rng);
                pair[0] = son;
                // A trailing single slot (odd offspring count) drops the daughter.
                if let Some(slot) = pair.get_mut(1) {
                    *slot = daughter;
                }
            }
        });

    next
}

/// Length of each worker's slice when splitting `len` slots.
fn slice_len(len: usize, workers: usize) -> usize {
    len.div_ceil(workers).max(1)
}

/// Like [`slice_len`], rounded up to a whole number of parent pairs.
fn pair_slice_len(len: usize, workers: usize) -> usize {
    let n = slice_len(len, workers);
    n + n % 2
}

// ============================================================================
// Tests
// ============================================================================
