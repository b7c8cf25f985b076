//! Sequential GA loop.
//!
//! [`GaRunner`] orchestrates the evolutionary process:
//! initialization → selection → crossover → mutation → evaluation → repeat.

use super::config::GaConfig;
use super::operators::{bit_flip_mutation, uniform_crossover};
use super::selection::{cull, elites, fittest, tournament};
use super::types::Candidate;
use crate::instance::{Instance, Solution};
use crate::random::create_rng;
use rand::Rng;
use std::borrow::Cow;

/// Result of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// The fittest candidate of the final population.
    pub best: Candidate,

    /// Best fitness (same as `best.fitness()`).
    pub best_price: u64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Best fitness in the initial population, then at the end of each
    /// generation. Without elitism this is not necessarily monotonic.
    pub fitness_history: Vec<u64>,
}

impl GaResult {
    /// The selection encoded by the best candidate.
    pub fn solution(&self) -> Solution {
        self.best.to_solution()
    }
}

/// Executes the sequential GA.
///
/// # Usage
///
/// ```
/// use u_knapsack::ga::{GaConfig, GaRunner};
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
///     .with_seed(42);
/// let result = GaRunner::run(&instance, &config);
/// assert!(result.best_price <= 220);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`] first
    /// to get a descriptive error).
    pub fn run(instance: &Instance, config: &GaConfig) -> GaResult {
        config.validate().expect("invalid GaConfig");

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        // 1. Initialize population
        let mut population: Vec<Candidate> = (0..config.population_size)
            .map(|_| Candidate::random(instance, &mut rng))
            .collect();

        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(fittest(&population).fitness());

        // 2. Evolutionary loop
        for gen in 0..config.max_generations {
            population = next_generation(instance, &population, config, &mut rng);

            let gen_best = fittest(&population).fitness();
            fitness_history.push(gen_best);
            tracing::trace!(generation = gen + 1, best = gen_best, "generation complete");
        }

        // 3. Finalize
        let best = fittest(&population).clone();
        tracing::debug!(
            price = best.fitness(),
            generations = config.max_generations,
            population = config.population_size,
            "genetic algorithm finished"
        );

        GaResult {
            best_price: best.fitness(),
            best,
            generations: config.max_generations,
            fitness_history,
        }
    }
}

/// Builds generation `g + 1` from generation `g`.
pub(super) fn next_generation<R: Rng>(
    instance: &Instance,
    population: &[Candidate],
    config: &GaConfig,
    rng: &mut R,
) -> Vec<Candidate> {
    let parents = breeding_pool(population, config, rng);

    let mut next = elites(population, config.elite_count());
    while next.len() < config.population_size {
        let (son, daughter) = breed(instance, &parents, config, rng);
        next.push(son);
        // Odd population sizes drop the last daughter.
        if next.len() < config.population_size {
            next.push(daughter);
        }
    }
    next
}

/// The candidates tournaments draw from: the whole population, or the
/// survivors of culling when it is enabled.
pub(super) fn breeding_pool<'a, R: Rng>(
    population: &'a [Candidate],
    config: &GaConfig,
    rng: &mut R,
) -> Cow<'a, [Candidate]> {
    match config.culling_size {
        Some(k) => Cow::Owned(cull(population, k, rng)),
        None => Cow::Borrowed(population),
    }
}

/// Selects two parents and produces two evaluated children.
pub(super) fn breed<R: Rng>(
    instance: &Instance,
    parents: &[Candidate],
    config: &GaConfig,
    rng: &mut R,
) -> (Candidate, Candidate) {
    let mother = tournament(parents, config.tournament_size, rng);
    let father = tournament(parents, config.tournament_size, rng);

    let (mut son, mut daughter) = uniform_crossover(mother.genes(), father.genes(), rng);
    bit_flip_mutation(&mut son, config.mutation_rate, rng);
    bit_flip_mutation(&mut daughter, config.mutation_rate, rng);

    (
        Candidate::new(instance, son),
        Candidate::new(instance, daughter),
    )
}

// ============================================================================
// Tests
// ============================================================================
