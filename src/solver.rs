//! One entry point for every solving strategy.

use crate::bnb::BnbRunner;
use crate::ga::{GaConfig, GaRunner, ParallelGaRunner};
use crate::greedy::GreedyRunner;
use crate::instance::{Instance, Solution};

/// A knapsack solving strategy.
///
/// All strategies take the same validated [`Instance`] and return a
/// [`Solution`]; only [`Strategy::BranchAndBound`] guarantees optimality.
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::{Instance, Item};
/// use u_knapsack::Strategy;
///
/// let instance = Instance::new(50, vec![
///     Item::new(60, 10),
///     Item::new(100, 20),
///     Item::new(120, 30),
/// ]).unwrap();
///
/// assert_eq!(Strategy::Greedy.solve(&instance).price, 160);
/// assert_eq!(Strategy::BranchAndBound.solve(&instance).price, 220);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Strategy {
    /// Greedy density heuristic.
    Greedy,
    /// Exact best-first branch-and-bound.
    BranchAndBound,
    /// Sequential genetic algorithm.
    Genetic(GaConfig),
    /// Data-parallel genetic algorithm.
    ParallelGenetic(GaConfig),
}

impl Strategy {
    /// Short, stable name for logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Greedy => "greedy",
            Strategy::BranchAndBound => "branch-and-bound",
            Strategy::Genetic(_) => "genetic",
            Strategy::ParallelGenetic(_) => "parallel-genetic",
        }
    }

    /// Whether the strategy always returns an optimal solution.
    pub fn is_exact(&self) -> bool {
        matches!(self, Strategy::BranchAndBound)
    }

    /// Solves `instance`.
    ///
    /// # Panics
    /// Panics if a genetic strategy carries an invalid [`GaConfig`].
    pub fn solve(&self, instance: &Instance) -> Solution {
        match self {
            Strategy::Greedy => GreedyRunner::run(instance),
            Strategy::BranchAndBound => BnbRunner::run(instance).solution,
            Strategy::Genetic(config) => GaRunner::run(instance, config).solution(),
            Strategy::ParallelGenetic(config) => ParallelGaRunner::run(instance, config).solution(),
        }
    }
}
