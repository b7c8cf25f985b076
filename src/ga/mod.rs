//! Genetic Algorithm for the 0/1 knapsack problem.
//!
//! Candidates are bit strings (one gene per item). A candidate's fitness is
//! its total price when it fits in the knapsack and zero otherwise, so
//! infeasible candidates stay in the population and can still pass useful
//! genes on through crossover.
//!
//! # Evolutionary loop
//!
//! 1. Initialize `population_size` random candidates (each gene set with
//!    probability 0.5)
//! 2. For each generation: pick parent pairs by tournament selection, apply
//!    uniform crossover and per-gene bit-flip mutation, and fill a brand new
//!    population with the offspring
//! 3. Return the fittest candidate of the final population
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population, generations, rates)
//! - [`GaRunner`]: Sequential evolutionary loop
//! - [`ParallelGaRunner`]: Same loop, with initialization and offspring
//!   production split across rayon workers
//! - [`GaResult`]: Final candidate and per-generation statistics
//!
//! # Submodules
//!
//! - [`operators`]: Uniform crossover and bit-flip mutation
//! - [`selection`]: Tournament selection, culling and elite extraction
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Chu & Beasley (1998), "A Genetic Algorithm for the Multidimensional
//!   Knapsack Problem"

mod config;
pub mod operators;
mod parallel;
mod runner;
pub mod selection;
mod types;

pub use config::GaConfig;
pub use parallel::ParallelGaRunner;
pub use runner::{GaResult, GaRunner};
pub use types::Candidate;
