//! 0/1 knapsack solvers.
//!
//! Given items with a price and a weight and a knapsack capacity, pick the
//! subset of items with the highest total price whose total weight fits.
//! Four interchangeable strategies are provided:
//!
//! - **Greedy**: take items by descending price/weight density while they
//!   fit. Instant, not exact.
//! - **Branch-and-bound (BnB)**: best-first search pruned by the fractional
//!   relaxation bound. Exact.
//! - **Genetic Algorithm (GA)**: tournament selection, uniform crossover and
//!   bit-flip mutation over a fixed number of generations. Heuristic.
//! - **Parallel GA**: the same GA with initialization and offspring
//!   production partitioned across rayon workers, each with its own random
//!   stream.
//!
//! # Architecture
//!
//! Every solver borrows a validated [`Instance`] and returns a [`Solution`].
//! Solvers never depend on each other; [`Strategy`] selects one at runtime.
//!
//! ```
//! use u_knapsack::instance::parse_instance;
//! use u_knapsack::Strategy;
//!
//! let instance = parse_instance("3 50  60 10  100 20  120 30").unwrap();
//! let solution = Strategy::BranchAndBound.solve(&instance);
//! assert_eq!(solution.price, 220);
//! ```

pub mod bnb;
pub mod ga;
pub mod greedy;
pub mod instance;
pub mod random;
mod solver;

#[cfg(test)]
mod test_utils;

pub use instance::{Instance, InstanceError, Item, Solution};
pub use solver::Strategy;
