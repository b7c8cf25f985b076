//! Greedy density heuristic.
//!
//! Items are considered in order of descending price/weight density and
//! taken whenever they still fit. Fast and deterministic, but not exact:
//! see [`GreedyRunner`] for a counterexample.

mod runner;

pub use runner::GreedyRunner;
