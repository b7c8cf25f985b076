//! Exact best-first branch-and-bound.
//!
//! The search walks a binary decision tree (take / skip each item, items in
//! descending density order) without ever materializing it: only the live
//! frontier is kept, in a max-heap keyed by each node's upper bound.
//!
//! # Bound
//!
//! The bound of a node is the value of the fractional (LP) relaxation of the
//! remaining subproblem: fill the residual capacity greedily in density
//! order and take a fraction of the first item that does not fit. Because
//! items are density-sorted, no integral completion can beat it (Dantzig
//! 1957), so any node whose bound falls below the incumbent can be discarded
//! together with its whole subtree.
//!
//! # Key Types
//!
//! - [`BnbRunner`]: executes the search
//! - [`BnbResult`]: optimal solution plus search statistics
//!
//! # References
//!
//! - Dantzig (1957), "Discrete-Variable Extremum Problems"
//! - Kolesar (1967), "A Branch and Bound Algorithm for the Knapsack Problem"
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer
//!   Implementations*, ch. 2

mod node;
mod runner;

pub use node::upper_bound;
pub use runner::{BnbResult, BnbRunner};
