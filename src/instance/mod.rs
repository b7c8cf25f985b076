//! Problem instances and solutions.
//!
//! An [`Instance`] is a validated, immutable knapsack problem: a capacity and
//! an ordered list of [`Item`]s. Every solver in this crate borrows an
//! instance and returns a [`Solution`].
//!
//! Instances are validated once, at construction, so solvers never have to
//! deal with malformed input:
//!
//! - every item weight is positive (density is always defined),
//! - the sum of all prices and the sum of all weights fit in `u64`.
//!
//! # Loading
//!
//! [`parse_instance`], [`read_instance`] and [`load_instance`] read the plain
//! text format `count capacity (price weight){count}`.

mod error;
mod loading;
mod types;

pub use error::InstanceError;
pub use loading::{load_instance, parse_instance, read_instance};
pub use types::{Instance, Item, Solution};
