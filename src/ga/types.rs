//! Candidate solutions.

use crate::instance::{Instance, Solution};
use rand::Rng;

/// A candidate in the GA population: one gene per item plus its cached
/// evaluation.
///
/// Fitness is the total price if the selection fits in the knapsack, zero
/// otherwise.
///
/// The [`Default`] candidate has no genes; it is only used as a placeholder
/// when preallocating population buffers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidate {
    genes: Vec<bool>,
    price: u64,
    weight: u64,
    feasible: bool,
}

impl Candidate {
    /// Creates and evaluates a candidate.
    ///
    /// # Panics
    /// Panics if `genes.len()` differs from the number of items.
    pub fn new(instance: &Instance, genes: Vec<bool>) -> Self {
        assert_eq!(
            genes.len(),
            instance.len(),
            "candidate must have one gene per item"
        );

        let (price, weight) = genes
            .iter()
            .zip(instance.items())
            .filter(|(&taken, _)| taken)
            .fold((0u64, 0u64), |(p, w), (_, item)| (p + item.price, w + item.weight));

        Self {
            genes,
            price,
            weight,
            feasible: weight <= instance.capacity(),
        }
    }

    /// Creates a candidate whose genes are independent fair coin flips.
    pub fn random<R: Rng>(instance: &Instance, rng: &mut R) -> Self {
        let genes = (0..instance.len()).map(|_| rng.random_bool(0.5)).collect();
        Self::new(instance, genes)
    }

    /// Inclusion flag per item, in input order.
    pub fn genes(&self) -> &[bool] {
        &self.genes
    }

    /// Price if feasible, zero otherwise.
    pub fn fitness(&self) -> u64 {
        if self.feasible {
            self.price
        } else {
            0
        }
    }

    /// Total price of the selected items, feasible or not.
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Total weight of the selected items.
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Whether the selection fits in the knapsack.
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// Converts the candidate into a [`Solution`].
    ///
    /// An infeasible candidate yields the empty solution, whose price (zero)
    /// matches the candidate's fitness.
    pub fn to_solution(&self) -> Solution {
        if !self.feasible {
            return Solution::default();
        }
        Solution {
            price: self.price,
            weight: self.weight,
            items: self
                .genes
                .iter()
                .enumerate()
                .filter_map(|(i, &taken)| taken.then_some(i))
                .collect(),
        }
    }
}
