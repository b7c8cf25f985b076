//! Core data types: items, instances and solutions.

use super::error::InstanceError;
use std::cmp::Ordering;

/// A single item that can be put in the knapsack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Price gained when the item is taken.
    pub price: u64,
    /// Capacity consumed when the item is taken.
    pub weight: u64,
}

impl Item {
    /// Creates an item.
    pub fn new(price: u64, weight: u64) -> Self {
        Self { price, weight }
    }

    /// Price per unit of weight.
    ///
    /// Only meaningful for positive weights, which [`Instance`] guarantees.
    pub fn density(&self) -> f64 {
        self.price as f64 / self.weight as f64
    }

    /// Compares densities exactly, without going through `f64`.
    ///
    /// `p_a / w_a` vs `p_b / w_b` is decided as `p_a * w_b` vs `p_b * w_a`
    /// in `u128`, which cannot overflow for `u64` operands.
    pub fn cmp_density(&self, other: &Item) -> Ordering {
        let lhs = self.price as u128 * other.weight as u128;
        let rhs = other.price as u128 * self.weight as u128;
        lhs.cmp(&rhs)
    }
}

impl From<(u64, u64)> for Item {
    fn from((price, weight): (u64, u64)) -> Self {
        Self::new(price, weight)
    }
}

/// A validated 0/1 knapsack problem.
///
/// Immutable once built. Solvers take it by shared reference, so one
/// instance can be handed to any number of solvers (and threads).
///
/// # Examples
///
/// ```
/// use u_knapsack::instance::{Instance, Item};
///
/// let instance = Instance::new(50, vec![
///     Item::new(60, 10),
///     Item::new(100, 20),
///     Item::new(120, 30),
/// ]).unwrap();
/// assert_eq!(instance.len(), 3);
/// assert_eq!(instance.density_order(), vec![0, 1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Instance {
    capacity: u64,
    items: Vec<Item>,
}

impl Instance {
    /// Builds an instance, rejecting zero weights and totals that overflow.
    pub fn new(capacity: u64, items: Vec<Item>) -> Result<Self, InstanceError> {
        if let Some(index) = items.iter().position(|item| item.weight == 0) {
            return Err(InstanceError::ZeroWeight { index });
        }
        items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.price))
            .ok_or(InstanceError::Overflow("price"))?;
        items
            .iter()
            .try_fold(0u64, |acc, item| acc.checked_add(item.weight))
            .ok_or(InstanceError::Overflow("weight"))?;

        Ok(Self { capacity, items })
    }

    /// Knapsack capacity.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Items in input order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the instance has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item indices sorted by descending density.
    ///
    /// Equal densities keep their input order, so the result is
    /// deterministic.
    pub fn density_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.sort_by(|&a, &b| self.items[b].cmp_density(&self.items[a]));
        order
    }

    /// Builds a [`Solution`] from a set of selected item indices.
    ///
    /// Indices are sorted and deduplicated. Feasibility is not checked;
    /// see [`Solution::is_feasible`].
    ///
    /// # Panics
    /// Panics if an index is out of range.
    pub fn solution_from_indices(&self, mut indices: Vec<usize>) -> Solution {
        indices.sort_unstable();
        indices.dedup();
        let (price, weight) = indices.iter().fold((0u64, 0u64), |(p, w), &i| {
            (p + self.items[i].price, w + self.items[i].weight)
        });
        Solution {
            price,
            weight,
            items: indices,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Instance {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            capacity: u64,
            items: Vec<Item>,
        }

        let raw = Raw::deserialize(deserializer)?;
        Instance::new(raw.capacity, raw.items).map_err(serde::de::Error::custom)
    }
}

/// The outcome of a solver run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Total price of the selected items.
    pub price: u64,
    /// Total weight of the selected items.
    pub weight: u64,
    /// Selected item indices, ascending, in input order.
    pub items: Vec<usize>,
}

impl Solution {
    /// Checks the selection against `instance`: indices in range and unique,
    /// totals consistent, weight within capacity.
    pub fn is_feasible(&self, instance: &Instance) -> bool {
        if self.items.iter().any(|&i| i >= instance.len()) {
            return false;
        }
        if self.items.windows(2).any(|w| w[0] >= w[1]) {
            return false;
        }
        let recomputed = instance.solution_from_indices(self.items.clone());
        recomputed.price == self.price
            && recomputed.weight == self.weight
            && self.weight <= instance.capacity()
    }
}
