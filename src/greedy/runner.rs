//! Greedy solver.

use crate::instance::{Instance, Solution};

/// Runs the greedy density heuristic.
///
/// Items that do not fit are skipped and the scan goes on, so a light item
/// further down the order can still fill the remaining capacity.
///
/// # Examples
///
/// The classic instance where greedy is not optimal: the two densest items
/// leave 20 units of capacity that the third item (weight 30) cannot use,
/// while the optimum takes items 1 and 2 for 220.
///
/// ```
/// use u_knapsack::greedy::GreedyRunner;
/// use u_knapsack::instance::{Instance, Item};
///
/// let instance = Instance::new(50, vec![
///     Item::new(60, 10),
///     Item::new(100, 20),
///     Item::new(120, 30),
/// ]).unwrap();
/// let solution = GreedyRunner::run(&instance);
/// assert_eq!(solution.price, 160);
/// assert_eq!(solution.items, vec![0, 1]);
/// ```
pub struct GreedyRunner;

impl GreedyRunner {
    /// Solves `instance` greedily.
    pub fn run(instance: &Instance) -> Solution {
        let capacity = instance.capacity();
        let items = instance.items();

        let mut weight = 0u64;
        let mut taken = Vec::new();

        for index in instance.density_order() {
            if weight == capacity {
                break;
            }
            let item = &items[index];
            if item.weight <= capacity - weight {
                weight += item.weight;
                taken.push(index);
            }
        }

        let solution = instance.solution_from_indices(taken);
        tracing::debug!(
            price = solution.price,
            weight = solution.weight,
            taken = solution.items.len(),
            "greedy finished"
        );
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Item;
    use crate::test_utils::{brute_force, classic_instance, instance};

    #[test]
    fn test_classic_instance_falls_short() {
        let solution = GreedyRunner::run(&classic_instance());
        assert_eq!(solution.price, 160);
        assert_eq!(brute_force(&classic_instance()).price, 220);
    }

    #[test]
    fn test_skips_items_that_do_not_fit() {
        // Densities 10, 5, 1: the middle item overflows, the last one fits.
        let inst = instance(12, &[(100, 10), (50, 10), (2, 2)]);
        let solution = GreedyRunner::run(&inst);
        assert_eq!(solution.items, vec![0, 2]);
        assert_eq!(solution.price, 102);
        assert_eq!(solution.weight, 12);
    }

    #[test]
    fn test_empty_instance() {
        let solution = GreedyRunner::run(&instance(10, &[]));
        assert_eq!(solution, Solution::default());
    }

    #[test]
    fn test_zero_capacity() {
        let solution = GreedyRunner::run(&instance(0, &[(5, 1), (7, 2)]));
        assert_eq!(solution.price, 0);
        assert!(solution.items.is_empty());
    }

    #[test]
    fn test_single_item_that_fits() {
        let solution = GreedyRunner::run(&instance(5, &[(42, 5)]));
        assert_eq!(solution.price, 42);
        assert_eq!(solution.items, vec![0]);
    }

    #[test]
    fn test_deterministic() {
        let inst = instance(
            20,
            &[(10, 5), (10, 5), (6, 3), (8, 4), (1, 1), (9, 7), (3, 2)],
        );
        assert_eq!(GreedyRunner::run(&inst), GreedyRunner::run(&inst));
    }

    #[test]
    fn test_result_is_feasible() {
        let inst = Instance::new(
            15,
            vec![Item::new(4, 12), Item::new(2, 2), Item::new(1, 1), Item::new(10, 4), Item::new(2, 1)],
        )
        .unwrap();
        let solution = GreedyRunner::run(&inst);
        assert!(solution.is_feasible(&inst));
        assert_eq!(solution.price, 15);
    }
}
