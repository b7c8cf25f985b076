//! Best-first search loop.

use super::node::{collect_trail, SearchNode, Trail};
use crate::instance::{Instance, Item, Solution};
use std::collections::BinaryHeap;

/// Result of a branch-and-bound run.
#[derive(Debug, Clone)]
pub struct BnbResult {
    /// An optimal selection.
    pub solution: Solution,

    /// Nodes popped from the frontier and branched on.
    pub nodes_expanded: usize,

    /// Nodes discarded by the bound, either when popped or before being
    /// pushed.
    pub nodes_pruned: usize,

    /// Largest frontier size observed.
    pub peak_frontier: usize,
}

/// Executes the exact best-first branch-and-bound search.
///
/// # Usage
///
/// ```
/// use u_knapsack::bnb::BnbRunner;
/// use u_knapsack::instance::{Instance, Item};
///
/// let instance = Instance::new(50, vec![
///     Item::new(60, 10),
///     Item::new(100, 20),
///     Item::new(120, 30),
/// ]).unwrap();
/// let result = BnbRunner::run(&instance);
/// assert_eq!(result.solution.price, 220);
/// assert_eq!(result.solution.items, vec![1, 2]);
/// ```
pub struct BnbRunner;

impl BnbRunner {
    /// Finds an optimal solution of `instance`.
    pub fn run(instance: &Instance) -> BnbResult {
        let capacity = instance.capacity();
        let order = instance.density_order();
        let sorted: Vec<Item> = order.iter().map(|&i| instance.items()[i]).collect();
        let n = sorted.len();

        let mut trails: Vec<Trail> = Vec::new();
        let mut frontier = BinaryHeap::new();
        frontier.push(SearchNode::root(&sorted, capacity));

        let mut best_price = 0u64;
        let mut best_trail: Option<usize> = None;
        let mut nodes_expanded = 0usize;
        let mut nodes_pruned = 0usize;
        let mut peak_frontier = 1usize;

        while let Some(node) = frontier.pop() {
            // Nothing below this node can beat the incumbent.
            if node.bound < best_price {
                nodes_pruned += 1;
                continue;
            }

            if node.depth == n {
                if node.price > best_price {
                    best_price = node.price;
                    best_trail = node.trail;
                }
                continue;
            }

            nodes_expanded += 1;
            let next = node.depth + 1;
            let item = sorted[node.depth];

            let without = SearchNode::new(&sorted, capacity, next, node.price, node.weight, node.trail);
            if without.bound >= best_price {
                frontier.push(without);
            } else {
                nodes_pruned += 1;
            }

            if item.weight <= capacity - node.weight {
                let price = node.price + item.price;
                let weight = node.weight + item.weight;
                let with = SearchNode::new(&sorted, capacity, next, price, weight, None);
                if with.bound >= best_price {
                    trails.push(Trail {
                        item: order[node.depth],
                        parent: node.trail,
                    });
                    frontier.push(SearchNode {
                        trail: Some(trails.len() - 1),
                        ..with
                    });
                } else {
                    nodes_pruned += 1;
                }
            }

            peak_frontier = peak_frontier.max(frontier.len());
        }

        let solution = instance.solution_from_indices(collect_trail(&trails, best_trail));
        debug_assert_eq!(solution.price, best_price);

        tracing::debug!(
            price = solution.price,
            nodes_expanded,
            nodes_pruned,
            peak_frontier,
            "branch-and-bound finished"
        );

        BnbResult {
            solution,
            nodes_expanded,
            nodes_pruned,
            peak_frontier,
        }
    }
}
