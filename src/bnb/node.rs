//! Search nodes and the fractional-relaxation bound.

use crate::instance::Item;
use std::cmp::Ordering;

/// Upper bound on the best price reachable from a partial decision.
///
/// `sorted` must be in descending density order. The first `depth` items
/// are considered decided; `price` and `weight` are the totals of the items
/// taken among them.
///
/// The result is the floor of the fractional relaxation. Prices are
/// integral, so no completion can exceed the floor either, and the whole
/// computation stays exact for any valid instance.
///
/// # Examples
///
/// ```
/// use u_knapsack::bnb::upper_bound;
/// use u_knapsack::instance::Item;
///
/// let sorted = [Item::new(60, 10), Item::new(100, 20), Item::new(120, 30)];
/// // 60 + 100, then 20/30 of the last item.
/// assert_eq!(upper_bound(&sorted, 50, 0, 0, 0), 240);
/// ```
pub fn upper_bound(sorted: &[Item], capacity: u64, depth: usize, price: u64, weight: u64) -> u64 {
    if weight >= capacity {
        return price;
    }

    let mut bound = price;
    let mut remaining = capacity - weight;
    for item in &sorted[depth.min(sorted.len())..] {
        if item.weight <= remaining {
            bound += item.price;
            remaining -= item.weight;
        } else {
            // remaining < item.weight, so the fraction is below item.price.
            let fraction = u128::from(remaining) * u128::from(item.price) / u128::from(item.weight);
            return bound + fraction as u64;
        }
    }
    bound
}

/// A node of the implicit decision tree.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    /// Number of items decided so far (in density order).
    pub depth: usize,
    pub price: u64,
    pub weight: u64,
    pub bound: u64,
    /// Last include-decision on the path to this node, if any.
    pub trail: Option<usize>,
}

impl SearchNode {
    pub fn new(
        sorted: &[Item],
        capacity: u64,
        depth: usize,
        price: u64,
        weight: u64,
        trail: Option<usize>,
    ) -> Self {
        Self {
            depth,
            price,
            weight,
            bound: upper_bound(sorted, capacity, depth, price, weight),
            trail,
        }
    }

    pub fn root(sorted: &[Item], capacity: u64) -> Self {
        Self::new(sorted, capacity, 0, 0, 0, None)
    }
}

// Max-heap order: higher bound first, then deeper nodes, which reach
// complete solutions (and raise the incumbent) sooner.
impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bound
            .cmp(&other.bound)
            .then(self.depth.cmp(&other.depth))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchNode {}

/// One include-decision, linked to the previous one on the same path.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Trail {
    /// Item index in input order.
    pub item: usize,
    pub parent: Option<usize>,
}

/// Collects the items taken along the path ending at `trail`.
pub(crate) fn collect_trail(trails: &[Trail], mut trail: Option<usize>) -> Vec<usize> {
    let mut items = Vec::new();
    while let Some(idx) = trail {
        items.push(trails[idx].item);
        trail = trails[idx].parent;
    }
    items
}
