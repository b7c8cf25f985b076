//! Shared fixtures for the unit tests: instance builders, a brute-force
//! reference solver and proptest strategies.

use crate::instance::{Instance, Item, Solution};
use proptest::prelude::*;

/// Builds an instance from `(price, weight)` pairs.
pub fn instance(capacity: u64, items: &[(u64, u64)]) -> Instance {
    Instance::new(capacity, items.iter().copied().map(Item::from).collect())
        .expect("fixture instance must be valid")
}

/// Three items, capacity 50, optimum 220 (items 1 and 2).
pub fn classic_instance() -> Instance {
    instance(50, &[(60, 10), (100, 20), (120, 30)])
}

/// A 15-item instance with a known optimum of 1458.
pub fn medium_instance() -> Instance {
    instance(
        750,
        &[
            (135, 70),
            (139, 73),
            (149, 77),
            (150, 80),
            (156, 82),
            (163, 87),
            (173, 90),
            (184, 94),
            (192, 98),
            (201, 106),
            (210, 110),
            (214, 113),
            (221, 115),
            (229, 118),
            (240, 120),
        ],
    )
}

/// Exhaustive search over every subset. Only usable for small instances.
pub fn brute_force(instance: &Instance) -> Solution {
    let n = instance.len();
    assert!(n <= 20, "brute force is limited to 20 items");

    let items = instance.items();
    let mut best_mask = 0u32;
    let mut best_price = 0u64;
    for mask in 0u32..(1 << n) {
        let (price, weight) = (0..n)
            .filter(|&i| mask & (1 << i) != 0)
            .fold((0u64, 0u64), |(p, w), i| (p + items[i].price, w + items[i].weight));
        if weight <= instance.capacity() && price > best_price {
            best_price = price;
            best_mask = mask;
        }
    }

    instance.solution_from_indices((0..n).filter(|&i| best_mask & (1 << i) != 0).collect())
}

/// Random instances with up to `max_items` items.
pub fn arb_instance(max_items: usize) -> impl Strategy<Value = Instance> {
    (
        0u64..120,
        prop::collection::vec((0u64..60, 1u64..40), 0..=max_items),
    )
        .prop_map(|(capacity, pairs)| instance(capacity, &pairs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brute_force_classic() {
        let solution = brute_force(&classic_instance());
        assert_eq!(solution.price, 220);
        assert_eq!(solution.items, vec![1, 2]);
    }

    #[test]
    fn test_brute_force_medium() {
        assert_eq!(brute_force(&medium_instance()).price, 1458);
    }
}
