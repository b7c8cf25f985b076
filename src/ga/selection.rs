//! Selection strategies for the GA.
//!
//! Selection decides which candidates reproduce. All functions here
//! **maximize** fitness.
//!
//! # References
//!
//! - Miller & Goldberg (1995), "Genetic Algorithms, Tournament Selection,
//!   and the Effects of Noise"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use super::types::Candidate;
use rand::seq::index;
use rand::Rng;

/// Tournament selection: draw `k` candidates uniformly at random, with
/// replacement, and return the fittest.
///
/// Ties go to the candidate drawn first. `k = 0` behaves like `k = 1`.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `population` is empty.
pub fn tournament<'a, R: Rng>(population: &'a [Candidate], k: usize, rng: &mut R) -> &'a Candidate {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );

    let n = population.len();
    let mut best = &population[rng.random_range(0..n)];
    for _ in 1..k.max(1) {
        let challenger = &population[rng.random_range(0..n)];
        if challenger.fitness() > best.fitness() {
            best = challenger;
        }
    }
    best
}

/// Natural-selection culling.
///
/// Draws `k` distinct candidates (capped at the population size), keeps the
/// fittest of them (first drawn on ties) and discards the others. Every
/// candidate that was not drawn survives. The returned pool therefore has
/// `len - k + 1` candidates: the champion first, then the untouched
/// candidates in population order.
///
/// # Panics
/// Panics if `population` is empty.
pub fn cull<R: Rng>(population: &[Candidate], k: usize, rng: &mut R) -> Vec<Candidate> {
    assert!(!population.is_empty(), "cannot cull an empty population");

    let n = population.len();
    let contenders = index::sample(rng, n, k.clamp(1, n));

    let mut fought = vec![false; n];
    let mut champion: Option<usize> = None;
    for idx in contenders.iter() {
        fought[idx] = true;
        champion = match champion {
            Some(best) if population[best].fitness() >= population[idx].fitness() => Some(best),
            _ => Some(idx),
        };
    }

    let mut survivors = Vec::with_capacity(n - contenders.len() + 1);
    if let Some(best) = champion {
        survivors.push(population[best].clone());
    }
    survivors.extend(
        population
            .iter()
            .zip(&fought)
            .filter(|(_, &f)| !f)
            .map(|(c, _)| c.clone()),
    );
    survivors
}

/// Returns clones of the `count` fittest candidates, best first.
///
/// Equal fitness keeps population order.
pub fn elites(population: &[Candidate], count: usize) -> Vec<Candidate> {
    if count == 0 {
        return Vec::new();
    }
    let mut order: Vec<usize> = (0..population.len()).collect();
    order.sort_by(|&a, &b| population[b].fitness().cmp(&population[a].fitness()));
    order
        .into_iter()
        .take(count)
        .map(|i| population[i].clone())
        .collect()
}

/// The fittest candidate, first one on ties.
///
/// # Panics
/// Panics if `population` is empty.
pub fn fittest(population: &[Candidate]) -> &Candidate {
    population
        .iter()
        .reduce(|best, c| if c.fitness() > best.fitness() { c } else { best })
        .expect("population must not be empty")
}
