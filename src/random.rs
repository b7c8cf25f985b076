//! Random number generation helpers.
//!
//! Every solver owns its generator; nothing in this crate draws from a
//! shared global RNG. [`stream_seed`] derives independent seeds for the
//! workers of the parallel GA so that no two workers (or two generations of
//! the same worker) share a random stream.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a seeded, reproducible RNG.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Derives the seed of one random stream from a base seed, a worker index
/// and a generation index.
///
/// Each component is folded in through a SplitMix64 finalizer, so nearby
/// inputs (worker 0 vs 1, generation 4 vs 5) land on unrelated seeds.
pub fn stream_seed(base: u64, worker: usize, generation: usize) -> u64 {
    let mut h = mix(base);
    h = mix(h ^ worker as u64);
    mix(h ^ (generation as u64).rotate_left(32))
}

/// Creates the RNG for one `(worker, generation)` stream.
pub fn stream_rng(base: u64, worker: usize, generation: usize) -> StdRng {
    create_rng(stream_seed(base, worker, generation))
}

/// SplitMix64 finalizer (Steele, Lea & Flood 2014).
fn mix(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
