//! Bit-string genetic operators.
//!
//! # Crossover Operators
//!
//! - [`uniform_crossover`]: Syswerda (1989) — every gene is inherited
//!   independently, producing two complementary children
//!
//! # Mutation Operators
//!
//! - [`bit_flip_mutation`]: Flip each gene independently with a fixed
//!   probability — O(n)

use rand::Rng;

/// Uniform crossover.
///
/// For every gene a fair coin decides whether the son inherits from the
/// father and the daughter from the mother, or the other way round. The two
/// children are complementary: at every position they hold the two parental
/// genes between them.
///
/// Returns `(son, daughter)`.
///
/// # Panics
/// Panics if parents have different lengths.
pub fn uniform_crossover<R: Rng>(
    mother: &[bool],
    father: &[bool],
    rng: &mut R,
) -> (Vec<bool>, Vec<bool>) {
    assert_eq!(mother.len(), father.len(), "parents must have equal length");

    let mut son = Vec::with_capacity(mother.len());
    let mut daughter = Vec::with_capacity(mother.len());
    for (&m, &f) in mother.iter().zip(father) {
        if rng.random_bool(0.5) {
            son.push(f);
            daughter.push(m);
        } else {
            son.push(m);
            daughter.push(f);
        }
    }
    (son, daughter)
}

/// Bit-flip mutation: each gene is flipped with probability `rate`.
///
/// `rate` is expected in `[0, 1]`; values outside act as 0 or 1.
pub fn bit_flip_mutation<R: Rng>(genes: &mut [bool], rate: f64, rng: &mut R) {
    if rate <= 0.0 {
        return;
    }
    for gene in genes.iter_mut() {
        if rng.random_range(0.0..1.0) < rate {
            *gene = !*gene;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_crossover_children_are_complementary() {
        let mother = [true, true, false, false, true, false, true, false];
        let father = [true, false, true, false, false, true, true, true];
        let mut rng = create_rng(42);

        for _ in 0..100 {
            let (son, daughter) = uniform_crossover(&mother, &father, &mut rng);
            assert_eq!(son.len(), mother.len());
            assert_eq!(daughter.len(), mother.len());
            for i in 0..mother.len() {
                let mut got = [son[i], daughter[i]];
                let mut expected = [mother[i], father[i]];
                got.sort();
                expected.sort();
                assert_eq!(got, expected, "gene {i} not inherited from the parents");
            }
        }
    }

    #[test]
    fn test_crossover_identical_parents() {
        let parent = [true, false, true, true];
        let mut rng = create_rng(1);
        let (son, daughter) = uniform_crossover(&parent, &parent, &mut rng);
        assert_eq!(son, parent);
        assert_eq!(daughter, parent);
    }

    #[test]
    fn test_crossover_mixes_roughly_half() {
        let mother = vec![true; 1000];
        let father = vec![false; 1000];
        let (son, _) = uniform_crossover(&mother, &father, &mut create_rng(7));
        let from_mother = son.iter().filter(|&&g| g).count();
        assert!((400..600).contains(&from_mother), "got {from_mother}");
    }

    #[test]
    fn test_crossover_empty() {
        let (son, daughter) = uniform_crossover(&[], &[], &mut create_rng(0));
        assert!(son.is_empty() && daughter.is_empty());
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_crossover_length_mismatch() {
        uniform_crossover(&[true], &[true, false], &mut create_rng(0));
    }

    #[test]
    fn test_mutation_rate_zero_is_noop() {
        let mut genes = vec![true, false, true, false];
        bit_flip_mutation(&mut genes, 0.0, &mut create_rng(3));
        assert_eq!(genes, vec![true, false, true, false]);
    }

    #[test]
    fn test_mutation_rate_one_flips_all() {
        let mut genes = vec![true, false, true, false];
        bit_flip_mutation(&mut genes, 1.0, &mut create_rng(3));
        assert_eq!(genes, vec![false, true, false, true]);
    }

    #[test]
    fn test_mutation_rate_is_respected() {
        let mut genes = vec![false; 10_000];
        bit_flip_mutation(&mut genes, 0.1, &mut create_rng(99));
        let flipped = genes.iter().filter(|&&g| g).count();
        assert!((800..1200).contains(&flipped), "flipped {flipped} of 10000");
    }
}
