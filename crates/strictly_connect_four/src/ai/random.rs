//! Uniformly random move selection.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Picks one of `legal` uniformly at random, `None` if it is empty.
pub fn pick<R: Rng + ?Sized>(legal: &[usize], rng: &mut R) -> Option<usize> {
    legal.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_slice_yields_none() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick(&[], &mut rng), None);
    }

    #[test]
    fn test_only_offered_columns_are_picked() {
        let mut rng = StdRng::seed_from_u64(7);
        let legal = [0, 2, 6];
        let mut seen = [false; 7];
        for _ in 0..200 {
            let column = pick(&legal, &mut rng).expect("non-empty");
            assert!(legal.contains(&column));
            seen[column] = true;
        }
        assert!(seen[0] && seen[2] && seen[6]);
    }
}
