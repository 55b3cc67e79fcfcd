//! Random scramble generation.

use rand::Rng;

use crate::{SCRAMBLE_TWISTS, Twist};

/// Number of twists in a default scramble.
pub const SCRAMBLE_LENGTH: usize = 20;

/// Returns `len` twists drawn uniformly from [`SCRAMBLE_TWISTS`].
pub fn random_twists<R: Rng + ?Sized>(rng: &mut R, len: usize) -> Vec<Twist> {
    (0..len)
        .map(|_| SCRAMBLE_TWISTS[rng.random_range(0..SCRAMBLE_TWISTS.len())])
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    use super::*;

    #[test]
    fn test_random_twists() {
        let mut rng = ChaCha12Rng::seed_from_u64(7);
        let twists = random_twists(&mut rng, SCRAMBLE_LENGTH);
        assert_eq!(twists.len(), SCRAMBLE_LENGTH);
        assert!(twists.iter().all(|t| SCRAMBLE_TWISTS.contains(t)));

        let again = random_twists(&mut ChaCha12Rng::seed_from_u64(7), SCRAMBLE_LENGTH);
        assert_eq!(twists, again);

        assert!(random_twists(&mut rng, 0).is_empty());
        assert_eq!(random_twists(&mut rng, 500).len(), 500);
    }
}
