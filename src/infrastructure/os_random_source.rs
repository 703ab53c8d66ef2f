use rand::{Rng, seq::SliceRandom};
use rand_core::{OsRng, RngCore, TryRngCore};

use crate::domain::services::random_source::SecureRandomSource;

/// Randomness straight from the operating system CSPRNG.
///
/// Panics if the operating system cannot provide randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandomSource;

impl SecureRandomSource for OsRandomSource {
    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.unwrap_err().fill_bytes(dest);
    }

    fn index_below(&self, upper: usize) -> usize {
        OsRng.unwrap_err().random_range(0..upper)
    }

    fn shuffle(&self, items: &mut [char]) {
        items.shuffle(&mut OsRng.unwrap_err());
    }
}
