/// Capability handing out cryptographically secure randomness.
///
/// Implementations must be safe to share between threads.
pub trait SecureRandomSource: Send + Sync {
    /// Fill `dest` with random bytes
    fn fill_bytes(&self, dest: &mut [u8]);

    /// Uniformly random index in `0..upper`. `upper` is never zero.
    fn index_below(&self, upper: usize) -> usize;

    /// Uniformly permute `items`
    fn shuffle(&self, items: &mut [char]) {
        // Fisher-Yates
        for i in (1..items.len()).rev() {
            let j = self.index_below(i + 1);
            items.swap(i, j);
        }
    }
}
