//! Random number source used by the decay animation

use rand::{Rng, RngCore};

/// Supplies uniformly distributed integers
pub trait RandomSource {
    /// Random value in the inclusive range `low..=high`
    ///
    /// `low` must not exceed `high`.
    fn random_range(&mut self, low: u32, high: u32) -> u32;
}

impl<R: RngCore> RandomSource for R {
    fn random_range(&mut self, low: u32, high: u32) -> u32 {
        if low >= high {
            return low;
        }
        self.gen_range(low..=high)
    }
}
