//! Uniform integer sampling used for page, image and 8-ball selection.
use rand::Rng;

/// Source of uniformly distributed integers. Swappable so selection can be driven in tests.
pub trait RandomSource: Send + Sync {
    /// Returns an integer in the inclusive range `[min, max]`. Requires `min <= max`.
    fn between(&self, min: usize, max: usize) -> usize;
}

/// Thread-local RNG backed source used in production.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn between(&self, min: usize, max: usize) -> usize {
        rand::rng().random_range(min..=max)
    }
}
