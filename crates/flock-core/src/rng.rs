//! Deterministic RNG wrapper for the rendezvous drift.
//!
//! The rendezvous point performs a random walk every active tick.  Wrapping
//! the generator and seeding it explicitly keeps runs reproducible: the
//! same seed always produces the same drift trajectory, which the scenario
//! tests rely on for exact position assertions.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seedable RNG driving the rendezvous drift.
///
/// `Clone` is intentional: cloning captures the full generator state, so a
/// test can replay the exact drift a controller is about to apply.
#[derive(Clone)]
pub struct DriftRng(SmallRng);

impl DriftRng {
    pub fn new(seed: u64) -> Self {
        DriftRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform sample in `[-span, span]`.
    #[inline]
    pub fn jitter(&mut self, span: f64) -> f64 {
        self.0.gen_range(-span..=span)
    }
}
