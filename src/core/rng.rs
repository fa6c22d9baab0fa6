//! Shared randomness source
//!
//! One seeded generator feeds every probabilistic decision in combat. Actor
//! ticks may draw concurrently, so the generator sits behind a mutex; callers
//! never assume determinism across calls, only across a fixed seed and a
//! single-threaded draw order (which the tests rely on).

use std::sync::Mutex;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Thread-safe pseudo-random generator shared by the whole combat core
pub struct SharedRng {
    inner: Mutex<ChaCha8Rng>,
}

impl SharedRng {
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Uniform integer draw in `[lo, hi]` inclusive
    pub fn inclusive(&self, lo: u32, hi: u32) -> u32 {
        debug_assert!(lo <= hi, "inverted draw bounds [{lo}, {hi}]");
        self.inner.lock().unwrap().gen_range(lo..=hi)
    }

    /// Uniform draw in `[0, 1)`
    pub fn next_f64(&self) -> f64 {
        self.inner.lock().unwrap().gen()
    }

    /// One-in-`n` chance
    pub fn one_in(&self, n: u32) -> bool {
        self.inner.lock().unwrap().gen_range(0..n) == 0
    }

    /// Uniform pick from a non-empty slice
    pub fn pick<'a, T>(&self, options: &'a [T]) -> &'a T {
        let idx = self.inner.lock().unwrap().gen_range(0..options.len());
        &options[idx]
    }
}

impl Default for SharedRng {
    fn default() -> Self {
        Self::seeded(0)
    }
}
