//! Sample generators for sweeping scales and helpers across their domains.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// `n + 1` evenly spaced samples covering `[0, 1]`, both ends included.
pub fn unit_samples(n: usize) -> Vec<f64> {
    (0..=n).map(|i| i as f64 / n as f64).collect()
}

/// `n` uniformly distributed samples in `[low, high)`, reproducible for a given seed.
pub fn random_samples(n: usize, low: f64, high: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(low..high)).collect()
}
