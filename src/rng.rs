// src/rng.rs
//! Random Number Generation for Path Simulation
//!
//! # Design Philosophy
//!
//! The simulation core treats randomness as an injected resource rather than
//! process-wide global state:
//! 1. **Reproducibility**: Same seed → same path matrix (critical for debugging/validation)
//! 2. **Independence**: Unseeded runs draw fresh randomness on every call
//! 3. **Statistical quality**: Standard-normal variates via `rand_distr`
//!
//! Callers either pass a `seed: u64` through [`crate::mc::path_engine::PathConfig`]
//! or hand any [`rand::Rng`] to the `*_with_rng` entry points.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, StandardNormal};

/// Create a deterministic generator from a 64-bit seed
pub fn seed_rng_from_u64(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Create a generator seeded from operating-system entropy
pub fn rng_from_entropy() -> StdRng {
    StdRng::from_entropy()
}

/// Draw a single standard-normal variate
pub fn get_normal_draw<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    StandardNormal.sample(rng)
}

/// Fill `out` with independent standard-normal variates, one per path
///
/// All paths advancing through the same time interval share one call, so a
/// row of draws maps one-to-one onto a row of the path matrix.
pub fn fill_normal_draws<R: Rng + ?Sized>(rng: &mut R, out: &mut [f64]) {
    for slot in out.iter_mut() {
        *slot = StandardNormal.sample(rng);
    }
}
