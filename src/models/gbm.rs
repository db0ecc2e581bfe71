// src/models/gbm.rs
//! Geometric Brownian Motion
//!
//! # Mathematical Foundation
//!
//! The process follows the SDE:
//! ```text
//! dS_t = μ S_t dt + σ S_t dW_t
//! ```
//!
//! with the exact lognormal transition between discrete times:
//! ```text
//! S_{t+dt} = S_t * exp((μ - σ²/2) dt + σ √dt Z),   Z ~ N(0,1)
//! ```
//!
//! Because the stochastic term carries a factor of σ, setting σ = 0 collapses
//! the transition to the deterministic drift-only path S_0 * exp(μ t) exactly,
//! whatever the normal draws are.

use crate::error::{validation::*, SimResult};

/// Geometric Brownian Motion parameters
///
/// Immutable once constructed; [`Gbm::new`] rejects invalid values so every
/// live instance satisfies `s0 > 0` and `sigma >= 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gbm {
    /// Initial value S_0
    pub s0: f64,
    /// Drift rate μ
    pub mu: f64,
    /// Volatility σ
    pub sigma: f64,
}

impl Gbm {
    /// Construct a validated model
    ///
    /// # Errors
    ///
    /// Returns `SimError::InvalidParameter` when `s0 <= 0`, `sigma < 0`, or
    /// any input is non-finite.
    pub fn new(s0: f64, mu: f64, sigma: f64) -> SimResult<Self> {
        validate_positive("s0", s0)?;
        validate_finite("s0", s0)?;
        validate_finite("mu", mu)?;
        validate_non_negative("sigma", sigma)?;
        validate_finite("sigma", sigma)?;
        Ok(Gbm { s0, mu, sigma })
    }

    /// Advance one value by the exact lognormal step
    ///
    /// `S_{t+dt} = S_t * exp((μ - σ²/2) dt + σ √dt z)` where `z` is a
    /// standard-normal draw supplied by the caller.
    pub fn exact_step(&self, s_t: f64, dt: f64, normal_draw: f64) -> f64 {
        s_t * ((self.mu - 0.5 * self.sigma * self.sigma) * dt
            + self.sigma * dt.sqrt() * normal_draw)
            .exp()
    }

    /// Expected value E[S_t] = S_0 * exp(μt)
    pub fn expected_value(&self, t: f64) -> f64 {
        self.s0 * (self.mu * t).exp()
    }

    /// Variance Var[S_t] = S_0² * exp(2μt) * (exp(σ²t) - 1)
    pub fn variance(&self, t: f64) -> f64 {
        let e_s = self.expected_value(t);
        e_s * e_s * ((self.sigma * self.sigma * t).exp() - 1.0)
    }
}
