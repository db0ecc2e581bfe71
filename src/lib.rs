//! # gbm-mc: Monte Carlo Paths for Geometric Brownian Motion
//!
//! A Rust library for simulating ensembles of geometric Brownian motion
//! sample paths and summarizing the log-returns they imply.
//!
//! ## Key Features
//!
//! - **Exact transition**: paths advance by the closed-form lognormal step,
//!   not an Euler approximation
//! - **Reproducible randomness**: seedable by configuration or via an
//!   injected [`rand::Rng`]
//! - **Log-return statistics**: count, extrema, mean, sample standard
//!   deviation, skewness, and excess kurtosis over the flattened sample
//! - **Bond accrual**: closed-form discrete compounding of a bond bought at
//!   a known price
//! - **Presentation seam**: CSV export of matrices and summaries for
//!   external charting tools
//!
//! ## Quick Start
//!
//! ```rust
//! use gbm_mc::mc::path_engine::{generate_paths, PathConfig};
//! use gbm_mc::models::gbm::Gbm;
//! use gbm_mc::stats::{describe, log_returns};
//!
//! // 2000 paths over 50 steps of a 10-year horizon
//! let model = Gbm::new(100.0, 0.05, 0.25).expect("valid parameters");
//! let cfg = PathConfig { seed: 42, ..Default::default() };
//!
//! let paths = generate_paths(&model, &cfg).expect("valid configuration");
//! let returns = log_returns(&paths).expect("strictly positive paths");
//!
//! let sample: Vec<f64> = returns.iter().copied().collect();
//! let stats = describe(&sample).expect("non-empty sample");
//! println!("mean log-return: {:.6} ± {:.6}", stats.mean, stats.std);
//! ```
//!
//! ## Mathematical Foundation
//!
//! The simulator iterates the exact solution of the GBM SDE over each
//! discrete interval, so every generated value is strictly positive and the
//! per-step log-returns are i.i.d. normal with mean `(μ - σ²/2)dt` and
//! standard deviation `σ√dt`.

// Module declarations
pub mod bond;
pub mod error;
pub mod mc;
pub mod models;
pub mod output;
pub mod rng;
pub mod stats;

// Re-export commonly used types for convenience
pub use error::{SimError, SimResult};
pub use mc::path_engine::{generate_paths, generate_paths_with_rng, PathConfig, PathMatrix};
pub use models::gbm::Gbm;
pub use stats::{describe, log_returns, DescriptiveStats, LogReturnMatrix};
