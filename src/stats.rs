// src/stats.rs
//! Log-Return Derivation and Descriptive Statistics
//!
//! # Conventions
//!
//! - Log-return between consecutive steps: `ln(S_{t+1} / S_t)`, per path.
//! - `std` is the **sample** standard deviation (Bessel's correction, n − 1).
//! - `skew` is the biased third standardized moment `m3 / m2^(3/2)`.
//! - `kurtosis` is **excess** kurtosis `m4 / m2² − 3`, zero for a normal
//!   distribution.
//! - Undefined statistics are `f64::NAN` rather than errors: a single-element
//!   or zero-variance sample has no standard deviation, skewness, or kurtosis.

use crate::error::{SimError, SimResult};
use crate::mc::path_engine::PathMatrix;
use ndarray::Array2;
use statrs::statistics::Statistics;

/// Grid of per-step log-returns, one row fewer than the path matrix
pub type LogReturnMatrix = Array2<f64>;

/// Summary statistics of a flattened numeric sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// Number of observations
    pub size: usize,
    /// Smallest observation
    pub min: f64,
    /// Largest observation
    pub max: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (n − 1); NaN when undefined
    pub std: f64,
    /// Third standardized moment; NaN when undefined
    pub skew: f64,
    /// Excess kurtosis; NaN when undefined
    pub kurtosis: f64,
}

/// Per-step log-returns across all paths
///
/// Entry `[t][i]` is `ln(paths[t+1][i] / paths[t][i])`. The result has one row
/// fewer than the input and the same number of columns. Recomputed on every
/// call; the input is never mutated.
///
/// # Errors
///
/// - `InsufficientSample` when the matrix has fewer than 2 rows.
/// - `NonPositivePathValue` when any entry is not strictly positive (the
///   logarithm would be undefined). No partial result is returned.
pub fn log_returns(paths: &PathMatrix) -> SimResult<LogReturnMatrix> {
    let (rows, cols) = paths.dim();
    if rows < 2 {
        return Err(SimError::InsufficientSample {
            required: 2,
            actual: rows,
        });
    }

    // Reject the whole matrix before computing anything.
    for ((step, path), &value) in paths.indexed_iter() {
        if !(value > 0.0) {
            return Err(SimError::NonPositivePathValue { step, path, value });
        }
    }

    let mut returns = Array2::zeros((rows - 1, cols));
    for t in 0..rows - 1 {
        for i in 0..cols {
            returns[[t, i]] = (paths[[t + 1, i]] / paths[[t, i]]).ln();
        }
    }
    Ok(returns)
}

/// Descriptive statistics over a one-dimensional sample
///
/// `size`, `min`, `max`, and `mean` are defined for any non-empty sample.
/// `std`, `skew`, and `kurtosis` need at least two observations and a
/// non-degenerate spread; otherwise they come back as NaN.
///
/// # Errors
///
/// `InsufficientSample` for an empty slice.
pub fn describe(sample: &[f64]) -> SimResult<DescriptiveStats> {
    if sample.is_empty() {
        return Err(SimError::InsufficientSample {
            required: 1,
            actual: 0,
        });
    }

    let mean = sample.mean();
    let (m2, m3, m4) = central_moments(sample, mean);

    Ok(DescriptiveStats {
        size: sample.len(),
        min: Statistics::min(sample),
        max: Statistics::max(sample),
        mean,
        std: sample.std_dev(),
        skew: m3 / m2.powf(1.5),
        kurtosis: m4 / (m2 * m2) - 3.0,
    })
}

/// Population central moments m2, m3, m4 about a precomputed mean
fn central_moments(sample: &[f64], mean: f64) -> (f64, f64, f64) {
    let n = sample.len() as f64;

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;

    for &x in sample {
        let d = x - mean;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }

    (m2 / n, m3 / n, m4 / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::arr2;

    #[test]
    fn test_describe_known_sample() {
        let stats = describe(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();

        assert_eq!(stats.size, 5);
        assert_relative_eq!(stats.min, 1.0, epsilon = 1.0e-14);
        assert_relative_eq!(stats.max, 5.0, epsilon = 1.0e-14);
        assert_relative_eq!(stats.mean, 3.0, epsilon = 1.0e-14);
        // Sample standard deviation, Bessel's correction: sqrt(10/4).
        assert_relative_eq!(stats.std, 1.5811388300841898, epsilon = 1.0e-12);
        assert_relative_eq!(stats.skew, 0.0, epsilon = 1.0e-14);
        // m2 = 2, m4 = 6.8 -> 6.8/4 - 3.
        assert_relative_eq!(stats.kurtosis, -1.3, epsilon = 1.0e-12);
    }

    #[test]
    fn test_describe_single_value_uses_nan_policy() {
        let stats = describe(&[5.0]).unwrap();

        assert_eq!(stats.size, 1);
        assert_eq!(stats.min, 5.0);
        assert_eq!(stats.max, 5.0);
        assert_eq!(stats.mean, 5.0);
        assert!(stats.std.is_nan());
        assert!(stats.skew.is_nan());
        assert!(stats.kurtosis.is_nan());
    }

    #[test]
    fn test_describe_zero_variance_sample() {
        let stats = describe(&[2.0, 2.0, 2.0]).unwrap();

        assert_eq!(stats.mean, 2.0);
        assert_eq!(stats.std, 0.0);
        assert!(stats.skew.is_nan());
        assert!(stats.kurtosis.is_nan());
    }

    #[test]
    fn test_describe_empty_sample_fails() {
        let err = describe(&[]).unwrap_err();
        assert_eq!(
            err,
            SimError::InsufficientSample {
                required: 1,
                actual: 0
            }
        );
    }

    #[test]
    fn test_describe_is_idempotent() {
        let sample = vec![0.4, -1.2, 3.3, 0.0, 2.1];
        let first = describe(&sample).unwrap();
        let second = describe(&sample).unwrap();
        assert_eq!(first, second);
        assert_eq!(sample, vec![0.4, -1.2, 3.3, 0.0, 2.1]);
    }

    #[test]
    fn test_log_returns_known_matrix() {
        let paths = arr2(&[[100.0, 50.0], [110.0, 45.0]]);
        let returns = log_returns(&paths).unwrap();

        assert_eq!(returns.dim(), (1, 2));
        assert_relative_eq!(returns[[0, 0]], 1.1_f64.ln(), epsilon = 1.0e-14);
        assert_relative_eq!(returns[[0, 1]], 0.9_f64.ln(), epsilon = 1.0e-14);
    }

    #[test]
    fn test_log_returns_rejects_non_positive_values() {
        let paths = arr2(&[[100.0], [0.0]]);
        let err = log_returns(&paths).unwrap_err();
        assert_eq!(
            err,
            SimError::NonPositivePathValue {
                step: 1,
                path: 0,
                value: 0.0
            }
        );

        let negative = arr2(&[[100.0], [-3.0]]);
        assert!(log_returns(&negative).is_err());
    }

    #[test]
    fn test_log_returns_needs_two_rows() {
        let single = arr2(&[[100.0, 100.0]]);
        let err = log_returns(&single).unwrap_err();
        assert_eq!(
            err,
            SimError::InsufficientSample {
                required: 2,
                actual: 1
            }
        );
    }
}
