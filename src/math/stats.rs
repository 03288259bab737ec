//! Mean and variance estimators.
//!
//! ## Purpose
//!
//! This module provides the scalar statistics the diagnostics layer is
//! built from: the arithmetic mean and a selectable variance estimator.
//!
//! ## Key concepts
//!
//! * **Estimator consistency**: the diagnostics layer divides a residual
//!   variance by a response variance; both must come from the same
//!   [`VarianceEstimator`] or the ratio is biased.

// External dependencies
use num_traits::Float;

// ============================================================================
// Mean
// ============================================================================

/// Arithmetic mean of a slice. Returns zero for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> T {
    if values.is_empty() {
        return T::zero();
    }
    let sum = values.iter().fold(T::zero(), |acc, &v| acc + v);
    sum / T::from(values.len()).unwrap()
}

// ============================================================================
// Variance Estimator
// ============================================================================

/// Variance estimator used for residual and response variances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VarianceEstimator {
    /// Population variance: divide by n (default).
    #[default]
    Population,

    /// Sample variance: divide by n - 1.
    Sample,
}

impl VarianceEstimator {
    /// Variance of a slice under this estimator.
    ///
    /// Returns zero when the slice has fewer values than the estimator's
    /// divisor allows (empty for `Population`, fewer than 2 for `Sample`).
    pub fn variance<T: Float>(&self, values: &[T]) -> T {
        let n = values.len();
        let divisor = match self {
            VarianceEstimator::Population => n,
            VarianceEstimator::Sample => n.saturating_sub(1),
        };
        if divisor == 0 {
            return T::zero();
        }

        let m = mean(values);
        let ss = values
            .iter()
            .fold(T::zero(), |acc, &v| acc + (v - m) * (v - m));
        ss / T::from(divisor).unwrap()
    }

    /// Standard deviation of a slice under this estimator.
    #[inline]
    pub fn std_dev<T: Float>(&self, values: &[T]) -> T {
        self.variance(values).sqrt()
    }
}
