#![cfg(feature = "dev")]
//! Tests for the mean and variance estimators.
//!
//! These tests verify:
//! - Basic mean computation and edge cases
//! - Population vs sample variance divisors
//! - Scale behavior and degenerate inputs

use approx::assert_relative_eq;

use ols_rs::internals::math::stats::{mean, VarianceEstimator};

// ============================================================================
// Mean Tests
// ============================================================================

/// Mean of a simple sequence.
#[test]
fn test_mean_basic() {
    assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]), 2.5);
}

/// Mean of an empty slice is zero.
#[test]
fn test_mean_empty() {
    assert_relative_eq!(mean::<f64>(&[]), 0.0);
}

/// Mean with mixed signs.
#[test]
fn test_mean_mixed_signs() {
    assert_relative_eq!(mean(&[-10.0, 0.0, 10.0]), 0.0);
}

// ============================================================================
// Variance Tests
// ============================================================================

/// Population variance divides by n.
///
/// Data [1, 2, 3, 4]: mean 2.5, squared deviations sum 5.0, variance 1.25.
#[test]
fn test_population_variance() {
    let v = VarianceEstimator::Population.variance(&[1.0, 2.0, 3.0, 4.0]);
    assert_relative_eq!(v, 1.25);
}

/// Sample variance divides by n - 1.
///
/// Same data: 5.0 / 3 = 1.666...
#[test]
fn test_sample_variance() {
    let v = VarianceEstimator::Sample.variance(&[1.0, 2.0, 3.0, 4.0]);
    assert_relative_eq!(v, 5.0 / 3.0);
}

/// Identical values have zero variance under both estimators.
#[test]
fn test_variance_constant_values() {
    let data = [5.0, 5.0, 5.0];
    assert_relative_eq!(VarianceEstimator::Population.variance(&data), 0.0);
    assert_relative_eq!(VarianceEstimator::Sample.variance(&data), 0.0);
}

/// Variance scales quadratically: Var(k * X) = k^2 * Var(X).
#[test]
fn test_variance_scale() {
    let data = [1.0, 2.0, 3.0, 4.0, 5.0];
    let scaled = [10.0, 20.0, 30.0, 40.0, 50.0];

    let v = VarianceEstimator::Population.variance(&data);
    let v_scaled = VarianceEstimator::Population.variance(&scaled);
    assert_relative_eq!(v_scaled, 100.0 * v);
}

/// Degenerate lengths yield zero instead of dividing by zero.
#[test]
fn test_variance_degenerate_lengths() {
    assert_relative_eq!(VarianceEstimator::Population.variance::<f64>(&[]), 0.0);
    assert_relative_eq!(VarianceEstimator::Sample.variance(&[3.0]), 0.0);
}

/// Standard deviation is the square root of the variance.
#[test]
fn test_std_dev() {
    let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
    // Population variance of this classic example is 4.
    assert_relative_eq!(VarianceEstimator::Population.std_dev(&data), 2.0);
}

/// The default estimator is population variance.
#[test]
fn test_default_estimator() {
    assert_eq!(VarianceEstimator::default(), VarianceEstimator::Population);
}
