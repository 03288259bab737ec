#![cfg(feature = "dev")]
//! Tests for the closed-form OLS solver.
//!
//! These tests verify:
//! - Exact coefficient recovery on noiseless data
//! - Exact interpolation when samples equal parameters
//! - Singular-design rejection for underdetermined and degenerate designs

use approx::assert_relative_eq;

use ols_rs::internals::algorithms::ols::OlsSolver;
use ols_rs::internals::primitives::errors::OlsError;
use ols_rs::internals::primitives::matrix::DesignMatrix;

// ============================================================================
// Recovery Tests
// ============================================================================

/// Noiseless data recovers the generating coefficients exactly.
#[test]
fn test_exact_recovery() {
    let features = vec![0.0, 0.25, 0.5, 0.75, 1.0];
    let design = DesignMatrix::from_feature_rows(features.clone(), 1, 5).unwrap();
    let response: Vec<f64> = features.iter().map(|&x| 2.0 * x + 1.0).collect();

    let beta = OlsSolver::fit(&design, &response).unwrap();
    assert_relative_eq!(beta[0], 2.0, epsilon = 1e-10);
    assert_relative_eq!(beta[1], 1.0, epsilon = 1e-10);
}

/// A two-feature model recovers all three parameters.
#[test]
fn test_exact_recovery_two_features() {
    // Samples (x1, x2): chosen to be affinely independent.
    let x = [
        (0.0, 0.0),
        (1.0, 0.0),
        (0.0, 1.0),
        (1.0, 1.0),
        (0.5, 0.25),
    ];
    let mut rows = Vec::new();
    for &(a, _) in &x {
        rows.push(a);
    }
    for &(_, b) in &x {
        rows.push(b);
    }
    let design = DesignMatrix::from_feature_rows(rows, 2, 5).unwrap();

    // y = 3 x1 - 2 x2 + 0.5
    let response: Vec<f64> = x.iter().map(|&(a, b)| 3.0 * a - 2.0 * b + 0.5).collect();

    let beta = OlsSolver::fit(&design, &response).unwrap();
    assert_relative_eq!(beta[0], 3.0, epsilon = 1e-9);
    assert_relative_eq!(beta[1], -2.0, epsilon = 1e-9);
    assert_relative_eq!(beta[2], 0.5, epsilon = 1e-9);
}

/// With samples == parameters and a full-rank design, the fit interpolates
/// the data exactly (zero residuals).
#[test]
fn test_exact_interpolation_at_minimum_samples() {
    let design = DesignMatrix::from_feature_rows(vec![0.2, 0.8], 1, 2).unwrap();
    let response = [5.0, -3.0];

    let beta = OlsSolver::fit(&design, &response).unwrap();
    let fitted = OlsSolver::predict(&design, &beta).unwrap();

    assert_relative_eq!(fitted[0], 5.0, epsilon = 1e-9);
    assert_relative_eq!(fitted[1], -3.0, epsilon = 1e-9);
}

/// An intercept-only design fits the response mean.
#[test]
fn test_intercept_only_fits_mean() {
    let design = DesignMatrix::<f64>::from_feature_rows(Vec::new(), 0, 4).unwrap();
    let response = [1.0, 2.0, 3.0, 6.0];

    let beta = OlsSolver::fit(&design, &response).unwrap();
    assert_eq!(beta.len(), 1);
    assert_relative_eq!(beta[0], 3.0, epsilon = 1e-10);
}

// ============================================================================
// Singularity Tests
// ============================================================================

/// Fewer samples than parameters is rejected, never silently solved.
#[test]
fn test_underdetermined_rejected() {
    let design = DesignMatrix::from_feature_rows(vec![0.5], 1, 1).unwrap();
    let err = OlsSolver::fit(&design, &[1.0]).unwrap_err();

    assert_eq!(
        err,
        OlsError::SingularDesignMatrix {
            samples: 1,
            parameters: 2,
        }
    );
}

/// A constant feature column duplicates the intercept and is rejected.
#[test]
fn test_degenerate_feature_rejected() {
    let design = DesignMatrix::from_feature_rows(vec![1.0, 1.0, 1.0], 1, 3).unwrap();
    let err = OlsSolver::fit(&design, &[1.0, 2.0, 3.0]).unwrap_err();

    assert_eq!(
        err,
        OlsError::SingularDesignMatrix {
            samples: 3,
            parameters: 2,
        }
    );
}

/// Two identical feature rows are rejected.
#[test]
fn test_duplicate_feature_rows_rejected() {
    let rows = vec![
        0.1, 0.4, 0.7, // feature 1
        0.1, 0.4, 0.7, // feature 2, identical
    ];
    let design = DesignMatrix::from_feature_rows(rows, 2, 3).unwrap();
    let err = OlsSolver::fit(&design, &[1.0, 2.0, 3.0]).unwrap_err();

    assert!(matches!(err, OlsError::SingularDesignMatrix { .. }));
}

// ============================================================================
// Input Checks
// ============================================================================

/// A response of the wrong length is rejected before solving.
#[test]
fn test_response_length_mismatch() {
    let design = DesignMatrix::from_feature_rows(vec![0.1, 0.2, 0.3], 1, 3).unwrap();
    let err = OlsSolver::fit(&design, &[1.0, 2.0]).unwrap_err();

    assert_eq!(err, OlsError::MismatchedInputs { x_len: 3, y_len: 2 });
}

/// Predict rejects coefficient vectors of the wrong length.
#[test]
fn test_predict_dimension_mismatch() {
    let design = DesignMatrix::from_feature_rows(vec![0.1, 0.2], 1, 2).unwrap();
    let err = OlsSolver::predict(&design, &[1.0, 2.0, 3.0]).unwrap_err();

    assert_eq!(
        err,
        OlsError::DimensionMismatch {
            expected: 2,
            got: 3,
        }
    );
}
