//! Ordinary least squares fitting.
//!
//! ## Purpose
//!
//! This module computes the closed-form least-squares coefficient estimate
//! for a design matrix and response vector, and evaluates fitted values for
//! a coefficient vector.
//!
//! ## Design notes
//!
//! * **Normal equations**: the estimate solves XᵀX β = Xᵀy through the
//!   linear algebra backend (QR with SVD fallback).
//! * **Singular designs are rejected**: rank deficiency (fewer samples
//!   than parameters, or duplicate/degenerate feature columns) fails with
//!   `SingularDesignMatrix` rather than silently returning a pseudo-inverse
//!   solution of unspecified precision.
//!
//! ## Invariants
//!
//! * A returned coefficient vector always has length `features + 1`.
//!
//! ## Non-goals
//!
//! * No iterative or regularized solvers.
//! * No robustness weighting; every sample has unit weight.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::math::linalg::FloatLinalg;
use crate::primitives::errors::OlsError;
use crate::primitives::matrix::DesignMatrix;

// ============================================================================
// OLS Solver
// ============================================================================

/// Closed-form ordinary least squares solver.
pub struct OlsSolver;

impl OlsSolver {
    /// Estimate coefficients minimizing the sum of squared residuals.
    ///
    /// The design must have full column rank: at least `features + 1`
    /// samples, with no degenerate feature columns. Rank is checked
    /// numerically on X itself before solving, so a rank-deficient design
    /// fails with [`OlsError::SingularDesignMatrix`] instead of producing
    /// an arbitrary solution.
    pub fn fit<T: FloatLinalg>(
        design: &DesignMatrix<T>,
        response: &[T],
    ) -> Result<Vec<T>, OlsError> {
        let n = design.samples();
        let p = design.parameters();

        if response.len() != n {
            return Err(OlsError::MismatchedInputs {
                x_len: n,
                y_len: response.len(),
            });
        }

        // Underdetermined systems can never have full column rank.
        if n < p {
            return Err(OlsError::SingularDesignMatrix {
                samples: n,
                parameters: p,
            });
        }

        if T::design_rank(design.values(), n, p) < p {
            return Err(OlsError::SingularDesignMatrix {
                samples: n,
                parameters: p,
            });
        }

        T::solve_least_squares(design.values(), n, p, response).ok_or(
            OlsError::SingularDesignMatrix {
                samples: n,
                parameters: p,
            },
        )
    }

    /// Fitted values: the design matrix applied to a coefficient vector,
    /// one scalar per sample.
    pub fn predict<T: FloatLinalg>(
        design: &DesignMatrix<T>,
        coefficients: &[T],
    ) -> Result<Vec<T>, OlsError> {
        let n = design.samples();
        let mut fitted = Vec::with_capacity(n);
        for j in 0..n {
            fitted.push(design.sample_dot(j, coefficients)?);
        }
        Ok(fitted)
    }
}
