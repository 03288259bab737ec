//! Linear algebra backend abstraction for least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over linear algebra
//! operations, standardizing on the optimized nalgebra backend.
//!
//! ## Design notes
//!
//! * Solves the normal equations XᵀX β = Xᵀy by QR decomposition
//!   (Householder reflections) with an SVD fallback for near-singular
//!   systems.
//! * Rank detection runs on X itself, not on XᵀX, so degenerate designs
//!   (duplicate columns, fewer samples than parameters) are caught before
//!   squaring can hide them.
//! * Generic over `FloatLinalg` types (f32 and f64) which delegate to
//!   nalgebra.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + 'static {
    /// Solve the least-squares problem min ‖Xβ − y‖² via the normal
    /// equations, for a design stored column-major as `samples` rows by
    /// `parameters` columns.
    fn solve_least_squares(
        design: &[Self],
        samples: usize,
        parameters: usize,
        response: &[Self],
    ) -> Option<Vec<Self>>;

    /// Numerical column rank of the design matrix.
    fn design_rank(design: &[Self], samples: usize, parameters: usize) -> usize;
}

impl FloatLinalg for f64 {
    #[inline]
    fn solve_least_squares(
        design: &[Self],
        samples: usize,
        parameters: usize,
        response: &[Self],
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares_f64(design, samples, parameters, response)
    }

    #[inline]
    fn design_rank(design: &[Self], samples: usize, parameters: usize) -> usize {
        nalgebra_backend::design_rank_f64(design, samples, parameters)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn solve_least_squares(
        design: &[Self],
        samples: usize,
        parameters: usize,
        response: &[Self],
    ) -> Option<Vec<Self>> {
        nalgebra_backend::solve_least_squares_f32(design, samples, parameters, response)
    }

    #[inline]
    fn design_rank(design: &[Self], samples: usize, parameters: usize) -> usize {
        nalgebra_backend::design_rank_f32(design, samples, parameters)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based linear algebra operations.
pub mod nalgebra_backend {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    /// Solve the normal equations XᵀX β = Xᵀy using f64 precision.
    pub fn solve_least_squares_f64(
        design: &[f64],
        samples: usize,
        parameters: usize,
        response: &[f64],
    ) -> Option<Vec<f64>> {
        let x = DMatrix::from_column_slice(samples, parameters, design);
        let y = DVector::from_column_slice(response);

        let xt = x.transpose();
        let xtx = &xt * &x;
        let xty = &xt * &y;

        let qr = xtx.clone().qr();
        if let Some(solution) = qr.solve(&xty) {
            return Some(solution.as_slice().to_vec());
        }

        xtx.svd(true, true)
            .solve(&xty, f64::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f64>| s.as_slice().to_vec())
    }

    /// Numerical column rank of the design matrix using f64 precision.
    pub fn design_rank_f64(design: &[f64], samples: usize, parameters: usize) -> usize {
        let x = DMatrix::from_column_slice(samples, parameters, design);
        x.rank(f64::EPSILON * 100.0)
    }

    /// Solve the normal equations XᵀX β = Xᵀy using f32 precision.
    pub fn solve_least_squares_f32(
        design: &[f32],
        samples: usize,
        parameters: usize,
        response: &[f32],
    ) -> Option<Vec<f32>> {
        let x = DMatrix::from_column_slice(samples, parameters, design);
        let y = DVector::from_column_slice(response);

        let xt = x.transpose();
        let xtx = &xt * &x;
        let xty = &xt * &y;

        let qr = xtx.clone().qr();
        if let Some(solution) = qr.solve(&xty) {
            return Some(solution.as_slice().to_vec());
        }

        xtx.svd(true, true)
            .solve(&xty, f32::EPSILON * 100.0)
            .ok()
            .map(|s: DVector<f32>| s.as_slice().to_vec())
    }

    /// Numerical column rank of the design matrix using f32 precision.
    pub fn design_rank_f32(design: &[f32], samples: usize, parameters: usize) -> usize {
        let x = DMatrix::from_column_slice(samples, parameters, design);
        x.rank(f32::EPSILON * 100.0)
    }
}
