//! Design matrix storage and construction.
//!
//! ## Purpose
//!
//! This module provides [`DesignMatrix`], the predictor matrix used by the
//! fitter: one row per feature plus a trailing constant row of ones that
//! encodes the intercept term.
//!
//! ## Design notes
//!
//! * **Feature-major storage**: row `r`, sample `j` lives at
//!   `values[r * samples + j]`. This layout is simultaneously the
//!   column-major layout of the samples-by-parameters matrix X, so it feeds
//!   the linear algebra backend without a transpose copy.
//! * **Immutable**: a design matrix is fully formed at construction and
//!   never mutated afterwards.
//!
//! ## Invariants
//!
//! * The last row is constant 1 for every sample.
//! * `values.len() == (features + 1) * samples`.
//!
//! ## Non-goals
//!
//! * This module does not generate random features (see the synthesis
//!   algorithm) and does not solve anything (see the math layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::OlsError;

// ============================================================================
// Design Matrix
// ============================================================================

/// Predictor matrix of `features + 1` rows by `samples` columns.
///
/// Rows `0..features` hold predictor values; the final row is constant 1
/// (the intercept term).
#[derive(Debug, Clone, PartialEq)]
pub struct DesignMatrix<T> {
    /// Feature-major values, `(features + 1) * samples` long.
    values: Vec<T>,

    /// Number of predictor rows (excluding the intercept row).
    features: usize,

    /// Number of samples (columns).
    samples: usize,
}

impl<T: Float> DesignMatrix<T> {
    /// Build a design matrix from feature-major predictor rows.
    ///
    /// `feature_rows` holds `features * samples` values, row-contiguous;
    /// the intercept row of ones is appended internally.
    pub fn from_feature_rows(
        feature_rows: Vec<T>,
        features: usize,
        samples: usize,
    ) -> Result<Self, OlsError> {
        if samples == 0 {
            return Err(OlsError::InvalidSampleCount(samples));
        }
        if feature_rows.len() != features * samples {
            return Err(OlsError::DimensionMismatch {
                expected: features * samples,
                got: feature_rows.len(),
            });
        }

        let mut values = feature_rows;
        values.reserve_exact(samples);
        for _ in 0..samples {
            values.push(T::one());
        }

        Ok(Self {
            values,
            features,
            samples,
        })
    }

    /// Build a design matrix from sample-major observations.
    ///
    /// `x` is flattened as `[x1_0, x2_0, ..., x1_1, x2_1, ...]` with
    /// `dimensions` predictor values per sample, the convention used by
    /// the fitting API.
    pub fn from_observations(
        x: &[T],
        dimensions: usize,
        samples: usize,
    ) -> Result<Self, OlsError> {
        if x.len() != dimensions * samples {
            return Err(OlsError::MismatchedInputs {
                x_len: x.len(),
                y_len: samples,
            });
        }

        // Transpose sample-major input into feature-major rows.
        let mut rows = Vec::with_capacity(dimensions * samples);
        for d in 0..dimensions {
            for j in 0..samples {
                rows.push(x[j * dimensions + d]);
            }
        }

        Self::from_feature_rows(rows, dimensions, samples)
    }

    /// Number of samples (columns).
    #[inline]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Number of predictor rows, excluding the intercept row.
    #[inline]
    pub fn features(&self) -> usize {
        self.features
    }

    /// Number of model parameters, `features + 1`.
    #[inline]
    pub fn parameters(&self) -> usize {
        self.features + 1
    }

    /// Feature-major values, `(features + 1) * samples` long.
    ///
    /// This slice is also the column-major layout of the
    /// samples-by-parameters matrix X.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// One predictor row (or the intercept row at index `features`).
    #[inline]
    pub fn row(&self, r: usize) -> &[T] {
        &self.values[r * self.samples..(r + 1) * self.samples]
    }

    /// Value at row `r`, sample `j`.
    #[inline]
    pub fn value(&self, r: usize, j: usize) -> T {
        self.values[r * self.samples + j]
    }

    /// Dot product of sample `j` with a parameter vector.
    ///
    /// Returns `DimensionMismatch` when `beta.len() != features + 1`.
    pub fn sample_dot(&self, j: usize, beta: &[T]) -> Result<T, OlsError> {
        if beta.len() != self.parameters() {
            return Err(OlsError::DimensionMismatch {
                expected: self.parameters(),
                got: beta.len(),
            });
        }

        let mut acc = T::zero();
        for (r, &b) in beta.iter().enumerate() {
            acc = acc + self.value(r, j) * b;
        }
        Ok(acc)
    }
}
