//! Result types and plot-ready output.
//!
//! ## Purpose
//!
//! This module defines the observable outputs of the pipeline: the fit
//! result, the combined synthetic-study outcome, and a plot-ready view for
//! external visualization consumers.
//!
//! ## Design notes
//!
//! * **Display**: results render as a summary plus an aligned table, so a
//!   quick `println!("{}", result)` shows the whole fit.
//! * **Rendering stays external**: [`PlotData`] carries everything a
//!   plotting tool needs (points, fitted-line endpoints, residuals) and can
//!   serialize itself to CSV, but this crate never draws.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::synthesis::SyntheticData;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::stats::VarianceEstimator;

// ============================================================================
// Fit Result
// ============================================================================

/// Result of one ordinary least squares fit.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsResult<T> {
    /// Estimated coefficients, feature coefficients first, intercept last.
    pub coefficients: Vec<T>,

    /// Fitted values, one per sample.
    pub fitted: Vec<T>,

    /// Residuals (observed minus fitted), one per sample.
    pub residuals: Vec<T>,

    /// Variance estimator used for any diagnostics.
    pub variance_estimator: VarianceEstimator,

    /// Diagnostic summary, present when requested.
    pub diagnostics: Option<Diagnostics<T>>,
}

impl<T: Copy + fmt::Display> fmt::Display for OlsResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Samples: {}", self.fitted.len())?;
        writeln!(f, "  Parameters: {}", self.coefficients.len())?;
        writeln!(f)?;

        writeln!(f, "Coefficients (intercept last):")?;
        for (i, c) in self.coefficients.iter().enumerate() {
            writeln!(f, "  beta[{}] = {:.5}", i, c)?;
        }

        if let Some(diag) = &self.diagnostics {
            writeln!(f)?;
            writeln!(f, "Diagnostics:")?;
            writeln!(f, "  R^2:          {:.6}", diag.r_squared)?;
            writeln!(f, "  RMSE:         {:.6}", diag.rmse)?;
            writeln!(f, "  MAE:          {:.6}", diag.mae)?;
            writeln!(f, "  Residual SD:  {:.6}", diag.residual_sd)?;
        }

        writeln!(f)?;
        writeln!(f, "Fitted Data:")?;
        writeln!(f, "  {:>12} {:>12}", "Fitted", "Residual")?;
        writeln!(f, "  -------------------------")?;
        for (fit, res) in self.fitted.iter().zip(self.residuals.iter()) {
            writeln!(f, "  {:>12.5} {:>12.5}", fit, res)?;
        }

        Ok(())
    }
}

// ============================================================================
// Study Outcome
// ============================================================================

/// Outcome of a synthetic study: the generated data and its fit.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyOutcome<T> {
    /// Generated design matrix and response vector.
    pub data: SyntheticData<T>,

    /// Fit of the generated data.
    pub result: OlsResult<T>,
}

impl<T: Float> StudyOutcome<T> {
    /// Plot-ready view of a single-feature study.
    ///
    /// Returns `None` when the study has zero or several features; a
    /// scatter-plus-line plot is only meaningful in one dimension.
    pub fn plot_data(&self) -> Option<PlotData<T>> {
        if self.data.design.features() != 1 {
            return None;
        }

        let features = self.data.design.row(0).to_vec();
        let slope = self.result.coefficients[0];
        let intercept = self.result.coefficients[1];

        let mut x_min = T::infinity();
        let mut x_max = T::neg_infinity();
        for &x in &features {
            if x < x_min {
                x_min = x;
            }
            if x > x_max {
                x_max = x;
            }
        }

        Some(PlotData {
            features,
            response: self.data.response.clone(),
            fitted: self.result.fitted.clone(),
            residuals: self.result.residuals.clone(),
            line: [
                (x_min, slope * x_min + intercept),
                (x_max, slope * x_max + intercept),
            ],
        })
    }
}

// ============================================================================
// Plot Data
// ============================================================================

/// Everything an external plotting consumer needs for one 1-D study.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData<T> {
    /// Feature values, one per sample.
    pub features: Vec<T>,

    /// Observed responses, one per sample.
    pub response: Vec<T>,

    /// Fitted values, one per sample.
    pub fitted: Vec<T>,

    /// Residuals, one per sample.
    pub residuals: Vec<T>,

    /// Fitted line endpoints at the feature range extremes.
    pub line: [(T, T); 2],
}

#[cfg(feature = "std")]
impl<T: Copy + fmt::Display> PlotData<T> {
    /// Write the per-sample columns as CSV (`x,y,y_fitted,residual`).
    pub fn write_csv<W: std::io::Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writeln!(writer, "x,y,y_fitted,residual")?;
        for j in 0..self.features.len() {
            writeln!(
                writer,
                "{},{},{},{}",
                self.features[j], self.response[j], self.fitted[j], self.residuals[j]
            )?;
        }
        Ok(())
    }
}
