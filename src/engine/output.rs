//! Output types for conditioning runs.
//!
//! ## Purpose
//!
//! This module defines [`ConditionResult`], which carries the fitted sequence,
//! the cleaned validity map and the bookkeeping of a single conditioning run.
//!
//! ## Design notes
//!
//! * **Optional fit**: `fitted` is `None` exactly when the input had no valid
//!   samples; every other input yields a full-length sequence.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `fitted`, when present, and `validity` have the input's length.
//! * `cleaned.good <= raw.good`.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Debug, Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::outlier::PassReport;
use crate::api::FilterMode;
use crate::primitives::sample::PointCounts;

// ============================================================================
// Fit Outcome
// ============================================================================

/// How the fitted sequence was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FitOutcome {
    /// No valid samples; nothing to display.
    NoData,

    /// A single valid sample; the output is its constant extrapolation.
    SinglePoint,

    /// The trend regression was singular; the output is gap-filled.
    DegenerateFit,

    /// Outlier rejection followed by gap filling.
    Interpolated,

    /// Too few valid samples for piecewise fitting; the output is gap-filled.
    BelowMinimum,

    /// Piecewise quadratic approximation.
    Piecewise,
}

// ============================================================================
// Result Structure
// ============================================================================

/// Output of one conditioning run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionResult<T> {
    /// Mode the run was configured with.
    pub mode: FilterMode,

    /// How the fitted sequence was produced.
    pub outcome: FitOutcome,

    /// Fitted sequence, `None` without valid samples.
    pub fitted: Option<Vec<T>>,

    /// Validity map after outlier rejection.
    pub validity: Vec<bool>,

    /// One report per completed outlier pass.
    pub passes: Vec<PassReport<T>>,

    /// Sample counts of the input validity map.
    pub raw_counts: PointCounts,

    /// Sample counts after outlier rejection.
    pub cleaned_counts: PointCounts,

    /// Number of slices of the piecewise fit (0 when not used).
    pub slice_count: usize,
}

impl<T> ConditionResult<T> {
    /// Whether the run produced no fitted sequence.
    pub fn is_empty(&self) -> bool {
        self.fitted.is_none()
    }

    /// Consume the result, keeping only the fitted sequence.
    pub fn into_fitted(self) -> Option<Vec<T>> {
        self.fitted
    }

    /// Number of samples invalidated by outlier rejection.
    pub fn rejected(&self) -> usize {
        self.raw_counts.good.saturating_sub(self.cleaned_counts.good)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for ConditionResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Mode:        {}", self.mode)?;
        writeln!(f, "  Outcome:     {:?}", self.outcome)?;
        writeln!(
            f,
            "  Points:      {} (good {}, bad {})",
            self.raw_counts.total, self.raw_counts.good, self.raw_counts.bad
        )?;
        writeln!(f, "  Rejected:    {}", self.rejected())?;
        if self.slice_count > 0 {
            writeln!(f, "  Slices:      {}", self.slice_count)?;
        }

        if !self.passes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Passes:")?;
            writeln!(f, "{:>12} {:>12} {:>10}", "Threshold", "Invalidated", "Remaining")?;
            writeln!(f, "  {}", "-".repeat(34))?;
            for pass in &self.passes {
                writeln!(
                    f,
                    "{:>12.6} {:>12} {:>10}",
                    pass.threshold, pass.invalidated, pass.remaining
                )?;
            }
        }

        Ok(())
    }
}
