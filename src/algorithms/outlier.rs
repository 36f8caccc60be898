//! Step-deviation outlier rejection.
//!
//! ## Purpose
//!
//! This module flags samples whose step from the previous sample is larger
//! than a threshold, treating sharp jumps as sensor or transmission errors
//! rather than true path shape. Invalid samples are advanced along the slope of
//! a global quadratic trend so a run of missing data does not read as a jump.
//!
//! ## Design notes
//!
//! * **Schedule**: Passes run over a shrinking list of thresholds, by default
//!   `{10, 3, 1} × base_threshold`. Each pass starts from the validity left by
//!   the previous one.
//! * **Trend**: Every pass refits the quadratic over the currently valid points.
//! * **Propagation**: The running reference `y0` follows the observed value at
//!   valid samples and `y0 + f(i) - f(i-1)` at invalid ones.
//! * **Graceful degradation**: A pass that would leave no valid samples is
//!   rolled back and the schedule stops.
//!
//! ## Key concepts
//!
//! For each `i >= 1`:
//! ```text
//! y1 = valid(i) ? value(i) : y0 + f(i) - f(i - 1)
//! |y1 - y0| > threshold  =>  valid(i) = false
//! y0 = y1
//! ```
//!
//! ## Invariants
//!
//! * Index 0 is never invalidated by a pass.
//! * Validity only ever moves from valid to invalid.
//! * The output validity map has the same length as the value array.
//!
//! ## Non-goals
//!
//! * This module does not restore samples flagged by an earlier pass.
//! * This module does not perform the piecewise fit.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, warn};

// Internal dependencies
use crate::algorithms::interpolation::GapInterpolator;
use crate::algorithms::regression::QuadraticRegressor;
use crate::math::linalg::FloatLinalg;
use crate::math::polynomial::Quadratic;
use crate::primitives::sample::{aligned_validity, collect_points, count_valid, position};

// ============================================================================
// Pass Reporting
// ============================================================================

/// Summary of one outlier pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassReport<T> {
    /// Threshold used by the pass.
    pub threshold: T,

    /// Number of valid samples the pass invalidated.
    pub invalidated: usize,

    /// Number of valid samples after the pass.
    pub remaining: usize,
}

/// Why the threshold schedule stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiffTermination {
    /// Every pass of the schedule ran.
    #[default]
    Completed,

    /// There were no valid samples to start from.
    NoData,

    /// Only one valid sample remained, no trend can be fitted.
    SinglePoint,

    /// The trend regression was singular.
    DegenerateFit,

    /// A pass invalidated every remaining sample and was rolled back.
    Exhausted,
}

/// Output of the outlier filter.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffFilterOutput<T> {
    /// Cleaned validity map.
    pub validity: Vec<bool>,

    /// Gap-filled sequence under the cleaned validity, `None` without data.
    pub interpolated: Option<Vec<T>>,

    /// One report per completed pass.
    pub passes: Vec<PassReport<T>>,

    /// Why the schedule stopped.
    pub termination: DiffTermination,
}

// ============================================================================
// Outlier Diff Filter
// ============================================================================

/// Iterative step-deviation outlier filter.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierDiffFilter<T> {
    base_threshold: T,
    multipliers: Vec<T>,
    regressor: QuadraticRegressor,
}

impl<T: FloatLinalg> Default for OutlierDiffFilter<T> {
    fn default() -> Self {
        Self::new(T::from(Self::DEFAULT_BASE_THRESHOLD).unwrap_or_else(T::one))
    }
}

impl<T: FloatLinalg> OutlierDiffFilter<T> {
    /// Default base threshold.
    pub const DEFAULT_BASE_THRESHOLD: f64 = 0.1;

    /// Default schedule multipliers, applied in order.
    pub const DEFAULT_MULTIPLIERS: [f64; 3] = [10.0, 3.0, 1.0];

    /// Create a filter with the default `{10, 3, 1}` schedule.
    pub fn new(base_threshold: T) -> Self {
        let multipliers = Self::DEFAULT_MULTIPLIERS
            .iter()
            .map(|&m| T::from(m).unwrap_or_else(T::one))
            .collect();
        Self {
            base_threshold,
            multipliers,
            regressor: QuadraticRegressor::default(),
        }
    }

    /// Replace the schedule multipliers.
    pub fn with_multipliers(mut self, multipliers: Vec<T>) -> Self {
        self.multipliers = multipliers;
        self
    }

    /// Replace the trend regressor.
    pub fn with_regressor(mut self, regressor: QuadraticRegressor) -> Self {
        self.regressor = regressor;
        self
    }

    /// Base threshold.
    pub fn base_threshold(&self) -> T {
        self.base_threshold
    }

    /// Thresholds of the schedule, in the order the passes use them.
    pub fn thresholds(&self) -> impl Iterator<Item = T> + '_ {
        self.multipliers.iter().map(move |&m| m * self.base_threshold)
    }

    /// Run the full schedule over a sequence.
    pub fn filter(&self, values: &[T], validity: &[bool]) -> DiffFilterOutput<T> {
        let mut status = aligned_validity(validity, values.len());
        let mut passes = Vec::with_capacity(self.multipliers.len());
        let mut termination = DiffTermination::Completed;

        for threshold in self.thresholds() {
            let points = collect_points(values, &status);
            match points.len() {
                0 => {
                    termination = if passes.is_empty() {
                        DiffTermination::NoData
                    } else {
                        DiffTermination::Exhausted
                    };
                    break;
                }
                1 => {
                    termination = DiffTermination::SinglePoint;
                    break;
                }
                _ => {}
            }

            let Some(trend) = self.regressor.fit(&points) else {
                warn!(
                    "Degenerate trend fit over {} points; skipping remaining passes",
                    points.len()
                );
                termination = DiffTermination::DegenerateFit;
                break;
            };

            let snapshot = status.clone();
            let invalidated = Self::walk(values, &mut status, &trend, threshold);
            let remaining = count_valid(&status);

            debug!(
                "Outlier pass: threshold={:?}, invalidated={}, remaining={}",
                threshold, invalidated, remaining
            );

            if remaining == 0 {
                status = snapshot;
                termination = DiffTermination::Exhausted;
                break;
            }

            passes.push(PassReport {
                threshold,
                invalidated,
                remaining,
            });
        }

        let interpolated = match termination {
            DiffTermination::NoData => None,
            _ => Some(GapInterpolator::fill(values, &status)),
        };

        DiffFilterOutput {
            validity: status,
            interpolated,
            passes,
            termination,
        }
    }

    /// Walk the sequence once, invalidating samples whose step exceeds `threshold`.
    ///
    /// Returns the number of samples that changed from valid to invalid.
    pub fn walk(values: &[T], status: &mut [bool], trend: &Quadratic<T>, threshold: T) -> usize {
        let n = values.len().min(status.len());
        if n == 0 {
            return 0;
        }

        let mut y0 = if status[0] {
            values[0]
        } else {
            trend.evaluate(T::zero())
        };
        let mut invalidated = 0;

        for i in 1..n {
            let y1 = if status[i] {
                values[i]
            } else {
                y0 + trend.evaluate(position(i)) - trend.evaluate(position(i - 1))
            };

            if (y1 - y0).abs() > threshold && status[i] {
                status[i] = false;
                invalidated += 1;
            }

            y0 = y1;
        }

        invalidated
    }
}
