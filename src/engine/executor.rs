//! Execution engine for path conditioning.
//!
//! ## Purpose
//!
//! This module provides the engine that orchestrates one conditioning run. It
//! sanitizes the validity map, runs the outlier filter and, depending on the
//! filter mode, finishes with gap interpolation or piecewise approximation.
//!
//! ## Design notes
//!
//! * **Configuration-based**: All tunables arrive through [`ConditionConfig`],
//!   already validated by the caller.
//! * **Sanitization**: Valid samples with non-finite values are demoted to
//!   invalid before any fitting.
//! * **Shared first stage**: Both modes start from the outlier filter; the
//!   approximate mode hands its cleaned validity to the piecewise stage.
//!
//! ## Key concepts
//!
//! ```text
//! validity ──► demote non-finite ──► outlier filter ──► Diff:        gap fill
//!                                                   └─► Approximate: piecewise fit
//! ```
//!
//! ## Invariants
//!
//! * The caller's arrays are never modified.
//! * The result's `validity` has the input's length.
//!
//! ## Non-goals
//!
//! * This module does not validate configuration (handled by `validator`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, warn};

// Internal dependencies
use crate::algorithms::outlier::{DiffTermination, OutlierDiffFilter};
use crate::algorithms::piecewise::PiecewiseApproximator;
use crate::algorithms::regression::QuadraticRegressor;
use crate::algorithms::smoothing::WindowedMedianSmoother;
use crate::api::FilterMode;
use crate::engine::output::{ConditionResult, FitOutcome};
use crate::math::linalg::{FloatLinalg, SingularityCheck};
use crate::primitives::sample::{PointCounts, aligned_validity, demote_non_finite};

// ============================================================================
// Configuration
// ============================================================================

/// Complete configuration of one conditioning run.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionConfig<T> {
    /// Post-processing mode.
    pub mode: FilterMode,

    /// Base outlier threshold.
    pub base_threshold: T,

    /// Schedule multipliers applied to `base_threshold`, in order.
    pub multipliers: Vec<T>,

    /// Minimum valid samples for piecewise fitting.
    pub count_min: usize,

    /// Valid samples per slice.
    pub slice_size: usize,

    /// Valid samples shared by adjacent slices.
    pub overlap_size: usize,

    /// Pre-smoothing window size.
    pub window_size: usize,

    /// Singularity test for every regression.
    pub singularity: SingularityCheck,

    /// Maximum accepted sequence length.
    pub max_points: Option<usize>,
}

impl<T: FloatLinalg> Default for ConditionConfig<T> {
    fn default() -> Self {
        let filter = OutlierDiffFilter::<T>::default();
        Self {
            mode: FilterMode::default(),
            base_threshold: filter.base_threshold(),
            multipliers: OutlierDiffFilter::<T>::DEFAULT_MULTIPLIERS
                .iter()
                .map(|&m| T::from(m).unwrap_or_else(T::one))
                .collect(),
            count_min: PiecewiseApproximator::DEFAULT_COUNT_MIN,
            slice_size: PiecewiseApproximator::DEFAULT_SLICE_SIZE,
            overlap_size: PiecewiseApproximator::DEFAULT_OVERLAP_SIZE,
            window_size: WindowedMedianSmoother::DEFAULT_WINDOW,
            singularity: SingularityCheck::default(),
            max_points: None,
        }
    }
}

impl<T: FloatLinalg> ConditionConfig<T> {
    /// Outlier filter described by this configuration.
    pub fn outlier_filter(&self) -> OutlierDiffFilter<T> {
        OutlierDiffFilter::new(self.base_threshold)
            .with_multipliers(self.multipliers.clone())
            .with_regressor(self.regressor())
    }

    /// Piecewise approximator described by this configuration.
    pub fn approximator(&self) -> PiecewiseApproximator {
        PiecewiseApproximator::new(self.count_min, self.slice_size, self.overlap_size)
            .with_smoother(WindowedMedianSmoother::new(self.window_size))
            .with_regressor(self.regressor())
    }

    fn regressor(&self) -> QuadraticRegressor {
        QuadraticRegressor::with_singularity_check(self.singularity)
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Orchestrator of a conditioning run.
pub struct ConditionExecutor;

impl ConditionExecutor {
    /// Condition a sequence under `config`.
    ///
    /// `validity` may be shorter than `values`; missing entries count as invalid.
    pub fn run<T: FloatLinalg>(
        values: &[T],
        validity: &[bool],
        config: &ConditionConfig<T>,
    ) -> ConditionResult<T> {
        let mut status = aligned_validity(validity, values.len());
        let demoted = demote_non_finite(values, &mut status);
        if demoted > 0 {
            warn!("Demoted {} valid samples with non-finite values", demoted);
        }
        let raw_counts = PointCounts::from_validity(&status);

        debug!(
            "Conditioning {} points ({} valid) in {} mode",
            raw_counts.total, raw_counts.good, config.mode
        );

        let diff = config.outlier_filter().filter(values, &status);
        let cleaned_counts = PointCounts::from_validity(&diff.validity);

        let mut result = ConditionResult {
            mode: config.mode,
            outcome: FitOutcome::NoData,
            fitted: None,
            validity: diff.validity,
            passes: diff.passes,
            raw_counts,
            cleaned_counts,
            slice_count: 0,
        };

        if diff.termination == DiffTermination::NoData {
            return result;
        }

        match config.mode {
            FilterMode::Diff => {
                result.outcome = match diff.termination {
                    DiffTermination::SinglePoint => FitOutcome::SinglePoint,
                    DiffTermination::DegenerateFit => FitOutcome::DegenerateFit,
                    _ => FitOutcome::Interpolated,
                };
                result.fitted = diff.interpolated;
            }
            FilterMode::Approximate => {
                let piecewise = config.approximator().approximate(values, &result.validity);
                result.outcome = if piecewise.below_minimum {
                    FitOutcome::BelowMinimum
                } else {
                    FitOutcome::Piecewise
                };
                result.slice_count = piecewise.slices.len();
                result.fitted = Some(piecewise.fitted);
            }
        }

        result
    }
}
