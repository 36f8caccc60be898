//! High-level API for path conditioning.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the outlier schedule and piecewise fit, an
//! options record for persisted per-axis settings, and the one-call
//! [`condition`] function.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Stateless**: A built [`PathConditioner`] is immutable and can be reused
//!   for any number of sequences.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`ConditionerBuilder`] via `Conditioner::new()`.
//! 2. Chain configuration methods (`.mode()`, `.base_threshold()`, etc.).
//! 3. Call `.build()` and run the conditioner on each sequence.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::ToString;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;

// Internal dependencies
use crate::engine::executor::ConditionExecutor;
use crate::engine::validator::Validator;
use crate::primitives::sample::split_samples;

// Publicly re-exported types
pub use crate::adapters::upload::{UploadFrame, WriteSource, pack_validity, unpack_validity};
pub use crate::algorithms::interpolation::GapInterpolator;
pub use crate::algorithms::outlier::{
    DiffFilterOutput, DiffTermination, OutlierDiffFilter, PassReport,
};
pub use crate::algorithms::piecewise::{PiecewiseApproximator, PiecewiseOutput, Slice, SlicePlan};
pub use crate::algorithms::regression::QuadraticRegressor;
pub use crate::algorithms::smoothing::WindowedMedianSmoother;
pub use crate::engine::executor::ConditionConfig;
pub use crate::engine::output::{ConditionResult, FitOutcome};
pub use crate::math::linalg::{FloatLinalg, SingularityCheck};
pub use crate::math::polynomial::Quadratic;
pub use crate::primitives::errors::PathError;
pub use crate::primitives::sample::{PointCounts, Sample};

// ============================================================================
// Filter Mode
// ============================================================================

/// Post-processing applied after outlier rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FilterMode {
    /// Outlier rejection followed by gap interpolation.
    #[default]
    Diff,

    /// Outlier rejection followed by piecewise quadratic approximation.
    Approximate,
}

impl FromStr for FilterMode {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "default" | "diff" => Ok(FilterMode::Diff),
            "approximate" => Ok(FilterMode::Approximate),
            other => Err(PathError::UnknownMode(other.to_string())),
        }
    }
}

impl Display for FilterMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FilterMode::Diff => write!(f, "diff"),
            FilterMode::Approximate => write!(f, "approximate"),
        }
    }
}

// ============================================================================
// Options Record
// ============================================================================

/// Persisted per-axis filter settings.
///
/// Every field is optional; unset fields keep the builder defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ConditionOptions {
    /// Base outlier threshold.
    pub base_threshold: Option<f64>,

    /// Minimum valid samples for piecewise fitting.
    pub count_min: Option<usize>,

    /// Valid samples per slice.
    pub slice_size: Option<usize>,

    /// Valid samples shared by adjacent slices.
    pub overlap_size: Option<usize>,
}

impl ConditionOptions {
    /// Options with only the base threshold set.
    pub fn with_base_threshold(base_threshold: f64) -> Self {
        Self {
            base_threshold: Some(base_threshold),
            ..Self::default()
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring path conditioning.
#[derive(Debug, Clone)]
pub struct ConditionerBuilder<T: FloatLinalg> {
    /// Post-processing mode (default: Diff).
    pub mode: Option<FilterMode>,

    /// Base outlier threshold (default: 0.1).
    pub base_threshold: Option<T>,

    /// Schedule multipliers (default: [10, 3, 1]).
    pub multipliers: Option<Vec<T>>,

    /// Minimum valid samples for piecewise fitting (default: 50).
    pub count_min: Option<usize>,

    /// Valid samples per slice (default: 200).
    pub slice_size: Option<usize>,

    /// Valid samples shared by adjacent slices (default: 100).
    pub overlap_size: Option<usize>,

    /// Pre-smoothing window size (default: 33).
    pub window_size: Option<usize>,

    /// Singularity test for regressions (default: Exact).
    pub singularity: Option<SingularityCheck>,

    /// Maximum accepted sequence length (default: unlimited).
    pub max_points: Option<usize>,

    /// Deferred error from option conversion.
    #[doc(hidden)]
    pub deferred_error: Option<PathError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg> Default for ConditionerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg> ConditionerBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            mode: None,
            base_threshold: None,
            multipliers: None,
            count_min: None,
            slice_size: None,
            overlap_size: None,
            window_size: None,
            singularity: None,
            max_points: None,
            deferred_error: None,
            duplicate_param: None,
        }
    }

    /// Create a builder from a persisted options record.
    pub fn from_options(options: &ConditionOptions) -> Self {
        let mut builder = Self::new();
        if let Some(threshold) = options.base_threshold {
            match T::from(threshold) {
                Some(t) => builder = builder.base_threshold(t),
                None => builder.deferred_error = Some(PathError::InvalidThreshold(threshold)),
            }
        }
        if let Some(count) = options.count_min {
            builder = builder.count_min(count);
        }
        if let Some(size) = options.slice_size {
            builder = builder.slice_size(size);
        }
        if let Some(size) = options.overlap_size {
            builder = builder.overlap_size(size);
        }
        builder
    }

    /// Set the post-processing mode.
    pub fn mode(mut self, mode: FilterMode) -> Self {
        if self.mode.is_some() {
            self.duplicate_param = Some("mode");
        }
        self.mode = Some(mode);
        self
    }

    /// Set the base outlier threshold.
    pub fn base_threshold(mut self, threshold: T) -> Self {
        if self.base_threshold.is_some() {
            self.duplicate_param = Some("base_threshold");
        }
        self.base_threshold = Some(threshold);
        self
    }

    /// Set the threshold schedule multipliers, applied in order.
    pub fn schedule(mut self, multipliers: &[T]) -> Self {
        if self.multipliers.is_some() {
            self.duplicate_param = Some("schedule");
        }
        self.multipliers = Some(multipliers.to_vec());
        self
    }

    /// Set the minimum valid samples for piecewise fitting.
    pub fn count_min(mut self, count: usize) -> Self {
        if self.count_min.is_some() {
            self.duplicate_param = Some("count_min");
        }
        self.count_min = Some(count);
        self
    }

    /// Set the valid samples per slice.
    pub fn slice_size(mut self, size: usize) -> Self {
        if self.slice_size.is_some() {
            self.duplicate_param = Some("slice_size");
        }
        self.slice_size = Some(size);
        self
    }

    /// Set the valid samples shared by adjacent slices.
    pub fn overlap_size(mut self, size: usize) -> Self {
        if self.overlap_size.is_some() {
            self.duplicate_param = Some("overlap_size");
        }
        self.overlap_size = Some(size);
        self
    }

    /// Set the pre-smoothing window size.
    pub fn window_size(mut self, size: usize) -> Self {
        if self.window_size.is_some() {
            self.duplicate_param = Some("window_size");
        }
        self.window_size = Some(size);
        self
    }

    /// Set the singularity test used by every regression.
    pub fn singularity_check(mut self, check: SingularityCheck) -> Self {
        if self.singularity.is_some() {
            self.duplicate_param = Some("singularity_check");
        }
        self.singularity = Some(check);
        self
    }

    /// Reject sequences longer than `max` samples.
    pub fn max_points(mut self, max: usize) -> Self {
        if self.max_points.is_some() {
            self.duplicate_param = Some("max_points");
        }
        self.max_points = Some(max);
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Build the conditioner.
    pub fn build(self) -> Result<PathConditioner<T>, PathError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }

        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = ConditionConfig::<T>::default();
        let config = ConditionConfig {
            mode: self.mode.unwrap_or(defaults.mode),
            base_threshold: self.base_threshold.unwrap_or(defaults.base_threshold),
            multipliers: self.multipliers.unwrap_or(defaults.multipliers),
            count_min: self.count_min.unwrap_or(defaults.count_min),
            slice_size: self.slice_size.unwrap_or(defaults.slice_size),
            overlap_size: self.overlap_size.unwrap_or(defaults.overlap_size),
            window_size: self.window_size.unwrap_or(defaults.window_size),
            singularity: self.singularity.unwrap_or(defaults.singularity),
            max_points: self.max_points,
        };

        Validator::validate_threshold(config.base_threshold)?;
        Validator::validate_schedule(&config.multipliers)?;
        Validator::validate_slicing(config.slice_size, config.overlap_size)?;
        Validator::validate_window(config.window_size)?;
        Validator::validate_singularity(config.singularity)?;

        Ok(PathConditioner { config })
    }
}

// ============================================================================
// Conditioner
// ============================================================================

/// Validated, reusable path conditioner.
#[derive(Debug, Clone, PartialEq)]
pub struct PathConditioner<T> {
    config: ConditionConfig<T>,
}

impl<T: FloatLinalg> PathConditioner<T> {
    /// Configuration the conditioner runs with.
    pub fn config(&self) -> &ConditionConfig<T> {
        &self.config
    }

    /// Condition a sequence given as parallel value and validity arrays.
    pub fn run(&self, values: &[T], validity: &[bool]) -> Result<ConditionResult<T>, PathError> {
        Validator::validate_inputs(values, validity, self.config.max_points)?;
        Ok(ConditionExecutor::run(values, validity, &self.config))
    }

    /// Condition a sequence given as samples.
    pub fn run_samples(&self, samples: &[Sample<T>]) -> Result<ConditionResult<T>, PathError> {
        let (values, validity) = split_samples(samples);
        self.run(&values, &validity)
    }
}

// ============================================================================
// One-call Entry Point
// ============================================================================

/// Condition a sequence in one call.
///
/// Returns `Ok(None)` when the sequence has no valid samples. `validity` may
/// be shorter than `values`; missing entries count as invalid. Errors are
/// reserved for invalid `options`.
pub fn condition<T: FloatLinalg>(
    values: &[T],
    validity: &[bool],
    mode: FilterMode,
    options: &ConditionOptions,
) -> Result<Option<Vec<T>>, PathError> {
    let conditioner = ConditionerBuilder::from_options(options).mode(mode).build()?;
    Ok(ConditionExecutor::run(values, validity, conditioner.config()).into_fitted())
}
