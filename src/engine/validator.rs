//! Input validation for conditioning configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for conditioning parameters and
//! input sequences. It checks input lengths, sequence size limits and
//! parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not reject non-finite sample values; the executor
//!   demotes them to invalid.
//! * This module does not provide automatic correction of invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::regression::QuadraticRegressor;
use crate::algorithms::smoothing::WindowedMedianSmoother;
use crate::math::linalg::SingularityCheck;
use crate::primitives::errors::PathError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for conditioning configuration and input data.
///
/// All methods return `Result<(), PathError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate the parallel value and validity arrays.
    pub fn validate_inputs<T: Float>(
        values: &[T],
        validity: &[bool],
        max_points: Option<usize>,
    ) -> Result<(), PathError> {
        if values.len() != validity.len() {
            return Err(PathError::MismatchedInputs {
                values_len: values.len(),
                validity_len: validity.len(),
            });
        }

        if let Some(max) = max_points {
            Self::validate_point_count(values.len(), max)?;
        }

        Ok(())
    }

    /// Validate a sequence length against a maximum point count.
    pub fn validate_point_count(len: usize, max: usize) -> Result<(), PathError> {
        if len > max {
            return Err(PathError::TooManyPoints { got: len, max });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the base outlier threshold.
    pub fn validate_threshold<T: Float>(threshold: T) -> Result<(), PathError> {
        if !threshold.is_finite() || threshold <= T::zero() {
            return Err(PathError::InvalidThreshold(
                threshold.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the threshold schedule multipliers.
    pub fn validate_schedule<T: Float>(multipliers: &[T]) -> Result<(), PathError> {
        if multipliers.is_empty() {
            return Err(PathError::InvalidSchedule("schedule is empty".to_string()));
        }

        for (i, &m) in multipliers.iter().enumerate() {
            if !m.is_finite() || m <= T::zero() {
                return Err(PathError::InvalidSchedule(format!(
                    "multiplier[{}]={} (must be > 0 and finite)",
                    i,
                    m.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate slice and overlap sizes for piecewise fitting.
    ///
    /// The overlap is limited to half the slice so a position never falls in
    /// two overlaps.
    pub fn validate_slicing(slice_size: usize, overlap_size: usize) -> Result<(), PathError> {
        if slice_size < QuadraticRegressor::MIN_POINTS {
            return Err(PathError::InvalidSliceSize {
                got: slice_size,
                min: QuadraticRegressor::MIN_POINTS,
            });
        }
        if overlap_size.saturating_mul(2) > slice_size {
            return Err(PathError::InvalidOverlap {
                overlap: overlap_size,
                slice_size,
            });
        }
        Ok(())
    }

    /// Validate the pre-smoothing window size.
    pub fn validate_window(window: usize) -> Result<(), PathError> {
        if window == 0 || window > WindowedMedianSmoother::MAX_WINDOW {
            return Err(PathError::InvalidWindowSize {
                got: window,
                max: WindowedMedianSmoother::MAX_WINDOW,
            });
        }
        Ok(())
    }

    /// Validate the singularity test.
    pub fn validate_singularity(check: SingularityCheck) -> Result<(), PathError> {
        if let SingularityCheck::Relative(tol) = check {
            if !tol.is_finite() || !(0.0..1.0).contains(&tol) {
                return Err(PathError::InvalidTolerance(tol));
            }
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), PathError> {
        if let Some(param) = duplicate_param {
            return Err(PathError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
