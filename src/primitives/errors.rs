//! Error types for path conditioning.
//!
//! ## Purpose
//!
//! This module defines the conditions under which a caller broke the contract
//! of the conditioning API: mismatched inputs, oversized sequences, invalid
//! parameters and misconfigured builders.
//!
//! ## Design notes
//!
//! * **Contract only**: Data-dependent degeneracies (no valid points, singular
//!   regression, too few points for piecewise fitting) are not errors. They are
//!   reported through `Option` results and `FitOutcome`.
//! * **Contextual**: Errors include the offending values.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display`, and `std::error::Error`
//!   when `std` is enabled.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for path conditioning operations.
#[derive(Debug, Clone, PartialEq)]
pub enum PathError {
    /// `values` and `validity` must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `values` array.
        values_len: usize,
        /// Number of elements in the `validity` array.
        validity_len: usize,
    },

    /// Sequence is longer than the configured maximum point count.
    TooManyPoints {
        /// Number of points provided.
        got: usize,
        /// Maximum allowed points.
        max: usize,
    },

    /// Base threshold must be positive and finite.
    InvalidThreshold(f64),

    /// Threshold schedule is empty or contains a non-positive multiplier.
    InvalidSchedule(String),

    /// Slice size is too small to support a quadratic fit.
    InvalidSliceSize {
        /// The slice size provided.
        got: usize,
        /// Minimum slice size.
        min: usize,
    },

    /// Overlap must be at most half the slice size.
    InvalidOverlap {
        /// The overlap provided.
        overlap: usize,
        /// The slice size.
        slice_size: usize,
    },

    /// Median window must contain between one and `max` samples.
    InvalidWindowSize {
        /// The window size provided.
        got: usize,
        /// Maximum window size.
        max: usize,
    },

    /// Relative singularity tolerance must be in `[0, 1)`.
    InvalidTolerance(f64),

    /// Filter mode name was not recognized.
    UnknownMode(String),

    /// The fitted sequence was requested but none is available.
    NoFittedData,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for PathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::MismatchedInputs {
                values_len,
                validity_len,
            } => write!(
                f,
                "Length mismatch: values has {values_len} points, validity has {validity_len}"
            ),
            Self::TooManyPoints { got, max } => {
                write!(f, "Too many points: got {got}, at most {max} allowed")
            }
            Self::InvalidThreshold(t) => {
                write!(f, "Invalid threshold: {t} (must be > 0 and finite)")
            }
            Self::InvalidSchedule(msg) => write!(f, "Invalid threshold schedule: {msg}"),
            Self::InvalidSliceSize { got, min } => {
                write!(f, "Invalid slice_size: {got} (must be at least {min})")
            }
            Self::InvalidOverlap {
                overlap,
                slice_size,
            } => write!(
                f,
                "Invalid overlap: {overlap} (must be at most half of slice_size {slice_size})"
            ),
            Self::InvalidWindowSize { got, max } => {
                write!(f, "Invalid window size: {got} (must be between 1 and {max})")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be >= 0 and < 1)")
            }
            Self::UnknownMode(name) => write!(f, "Unknown filter mode: '{name}'"),
            Self::NoFittedData => write!(f, "No fitted sequence available"),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{parameter}' was set multiple times. \
                 Each parameter can only be configured once."
            ),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for PathError {}
