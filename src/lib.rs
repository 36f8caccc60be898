//! # weldpath: path signal conditioning
//!
//! Outlier rejection, gap filling and piecewise quadratic approximation for
//! sampled one-dimensional paths, such as the per-axis offset tables a welding
//! or cutting controller follows.
//!
//! ## What does it do?
//!
//! A path arrives as a list of measured values with a validity flag per sample.
//! Sensors glitch and operators mark samples as bad, so the raw sequence has
//! spikes and holes. Conditioning:
//!
//! 1. Fits a global quadratic trend to the valid samples.
//! 2. Walks the sequence and invalidates every sample whose step from its
//!    predecessor exceeds a threshold, repeating over a shrinking threshold
//!    schedule (`{10, 3, 1} × base_threshold` by default).
//! 3. Fills the invalid samples by linear interpolation (`Diff` mode), or
//!    replaces the whole sequence with overlapping slice-wise quadratic fits
//!    blended across their overlaps (`Approximate` mode).
//!
//! ## Quick Start
//!
//! ```rust
//! use weldpath::prelude::*;
//!
//! let values: Vec<f64> = (0..100).map(|i| 0.01 * i as f64).collect();
//! let mut validity = vec![true; 100];
//! validity[40] = false;
//!
//! let conditioner = Conditioner::new()
//!     .mode(Diff)
//!     .base_threshold(0.1)
//!     .build()?;
//!
//! let result = conditioner.run(&values, &validity)?;
//! let fitted = result.fitted.expect("sequence has valid samples");
//!
//! assert_eq!(fitted.len(), 100);
//! assert!((fitted[40] - 0.40).abs() < 1e-12);
//! # Result::<(), PathError>::Ok(())
//! ```
//!
//! ## One-call form
//!
//! Persisted per-axis settings map onto [`ConditionOptions`](prelude::ConditionOptions):
//!
//! ```rust
//! use weldpath::prelude::*;
//!
//! let values: [f64; 5] = [0.0, 0.05, 5.0, 0.15, 0.2];
//! let validity = [true; 5];
//!
//! let fitted = condition(&values, &validity, Diff, &ConditionOptions::default())?
//!     .expect("sequence has valid samples");
//!
//! assert!((fitted[2] - 0.1).abs() < 1e-9);
//! # Result::<(), PathError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! Degenerate data never raises an error. A sequence without valid samples
//! yields `fitted: None`; a singular trend fit or too few samples for the
//! piecewise fit falls back to interpolation, reported through
//! [`FitOutcome`](prelude::FitOutcome). [`PathError`](prelude::PathError) is
//! reserved for invalid configuration and mismatched inputs.
//!
//! ## Controller upload
//!
//! [`UploadFrame`](prelude::UploadFrame) lays a sequence out as a zero-padded
//! value table plus a packed status bitmap (sample `j` at bit `j % 8` of byte
//! `j / 8`), choosing the raw or fitted sequence via
//! [`WriteSource`](prelude::WriteSource).
//!
//! ## Logging
//!
//! The crate emits diagnostics through the [`log`] facade: `debug` per outlier
//! pass and piecewise plan, `warn` for demoted non-finite samples and singular
//! fits, `trace` per slice. No logger is installed by the library.
//!
//! ## Features
//!
//! * `std` (default): standard library support and `std::error::Error`.
//! * `serde`: `Serialize`/`Deserialize` for options, modes and reports.
//!
//! Without `std` the crate is `no_std` and requires `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - sample representation and errors.
//
// Contains the `Sample` record, validity-map helpers, point counts and the
// crate error type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the 3×3 determinant and Cramer solver behind the `FloatLinalg`
// bridge, and quadratic polynomial evaluation.
mod math;

// Layer 3: Algorithms - core conditioning algorithms.
//
// Contains quadratic regression, gap interpolation, windowed rank smoothing,
// step-deviation outlier rejection and piecewise approximation.
mod algorithms;

// Layer 4: Engine - orchestration and execution control.
//
// Contains validation, the conditioning pipeline and result assembly.
mod engine;

// Layer 5: Adapters - outside-world framing.
//
// Contains controller upload framing.
mod adapters;

// High-level fluent API for path conditioning.
//
// Provides the `Conditioner` builder and the one-call `condition` function.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard weldpath prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use weldpath::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ConditionOptions, ConditionResult, ConditionerBuilder as Conditioner, FilterMode,
        FilterMode::{Approximate, Diff},
        FitOutcome, PassReport, PathConditioner, PathError, PointCounts, Sample,
        SingularityCheck::{Exact, Relative},
        UploadFrame,
        WriteSource::{Fitted, Raw},
        WriteSource, condition,
    };
}

// ============================================================================
// Public API
// ============================================================================

pub use crate::api::*;

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// **Warning**: These are internal implementation details and may change without notice.
#[doc(hidden)]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal adapters.
    pub mod adapters {
        pub use crate::adapters::*;
    }
}
