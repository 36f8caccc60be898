//! Layer 3: Algorithms
//!
//! This layer implements quadratic regression, gap interpolation, windowed
//! smoothing, outlier rejection and piecewise approximation. It contains the
//! numerical logic of path conditioning but is orchestrated by the engine layer.

/// Quadratic least-squares regression.
pub mod regression;

/// Gap filling for invalid samples.
pub mod interpolation;

/// Windowed rank smoothing.
pub mod smoothing;

/// Step-deviation outlier rejection.
pub mod outlier;

/// Piecewise quadratic approximation.
pub mod piecewise;
