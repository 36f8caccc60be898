//! Quadratic polynomial coefficients.
//!
//! ## Purpose
//!
//! This module defines the `(a, b, c)` triple produced by quadratic least
//! squares and its evaluation `f(x) = a·x² + b·x + c`.
//!
//! ## Non-goals
//!
//! * This module does not fit coefficients (see `algorithms::regression`).

// External dependencies
use num_traits::Float;

/// Coefficients of `f(x) = a·x² + b·x + c`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quadratic<T> {
    /// Coefficient of `x²`.
    pub a: T,

    /// Coefficient of `x`.
    pub b: T,

    /// Constant term.
    pub c: T,
}

impl<T: Float> Quadratic<T> {
    /// Create coefficients from their components.
    pub fn new(a: T, b: T, c: T) -> Self {
        Self { a, b, c }
    }

    /// Create coefficients from `[a, b, c]`.
    pub fn from_array(coefficients: [T; 3]) -> Self {
        let [a, b, c] = coefficients;
        Self { a, b, c }
    }

    /// Coefficients as `[a, b, c]`.
    pub fn to_array(self) -> [T; 3] {
        [self.a, self.b, self.c]
    }

    /// Evaluate the polynomial at `x`.
    #[inline]
    pub fn evaluate(&self, x: T) -> T {
        self.a * x * x + self.b * x + self.c
    }
}
