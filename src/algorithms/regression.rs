//! Quadratic least-squares regression.
//!
//! ## Purpose
//!
//! This module fits `f(x) = a·x² + b·x + c` to a set of `(x, y)` points by
//! ordinary least squares. It is the trend model behind outlier rejection and
//! the per-slice model of piecewise approximation.
//!
//! ## Design notes
//!
//! * **Normal equations**: Accumulates the power sums `Σx … Σx⁴`, `Σy`, `Σxy`,
//!   `Σx²y` in one pass and solves the resulting 3×3 system by Cramer's rule.
//! * **No regularization**: Plain IEEE arithmetic, no clamping.
//! * **Generics**: Generic over `FloatLinalg` types.
//!
//! ## Key concepts
//!
//! The normal equations are:
//! ```text
//! | Σx⁴  Σx³  Σx² | |a|   | Σx²y |
//! | Σx³  Σx²  Σx  | |b| = | Σxy  |
//! | Σx²  Σx   n   | |c|   | Σy   |
//! ```
//!
//! ## Invariants
//!
//! * Fewer than 3 points never produce coefficients.
//! * A singular system (per the configured [`SingularityCheck`]) never produces
//!   coefficients; callers fall back to interpolation.
//!
//! ## Non-goals
//!
//! * This module does not weight points.
//! * This module does not select which points take part in a fit.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::linalg::{FloatLinalg, SingularityCheck};
use crate::math::polynomial::Quadratic;

// ============================================================================
// Power Sums
// ============================================================================

/// Power sums of a point set, the entries of the quadratic normal equations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerSums<T> {
    /// Number of points.
    pub n: usize,
    /// Σx
    pub sx: T,
    /// Σx²
    pub sx2: T,
    /// Σx³
    pub sx3: T,
    /// Σx⁴
    pub sx4: T,
    /// Σy
    pub sy: T,
    /// Σxy
    pub sxy: T,
    /// Σx²y
    pub sx2y: T,
}

impl<T: Float> PowerSums<T> {
    /// Accumulate the power sums of `points`.
    pub fn accumulate(points: &[(T, T)]) -> Self {
        let mut sums = Self {
            n: points.len(),
            sx: T::zero(),
            sx2: T::zero(),
            sx3: T::zero(),
            sx4: T::zero(),
            sy: T::zero(),
            sxy: T::zero(),
            sx2y: T::zero(),
        };

        for &(x, y) in points {
            let x2 = x * x;
            sums.sx = sums.sx + x;
            sums.sy = sums.sy + y;
            sums.sxy = sums.sxy + x * y;
            sums.sx2y = sums.sx2y + x2 * y;
            sums.sx2 = sums.sx2 + x2;
            sums.sx3 = sums.sx3 + x2 * x;
            sums.sx4 = sums.sx4 + x2 * x2;
        }

        sums
    }

    /// Row-major augmented normal-equations matrix `[A | rhs]`.
    pub fn augmented(&self) -> [[T; 4]; 3] {
        let n = T::from(self.n).unwrap_or_else(T::infinity);
        [
            [self.sx4, self.sx3, self.sx2, self.sx2y],
            [self.sx3, self.sx2, self.sx, self.sxy],
            [self.sx2, self.sx, n, self.sy],
        ]
    }
}

// ============================================================================
// Quadratic Regressor
// ============================================================================

/// Least-squares fitter for degree-2 polynomials.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuadraticRegressor {
    singularity: SingularityCheck,
}

impl QuadraticRegressor {
    /// Minimum number of points for a quadratic fit.
    pub const MIN_POINTS: usize = 3;

    /// Create a regressor using the exact-zero singularity test.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a regressor with a custom singularity test.
    pub fn with_singularity_check(singularity: SingularityCheck) -> Self {
        Self { singularity }
    }

    /// The singularity test in use.
    pub fn singularity_check(&self) -> SingularityCheck {
        self.singularity
    }

    /// Fit a quadratic to `points`.
    ///
    /// Returns `None` when the point set has fewer than 3 points or the normal
    /// equations are singular.
    pub fn fit<T: FloatLinalg>(&self, points: &[(T, T)]) -> Option<Quadratic<T>> {
        if points.len() < Self::MIN_POINTS {
            return None;
        }

        let sums = PowerSums::accumulate(points);
        T::solve_linear3(&sums.augmented(), self.singularity).map(Quadratic::from_array)
    }
}
