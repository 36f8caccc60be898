//! Linear algebra backend for 3×3 normal equations.
//!
//! ## Purpose
//!
//! This module solves the 3×3 systems produced by quadratic least squares.
//! It exposes a trait-based bridge from generic `Float` types to the nalgebra
//! backend, mirroring how the fitting code stays generic over precision.
//!
//! ## Design notes
//!
//! * Solves by Cramer's rule: three column-replaced determinants over the
//!   system determinant.
//! * Singularity is decided by a [`SingularityCheck`]. The default is the exact
//!   zero test on the determinant; a relative test against the Hadamard bound
//!   is available for ill-conditioned inputs.
//! * Implemented for `f64` and `f32`, which delegate to `nalgebra::Matrix3`.
//!
//! ## Invariants
//!
//! * A system reported as singular never yields a solution.
//! * Augmented matrices are row-major `[a, b, c | rhs]`.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// ============================================================================
// Singularity Check
// ============================================================================

/// Rule deciding when a 3×3 system is too degenerate to solve.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SingularityCheck {
    /// Singular only when the determinant is exactly zero (or not finite).
    #[default]
    Exact,

    /// Singular when `|det| <= tol * Π‖row_i‖`.
    ///
    /// The product of row norms bounds `|det|` (Hadamard), so `tol` is a
    /// scale-free ratio in `[0, 1)`.
    Relative(f64),
}

// ============================================================================
// FloatLinalg Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the nalgebra backend.
pub trait FloatLinalg: Float + Debug + 'static {
    /// Determinant of a row-major 3×3 matrix.
    fn determinant3(m: &[[Self; 3]; 3]) -> Self;

    /// Solve a row-major augmented 3×4 system by Cramer's rule.
    fn solve_linear3(augmented: &[[Self; 4]; 3], check: SingularityCheck) -> Option<[Self; 3]>;
}

impl FloatLinalg for f64 {
    #[inline]
    fn determinant3(m: &[[Self; 3]; 3]) -> Self {
        nalgebra_backend::determinant3(m)
    }
    #[inline]
    fn solve_linear3(augmented: &[[Self; 4]; 3], check: SingularityCheck) -> Option<[Self; 3]> {
        nalgebra_backend::solve_cramer3(augmented, check)
    }
}

impl FloatLinalg for f32 {
    #[inline]
    fn determinant3(m: &[[Self; 3]; 3]) -> Self {
        nalgebra_backend::determinant3(m)
    }
    #[inline]
    fn solve_linear3(augmented: &[[Self; 4]; 3], check: SingularityCheck) -> Option<[Self; 3]> {
        nalgebra_backend::solve_cramer3(augmented, check)
    }
}

// ============================================================================
// Nalgebra Backend Implementation
// ============================================================================

/// Nalgebra-based 3×3 operations.
pub mod nalgebra_backend {
    use super::SingularityCheck;
    use nalgebra::{Matrix3, RealField, Vector3};

    fn to_matrix<N: RealField + Copy>(m: &[[N; 3]; 3]) -> Matrix3<N> {
        Matrix3::new(
            m[0][0], m[0][1], m[0][2], //
            m[1][0], m[1][1], m[1][2], //
            m[2][0], m[2][1], m[2][2],
        )
    }

    /// Determinant of a row-major 3×3 matrix.
    pub fn determinant3<N: RealField + Copy>(m: &[[N; 3]; 3]) -> N {
        to_matrix(m).determinant()
    }

    /// Whether `det` marks `system` as singular under `check`.
    pub fn is_singular<N: RealField + Copy>(
        det: N,
        system: &Matrix3<N>,
        check: SingularityCheck,
    ) -> bool {
        if !det.is_finite() {
            return true;
        }
        match check {
            SingularityCheck::Exact => det == N::zero(),
            SingularityCheck::Relative(tol) => {
                let bound = (0..3).fold(N::one(), |acc, i| acc * system.row(i).norm());
                det.abs() <= nalgebra::convert::<f64, N>(tol) * bound
            }
        }
    }

    /// Solve a row-major augmented 3×4 system by Cramer's rule.
    pub fn solve_cramer3<N: RealField + Copy>(
        augmented: &[[N; 4]; 3],
        check: SingularityCheck,
    ) -> Option<[N; 3]> {
        let system = Matrix3::new(
            augmented[0][0], augmented[0][1], augmented[0][2], //
            augmented[1][0], augmented[1][1], augmented[1][2], //
            augmented[2][0], augmented[2][1], augmented[2][2],
        );
        let rhs = Vector3::new(augmented[0][3], augmented[1][3], augmented[2][3]);

        let det = system.determinant();
        if is_singular(det, &system, check) {
            return None;
        }

        let mut solution = [N::zero(); 3];
        for (k, slot) in solution.iter_mut().enumerate() {
            let mut replaced = system;
            replaced.set_column(k, &rhs);
            *slot = replaced.determinant() / det;
        }
        Some(solution)
    }
}
