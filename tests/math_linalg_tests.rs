//! Tests for the 3×3 linear algebra backend.
//!
//! These tests verify determinants, Cramer's-rule solves and the singularity
//! checks used by quadratic regression.
//!
//! ## Test Organization
//!
//! 1. **Determinants** - Known integer matrices
//! 2. **Linear Solves** - Known systems with exact solutions
//! 3. **Singularity** - Exact and relative checks
//! 4. **Precision** - f32 implementation

use approx::assert_relative_eq;

use weldpath::internals::math::linalg::nalgebra_backend;
use weldpath::internals::math::linalg::{FloatLinalg, SingularityCheck};

// ============================================================================
// Determinant Tests
// ============================================================================

/// Test determinants of known integer matrices.
#[test]
fn test_determinant_known_values() {
    let det = f64::determinant3(&[[2.0, 3.0, 1.0], [5.0, 8.0, 3.0], [-2.0, 0.0, 5.0]]);
    assert_relative_eq!(det, 3.0, epsilon = 1e-12);

    let det = f64::determinant3(&[[3.0, 3.0, -1.0], [4.0, 1.0, 3.0], [1.0, -2.0, -2.0]]);
    assert_relative_eq!(det, 54.0, epsilon = 1e-12);
}

/// Test that a rank-deficient matrix has a zero determinant.
#[test]
fn test_determinant_singular() {
    let det = f64::determinant3(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    assert_eq!(det, 0.0);
}

/// Test the identity matrix.
#[test]
fn test_determinant_identity() {
    let det = f64::determinant3(&[[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);
    assert_eq!(det, 1.0);
}

// ============================================================================
// Linear Solve Tests
// ============================================================================

/// Test solving a system with solution (4, 0, -1).
#[test]
fn test_solve_first_system() {
    let augmented = [
        [2.0, 3.0, -1.0, 9.0],
        [1.0, -2.0, 1.0, 3.0],
        [1.0, 0.0, 2.0, 2.0],
    ];
    let x = f64::solve_linear3(&augmented, SingularityCheck::Exact).unwrap();

    assert_relative_eq!(x[0], 4.0, epsilon = 1e-7);
    assert_relative_eq!(x[1], 0.0, epsilon = 1e-7);
    assert_relative_eq!(x[2], -1.0, epsilon = 1e-7);
}

/// Test solving a system with solution (-2, 1, 2).
#[test]
fn test_solve_second_system() {
    let augmented = [
        [1.0, 2.0, 3.0, 6.0],
        [4.0, 5.0, 6.0, 9.0],
        [7.0, 8.0, 0.0, -6.0],
    ];
    let x = f64::solve_linear3(&augmented, SingularityCheck::Exact).unwrap();

    assert_relative_eq!(x[0], -2.0, epsilon = 1e-7);
    assert_relative_eq!(x[1], 1.0, epsilon = 1e-7);
    assert_relative_eq!(x[2], 2.0, epsilon = 1e-7);
}

// ============================================================================
// Singularity Tests
// ============================================================================

/// Test that a singular system has no solution.
#[test]
fn test_solve_singular_returns_none() {
    let augmented = [
        [1.0, 2.0, 3.0, 1.0],
        [4.0, 5.0, 6.0, 1.0],
        [7.0, 8.0, 9.0, 1.0],
    ];
    assert!(f64::solve_linear3(&augmented, SingularityCheck::Exact).is_none());
    assert!(f64::solve_linear3(&augmented, SingularityCheck::Relative(1e-9)).is_none());
}

/// Test that a nearly singular system passes the exact check but not the relative one.
#[test]
fn test_relative_check_rejects_near_singular() {
    let augmented = [
        [1.0, 2.0, 3.0, 1.0],
        [4.0, 5.0, 6.0, 1.0],
        [7.0, 8.0, 9.000001, 1.0],
    ];

    assert!(f64::solve_linear3(&augmented, SingularityCheck::Exact).is_some());
    assert!(f64::solve_linear3(&augmented, SingularityCheck::Relative(1e-3)).is_none());
}

/// Test that a zero tolerance only rejects exactly singular systems.
#[test]
fn test_relative_zero_tolerance_matches_exact() {
    let augmented = [
        [2.0, 3.0, -1.0, 9.0],
        [1.0, -2.0, 1.0, 3.0],
        [1.0, 0.0, 2.0, 2.0],
    ];
    let exact = f64::solve_linear3(&augmented, SingularityCheck::Exact).unwrap();
    let relative = f64::solve_linear3(&augmented, SingularityCheck::Relative(0.0)).unwrap();

    for k in 0..3 {
        assert_relative_eq!(exact[k], relative[k], epsilon = 1e-12);
    }
}

/// Test that non-finite determinants count as singular.
#[test]
fn test_non_finite_system_is_singular() {
    let augmented = [
        [f64::NAN, 0.0, 0.0, 1.0],
        [0.0, 1.0, 0.0, 1.0],
        [0.0, 0.0, 1.0, 1.0],
    ];
    assert!(nalgebra_backend::solve_cramer3(&augmented, SingularityCheck::Exact).is_none());
}

// ============================================================================
// Precision Tests
// ============================================================================

/// Test the f32 implementation against the same known values.
#[test]
fn test_f32_backend() {
    let det = f32::determinant3(&[[2.0, 3.0, 1.0], [5.0, 8.0, 3.0], [-2.0, 0.0, 5.0]]);
    assert_relative_eq!(det, 3.0_f32, epsilon = 1e-4);

    let augmented = [
        [2.0_f32, 3.0, -1.0, 9.0],
        [1.0, -2.0, 1.0, 3.0],
        [1.0, 0.0, 2.0, 2.0],
    ];
    let x = f32::solve_linear3(&augmented, SingularityCheck::Exact).unwrap();
    assert_relative_eq!(x[0], 4.0, epsilon = 1e-4);
    assert_relative_eq!(x[1], 0.0, epsilon = 1e-4);
    assert_relative_eq!(x[2], -1.0, epsilon = 1e-4);
}
