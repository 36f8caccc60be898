//! Tests for gap interpolation.
//!
//! These tests verify that invalid samples are reconstructed by linear
//! interpolation between valid neighbours and constant extrapolation at the
//! edges.
//!
//! ## Test Organization
//!
//! 1. **Edge Gaps** - Leading and trailing runs of invalid samples
//! 2. **Interior Gaps** - Linear ramps
//! 3. **Edge Cases** - All invalid, empty and short validity maps

use approx::assert_relative_eq;

use weldpath::internals::algorithms::interpolation::GapInterpolator;

// ============================================================================
// Helper Functions
// ============================================================================

const ERR: f64 = -1000.0;

fn assert_all_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(expected) {
        assert_relative_eq!(*a, *e, epsilon = 1e-7);
    }
}

// ============================================================================
// Edge Gap Tests
// ============================================================================

/// Test that a leading gap takes the first valid value.
#[test]
fn test_leading_gap() {
    let out = GapInterpolator::fill(&[ERR, ERR, ERR, 10.0], &[false, false, false, true]);
    assert_all_close(&out, &[10.0, 10.0, 10.0, 10.0]);
}

/// Test that a trailing gap takes the last valid value.
#[test]
fn test_trailing_gap() {
    let out = GapInterpolator::fill(&[10.0, ERR, ERR, ERR], &[true, false, false, false]);
    assert_all_close(&out, &[10.0, 10.0, 10.0, 10.0]);
}

// ============================================================================
// Interior Gap Tests
// ============================================================================

/// Test that an interior gap becomes a linear ramp.
#[test]
fn test_interior_gap() {
    let out = GapInterpolator::fill(&[0.0, ERR, ERR, 3.0], &[true, false, false, true]);
    assert_all_close(&out, &[0.0, 1.0, 2.0, 3.0]);
}

/// Test several gaps of different kinds in one sequence.
#[test]
fn test_mixed_gaps() {
    let values = [ERR, 2.0, ERR, 4.0, 4.0, ERR, ERR, ERR, 0.0, ERR];
    let validity = [false, true, false, true, true, false, false, false, true, false];
    let out = GapInterpolator::fill(&values, &validity);
    assert_all_close(&out, &[2.0, 2.0, 3.0, 4.0, 4.0, 3.0, 2.0, 1.0, 0.0, 0.0]);
}

/// Test that valid samples are copied unchanged.
#[test]
fn test_valid_samples_unchanged() {
    let values = [0.3, -1.7, 2.2, 9.1];
    let out = GapInterpolator::fill(&values, &[true; 4]);
    assert_eq!(out, values.to_vec());
}

// ============================================================================
// Edge Case Tests
// ============================================================================

/// Test that an all-invalid sequence becomes zeros.
#[test]
fn test_all_invalid() {
    let out = GapInterpolator::fill(&[ERR, ERR, ERR, ERR], &[false; 4]);
    assert_all_close(&out, &[0.0, 0.0, 0.0, 0.0]);
}

/// Test that an empty sequence stays empty.
#[test]
fn test_empty() {
    let out = GapInterpolator::fill::<f64>(&[], &[]);
    assert!(out.is_empty());
}

/// Test that positions missing from the validity map are treated as invalid.
#[test]
fn test_short_validity_map() {
    let out = GapInterpolator::fill(&[1.0, 2.0, ERR, ERR], &[true, true]);
    assert_all_close(&out, &[1.0, 2.0, 2.0, 2.0]);
}
