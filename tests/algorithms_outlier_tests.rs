//! Tests for step-deviation outlier rejection.
//!
//! These tests verify the threshold schedule, the single-pass walk and the
//! termination conditions of the full filter.
//!
//! ## Test Organization
//!
//! 1. **Schedule** - Threshold derivation
//! 2. **Walk** - One pass over a sequence
//! 3. **Filter** - Full schedule on clean and spiky sequences
//! 4. **Termination** - No data, single point, degenerate fit, exhaustion

use approx::assert_relative_eq;

use weldpath::internals::algorithms::outlier::{DiffTermination, OutlierDiffFilter};
use weldpath::internals::math::polynomial::Quadratic;

// ============================================================================
// Helper Functions
// ============================================================================

const ERR: f64 = -1000.0;

fn ramp(n: usize, step: f64) -> Vec<f64> {
    (0..n).map(|i| step * i as f64).collect()
}

// ============================================================================
// Schedule Tests
// ============================================================================

/// Test the default `{10, 3, 1}` schedule.
#[test]
fn test_default_thresholds() {
    let filter = OutlierDiffFilter::new(0.1);
    let thresholds: Vec<f64> = filter.thresholds().collect();

    assert_eq!(thresholds.len(), 3);
    assert_relative_eq!(thresholds[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(thresholds[1], 0.3, epsilon = 1e-12);
    assert_relative_eq!(thresholds[2], 0.1, epsilon = 1e-12);
}

/// Test a custom schedule.
#[test]
fn test_custom_thresholds() {
    let filter = OutlierDiffFilter::new(0.5).with_multipliers(vec![4.0, 1.0]);
    let thresholds: Vec<f64> = filter.thresholds().collect();
    assert_eq!(thresholds, vec![2.0, 0.5]);
    assert_eq!(filter.base_threshold(), 0.5);
}

/// Test the default base threshold.
#[test]
fn test_default_base_threshold() {
    let filter = OutlierDiffFilter::<f64>::default();
    assert_relative_eq!(filter.base_threshold(), 0.1);
}

// ============================================================================
// Walk Tests
// ============================================================================

/// Test that a spike and its follower are flagged in one walk.
///
/// The reference follows the spike's value, so the return step also exceeds
/// the threshold.
#[test]
fn test_walk_flags_spike_and_follower() {
    let mut values = ramp(10, 0.01);
    values[4] = 5.0;
    let mut status = vec![true; 10];
    let trend = Quadratic::new(0.0, 0.01, 0.0);

    let invalidated = OutlierDiffFilter::walk(&values, &mut status, &trend, 1.0);

    assert_eq!(invalidated, 2);
    assert!(!status[4]);
    assert!(!status[5]);
    assert_eq!(status.iter().filter(|&&v| v).count(), 8);
}

/// Test that invalid samples advance along the trend slope.
#[test]
fn test_walk_propagates_through_gap() {
    let values = [0.0, ERR, ERR, ERR, 0.4, 0.5];
    let mut status = vec![true, false, false, false, true, true];
    let trend = Quadratic::new(0.0, 0.1, 0.0);

    let invalidated = OutlierDiffFilter::walk(&values, &mut status, &trend, 0.15);

    assert_eq!(invalidated, 0);
    assert_eq!(status, vec![true, false, false, false, true, true]);
}

/// Test that index 0 starts from the trend when invalid.
#[test]
fn test_walk_invalid_start_uses_trend() {
    let values = [ERR, 2.0, 2.1];
    let mut status = vec![false, true, true];
    let trend = Quadratic::new(0.0, 0.0, 0.0);

    let invalidated = OutlierDiffFilter::walk(&values, &mut status, &trend, 1.0);

    assert_eq!(invalidated, 1);
    assert_eq!(status, vec![false, false, true]);
}

/// Test that an empty sequence is a no-op.
#[test]
fn test_walk_empty() {
    let mut status: Vec<bool> = Vec::new();
    let trend = Quadratic::new(0.0, 0.0, 0.0);
    assert_eq!(OutlierDiffFilter::<f64>::walk(&[], &mut status, &trend, 1.0), 0);
}

// ============================================================================
// Filter Tests
// ============================================================================

/// Test that a clean ramp keeps every sample through the full schedule.
#[test]
fn test_clean_ramp_untouched() {
    let values = ramp(200, 0.01);
    let out = OutlierDiffFilter::new(0.1).filter(&values, &[true; 200]);

    assert_eq!(out.termination, DiffTermination::Completed);
    assert!(out.validity.iter().all(|&v| v));
    assert_eq!(out.passes.len(), 3);
    assert!(out.passes.iter().all(|p| p.invalidated == 0 && p.remaining == 200));
}

/// Test that filtering an already clean sequence is idempotent.
#[test]
fn test_idempotent_on_clean_sequence() {
    let values = ramp(300, 0.02);
    let filter = OutlierDiffFilter::new(0.1);

    let first = filter.filter(&values, &[true; 300]);
    let second = filter.filter(&values, &first.validity);

    assert_eq!(first.validity, second.validity);
}

/// Test that a spike is rejected and reconstructed from its neighbours.
#[test]
fn test_spike_rejected_and_filled() {
    let mut values = ramp(100, 0.01);
    values[30] += 5.0;

    let out = OutlierDiffFilter::new(0.1).filter(&values, &[true; 100]);

    assert!(!out.validity[30]);
    assert!(!out.validity[31]);
    assert_eq!(out.validity.iter().filter(|&&v| !v).count(), 2);
    assert_eq!(out.passes[0].invalidated, 2);
    assert_eq!(out.passes[0].remaining, 98);

    let filled = out.interpolated.unwrap();
    assert_relative_eq!(filled[30], 0.30, epsilon = 1e-9);
    assert_relative_eq!(filled[31], 0.31, epsilon = 1e-9);
}

/// Test that a leading outlier keeps its own flag.
#[test]
fn test_index_zero_never_invalidated() {
    let mut values = ramp(50, 0.01);
    values[0] = 5.0;

    let out = OutlierDiffFilter::new(0.1).filter(&values, &[true; 50]);

    assert!(out.validity[0]);
    assert!(!out.validity[1]);
}

/// Test that a validity map shorter than the values is padded with invalid.
#[test]
fn test_short_validity_padded() {
    let values = ramp(10, 0.01);
    let out = OutlierDiffFilter::new(0.1).filter(&values, &[true; 6]);

    assert_eq!(out.validity.len(), 10);
    assert!(out.validity[..6].iter().all(|&v| v));
    assert!(out.validity[6..].iter().all(|&v| !v));
}

// ============================================================================
// Termination Tests
// ============================================================================

/// Test that a sequence without valid samples yields no data.
#[test]
fn test_no_valid_samples() {
    let out = OutlierDiffFilter::new(0.1).filter(&[ERR; 5], &[false; 5]);

    assert_eq!(out.termination, DiffTermination::NoData);
    assert!(out.interpolated.is_none());
    assert!(out.passes.is_empty());
}

/// Test that an empty sequence yields no data.
#[test]
fn test_empty_sequence() {
    let out = OutlierDiffFilter::<f64>::new(0.1).filter(&[], &[]);
    assert_eq!(out.termination, DiffTermination::NoData);
    assert!(out.validity.is_empty());
}

/// Test that a single valid sample is extrapolated.
#[test]
fn test_single_point() {
    let out = OutlierDiffFilter::new(0.1).filter(&[ERR, 7.0, ERR], &[false, true, false]);

    assert_eq!(out.termination, DiffTermination::SinglePoint);
    assert_eq!(out.interpolated, Some(vec![7.0, 7.0, 7.0]));
}

/// Test that two valid samples cannot support a trend.
#[test]
fn test_two_points_degenerate() {
    let out = OutlierDiffFilter::new(0.1).filter(&[1.0, ERR, 3.0], &[true, false, true]);

    assert_eq!(out.termination, DiffTermination::DegenerateFit);
    assert!(out.passes.is_empty());
    assert_eq!(out.validity, vec![true, false, true]);

    let filled = out.interpolated.unwrap();
    assert_relative_eq!(filled[1], 2.0, epsilon = 1e-12);
}

/// Test that a pass removing every valid sample is rolled back.
#[test]
fn test_exhausting_pass_rolled_back() {
    // Trend through (1,0), (2,20), (3,0) puts f(0) at -60.
    let values = [ERR, 0.0, 20.0, 0.0];
    let validity = [false, true, true, true];

    let out = OutlierDiffFilter::new(1.0).filter(&values, &validity);

    assert_eq!(out.termination, DiffTermination::Exhausted);
    assert!(out.passes.is_empty());
    assert_eq!(out.validity, validity.to_vec());
    assert_eq!(out.interpolated, Some(vec![0.0, 0.0, 20.0, 0.0]));
}
