//! Samples, validity maps and point-set extraction.
//!
//! ## Purpose
//!
//! A path sequence is stored as two parallel arrays: the measured values and a
//! validity map. This module provides the per-sample record for callers that
//! hold samples as structs, and the helpers every algorithm uses to turn the
//! parallel arrays into `(index, value)` point sets.
//!
//! ## Key concepts
//!
//! * **Position**: The index of a sample is its position along the path
//!   (0-based, unit spacing). It is also the regression abscissa.
//! * **Valid point**: A sample whose value is trusted raw data.
//! * **Missing entries**: A validity map shorter than the value array marks the
//!   uncovered positions invalid.
//!
//! ## Invariants
//!
//! * Invalid samples never appear in a point set.
//! * Point sets are ordered by strictly increasing position.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// Sample
// ============================================================================

/// One measured value and its validity flag.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<T> {
    /// Measured value at this position.
    pub value: T,

    /// Whether the value is trusted raw data.
    pub valid: bool,
}

impl<T> Sample<T> {
    /// Create a sample.
    pub fn new(value: T, valid: bool) -> Self {
        Self { value, valid }
    }
}

/// Split a slice of samples into parallel value and validity arrays.
pub fn split_samples<T: Copy>(samples: &[Sample<T>]) -> (Vec<T>, Vec<bool>) {
    samples.iter().map(|s| (s.value, s.valid)).unzip()
}

// ============================================================================
// Point Counts
// ============================================================================

/// Total, valid and invalid sample counts of a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointCounts {
    /// Number of samples.
    pub total: usize,

    /// Number of valid samples.
    pub good: usize,

    /// Number of invalid samples.
    pub bad: usize,
}

impl PointCounts {
    /// Count the samples of a validity map.
    pub fn from_validity(validity: &[bool]) -> Self {
        let good = count_valid(validity);
        Self {
            total: validity.len(),
            good,
            bad: validity.len() - good,
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Convert a sample index into a regression abscissa.
#[inline]
pub fn position<T: Float>(index: usize) -> T {
    T::from(index).unwrap_or_else(T::infinity)
}

/// Validity of `index`, treating positions beyond the map as invalid.
#[inline]
pub fn is_valid(validity: &[bool], index: usize) -> bool {
    validity.get(index).copied().unwrap_or(false)
}

/// Number of valid samples.
#[inline]
pub fn count_valid(validity: &[bool]) -> usize {
    validity.iter().filter(|&&v| v).count()
}

/// Build the `(index, value)` point set of the valid samples.
pub fn collect_points<T: Float>(values: &[T], validity: &[bool]) -> Vec<(T, T)> {
    values
        .iter()
        .enumerate()
        .filter(|&(i, _)| is_valid(validity, i))
        .map(|(i, &v)| (position(i), v))
        .collect()
}

/// Indices of the valid samples in increasing order.
pub fn valid_indices(validity: &[bool], len: usize) -> Vec<usize> {
    (0..len).filter(|&i| is_valid(validity, i)).collect()
}

/// Resize a validity map to `len` entries, padding with `false`.
pub fn aligned_validity(validity: &[bool], len: usize) -> Vec<bool> {
    (0..len).map(|i| is_valid(validity, i)).collect()
}

/// Mark valid samples carrying NaN or infinite values as invalid.
///
/// Returns the number of samples demoted.
pub fn demote_non_finite<T: Float>(values: &[T], validity: &mut [bool]) -> usize {
    let mut demoted = 0;
    for (flag, value) in validity.iter_mut().zip(values.iter()) {
        if *flag && !value.is_finite() {
            *flag = false;
            demoted += 1;
        }
    }
    demoted
}
