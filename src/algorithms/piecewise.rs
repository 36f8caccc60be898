//! Piecewise quadratic approximation with blended overlaps.
//!
//! ## Purpose
//!
//! This module produces a smoother global fit than a single quadratic by
//! fitting one quadratic per slice of the valid samples and stitching adjacent
//! slices together across a shared overlap.
//!
//! ## Design notes
//!
//! * **Pre-smoothing**: Slices are fitted to the windowed-rank smoothed copy of
//!   the gap-filled sequence, sampled at valid positions only.
//! * **Slicing by valid count**: Slice sizes count valid samples, not raw
//!   positions. Each slice shares its trailing `overlap_size` valid samples
//!   with the next one. With `2 * overlap_size <= slice_size` the overlaps of
//!   non-adjacent slices are disjoint, so every position blends at most two
//!   curves.
//! * **Even division**: With more than one slice the slice size is adjusted so
//!   the valid samples divide evenly; the first slice absorbs the remainder.
//! * **Stitching**: Inside an overlap the output moves linearly from the
//!   previous slice's curve (weight 0 at the overlap start) to the current
//!   slice's curve (weight 1 at its end).
//! * **Fallbacks**: Fewer than `count_min` valid samples returns the plain
//!   gap-filled sequence. A slice whose regression is singular uses the
//!   gap-filled values over its range.
//!
//! ## Key concepts
//!
//! ```text
//! slice_count = max(1, (good - overlap) / (slice_size - overlap))
//! step        = (good - overlap) / slice_count
//! slice_size' = step + overlap
//! first_size  = slice_size' + (good - overlap - slice_count * step)
//! ```
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Slice 0 covers the leading gap from position 0.
//! * Positions after the last slice's final valid sample are zero.
//!
//! ## Non-goals
//!
//! * This module does not reject outliers; it trusts the validity it is given.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::Range;
use log::{debug, trace, warn};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::GapInterpolator;
use crate::algorithms::regression::QuadraticRegressor;
use crate::algorithms::smoothing::WindowedMedianSmoother;
use crate::math::linalg::FloatLinalg;
use crate::math::polynomial::Quadratic;
use crate::primitives::sample::{position, valid_indices};

// ============================================================================
// Slice
// ============================================================================

/// Contiguous range of the sequence fitted by one quadratic.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice<T> {
    /// Position of the slice's first valid sample.
    pub start_index: usize,

    /// One past the position of the slice's last valid sample.
    pub end_index: usize,

    /// Position where the next slice's samples begin (`end_index` for the last slice).
    pub overlap_start: usize,

    /// `(position, smoothed value)` pairs of the slice's valid samples.
    pub points: Vec<(T, T)>,

    /// Fitted coefficients, `None` when the regression was singular.
    pub coefficients: Option<Quadratic<T>>,
}

impl<T: Float> Slice<T> {
    /// Positions shared with the next slice.
    pub fn overlap(&self) -> Range<usize> {
        self.overlap_start..self.end_index
    }

    /// Value of the slice curve at `index`, or `fallback` without coefficients.
    #[inline]
    pub fn value_at(&self, index: usize, fallback: T) -> T {
        match &self.coefficients {
            Some(q) => q.evaluate(position(index)),
            None => fallback,
        }
    }
}

// ============================================================================
// Slice Plan
// ============================================================================

/// Division of the valid samples into overlapping slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlicePlan {
    /// Number of slices.
    pub slice_count: usize,

    /// Valid samples per slice after adjustment.
    pub slice_size: usize,

    /// Valid samples in the first slice.
    pub first_slice_size: usize,

    /// Valid samples shared by adjacent slices.
    pub overlap_size: usize,
}

impl SlicePlan {
    /// Plan the slicing of `good_count` valid samples.
    ///
    /// Requires `overlap_size < slice_size`.
    pub fn new(good_count: usize, slice_size: usize, overlap_size: usize) -> Self {
        let step = slice_size.saturating_sub(overlap_size).max(1);
        let span = good_count.saturating_sub(overlap_size);
        let slice_count = (span / step).max(1);

        if slice_count == 1 {
            return Self {
                slice_count,
                slice_size: good_count,
                first_slice_size: good_count,
                overlap_size,
            };
        }

        let adjusted_step = span / slice_count;
        let remainder = span - slice_count * adjusted_step;
        let adjusted_size = adjusted_step + overlap_size;

        Self {
            slice_count,
            slice_size: adjusted_size,
            first_slice_size: adjusted_size + remainder,
            overlap_size,
        }
    }

    /// Ranges of valid-sample ordinals covered by each slice.
    pub fn ranges(&self) -> Vec<Range<usize>> {
        let mut ranges = Vec::with_capacity(self.slice_count);
        let mut end = self.first_slice_size;
        ranges.push(0..end);
        for _ in 1..self.slice_count {
            let start = end - self.overlap_size;
            end = start + self.slice_size;
            ranges.push(start..end);
        }
        ranges
    }
}

// ============================================================================
// Piecewise Approximator
// ============================================================================

/// Output of the piecewise approximator.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseOutput<T> {
    /// Fitted sequence, same length as the input.
    pub fitted: Vec<T>,

    /// Fitted slices, empty when the approximator fell back.
    pub slices: Vec<Slice<T>>,

    /// Whether there were too few valid samples for piecewise fitting.
    pub below_minimum: bool,
}

/// Overlapping-slice quadratic approximator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PiecewiseApproximator {
    count_min: usize,
    slice_size: usize,
    overlap_size: usize,
    smoother: WindowedMedianSmoother,
    regressor: QuadraticRegressor,
}

impl Default for PiecewiseApproximator {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_COUNT_MIN,
            Self::DEFAULT_SLICE_SIZE,
            Self::DEFAULT_OVERLAP_SIZE,
        )
    }
}

impl PiecewiseApproximator {
    /// Default minimum number of valid samples.
    pub const DEFAULT_COUNT_MIN: usize = 50;

    /// Default valid samples per slice.
    pub const DEFAULT_SLICE_SIZE: usize = 200;

    /// Default valid samples shared by adjacent slices.
    pub const DEFAULT_OVERLAP_SIZE: usize = 100;

    /// Create an approximator. Requires `2 * overlap_size <= slice_size`.
    pub fn new(count_min: usize, slice_size: usize, overlap_size: usize) -> Self {
        Self {
            count_min,
            slice_size,
            overlap_size,
            smoother: WindowedMedianSmoother::default(),
            regressor: QuadraticRegressor::default(),
        }
    }

    /// Replace the pre-smoothing stage.
    pub fn with_smoother(mut self, smoother: WindowedMedianSmoother) -> Self {
        self.smoother = smoother;
        self
    }

    /// Replace the slice regressor.
    pub fn with_regressor(mut self, regressor: QuadraticRegressor) -> Self {
        self.regressor = regressor;
        self
    }

    /// Minimum number of valid samples for piecewise fitting.
    pub fn count_min(&self) -> usize {
        self.count_min
    }

    /// Valid samples per slice.
    pub fn slice_size(&self) -> usize {
        self.slice_size
    }

    /// Valid samples shared by adjacent slices.
    pub fn overlap_size(&self) -> usize {
        self.overlap_size
    }

    /// Fit a sequence.
    pub fn approximate<T: FloatLinalg>(
        &self,
        values: &[T],
        validity: &[bool],
    ) -> PiecewiseOutput<T> {
        let interpolated = GapInterpolator::fill(values, validity);
        let good = valid_indices(validity, values.len());

        if good.len() < self.count_min || good.len() < QuadraticRegressor::MIN_POINTS {
            debug!(
                "Piecewise fit skipped: {} valid points, {} required",
                good.len(),
                self.count_min
            );
            return PiecewiseOutput {
                fitted: interpolated,
                slices: Vec::new(),
                below_minimum: true,
            };
        }

        let smoothed = self.smoother.smooth(&interpolated);
        let plan = SlicePlan::new(good.len(), self.slice_size, self.overlap_size);
        debug!(
            "Piecewise plan: {} slices of {} points (first {}), overlap {}",
            plan.slice_count, plan.slice_size, plan.first_slice_size, plan.overlap_size
        );

        let slices = self.fit_slices(&good, &smoothed, &plan);
        let fitted = Self::stitch(&slices, &interpolated);

        PiecewiseOutput {
            fitted,
            slices,
            below_minimum: false,
        }
    }

    /// Build and fit the slices of `plan` over the valid positions `good`.
    fn fit_slices<T: FloatLinalg>(
        &self,
        good: &[usize],
        smoothed: &[T],
        plan: &SlicePlan,
    ) -> Vec<Slice<T>> {
        let ranges = plan.ranges();
        let mut slices: Vec<Slice<T>> = Vec::with_capacity(ranges.len());

        for (k, range) in ranges.iter().enumerate() {
            let members = &good[range.clone()];
            let points: Vec<(T, T)> = members
                .iter()
                .map(|&i| (position(i), smoothed[i]))
                .collect();
            let coefficients = self.regressor.fit(&points);

            let start_index = members[0];
            let end_index = members[members.len() - 1] + 1;
            let overlap_start = ranges
                .get(k + 1)
                .map_or(end_index, |next| good[next.start]);

            match &coefficients {
                Some(q) => trace!(
                    "Slice {}: positions {}..{}, a={:?} b={:?} c={:?}",
                    k, start_index, end_index, q.a, q.b, q.c
                ),
                None => warn!(
                    "Slice {}: singular fit over positions {}..{}; using interpolation",
                    k, start_index, end_index
                ),
            }

            slices.push(Slice {
                start_index,
                end_index,
                overlap_start,
                points,
                coefficients,
            });
        }

        slices
    }

    /// Stitch slice curves into a full-length sequence.
    ///
    /// `fallback` supplies values for slices without coefficients and fixes
    /// the output length.
    pub fn stitch<T: Float>(slices: &[Slice<T>], fallback: &[T]) -> Vec<T> {
        let n = fallback.len();
        let mut out = vec![T::zero(); n];

        for (k, slice) in slices.iter().enumerate() {
            let end = slice.end_index.min(n);

            let Some(prev) = k.checked_sub(1).map(|p| &slices[p]) else {
                for (i, slot) in out.iter_mut().enumerate().take(end) {
                    *slot = slice.value_at(i, fallback[i]);
                }
                continue;
            };

            let blend = prev.overlap();
            let begin = blend.start.min(prev.end_index);
            let width = blend.end.saturating_sub(blend.start);

            for i in begin..end {
                let current = slice.value_at(i, fallback[i]);
                out[i] = if blend.contains(&i) {
                    let weight = T::from(i - blend.start).unwrap_or_else(T::zero)
                        / T::from(width).unwrap_or_else(T::one);
                    let previous = prev.value_at(i, fallback[i]);
                    previous * (T::one() - weight) + current * weight
                } else {
                    current
                };
            }
        }

        out
    }
}
