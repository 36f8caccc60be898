//! Windowed rank smoothing.
//!
//! ## Purpose
//!
//! This module produces a denoised working copy of a gap-free sequence before
//! piecewise fitting. Each output sample is a fixed-rank order statistic of a
//! sliding window around it.
//!
//! ## Design notes
//!
//! * **Window**: `W` samples starting `W/4` positions before the output index,
//!   so the window reaches further ahead than behind.
//! * **Rank**: The element at sorted position `W/4` is taken, a lower
//!   percentile rather than the true median.
//! * **Edges**: Window positions outside the sequence replicate the nearest
//!   sample.
//! * **Selection**: Uses Quickselect (`select_nth_unstable_by`), which yields
//!   the same element as a full sort.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Every output value is one of the input values.
//!
//! ## Non-goals
//!
//! * This module does not fill gaps; the input must already be gap-free.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering::Equal;
use num_traits::Float;

// ============================================================================
// Windowed Median Smoother
// ============================================================================

/// Sliding-window fixed-rank smoother.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowedMedianSmoother {
    window: usize,
}

impl Default for WindowedMedianSmoother {
    fn default() -> Self {
        Self {
            window: Self::DEFAULT_WINDOW,
        }
    }
}

impl WindowedMedianSmoother {
    /// Default window size.
    pub const DEFAULT_WINDOW: usize = 33;

    /// Largest accepted window size.
    pub const MAX_WINDOW: usize = 1024;

    /// Create a smoother with the given window size.
    pub fn new(window: usize) -> Self {
        Self { window }
    }

    /// Window size.
    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of positions the window starts before the output index.
    pub fn lead(&self) -> usize {
        self.window >> 2
    }

    /// Sorted position of the selected element within the window.
    pub fn rank(&self) -> usize {
        self.window >> 2
    }

    /// Smooth a gap-free sequence.
    pub fn smooth<T: Float>(&self, values: &[T]) -> Vec<T> {
        let n = values.len();
        if n == 0 || self.window == 0 {
            return values.to_vec();
        }

        let lead = self.lead();
        let rank = self.rank();
        let last = n - 1;

        let mut window: Vec<T> = Vec::with_capacity(self.window);
        let mut out = Vec::with_capacity(n);

        for i in 0..n {
            window.clear();
            window.extend((0..self.window).map(|k| values[(i + k).saturating_sub(lead).min(last)]));
            window.select_nth_unstable_by(rank, |a, b| a.partial_cmp(b).unwrap_or(Equal));
            out.push(window[rank]);
        }

        out
    }
}
