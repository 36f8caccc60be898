//! Gap filling for invalid samples.
//!
//! ## Purpose
//!
//! This module reconstructs every invalid sample of a sequence from its valid
//! neighbours so downstream consumers always receive a gap-free sequence.
//!
//! ## Design notes
//!
//! * **Interior gaps**: Linear interpolation between the nearest valid samples:
//!   `y_i = y_lo + (i - lo) * (y_hi - y_lo) / (hi - lo)`.
//! * **Edges**: Constant extrapolation of the first (leading gap) and last
//!   (trailing gap) valid values.
//! * **No data**: An all-invalid sequence becomes all zeros.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * Output length equals input length.
//! * Valid samples are copied unchanged.
//! * Output never contains gaps.
//!
//! ## Non-goals
//!
//! * This module does not decide which samples are valid.
//! * This module does not provide higher-order interpolation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::is_valid;

// ============================================================================
// Gap Interpolator
// ============================================================================

/// Fills invalid samples by linear interpolation and edge extrapolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GapInterpolator;

impl GapInterpolator {
    /// Return a copy of `values` with every invalid position filled.
    pub fn fill<T: Float>(values: &[T], validity: &[bool]) -> Vec<T> {
        let mut out = values.to_vec();
        let n = out.len();
        let mut last_valid: Option<usize> = None;

        for i in 0..n {
            if !is_valid(validity, i) {
                continue;
            }

            match last_valid {
                // Leading gap takes the first valid value
                None => {
                    let value = out[i];
                    out[..i].fill(value);
                }
                Some(lo) if i > lo + 1 => Self::ramp(&mut out, lo, i),
                Some(_) => {}
            }
            last_valid = Some(i);
        }

        match last_valid {
            None => out.fill(T::zero()),
            Some(lo) => {
                let value = out[lo];
                out[lo + 1..].fill(value);
            }
        }

        out
    }

    /// Linearly interpolate the open interval `(lo, hi)` in place.
    fn ramp<T: Float>(out: &mut [T], lo: usize, hi: usize) {
        let y0 = out[lo];
        let y1 = out[hi];
        let span = T::from(hi - lo).unwrap_or_else(T::infinity);
        for (k, slot) in out[lo + 1..hi].iter_mut().enumerate() {
            let offset = T::from(k + 1).unwrap_or_else(T::zero);
            *slot = y0 + offset * (y1 - y0) / span;
        }
    }
}
