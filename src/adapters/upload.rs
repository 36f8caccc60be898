//! Controller upload framing.
//!
//! ## Purpose
//!
//! This module lays a conditioned (or raw) sequence out in the fixed-size form
//! a motion controller expects: a value table padded to capacity and a packed
//! status bitmap.
//!
//! ## Design notes
//!
//! * **Source selection**: [`WriteSource::Fitted`] uploads the fitted values
//!   with every status bit set; [`WriteSource::Raw`] uploads the raw values
//!   with their validity.
//! * **Padding**: Values past `count` are `0`; status bytes cover the whole
//!   capacity.
//!
//! ## Key concepts
//!
//! ```text
//! byte j / 8, bit j % 8  <=>  validity of sample j   (LSB first)
//! ```
//!
//! ## Invariants
//!
//! * `values.len() == capacity` and `status.len() == ceil(capacity / 8)`.
//! * Status bits at or after `count` are clear.
//!
//! ## Non-goals
//!
//! * This module does not name controller tags or speak a wire protocol.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::output::ConditionResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::PathError;
use crate::primitives::sample::is_valid;

// ============================================================================
// Write Source
// ============================================================================

/// Which sequence an upload carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WriteSource {
    /// Raw values with their validity.
    #[default]
    Raw,

    /// Fitted values, every sample flagged valid.
    Fitted,
}

// ============================================================================
// Bit Packing
// ============================================================================

/// Number of status bytes needed for `capacity` samples.
#[inline]
pub fn status_len(capacity: usize) -> usize {
    capacity.div_ceil(8)
}

/// Pack a validity map into `status_len(capacity)` bytes, LSB first.
///
/// Entries beyond `capacity` are ignored.
pub fn pack_validity(validity: &[bool], capacity: usize) -> Vec<u8> {
    let mut status = vec![0u8; status_len(capacity)];
    for (j, _) in validity
        .iter()
        .enumerate()
        .take(capacity)
        .filter(|&(_, &valid)| valid)
    {
        status[j / 8] |= 1 << (j % 8);
    }
    status
}

/// Unpack the first `count` validity flags of a status bitmap.
///
/// Samples not covered by `status` read as invalid.
pub fn unpack_validity(status: &[u8], count: usize) -> Vec<bool> {
    (0..count)
        .map(|j| status.get(j / 8).is_some_and(|byte| byte & (1 << (j % 8)) != 0))
        .collect()
}

// ============================================================================
// Upload Frame
// ============================================================================

/// Fixed-capacity value table and status bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFrame<T> {
    /// Number of meaningful samples.
    pub count: usize,

    /// Values padded with zeros to capacity.
    pub values: Vec<T>,

    /// Packed validity bits padded to capacity.
    pub status: Vec<u8>,
}

impl<T: Float> UploadFrame<T> {
    /// Lay out `values` and `validity` in a frame of `capacity` samples.
    pub fn build(values: &[T], validity: &[bool], capacity: usize) -> Result<Self, PathError> {
        Validator::validate_point_count(values.len(), capacity)?;

        let mut table = vec![T::zero(); capacity];
        table[..values.len()].copy_from_slice(values);

        let flags: Vec<bool> = (0..values.len()).map(|j| is_valid(validity, j)).collect();

        Ok(Self {
            count: values.len(),
            values: table,
            status: pack_validity(&flags, capacity),
        })
    }

    /// Frame the chosen sequence of a conditioning run.
    ///
    /// `raw` holds the values the run was given.
    pub fn from_result(
        raw: &[T],
        raw_validity: &[bool],
        result: &ConditionResult<T>,
        source: WriteSource,
        capacity: usize,
    ) -> Result<Self, PathError> {
        match source {
            WriteSource::Raw => Self::build(raw, raw_validity, capacity),
            WriteSource::Fitted => {
                let fitted = result.fitted.as_deref().ok_or(PathError::NoFittedData)?;
                let all_valid = vec![true; fitted.len()];
                Self::build(fitted, &all_valid, capacity)
            }
        }
    }

    /// Capacity of the frame.
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Meaningful values and their validity, as read back from a controller.
    pub fn read_back(&self) -> (Vec<T>, Vec<bool>) {
        let count = self.count.min(self.values.len());
        (
            self.values[..count].to_vec(),
            unpack_validity(&self.status, count),
        )
    }
}
