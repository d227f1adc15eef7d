//! The capacity decision made whenever the logical size of a `DynamicArray` changes.
//!
//! The decision is kept separate from the buffer manipulation so every branch can be verified
//! without going through the container.

use crate::{Error, Result};

/// Multiplier applied to a target size when allocating storage for it.
pub(crate) const GROWTH_FACTOR: usize = 2;

/// A reallocation to a smaller buffer happens only once the requested size drops below
/// `capacity / SHRINK_THRESHOLD_FACTOR`. This keeps small oscillations around one size from
/// reallocating on every step.
pub(crate) const SHRINK_THRESHOLD_FACTOR: usize = 3;

/// What the container must do to its buffer before accepting a new logical size.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum CapacityPlan {
    /// Drop the buffer and replace it with an empty one.
    Release,

    /// Move all existing slots into a larger buffer of `new_capacity` slots.
    Grow { new_capacity: usize },

    /// Move the first `retained` slots into a smaller buffer of `new_capacity` slots.
    Shrink { new_capacity: usize, retained: usize },

    /// Reset every slot from `from` to the end of the buffer to the default value.
    ClearTail { from: usize },

    /// The buffer is fine as it is.
    Keep,
}

/// Decides how the buffer must change so it can hold `minimum` logical elements, given the
/// current logical `size` and allocated `capacity`.
///
/// The branches are evaluated in order and the first match wins.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the capacity required for `minimum` elements does not
/// fit in `usize`.
pub(crate) fn plan(minimum: usize, size: usize, capacity: usize) -> Result<CapacityPlan> {
    if minimum == 0 {
        return Ok(CapacityPlan::Release);
    }

    if minimum >= capacity {
        return Ok(CapacityPlan::Grow {
            new_capacity: scaled_capacity(minimum)?,
        });
    }

    #[expect(
        clippy::integer_division,
        reason = "the shrink threshold is defined in terms of truncating division"
    )]
    let shrink_threshold = capacity / SHRINK_THRESHOLD_FACTOR;

    if minimum < shrink_threshold {
        return Ok(CapacityPlan::Shrink {
            new_capacity: scaled_capacity(minimum)?,
            retained: minimum,
        });
    }

    if minimum < size {
        return Ok(CapacityPlan::ClearTail { from: minimum });
    }

    Ok(CapacityPlan::Keep)
}

/// The number of slots allocated when a buffer is sized for `size` elements.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if the result does not fit in `usize`.
pub(crate) fn scaled_capacity(size: usize) -> Result<usize> {
    size.checked_mul(GROWTH_FACTOR)
        .ok_or_else(|| Error::InvalidArgument {
            problem: format!("the capacity required for {size} elements overflows usize"),
        })
}
