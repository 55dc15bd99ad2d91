//! Element shape validation for appends and extends.
//!
//! Indexed writes do not go through this module.

use dynarray_core::shape::is_unit_dims;
use dynarray_core::{ArrayError, Shape};

/// Check that a value of shape `candidate` may be written into one slot.
///
/// An exact match always passes. `()` and `(1,)` are interchangeable when
/// both the candidate and the element shape are one of them.
pub fn validate(candidate: &[usize], element_shape: &Shape) -> Result<(), ArrayError> {
    if element_shape == candidate {
        return Ok(());
    }
    if is_unit_dims(candidate) && element_shape.is_unit() {
        return Ok(());
    }
    Err(ArrayError::ShapeMismatch {
        candidate: Shape::from(candidate),
        expected: element_shape.clone(),
    })
}

/// Check that `batch` is a stack of values along its first axis, each
/// passing [`validate`].
///
/// Returns the number of values in the batch.
pub fn validate_batch(batch: &[usize], element_shape: &Shape) -> Result<usize, ArrayError> {
    let (&count, rows) = batch
        .split_first()
        .ok_or_else(|| ArrayError::MissingLeadingAxis {
            shape: Shape::from(batch),
        })?;
    validate(rows, element_shape)?;
    Ok(count)
}
