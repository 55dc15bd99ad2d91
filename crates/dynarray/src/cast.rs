//! Elementwise conversion of incoming values to the array's element type.

use dynarray_core::{cast, ArrayError, Element};
use log::trace;
use ndarray::{Array, ArrayView, Dimension};

/// Copy `view` into a new array of element type `A`, preserving its shape.
///
/// Fails on the first scalar that `A` cannot represent; nothing is
/// returned in that case, so callers never see a partially cast value.
pub(crate) fn cast_array<A, B, D>(view: &ArrayView<'_, B, D>) -> Result<Array<A, D>, ArrayError>
where
    A: Element,
    B: Element,
    D: Dimension,
{
    if A::TYPE != B::TYPE {
        trace!("casting {} values from {} to {}", view.len(), B::TYPE, A::TYPE);
    }
    let mut out = Array::from_elem(view.raw_dim(), A::default());
    for (dst, &src) in out.iter_mut().zip(view.iter()) {
        *dst = cast(src)?;
    }
    Ok(out)
}
