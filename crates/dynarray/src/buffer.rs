//! Contiguous backing storage for dynamic arrays.
//!
//! A [`Buffer`] owns one `ArrayD<A>` of shape `(capacity,) + element_shape`.
//! It is the only place storage is allocated or copied; capacity changes
//! always produce a new buffer via [`Buffer::resize`].

use std::fmt;

use dynarray_core::{Element, Shape};
use ndarray::{ArrayD, ArrayViewD, ArrayViewMutD, Axis, IxDyn, Slice};

/// A fixed-capacity block of element slots.
///
/// Slots are filled with `A::default()` at allocation. Callers must
/// still treat every slot past their logical size as unspecified: after
/// a shrink-then-grow cycle those slots hold whatever was there before.
#[derive(Clone)]
pub struct Buffer<A> {
    /// Backing storage, shape `(capacity,) + element_shape`.
    data: ArrayD<A>,
    element_shape: Shape,
}

impl<A: Element> Buffer<A> {
    /// Allocate storage for `capacity` elements of `element_shape`.
    pub fn allocate(capacity: usize, element_shape: &Shape) -> Self {
        let dims = element_shape.with_leading(capacity);
        Self {
            data: ArrayD::from_elem(IxDyn(&dims), A::default()),
            element_shape: element_shape.clone(),
        }
    }

    /// Produce a buffer with `new_capacity` slots.
    ///
    /// Slots whose index exists in both buffers are copied; shrinking
    /// truncates and growing leaves the new tail unspecified.
    pub fn resize(&self, new_capacity: usize) -> Self {
        let keep = self.capacity().min(new_capacity);
        let mut next = Self::allocate(new_capacity, &self.element_shape);
        next.rows_mut(0, keep).assign(&self.rows(0, keep));
        next
    }

    /// Number of element slots.
    pub fn capacity(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    /// Shape of a single slot.
    pub fn element_shape(&self) -> &Shape {
        &self.element_shape
    }

    /// Read-only view of the first `size` slots.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds the capacity.
    pub fn view(&self, size: usize) -> ArrayViewD<'_, A> {
        self.rows(0, size)
    }

    /// Mutable view of the first `size` slots.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds the capacity.
    pub fn view_mut(&mut self, size: usize) -> ArrayViewMutD<'_, A> {
        self.rows_mut(0, size)
    }

    /// Mutable view of the single slot at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not below the capacity.
    pub fn slot_mut(&mut self, index: usize) -> ArrayViewMutD<'_, A> {
        self.data.index_axis_mut(Axis(0), index)
    }

    /// Mutable view of slots `[start, end)`.
    ///
    /// # Panics
    ///
    /// Panics if the range is reversed or `end` exceeds the capacity.
    pub fn rows_mut(&mut self, start: usize, end: usize) -> ArrayViewMutD<'_, A> {
        let mut view = self.data.view_mut();
        view.slice_axis_inplace(Axis(0), Slice::from(start..end));
        view
    }

    /// Memory usage of the backing storage in bytes.
    pub fn memory_bytes(&self) -> usize {
        self.data.len() * A::TYPE.size_bytes()
    }

    fn rows(&self, start: usize, end: usize) -> ArrayViewD<'_, A> {
        let mut view = self.data.view();
        view.slice_axis_inplace(Axis(0), Slice::from(start..end));
        view
    }
}

impl<A> fmt::Debug for Buffer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("capacity", &self.data.len_of(Axis(0)))
            .field("element_shape", &self.element_shape)
            .finish_non_exhaustive()
    }
}
