//! The growable array and its size/capacity bookkeeping.
//!
//! [`DynamicArray`] is the only mutation entry point. It owns a
//! [`Buffer`], consults its [`GrowthPolicy`] when a write would
//! overflow, and validates element shapes before anything is written.

use std::fmt;

use dynarray_core::{ArrayError, Element, ElementType, GrowthPolicy, Shape};
use log::{debug, trace};
use ndarray::{arr0, Array, ArrayBase, ArrayD, ArrayView, ArrayViewD, ArrayViewMutD, AsArray, Axis, Data, Dimension, Slice};

use crate::buffer::Buffer;
use crate::cast::cast_array;
use crate::config::ArrayConfig;
use crate::growth::Doubling;
use crate::validate::{validate, validate_batch};

/// A growable array of fixed-shape elements.
///
/// Storage is a single `ArrayD<A>` of shape `(capacity,) + element_shape`.
/// Only the first [`len`](Self::len) slots are ever exposed; everything
/// past that is scratch space kept for amortized growth.
///
/// The element type is `A` and never changes. Values of other element
/// types are cast on the way in.
#[derive(Clone)]
pub struct DynamicArray<A, P = Doubling> {
    buffer: Buffer<A>,
    /// Number of populated slots. Always `<= buffer.capacity()`.
    size: usize,
    policy: P,
}

impl<A: Element> DynamicArray<A> {
    /// Create an empty array with the default capacity of
    /// [`ArrayConfig::DEFAULT_INITIAL_CAPACITY`] slots.
    pub fn new(element_shape: impl Into<Shape>) -> Self {
        Self::with_capacity(element_shape, ArrayConfig::DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty array with room for `capacity` elements.
    pub fn with_capacity(element_shape: impl Into<Shape>, capacity: usize) -> Self {
        Self::with_policy(element_shape, capacity, Doubling::new())
    }

    /// Create an empty array from a config.
    pub fn with_config(element_shape: impl Into<Shape>, config: &ArrayConfig) -> Self {
        Self::with_policy(
            element_shape,
            config.initial_capacity,
            config.growth_policy(),
        )
    }

    /// Create an array holding a copy of `array`.
    ///
    /// The first axis of `array` indexes elements; the remaining axes
    /// become the element shape. Capacity is `max(rows, initial_capacity)`.
    pub fn from_dense<'a, B, D, V>(array: V, initial_capacity: usize) -> Result<Self, ArrayError>
    where
        B: Element,
        D: Dimension,
        V: AsArray<'a, B, D>,
    {
        Self::from_dense_with_policy(array, initial_capacity, Doubling::new())
    }
}

impl<A: Element, P> DynamicArray<A, P> {
    /// Number of populated elements.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns `true` if no elements have been added.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Number of allocated element slots.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Shape of one element.
    pub fn element_shape(&self) -> &Shape {
        self.buffer.element_shape()
    }

    /// Scalar type of the stored values.
    pub fn element_type(&self) -> ElementType {
        A::TYPE
    }

    /// Memory usage of the backing buffer in bytes, including unused slots.
    pub fn memory_bytes(&self) -> usize {
        self.buffer.memory_bytes()
    }

    /// The growth policy in use.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The logical view: shape `(len,) + element_shape`.
    ///
    /// Everything ndarray can do with a view (slicing with steps,
    /// negative indices, axis iteration, arithmetic) works on it.
    pub fn view(&self) -> ArrayViewD<'_, A> {
        self.buffer.view(self.size)
    }

    /// Mutable logical view. Writes through it are not shape-validated.
    pub fn view_mut(&mut self) -> ArrayViewMutD<'_, A> {
        self.buffer.view_mut(self.size)
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Result<ArrayViewD<'_, A>, ArrayError> {
        self.check_index(index)?;
        Ok(self.view().index_axis_move(Axis(0), index))
    }

    /// A range of elements along the first axis.
    ///
    /// Accepts anything ndarray converts into a [`Slice`], including
    /// negative (from-the-end) bounds and strided slices. Bounds past
    /// either end are clamped to `[0, len]`, so `slice(0..10)` on a
    /// three-element array yields those three elements.
    ///
    /// # Panics
    ///
    /// Panics if the step is zero.
    pub fn slice(&self, range: impl Into<Slice>) -> ArrayViewD<'_, A> {
        let mut view = self.view();
        view.slice_axis_inplace(Axis(0), clamp_slice(range.into(), self.size));
        view
    }

    /// Copy out the elements at `indices`, in the given order.
    pub fn select(&self, indices: &[usize]) -> Result<ArrayD<A>, ArrayError> {
        for &index in indices {
            self.check_index(index)?;
        }
        Ok(self.view().select(Axis(0), indices))
    }

    /// Copy out the elements whose mask entry is `true`.
    ///
    /// The mask must have exactly one entry per element.
    pub fn mask(&self, mask: &[bool]) -> Result<ArrayD<A>, ArrayError> {
        if mask.len() != self.size {
            return Err(ArrayError::MaskLength {
                mask: mask.len(),
                size: self.size,
            });
        }
        let indices: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &keep)| keep.then_some(i))
            .collect();
        Ok(self.view().select(Axis(0), &indices))
    }

    /// Overwrite the element at `index`.
    ///
    /// `value` is broadcast to the element shape using ndarray's rules;
    /// unlike [`append`](Self::append) there is no element shape check.
    pub fn set<'a, B, D, V>(&mut self, index: usize, value: V) -> Result<(), ArrayError>
    where
        B: Element,
        D: Dimension,
        V: AsArray<'a, B, D>,
    {
        self.check_index(index)?;
        let view: ArrayView<'a, B, D> = value.into();
        let value = cast_array::<A, B, D>(&view)?;
        let slot = self.view_mut().index_axis_move(Axis(0), index);
        assign_broadcast(slot, &value)
    }

    /// Overwrite a range of elements along the first axis.
    ///
    /// Like [`set`](Self::set), `value` only has to broadcast to the
    /// selected region. The range is clamped the same way as in
    /// [`slice`](Self::slice).
    ///
    /// # Panics
    ///
    /// Panics if the step is zero.
    pub fn set_slice<'a, B, D, V>(
        &mut self,
        range: impl Into<Slice>,
        value: V,
    ) -> Result<(), ArrayError>
    where
        B: Element,
        D: Dimension,
        V: AsArray<'a, B, D>,
    {
        let view: ArrayView<'a, B, D> = value.into();
        let value = cast_array::<A, B, D>(&view)?;
        let size = self.size;
        let mut rows = self.view_mut();
        rows.slice_axis_inplace(Axis(0), clamp_slice(range.into(), size));
        assign_broadcast(rows, &value)
    }

    /// Iterate over the populated elements.
    pub fn outer_iter(&self) -> impl Iterator<Item = ArrayViewD<'_, A>> + '_ {
        (0..self.size).map(move |i| self.view().index_axis_move(Axis(0), i))
    }

    /// Owned copy of the logical view.
    pub fn to_dense(&self) -> ArrayD<A> {
        self.view().to_owned()
    }

    /// All populated scalars in logical (row-major) order.
    pub fn to_vec(&self) -> Vec<A> {
        self.view().iter().copied().collect()
    }

    /// Reallocate so that capacity equals the current size.
    pub fn shrink_to_fit(&mut self) {
        debug!(
            "shrinking dynamic array from {} to {} slots",
            self.capacity(),
            self.size
        );
        self.buffer = self.buffer.resize(self.size);
    }

    fn check_index(&self, index: usize) -> Result<(), ArrayError> {
        if index < self.size {
            Ok(())
        } else {
            Err(ArrayError::IndexOutOfBounds {
                index,
                size: self.size,
            })
        }
    }
}

impl<A: Element, P: GrowthPolicy> DynamicArray<A, P> {
    /// Create an empty array with a custom growth policy.
    pub fn with_policy(element_shape: impl Into<Shape>, capacity: usize, policy: P) -> Self {
        Self {
            buffer: Buffer::allocate(capacity, &element_shape.into()),
            size: 0,
            policy,
        }
    }

    /// [`from_dense`](DynamicArray::from_dense) with a custom growth policy.
    pub fn from_dense_with_policy<'a, B, D, V>(
        array: V,
        initial_capacity: usize,
        policy: P,
    ) -> Result<Self, ArrayError>
    where
        B: Element,
        D: Dimension,
        V: AsArray<'a, B, D>,
    {
        let view: ArrayView<'a, B, D> = array.into();
        let values = cast_array::<A, B, D>(&view)?;
        let (&rows, element_dims) =
            values
                .shape()
                .split_first()
                .ok_or_else(|| ArrayError::MissingLeadingAxis {
                    shape: Shape::scalar(),
                })?;

        let mut out = Self::with_policy(element_dims, rows.max(initial_capacity), policy);
        out.buffer.rows_mut(0, rows).assign(&values);
        out.size = rows;
        Ok(out)
    }

    /// Append one element.
    ///
    /// `value` must have the element shape (or be `()`/`(1,)` when the
    /// element shape is `()`/`(1,)`). When the buffer is exactly full it
    /// is reallocated to the capacity chosen by the growth policy.
    pub fn append<'a, B, D, V>(&mut self, value: V) -> Result<(), ArrayError>
    where
        B: Element,
        D: Dimension,
        V: AsArray<'a, B, D>,
    {
        let view: ArrayView<'a, B, D> = value.into();
        let value = cast_array::<A, B, D>(&view)?;
        validate(value.shape(), self.element_shape())?;

        if self.size == self.capacity() {
            self.grow(self.size + 1)?;
        }

        let mut slot = self.buffer.slot_mut(self.size);
        for (dst, &src) in slot.iter_mut().zip(value.iter()) {
            *dst = src;
        }
        self.size += 1;
        trace!("appended element {} of {}", self.size, self.capacity());
        Ok(())
    }

    /// Append a single scalar as a rank-0 value.
    pub fn push<B: Element>(&mut self, value: B) -> Result<(), ArrayError> {
        self.append(&arr0(value))
    }

    /// Append every element of `values` along its first axis.
    ///
    /// Growth happens whenever the new size reaches the current capacity,
    /// even when it would fit exactly.
    pub fn extend<'a, B, D, V>(&mut self, values: V) -> Result<(), ArrayError>
    where
        B: Element,
        D: Dimension,
        V: AsArray<'a, B, D>,
    {
        let view: ArrayView<'a, B, D> = values.into();
        let values = cast_array::<A, B, D>(&view)?;
        let count = validate_batch(values.shape(), self.element_shape())?;

        let required = self.size + count;
        if required >= self.capacity() {
            self.grow(required)?;
        }

        let mut rows = self.buffer.rows_mut(self.size, required);
        for (dst, &src) in rows.iter_mut().zip(values.iter()) {
            *dst = src;
        }
        self.size = required;
        trace!("extended by {count} elements to {}", self.size);
        Ok(())
    }

    fn grow(&mut self, required: usize) -> Result<(), ArrayError> {
        let current = self.capacity();
        let next = self.policy.next_capacity(current, required);
        if next < required {
            return Err(ArrayError::CapacityExceeded {
                requested: required,
                capacity: next,
            });
        }
        debug!(
            "growing dynamic array from {current} to {next} slots (size {})",
            self.size
        );
        self.buffer = self.buffer.resize(next);
        Ok(())
    }
}

fn assign_broadcast<A: Element, D: Dimension>(
    mut dst: ArrayViewMutD<'_, A>,
    src: &Array<A, D>,
) -> Result<(), ArrayError> {
    // Leading length-1 axes beyond the target rank carry no data.
    let mut squeezed = src.view().into_dyn();
    while squeezed.ndim() > dst.ndim() && squeezed.len_of(Axis(0)) == 1 {
        squeezed = squeezed.index_axis_move(Axis(0), 0);
    }
    let squeezed = squeezed
        .broadcast(dst.raw_dim())
        .ok_or_else(|| ArrayError::Broadcast {
            from: Shape::from(src.shape()),
            to: Shape::from(dst.shape()),
        })?;
    dst.assign(&squeezed);
    Ok(())
}

/// Resolve negative bounds against `len` and clamp both ends into
/// `[0, len]`. The step is kept as given.
fn clamp_slice(slice: Slice, len: usize) -> Slice {
    let len = len as isize;
    let resolve = |bound: isize| {
        if bound < 0 {
            (bound + len).max(0)
        } else {
            bound.min(len)
        }
    };
    let start = resolve(slice.start);
    let end = resolve(slice.end.unwrap_or(len)).max(start);
    Slice::new(start, Some(end), slice.step)
}

impl<A: Element, P, Q> PartialEq<DynamicArray<A, Q>> for DynamicArray<A, P> {
    fn eq(&self, other: &DynamicArray<A, Q>) -> bool {
        self.view() == other.view()
    }
}

impl<A, P, S, D> PartialEq<ArrayBase<S, D>> for DynamicArray<A, P>
where
    A: Element,
    S: Data<Elem = A>,
    D: Dimension,
{
    fn eq(&self, other: &ArrayBase<S, D>) -> bool {
        self.view() == other.view().into_dyn()
    }
}

impl<A: Element, P> fmt::Display for DynamicArray<A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DynamicArray(size={}, capacity={})({})",
            self.size,
            self.capacity(),
            self.view()
        )
    }
}

impl<A: Element, P: fmt::Debug> fmt::Debug for DynamicArray<A, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("size", &self.size)
            .field("capacity", &self.capacity())
            .field("element_shape", self.element_shape())
            .field("element_type", &A::TYPE)
            .field("data", &self.view())
            .field("policy", &self.policy)
            .finish()
    }
}
