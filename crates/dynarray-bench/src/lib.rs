//! Benchmark fixtures for dynarray.
//!
//! - [`filled_scalars`]: scalar-element array populated through `push`
//! - [`row_batch`]: dense `(rows, width)` batch for `extend`
//! - [`filled_rows`]: row-element array populated in a single `extend`

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use dynarray::{DynamicArray, Shape};
use ndarray::Array2;

/// Build a scalar `f64` array holding `0.0, 1.0, ..., (n - 1) as f64`.
///
/// Starts from `initial_capacity` so callers can choose how many
/// reallocations the fill goes through.
pub fn filled_scalars(n: usize, initial_capacity: usize) -> DynamicArray<f64> {
    let mut array = DynamicArray::with_capacity(Shape::scalar(), initial_capacity);
    for i in 0..n {
        array
            .push(i as f64)
            .expect("scalar push into a scalar array cannot fail");
    }
    array
}

/// Deterministic `(rows, width)` batch with values `row * width + col`.
pub fn row_batch(rows: usize, width: usize) -> Array2<f64> {
    Array2::from_shape_fn((rows, width), |(r, c)| (r * width + c) as f64)
}

/// Build a `(width,)`-element array holding `rows` rows of [`row_batch`].
pub fn filled_rows(rows: usize, width: usize) -> DynamicArray<f64> {
    let mut array = DynamicArray::with_capacity([width], 0);
    array
        .extend(&row_batch(rows, width))
        .expect("batch rows match the element shape");
    array
}
