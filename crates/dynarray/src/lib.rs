//! Growable arrays with a fixed per-element shape.
//!
//! A [`DynamicArray`] keeps a contiguous `ndarray` buffer of
//! `capacity × element_shape` slots and exposes only the first `size`
//! of them. Appends and extends run in amortized constant time; the
//! logical prefix can be read, sliced, and used in arithmetic exactly
//! like a plain dense array.
//!
//! # Architecture
//!
//! ```text
//! DynamicArray (orchestrator, tracks size vs capacity)
//! ├── Buffer          (owns ArrayD<A> of shape (capacity,) + element_shape)
//! ├── GrowthPolicy    (Doubling by default; consulted on overflow only)
//! ├── validate        (element shape checks for append/extend)
//! └── ops             (arithmetic/comparison forwarded to the logical view)
//! ```
//!
//! # Validation asymmetry
//!
//! `append` and `extend` check value shapes against the element shape,
//! with `()` and `(1,)` accepted interchangeably. Indexed writes
//! (`set`, `set_slice`) only apply ndarray's broadcasting rules.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod buffer;
mod cast;
pub mod config;
pub mod growth;
pub mod ops;
pub mod validate;

// Public re-exports for the primary API surface.
pub use array::DynamicArray;
pub use buffer::Buffer;
pub use config::ArrayConfig;
pub use dynarray_core::{ArrayError, Element, ElementType, GrowthPolicy, Shape};
pub use growth::Doubling;
