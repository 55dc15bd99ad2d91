//! Core types and traits for growable dense arrays.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the element type system, per-element shapes, the error taxonomy,
//! and the capacity growth trait used by the `dynarray` engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod element;
pub mod error;
pub mod shape;
pub mod traits;

pub use element::{cast, Element, ElementType};
pub use error::ArrayError;
pub use shape::Shape;
pub use traits::GrowthPolicy;
