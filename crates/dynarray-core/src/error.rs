//! Error types for dynamic array operations.
//!
//! Every variant is raised before any mutation takes place: an operation
//! that returns an error leaves size, capacity, and contents untouched.

use std::error::Error;
use std::fmt;

use crate::element::ElementType;
use crate::shape::Shape;

/// Errors that can occur while building, growing, or reading a dynamic array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A value's shape is incompatible with the declared element shape.
    ShapeMismatch {
        /// Shape of the rejected value.
        candidate: Shape,
        /// Declared per-element shape of the array.
        expected: Shape,
    },
    /// A batch of elements had no leading axis to iterate over.
    MissingLeadingAxis {
        /// Shape of the rejected batch.
        shape: Shape,
    },
    /// A scalar could not be represented in the array's element type.
    Cast {
        /// Textual form of the offending value.
        value: String,
        /// Element type of the source value.
        from: ElementType,
        /// Element type of the array.
        to: ElementType,
    },
    /// The growth policy produced a capacity below what was required.
    CapacityExceeded {
        /// Number of element slots required.
        requested: usize,
        /// Capacity offered by the growth policy.
        capacity: usize,
    },
    /// An index at or past the logical size.
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Logical size of the array.
        size: usize,
    },
    /// A boolean mask whose length differs from the logical size.
    MaskLength {
        /// Length of the mask.
        mask: usize,
        /// Logical size of the array.
        size: usize,
    },
    /// A value that cannot be broadcast to the destination shape.
    Broadcast {
        /// Shape of the value.
        from: Shape,
        /// Shape of the destination.
        to: Shape,
    },
    /// A negative exponent on an integer element type.
    InvalidExponent {
        /// Textual form of the exponent.
        exponent: String,
    },
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                candidate,
                expected,
            } => {
                write!(
                    f,
                    "input shape {candidate} incompatible with array shape {expected}"
                )
            }
            Self::MissingLeadingAxis { shape } => {
                write!(f, "batch of shape {shape} has no leading axis")
            }
            Self::Cast { value, from, to } => {
                write!(f, "cannot cast {value} from {from} to {to}")
            }
            Self::CapacityExceeded {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "capacity exceeded: requested {requested} slots, growth policy offered {capacity}"
                )
            }
            Self::IndexOutOfBounds { index, size } => {
                write!(f, "index {index} out of bounds for size {size}")
            }
            Self::MaskLength { mask, size } => {
                write!(f, "boolean mask of length {mask} does not match size {size}")
            }
            Self::Broadcast { from, to } => {
                write!(f, "cannot broadcast shape {from} to {to}")
            }
            Self::InvalidExponent { exponent } => {
                write!(f, "integers cannot be raised to the negative power {exponent}")
            }
        }
    }
}

impl Error for ArrayError {}
