//! Per-element shapes.

use std::fmt;

use smallvec::SmallVec;

/// The shape of one logical element of a dynamic array.
///
/// An empty shape is a scalar element. Shapes are small and copied often,
/// so up to four axes are stored inline.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Shape {
    dims: SmallVec<[usize; 4]>,
}

impl Shape {
    /// The rank-0 (scalar) shape `()`.
    pub fn scalar() -> Self {
        Self::default()
    }

    /// Build a shape from axis lengths.
    pub fn new(dims: &[usize]) -> Self {
        Self {
            dims: SmallVec::from_slice(dims),
        }
    }

    /// Axis lengths.
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Number of axes.
    pub fn rank(&self) -> usize {
        self.dims.len()
    }

    /// Number of scalars in one element of this shape.
    pub fn numel(&self) -> usize {
        self.dims.iter().product()
    }

    /// Returns `true` for `()` and `(1,)`, the two shapes treated as
    /// interchangeable single values.
    pub fn is_unit(&self) -> bool {
        is_unit_dims(&self.dims)
    }

    /// The shape of a buffer holding `leading` elements of this shape:
    /// `(leading,) + self`.
    pub fn with_leading(&self, leading: usize) -> Vec<usize> {
        let mut dims = Vec::with_capacity(self.rank() + 1);
        dims.push(leading);
        dims.extend_from_slice(&self.dims);
        dims
    }
}

/// Returns `true` if `dims` is `()` or `(1,)`.
pub fn is_unit_dims(dims: &[usize]) -> bool {
    dims.is_empty() || dims == [1]
}

impl From<&[usize]> for Shape {
    fn from(dims: &[usize]) -> Self {
        Self::new(dims)
    }
}

impl From<Vec<usize>> for Shape {
    fn from(dims: Vec<usize>) -> Self {
        Self {
            dims: SmallVec::from_vec(dims),
        }
    }
}

impl<const N: usize> From<[usize; N]> for Shape {
    fn from(dims: [usize; N]) -> Self {
        Self::new(&dims)
    }
}

impl PartialEq<[usize]> for Shape {
    fn eq(&self, other: &[usize]) -> bool {
        self.dims() == other
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dims.as_slice() {
            [] => write!(f, "()"),
            [only] => write!(f, "({only},)"),
            [first, rest @ ..] => {
                write!(f, "({first}")?;
                for d in rest {
                    write!(f, ", {d}")?;
                }
                write!(f, ")")
            }
        }
    }
}
