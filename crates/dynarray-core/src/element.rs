//! Element types and the [`Element`] trait for storable scalars.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use num_traits::{NumCast, ToPrimitive};

use crate::error::ArrayError;

/// Runtime tag for the scalar type stored in an array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementType {
    /// Signed 8-bit integer.
    I8,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer.
    U16,
    /// Unsigned 32-bit integer.
    U32,
    /// Unsigned 64-bit integer.
    U64,
    /// 32-bit IEEE float.
    F32,
    /// 64-bit IEEE float.
    F64,
}

impl ElementType {
    /// Size of one scalar of this type in bytes.
    pub const fn size_bytes(self) -> usize {
        match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
        }
    }

    /// Returns `true` for the floating-point types.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Canonical lowercase name, e.g. `"int32"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::I8 => "int8",
            Self::I16 => "int16",
            Self::I32 => "int32",
            Self::I64 => "int64",
            Self::U8 => "uint8",
            Self::U16 => "uint16",
            Self::U32 => "uint32",
            Self::U64 => "uint64",
            Self::F32 => "float32",
            Self::F64 => "float64",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A primitive scalar that can be stored in a dynamic array.
///
/// Implemented for every fixed-width integer and float type. The
/// associated [`TYPE`](Element::TYPE) tag is what an array reports as its
/// element type; it never changes after construction.
pub trait Element:
    Copy
    + Default
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + NumCast
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// Runtime tag for this scalar type.
    const TYPE: ElementType;

    /// Raise `self` to `exponent`.
    ///
    /// Returns `None` for a negative integer exponent. Integer powers wrap
    /// on overflow, for any non-negative exponent.
    fn pow(self, exponent: Self) -> Option<Self>;
}

macro_rules! impl_int_element {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const TYPE: ElementType = ElementType::$tag;

                fn pow(self, exponent: Self) -> Option<Self> {
                    // Square-and-multiply over the full u64 range; wrapping
                    // matches `wrapping_pow` for exponents that fit in u32.
                    let mut e = exponent.to_u64()?;
                    let mut base = self;
                    let mut acc: Self = 1;
                    while e > 0 {
                        if e & 1 == 1 {
                            acc = acc.wrapping_mul(base);
                        }
                        base = base.wrapping_mul(base);
                        e >>= 1;
                    }
                    Some(acc)
                }
            }
        )*
    };
}

macro_rules! impl_float_element {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl Element for $ty {
                const TYPE: ElementType = ElementType::$tag;

                fn pow(self, exponent: Self) -> Option<Self> {
                    Some(self.powf(exponent))
                }
            }
        )*
    };
}

impl_int_element!(
    i8 => I8, i16 => I16, i32 => I32, i64 => I64,
    u8 => U8, u16 => U16, u32 => U32, u64 => U64,
);
impl_float_element!(f32 => F32, f64 => F64);

/// Convert a single scalar into another element type.
///
/// Conversion is exact for matching types and follows [`NumCast`]
/// otherwise: float-to-int truncates, and a value outside the target's
/// range (or NaN into an integer) is rejected with [`ArrayError::Cast`].
pub fn cast<A: Element, B: Element>(value: B) -> Result<A, ArrayError> {
    <A as NumCast>::from(value).ok_or_else(|| ArrayError::Cast {
        value: value.to_string(),
        from: B::TYPE,
        to: A::TYPE,
    })
}
