//! Arithmetic and comparison forwarded to the logical view.
//!
//! A [`DynamicArray`] can stand on either side of `+`, `-`, `*` and `/`
//! next to an ndarray array, another dynamic array, or a scalar of its
//! element type. Every operator evaluates on `view()` (the populated
//! prefix) and returns a plain `ArrayD<A>`; the result is never
//! re-wrapped as a dynamic array.
//!
//! Array-array operators follow ndarray's co-broadcasting rules and panic
//! when the shapes are incompatible, as ndarray does. Integer division by
//! zero panics.
//!
//! Rust has no power or elementwise-equality operator, so those are the
//! inherent methods [`pow`](DynamicArray::pow), [`rpow`](DynamicArray::rpow),
//! [`pow_array`](DynamicArray::pow_array),
//! [`eq_elementwise`](DynamicArray::eq_elementwise) and
//! [`eq_scalar`](DynamicArray::eq_scalar).

use std::ops::{Add, Div, Mul, Sub};

use dynarray_core::{ArrayError, Element, Shape};
use ndarray::{ArrayBase, ArrayD, ArrayViewD, Data, Dimension};

use crate::array::DynamicArray;

macro_rules! forward_array_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<'a, A, P, S, D> $trait<&'a ArrayBase<S, D>> for &'a DynamicArray<A, P>
        where
            A: Element,
            S: Data<Elem = A>,
            D: Dimension,
        {
            type Output = ArrayD<A>;

            fn $method(self, rhs: &'a ArrayBase<S, D>) -> ArrayD<A> {
                &self.view() $op &rhs.view().into_dyn()
            }
        }

        impl<'a, A, P, S, D> $trait<&'a DynamicArray<A, P>> for &'a ArrayBase<S, D>
        where
            A: Element,
            S: Data<Elem = A>,
            D: Dimension,
        {
            type Output = ArrayD<A>;

            fn $method(self, rhs: &'a DynamicArray<A, P>) -> ArrayD<A> {
                &self.view().into_dyn() $op &rhs.view()
            }
        }

        impl<'a, 'b, A, P, Q> $trait<&'b DynamicArray<A, Q>> for &'a DynamicArray<A, P>
        where
            A: Element,
        {
            type Output = ArrayD<A>;

            fn $method(self, rhs: &'b DynamicArray<A, Q>) -> ArrayD<A> {
                &self.view() $op &rhs.view()
            }
        }
    };
}

forward_array_binop!(Add, add, +);
forward_array_binop!(Sub, sub, -);
forward_array_binop!(Mul, mul, *);
forward_array_binop!(Div, div, /);

macro_rules! forward_scalar_binop {
    ($scalar:ty, $trait:ident, $method:ident, $op:tt) => {
        impl<'a, P> $trait<$scalar> for &'a DynamicArray<$scalar, P> {
            type Output = ArrayD<$scalar>;

            fn $method(self, rhs: $scalar) -> ArrayD<$scalar> {
                self.view().mapv(|x| x $op rhs)
            }
        }

        impl<'a, P> $trait<&'a DynamicArray<$scalar, P>> for $scalar {
            type Output = ArrayD<$scalar>;

            fn $method(self, rhs: &'a DynamicArray<$scalar, P>) -> ArrayD<$scalar> {
                rhs.view().mapv(|x| self $op x)
            }
        }
    };
}

macro_rules! forward_scalar_ops {
    ($($scalar:ty),* $(,)?) => {
        $(
            forward_scalar_binop!($scalar, Add, add, +);
            forward_scalar_binop!($scalar, Sub, sub, -);
            forward_scalar_binop!($scalar, Mul, mul, *);
            forward_scalar_binop!($scalar, Div, div, /);
        )*
    };
}

forward_scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<A: Element, P> DynamicArray<A, P> {
    /// Raise every element to `exponent`.
    pub fn pow(&self, exponent: A) -> Result<ArrayD<A>, ArrayError> {
        map_fallible(self.view(), |x| checked_pow(x, exponent))
    }

    /// Raise `base` to every element.
    pub fn rpow(&self, base: A) -> Result<ArrayD<A>, ArrayError> {
        map_fallible(self.view(), |x| checked_pow(base, x))
    }

    /// Raise every element to the matching entry of `exponents`.
    ///
    /// `exponents` is broadcast to the logical view's shape.
    pub fn pow_array<S, D>(&self, exponents: &ArrayBase<S, D>) -> Result<ArrayD<A>, ArrayError>
    where
        S: Data<Elem = A>,
        D: Dimension,
    {
        zip_broadcast(self.view(), exponents, checked_pow)
    }

    /// Elementwise equality against `other`, broadcast to the logical
    /// view's shape.
    pub fn eq_elementwise<S, D>(&self, other: &ArrayBase<S, D>) -> Result<ArrayD<bool>, ArrayError>
    where
        S: Data<Elem = A>,
        D: Dimension,
    {
        zip_broadcast(self.view(), other, |x, y| Ok(x == y))
    }

    /// Elementwise equality against a scalar.
    pub fn eq_scalar(&self, value: A) -> ArrayD<bool> {
        self.view().mapv(|x| x == value)
    }
}

impl<A, P, S, D> PartialEq<DynamicArray<A, P>> for ArrayBase<S, D>
where
    A: Element,
    S: Data<Elem = A>,
    D: Dimension,
{
    fn eq(&self, other: &DynamicArray<A, P>) -> bool {
        self.view().into_dyn() == other.view()
    }
}

fn checked_pow<A: Element>(base: A, exponent: A) -> Result<A, ArrayError> {
    base.pow(exponent).ok_or_else(|| ArrayError::InvalidExponent {
        exponent: exponent.to_string(),
    })
}

fn map_fallible<A, F>(view: ArrayViewD<'_, A>, mut f: F) -> Result<ArrayD<A>, ArrayError>
where
    A: Element,
    F: FnMut(A) -> Result<A, ArrayError>,
{
    let mut out = ArrayD::from_elem(view.raw_dim(), A::default());
    for (dst, &src) in out.iter_mut().zip(view.iter()) {
        *dst = f(src)?;
    }
    Ok(out)
}

fn zip_broadcast<A, B, S, D, F>(
    lhs: ArrayViewD<'_, A>,
    rhs: &ArrayBase<S, D>,
    mut f: F,
) -> Result<ArrayD<B>, ArrayError>
where
    A: Element,
    B: Clone + Default,
    S: Data<Elem = A>,
    D: Dimension,
    F: FnMut(A, A) -> Result<B, ArrayError>,
{
    let rhs = rhs
        .broadcast(lhs.raw_dim())
        .ok_or_else(|| ArrayError::Broadcast {
            from: Shape::from(rhs.shape()),
            to: Shape::from(lhs.shape()),
        })?;
    let mut out = ArrayD::from_elem(lhs.raw_dim(), B::default());
    for (dst, (&x, &y)) in out.iter_mut().zip(lhs.iter().zip(rhs.iter())) {
        *dst = f(x, y)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr0, arr1, arr2, aview1};

    fn sample() -> DynamicArray<i32> {
        DynamicArray::from_dense(&arr1(&[1, 2, 3, 4, 5]), 8).unwrap()
    }

    #[test]
    fn array_operators_use_logical_length() {
        let mut a = DynamicArray::<i32>::with_capacity(Shape::scalar(), 10);
        a.extend(aview1(&[1, 2, 3])).unwrap();
        let b = arr1(&[10, 20, 30]);

        assert_eq!(&a + &b, arr1(&[11, 22, 33]).into_dyn());
        assert_eq!(&a - &b, arr1(&[-9, -18, -27]).into_dyn());
        assert_eq!(&a * &b, arr1(&[10, 40, 90]).into_dyn());
        assert_eq!(&b / &a, arr1(&[10, 10, 10]).into_dyn());
    }

    #[test]
    fn reflected_array_operators() {
        let a = DynamicArray::<f64>::from_dense(&arr1(&[1.0, 2.0, 4.0]), 10).unwrap();
        let b = arr1(&[8.0, 8.0, 8.0]);
        assert_eq!(&b - &a, arr1(&[7.0, 6.0, 4.0]).into_dyn());
        assert_eq!(&b / &a, arr1(&[8.0, 4.0, 2.0]).into_dyn());
        assert_eq!(&b + &a, &a + &b);
    }

    #[test]
    fn scalar_operators_both_sides() {
        let a = sample();
        assert_eq!(&a + 1, arr1(&[2, 3, 4, 5, 6]).into_dyn());
        assert_eq!(10 - &a, arr1(&[9, 8, 7, 6, 5]).into_dyn());
        assert_eq!(&a * 2, arr1(&[2, 4, 6, 8, 10]).into_dyn());
        assert_eq!(60 / &a, arr1(&[60, 30, 20, 15, 12]).into_dyn());
    }

    #[test]
    fn dynamic_array_on_both_sides() {
        let a = DynamicArray::<i32>::from_dense(&arr1(&[1, 2]), 10).unwrap();
        let b = DynamicArray::<i32>::from_dense(&arr1(&[3, 4]), 2).unwrap();
        assert_eq!(&a + &b, arr1(&[4, 6]).into_dyn());
        assert_eq!(&b - &a, arr1(&[2, 2]).into_dyn());
    }

    #[test]
    fn operators_broadcast_rows() {
        let a = DynamicArray::<i32>::from_dense(&arr2(&[[1, 2], [3, 4]]), 10).unwrap();
        let row = arr1(&[10, 100]);
        assert_eq!(&a * &row, arr2(&[[10, 200], [30, 400]]).into_dyn());
    }

    #[test]
    fn operators_match_dense_equivalent() {
        let a = sample();
        let dense = a.to_dense();
        let other = arr1(&[5, 4, 3, 2, 1]).into_dyn();
        assert_eq!(&a + &other, &dense + &other);
        assert_eq!(&a * 3, &dense * 3);
    }

    #[test]
    fn pow_forms() {
        let a = DynamicArray::<i64>::from_dense(&arr1(&[1, 2, 3]), 4).unwrap();
        assert_eq!(a.pow(2).unwrap(), arr1(&[1, 4, 9]).into_dyn());
        assert_eq!(a.rpow(2).unwrap(), arr1(&[2, 4, 8]).into_dyn());
        assert_eq!(
            a.pow_array(&arr1(&[3, 2, 1])).unwrap(),
            arr1(&[1, 4, 3]).into_dyn()
        );
        assert_eq!(a.pow_array(&arr0(0)).unwrap(), arr1(&[1, 1, 1]).into_dyn());
    }

    #[test]
    fn negative_integer_exponent_is_rejected() {
        let a = DynamicArray::<i32>::from_dense(&arr1(&[1, 2]), 4).unwrap();
        assert_eq!(
            a.pow(-1).unwrap_err(),
            ArrayError::InvalidExponent {
                exponent: "-1".into()
            }
        );
        let f = DynamicArray::<f64>::from_dense(&arr1(&[2.0, 4.0]), 4).unwrap();
        assert_eq!(f.pow(-1.0).unwrap(), arr1(&[0.5, 0.25]).into_dyn());
    }

    #[test]
    fn large_integer_exponent_wraps() {
        let a = DynamicArray::<u64>::from_dense(&arr1(&[0, 1, 2]), 4).unwrap();
        assert_eq!(a.pow(1 << 33).unwrap(), arr1(&[0, 1, 0]).into_dyn());
    }

    #[test]
    fn pow_array_rejects_unbroadcastable_exponents() {
        let a = DynamicArray::<f32>::from_dense(&arr1(&[1.0, 2.0, 3.0]), 4).unwrap();
        let err = a.pow_array(&arr1(&[1.0, 2.0])).unwrap_err();
        assert!(matches!(err, ArrayError::Broadcast { .. }));
    }

    #[test]
    fn elementwise_equality() {
        let a = sample();
        assert_eq!(
            a.eq_elementwise(&arr1(&[1, 0, 3, 0, 5])).unwrap(),
            arr1(&[true, false, true, false, true]).into_dyn()
        );
        assert_eq!(
            a.eq_scalar(2),
            arr1(&[false, true, false, false, false]).into_dyn()
        );
    }

    #[test]
    fn whole_array_equality_both_directions() {
        let a = DynamicArray::<i32>::from_dense(&arr1(&[1, 2]), 10).unwrap();
        assert!(a == arr1(&[1, 2]));
        assert!(arr1(&[1, 2]) == a);
        assert!(arr1(&[1, 2, 0]) != a);
    }
}
