//! End-to-end append/extend/shrink scenarios and property tests.

use dynarray::{ArrayConfig, ArrayError, DynamicArray, ElementType, Shape};
use ndarray::{arr1, aview1, Array2, ArrayD};
use proptest::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn scalar_appends_double_on_exact_full() {
    init_logging();
    let mut a = DynamicArray::<i32>::with_capacity(Shape::scalar(), 2);
    assert_eq!(a.element_type(), ElementType::I32);

    a.push(5).unwrap();
    a.push(7).unwrap();
    assert_eq!((a.len(), a.capacity()), (2, 2));

    a.push(9).unwrap();
    assert_eq!((a.len(), a.capacity()), (3, 4));
    assert_eq!(a.slice(0..3), aview1(&[5, 7, 9]).into_dyn());
}

#[test]
fn dense_rows_then_oversized_extend() {
    init_logging();
    let rows = Array2::from_shape_vec((3, 2), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    let mut a =
        DynamicArray::<f64>::from_dense(&rows, ArrayConfig::DEFAULT_INITIAL_CAPACITY).unwrap();
    assert_eq!((a.len(), a.capacity()), (3, 10));
    assert_eq!(a.element_shape(), &Shape::from([2]));

    let more = Array2::from_shape_fn((9, 2), |(r, c)| (10 * r + c) as f64);
    a.extend(&more).unwrap();
    assert_eq!((a.len(), a.capacity()), (12, 20));
    assert_eq!(a.slice(0..3), rows.view().into_dyn());
    assert_eq!(a.slice(3..12), more.view().into_dyn());
}

#[test]
fn unit_waiver_on_scalar_array() {
    init_logging();
    let mut a = DynamicArray::<i32>::new(Shape::scalar());
    a.append(&arr1(&[1])).unwrap();
    assert_eq!(a.len(), 1);

    let err = a.append(&arr1(&[1, 2])).unwrap_err();
    assert!(matches!(err, ArrayError::ShapeMismatch { .. }));
    assert_eq!(a.len(), 1);
}

#[test]
fn dynamic_array_in_arithmetic_expression() {
    init_logging();
    let mut a = DynamicArray::<f32>::with_capacity(Shape::scalar(), 64);
    for v in [1.0f32, 2.0, 3.0] {
        a.push(v).unwrap();
    }
    let weights = arr1(&[0.5f32, 0.5, 0.5]);
    let scaled: ArrayD<f32> = &(&a * &weights) + 1.0;
    assert_eq!(scaled, arr1(&[1.5, 2.0, 2.5]).into_dyn());
    assert_eq!(scaled.len(), a.len());
}

#[test]
fn config_driven_growth_from_zero() {
    init_logging();
    let config = ArrayConfig::new(0);
    let mut a = DynamicArray::<u16>::with_config([3], &config);
    assert_eq!(a.capacity(), 0);
    a.append(aview1(&[1u16, 2, 3])).unwrap();
    assert_eq!((a.len(), a.capacity()), (1, 1));
    a.append(aview1(&[4u16, 5, 6])).unwrap();
    assert_eq!((a.len(), a.capacity()), (2, 2));
}

#[derive(Clone, Debug)]
enum Op {
    Push(i64),
    Extend(Vec<i64>),
    Shrink,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<i64>().prop_map(Op::Push),
        2 => prop::collection::vec(any::<i64>(), 0..24).prop_map(Op::Extend),
        1 => Just(Op::Shrink),
    ]
}

proptest! {
    #[test]
    fn appends_are_read_back_in_order(
        values in prop::collection::vec(any::<i32>(), 0..200),
        initial in 0usize..8,
    ) {
        let mut a = DynamicArray::<i32>::with_capacity(Shape::scalar(), initial);
        for &v in &values {
            let before = a.capacity();
            a.push(v).unwrap();
            let after = a.capacity();
            prop_assert!(after == before || after == (2 * before).max(1));
            prop_assert!(a.len() <= a.capacity());
        }
        prop_assert_eq!(a.len(), values.len());
        for (i, &v) in values.iter().enumerate() {
            prop_assert_eq!(a.get(i).unwrap().iter().copied().collect::<Vec<_>>(), vec![v]);
        }
    }

    #[test]
    fn mixed_operations_match_vec_model(
        ops in prop::collection::vec(arb_op(), 0..64),
        initial in 0usize..16,
    ) {
        let mut a = DynamicArray::<i64>::with_capacity(Shape::scalar(), initial);
        let mut model: Vec<i64> = Vec::new();

        for op in ops {
            match op {
                Op::Push(v) => {
                    a.push(v).unwrap();
                    model.push(v);
                }
                Op::Extend(batch) => {
                    let old_size = a.len();
                    let old_capacity = a.capacity();
                    a.extend(aview1(&batch)).unwrap();
                    model.extend_from_slice(&batch);
                    if old_size + batch.len() >= old_capacity {
                        prop_assert!(a.capacity() >= old_size + batch.len());
                    } else {
                        prop_assert_eq!(a.capacity(), old_capacity);
                    }
                    prop_assert_eq!(
                        a.slice(old_size..a.len()).iter().copied().collect::<Vec<_>>(),
                        batch
                    );
                }
                Op::Shrink => {
                    a.shrink_to_fit();
                    prop_assert_eq!(a.capacity(), a.len());
                }
            }
            prop_assert!(a.len() <= a.capacity());
            prop_assert_eq!(a.to_vec(), model.clone());
        }
    }

    #[test]
    fn row_extends_preserve_every_row(
        batches in prop::collection::vec(0usize..12, 1..10),
    ) {
        let mut a = DynamicArray::<f64>::with_capacity([3], 2);
        let mut expected = Vec::new();
        let mut next = 0.0;
        for rows in batches {
            let batch = Array2::from_shape_fn((rows, 3), |_| {
                next += 1.0;
                next
            });
            expected.extend(batch.iter().copied());
            a.extend(&batch).unwrap();
        }
        prop_assert_eq!(a.to_vec(), expected);
        prop_assert_eq!(a.view().shape()[1], 3);
    }
}
