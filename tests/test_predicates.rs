//! Integration tests for the predicate family, including the per-predicate
//! combinator used on complex input.

mod common;

use common::{FailPoint, FaultyBackend, f32s, f64s, get, put};
use num_complex::Complex;
use proptest::prelude::*;
use unarrow::{CpuBackend, DenseArray, Engine, KernelError, PredicateOperator, ScalarKind, Shape};

fn special_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
        -1.0e6..1.0e6f64,
    ]
}

#[test]
fn test_real_predicates() {
    let engine = Engine::new(CpuBackend::new());
    let x = put(&engine, f64s(&[0.0, f64::NAN, f64::INFINITY, -2.0]));
    let read = |h| get(&engine, h).bool().unwrap().to_vec();
    assert_eq!(read(engine.isnan(x).unwrap()), vec![false, true, false, false]);
    assert_eq!(read(engine.isinf(x).unwrap()), vec![false, false, true, false]);
    assert_eq!(read(engine.iszero(x).unwrap()), vec![true, false, false, false]);
}

#[test]
fn test_integer_input_is_never_nan() {
    let engine = Engine::new(CpuBackend::new());
    let x = put(&engine, DenseArray::with_shape(&[0u32, 7, 0, 1], &[2, 2]).unwrap());
    let out = get(&engine, engine.isnan(x).unwrap());
    assert_eq!(out.kind(), ScalarKind::Bool);
    assert_eq!(out.shape(), get(&engine, x).shape());
    assert!(out.bool().unwrap().iter().all(|&b| !b));
}

#[test]
fn test_complex_iszero_is_not_or() {
    // 0 + 3i is not zero
    let engine = Engine::new(CpuBackend::new());
    let z = put(&engine, DenseArray::from_slice(&[Complex::new(0.0f32, 3.0)]));
    let out = get(&engine, engine.iszero(z).unwrap());
    assert_eq!(out.bool().unwrap().to_vec(), vec![false]);
}

#[test]
fn test_complex_isnan_in_either_part() {
    let engine = Engine::new(CpuBackend::new());
    let z = put(
        &engine,
        DenseArray::from_slice(&[Complex::new(1.0f64, f64::NAN), Complex::new(1.0, 1.0)]),
    );
    let out = get(&engine, engine.isnan(z).unwrap());
    assert_eq!(out.bool().unwrap().to_vec(), vec![true, false]);
}

#[test]
fn test_combinator_failure_releases_nothing_outstanding() {
    for point in [FailPoint::Check, FailPoint::Logical, FailPoint::Acquire(0)] {
        let engine = Engine::new(FaultyBackend::new());
        let z = put(&engine, DenseArray::from_slice(&[Complex::new(0.0f32, 0.0)]));
        engine.backend().arm(point);
        let err = engine.iszero(z).unwrap_err();
        assert!(matches!(err, KernelError::Backend(_)), "{point:?}");
        assert_eq!(engine.backend().live_handles(), 1, "{point:?}");
    }
}

#[test]
fn test_predicate_on_f32_stays_elementwise() {
    let engine = Engine::new(CpuBackend::new());
    let x = put(&engine, f32s(&[f32::NAN, 1.0, -0.0]));
    let out = get(&engine, engine.iszero(x).unwrap());
    assert_eq!(out.bool().unwrap().to_vec(), vec![false, false, true]);
}

proptest! {
    #[test]
    fn prop_complex_predicates_use_their_combinator(
        parts in prop::collection::vec((special_f64(), special_f64()), 1..64)
    ) {
        let engine = Engine::new(CpuBackend::new());
        let values: Vec<Complex<f64>> = parts.iter().map(|&(re, im)| Complex::new(re, im)).collect();
        let z = put(&engine, DenseArray::from_slice(&values));

        for op in PredicateOperator::ALL {
            let out = get(&engine, engine.check(op, z).unwrap());
            let got = out.bool().unwrap().to_vec();
            for (c, &b) in values.iter().zip(&got) {
                let expected = match op {
                    PredicateOperator::IsNan => c.re.is_nan() || c.im.is_nan(),
                    PredicateOperator::IsInf => c.re.is_infinite() || c.im.is_infinite(),
                    PredicateOperator::IsZero => c.re == 0.0 && c.im == 0.0,
                };
                prop_assert_eq!(b, expected, "{} on {}", op, c);
            }
        }
    }

    #[test]
    fn prop_real_predicates_match_scalar_checks(values in prop::collection::vec(special_f64(), 0..64)) {
        let engine = Engine::new(CpuBackend::new());
        let x = put(&engine, f64s(&values));
        let nan = get(&engine, engine.isnan(x).unwrap()).bool().unwrap().to_vec();
        let zero = get(&engine, engine.iszero(x).unwrap()).bool().unwrap().to_vec();
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(nan[i], v.is_nan());
            prop_assert_eq!(zero[i], *v == 0.0);
        }
    }
}
