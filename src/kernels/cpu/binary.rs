// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # CPU Binary Kernels
//!
//! Elementwise binary operations and component extraction on type-erased
//! [`Array`]s, with length-1 broadcasting.
//!
//! Both operands must hold the same scalar kind. Boolean operands of the
//! arithmetic operators are promoted to `f32` first, so a boolean may meet
//! an `f32` operand there. Integer `Add` and
//! `Multiply` wrap on overflow. Integer `Pow` runs in `f64` and fails when
//! the result does not fit back into the operand kind.

use num_traits::NumCast;
use vec64::Vec64;

use crate::enums::array::Array;
use crate::enums::error::KernelError;
use crate::enums::operators::BinaryOperator;
use crate::enums::scalar_kind::ScalarKind;
use crate::kernels::routing::broadcast::maybe_broadcast_scalar_array;
use crate::structs::dense_array::DenseArray;
use crate::traits::shape::Shape;
use crate::traits::type_unions::Numeric;

/// Apply a binary function element-wise with broadcasting.
///
/// If one input has length 1 and the other has length N, the length-1
/// input is broadcast to match.
pub fn binary_map<T, R, F>(
    lhs: &DenseArray<T>,
    rhs: &DenseArray<T>,
    f: F,
) -> Result<DenseArray<R>, KernelError>
where
    T: Clone,
    F: Fn(&T, &T) -> R,
{
    let (lhs, rhs) = maybe_broadcast_scalar_array(lhs, rhs)?;
    lhs.zip_map(&rhs, f)
}

/// `base^exp` for integer kinds, evaluated in `f64`.
fn int_pow<T: Numeric>(base: &DenseArray<T>, exp: &DenseArray<T>) -> Result<DenseArray<T>, KernelError> {
    let (base, exp) = maybe_broadcast_scalar_array(base, exp)?;
    let data: Option<Vec64<T>> = base
        .iter()
        .zip(exp.iter())
        .map(|(b, e)| <T as NumCast>::from(b.to_f64()?.powf(e.to_f64()?)))
        .collect();
    data.map(|data| DenseArray::from_parts(data, base.shape.clone()))
        .ok_or_else(|| {
            KernelError::argument(
                2,
                format!("pow => result not representable as {}", std::any::type_name::<T>()),
            )
        })
}

fn unsupported(op: BinaryOperator, kind: ScalarKind) -> KernelError {
    KernelError::type_error(1, kind, format!("{op:?} is not defined for {kind}"))
}

/// Arms for the arithmetic operators. Integers use the wrapping method,
/// floating and complex kinds the plain operator.
macro_rules! arith_arms {
    ($lhs:expr, $rhs:expr, $op:expr, $wrapping:ident, $sym:tt) => {
        match ($lhs, $rhs) {
            #[cfg(feature = "extended_numeric_types")]
            (Array::Int8(a), Array::Int8(b)) => binary_map(a, b, |x, y| x.$wrapping(*y))?.into(),
            #[cfg(feature = "extended_numeric_types")]
            (Array::Int16(a), Array::Int16(b)) => binary_map(a, b, |x, y| x.$wrapping(*y))?.into(),
            #[cfg(feature = "extended_numeric_types")]
            (Array::UInt8(a), Array::UInt8(b)) => binary_map(a, b, |x, y| x.$wrapping(*y))?.into(),
            #[cfg(feature = "extended_numeric_types")]
            (Array::UInt16(a), Array::UInt16(b)) => binary_map(a, b, |x, y| x.$wrapping(*y))?.into(),
            (Array::Int32(a), Array::Int32(b)) => binary_map(a, b, |x, y| x.$wrapping(*y))?.into(),
            (Array::Int64(a), Array::Int64(b)) => binary_map(a, b, |x, y| x.$wrapping(*y))?.into(),
            (Array::UInt32(a), Array::UInt32(b)) => binary_map(a, b, |x, y| x.$wrapping(*y))?.into(),
            (Array::UInt64(a), Array::UInt64(b)) => binary_map(a, b, |x, y| x.$wrapping(*y))?.into(),
            (Array::Float32(a), Array::Float32(b)) => binary_map(a, b, |x, y| *x $sym *y)?.into(),
            (Array::Float64(a), Array::Float64(b)) => binary_map(a, b, |x, y| *x $sym *y)?.into(),
            (Array::Complex32(a), Array::Complex32(b)) => binary_map(a, b, |x, y| *x $sym *y)?.into(),
            (Array::Complex64(a), Array::Complex64(b)) => binary_map(a, b, |x, y| *x $sym *y)?.into(),
            (l, _) => return Err(unsupported($op, l.kind())),
        }
    };
}

fn pow(lhs: &Array, rhs: &Array) -> Result<Array, KernelError> {
    Ok(match (lhs, rhs) {
        #[cfg(feature = "extended_numeric_types")]
        (Array::Int8(a), Array::Int8(b)) => int_pow(a, b)?.into(),
        #[cfg(feature = "extended_numeric_types")]
        (Array::Int16(a), Array::Int16(b)) => int_pow(a, b)?.into(),
        #[cfg(feature = "extended_numeric_types")]
        (Array::UInt8(a), Array::UInt8(b)) => int_pow(a, b)?.into(),
        #[cfg(feature = "extended_numeric_types")]
        (Array::UInt16(a), Array::UInt16(b)) => int_pow(a, b)?.into(),
        (Array::Int32(a), Array::Int32(b)) => int_pow(a, b)?.into(),
        (Array::Int64(a), Array::Int64(b)) => int_pow(a, b)?.into(),
        (Array::UInt32(a), Array::UInt32(b)) => int_pow(a, b)?.into(),
        (Array::UInt64(a), Array::UInt64(b)) => int_pow(a, b)?.into(),
        (Array::Float32(a), Array::Float32(b)) => binary_map(a, b, |x, y| x.powf(*y))?.into(),
        (Array::Float64(a), Array::Float64(b)) => binary_map(a, b, |x, y| x.powf(*y))?.into(),
        (Array::Complex32(a), Array::Complex32(b)) => binary_map(a, b, |x, y| x.powc(*y))?.into(),
        (Array::Complex64(a), Array::Complex64(b)) => binary_map(a, b, |x, y| x.powc(*y))?.into(),
        (l, _) => return Err(unsupported(BinaryOperator::Pow, l.kind())),
    })
}

fn atan2(y: &Array, x: &Array) -> Result<Array, KernelError> {
    Ok(match (y, x) {
        (Array::Float32(a), Array::Float32(b)) => binary_map(a, b, |y, x| y.atan2(*x))?.into(),
        (Array::Float64(a), Array::Float64(b)) => binary_map(a, b, |y, x| y.atan2(*x))?.into(),
        (l, _) => return Err(unsupported(BinaryOperator::Atan2, l.kind())),
    })
}

fn equal(lhs: &Array, rhs: &Array) -> Result<Array, KernelError> {
    let out = match (lhs, rhs) {
        (Array::Bool(a), Array::Bool(b)) => binary_map(a, b, |x, y| x == y)?,
        #[cfg(feature = "extended_numeric_types")]
        (Array::Int8(a), Array::Int8(b)) => binary_map(a, b, |x, y| x == y)?,
        #[cfg(feature = "extended_numeric_types")]
        (Array::Int16(a), Array::Int16(b)) => binary_map(a, b, |x, y| x == y)?,
        #[cfg(feature = "extended_numeric_types")]
        (Array::UInt8(a), Array::UInt8(b)) => binary_map(a, b, |x, y| x == y)?,
        #[cfg(feature = "extended_numeric_types")]
        (Array::UInt16(a), Array::UInt16(b)) => binary_map(a, b, |x, y| x == y)?,
        (Array::Int32(a), Array::Int32(b)) => binary_map(a, b, |x, y| x == y)?,
        (Array::Int64(a), Array::Int64(b)) => binary_map(a, b, |x, y| x == y)?,
        (Array::UInt32(a), Array::UInt32(b)) => binary_map(a, b, |x, y| x == y)?,
        (Array::UInt64(a), Array::UInt64(b)) => binary_map(a, b, |x, y| x == y)?,
        (Array::Float32(a), Array::Float32(b)) => binary_map(a, b, |x, y| x == y)?,
        (Array::Float64(a), Array::Float64(b)) => binary_map(a, b, |x, y| x == y)?,
        (Array::Complex32(a), Array::Complex32(b)) => binary_map(a, b, |x, y| x == y)?,
        (Array::Complex64(a), Array::Complex64(b)) => binary_map(a, b, |x, y| x == y)?,
        (l, _) => return Err(unsupported(BinaryOperator::Equal, l.kind())),
    };
    Ok(out.into())
}

/// Boolean arrays become `f32`, anything else is shared as is.
fn promote_bool(array: &Array, position: usize) -> Result<Array, KernelError> {
    match array {
        Array::Bool(_) => Ok(array.to_float::<f32>(position)?.into()),
        other => Ok(other.clone()),
    }
}

/// Elementwise binary operation over two arrays of the same kind.
pub fn binary_array(op: BinaryOperator, lhs: &Array, rhs: &Array) -> Result<Array, KernelError> {
    let arithmetic = matches!(op, BinaryOperator::Add | BinaryOperator::Multiply | BinaryOperator::Pow);
    if arithmetic && (lhs.kind() == ScalarKind::Bool || rhs.kind() == ScalarKind::Bool) {
        let l = promote_bool(lhs, 1)?;
        let r = promote_bool(rhs, 2)?;
        return binary_array(op, &l, &r);
    }
    if lhs.kind() != rhs.kind() {
        return Err(KernelError::type_error(
            2,
            rhs.kind(),
            format!("{op:?} expects operands of one kind, got {} and {}", lhs.kind(), rhs.kind()),
        ));
    }
    log::trace!("binary_array => {op:?} on {} ({} x {})", lhs.kind(), lhs.len(), rhs.len());
    match op {
        BinaryOperator::Add => Ok(arith_arms!(lhs, rhs, op, wrapping_add, +)),
        BinaryOperator::Multiply => Ok(arith_arms!(lhs, rhs, op, wrapping_mul, *)),
        BinaryOperator::Pow => pow(lhs, rhs),
        BinaryOperator::Atan2 => atan2(lhs, rhs),
        BinaryOperator::Equal => equal(lhs, rhs),
    }
}

/// Real component array. Real input is returned as is.
pub fn real_array(input: &Array) -> Array {
    match input {
        Array::Complex32(a) => a.map(|c| c.re).into(),
        Array::Complex64(a) => a.map(|c| c.re).into(),
        real => real.clone(),
    }
}

/// Imaginary component array. Real input yields zeros of its own kind.
pub fn imag_array(input: &Array) -> Result<Array, KernelError> {
    match input {
        Array::Complex32(a) => Ok(a.map(|c| c.im).into()),
        Array::Complex64(a) => Ok(a.map(|c| c.im).into()),
        real => Array::filled(0.0, &real.shape(), real.kind()),
    }
}

#[cfg(test)]
mod tests {
    use num_complex::Complex;

    use super::*;

    fn arr<T: Clone>(values: &[T]) -> Array
    where
        Array: From<DenseArray<T>>,
    {
        Array::from(DenseArray::from_slice(values))
    }

    #[test]
    fn test_integer_add_wraps() {
        let out = binary_array(BinaryOperator::Add, &arr(&[i32::MAX, 1]), &arr(&[1i32, 2])).unwrap();
        assert_eq!(out.i32().unwrap().to_vec(), vec![i32::MIN, 3]);
    }

    #[test]
    fn test_scalar_broadcast() {
        let out = binary_array(BinaryOperator::Pow, &arr(&[2.0f64]), &arr(&[0.0f64, 1.0, 3.0])).unwrap();
        assert_eq!(out.f64().unwrap().to_vec(), vec![1.0, 2.0, 8.0]);
    }

    #[test]
    fn test_bool_arithmetic_promotes_to_f32() {
        let t = arr(&[true, false]);
        let sum = binary_array(BinaryOperator::Add, &t, &arr(&[true])).unwrap();
        assert_eq!(sum.f32().unwrap().to_vec(), vec![2.0, 1.0]);
        let p = binary_array(BinaryOperator::Pow, &arr(&[2.0f32]), &t).unwrap();
        assert_eq!(p.f32().unwrap().to_vec(), vec![2.0, 1.0]);
        let eq = binary_array(BinaryOperator::Equal, &t, &arr(&[false])).unwrap();
        assert_eq!(eq.kind(), ScalarKind::Bool);
    }

    #[test]
    fn test_integer_pow_overflow_errors() {
        let err = binary_array(BinaryOperator::Pow, &arr(&[2u32]), &arr(&[40u32])).unwrap_err();
        assert!(matches!(err, KernelError::Argument { position: 2, .. }));
    }

    #[test]
    fn test_mismatched_kinds_error_at_second_operand() {
        let err = binary_array(BinaryOperator::Add, &arr(&[1.0f32]), &arr(&[1.0f64])).unwrap_err();
        assert!(matches!(
            err,
            KernelError::Type {
                position: 2,
                kind: ScalarKind::Float64,
                ..
            }
        ));
    }

    #[test]
    fn test_equal_yields_bool() {
        let z = arr(&[Complex::new(0.0f32, 0.0), Complex::new(0.0, 1.0)]);
        let zero = arr(&[Complex::new(0.0f32, 0.0)]);
        let out = binary_array(BinaryOperator::Equal, &z, &zero).unwrap();
        assert_eq!(out.bool().unwrap().to_vec(), vec![true, false]);
    }

    #[test]
    fn test_atan2_rejects_integers() {
        let err = binary_array(BinaryOperator::Atan2, &arr(&[1i64]), &arr(&[1i64])).unwrap_err();
        assert!(matches!(err, KernelError::Type { .. }));
    }

    #[test]
    fn test_components_of_real_input() {
        let x = arr(&[1.5f32, -2.0]);
        assert_eq!(real_array(&x), x);
        let im = imag_array(&x).unwrap();
        assert_eq!(im.f32().unwrap().to_vec(), vec![0.0, 0.0]);
    }
}
