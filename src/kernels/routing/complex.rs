// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Complex Decomposition Module
//!
//! Evaluates operations that have no native complex kernel by splitting the
//! input into real and imaginary component arrays, running real kernels on
//! each, and recombining.
//!
//! Two shapes of recombination exist:
//! - value-producing, e.g. `exp(a+bi) = e^a (cos b + i sin b)`, rebuilt into
//!   a complex array;
//! - predicate-producing, where the per-component boolean results are merged
//!   with the predicate's [`PredicateOperator::complex_combinator`].
//!
//! All intermediates are owned values scoped to the call, so a failing step
//! drops everything allocated before it and no partial result escapes.

use num_complex::Complex;

use crate::enums::error::KernelError;
use crate::enums::operators::{PredicateOperator, UnaryOperator};
use crate::enums::scalar_kind::ScalarKind;
use crate::structs::dense_array::DenseArray;
use crate::traits::backend::Backend;
use crate::traits::type_unions::Float;

/// Complex evaluation of a value-producing unary operation.
///
/// `kind` is the complex computation kind, reported when `op` has no
/// decomposition.
pub fn unary_complex<B: Backend, T: Float>(
    backend: &B,
    op: UnaryOperator,
    kind: ScalarKind,
    input: &DenseArray<Complex<T>>,
) -> Result<DenseArray<Complex<T>>, KernelError> {
    match op {
        UnaryOperator::Exp => exp_complex(backend, input),
        _ => Err(KernelError::type_error(
            1,
            kind,
            format!("{op} has no complex decomposition"),
        )),
    }
}

/// `e^(a+bi) = e^a * (cos b + i sin b)`, in that evaluation order.
fn exp_complex<B: Backend, T: Float>(
    backend: &B,
    input: &DenseArray<Complex<T>>,
) -> Result<DenseArray<Complex<T>>, KernelError> {
    log::debug!("exp_complex => decomposing {} values", input.len());
    let real = backend.real_part(input)?;
    let imag = backend.imag_part(input)?;

    let exp_real = backend.unary(UnaryOperator::Exp, &real)?;
    let cos_imag = backend.unary(UnaryOperator::Cos, &imag)?;
    let sin_imag = backend.unary(UnaryOperator::Sin, &imag)?;

    let unit = backend.cplx(&cos_imag, &sin_imag)?;
    let scale = backend.cast_complex(&exp_real)?;

    backend.mul_complex(&scale, &unit)
}

/// Complex evaluation of a predicate.
///
/// The same real predicate runs on both components, and the results merge
/// with the predicate's combinator.
pub fn check_complex<B: Backend, T: Float>(
    backend: &B,
    op: PredicateOperator,
    input: &DenseArray<Complex<T>>,
) -> Result<DenseArray<bool>, KernelError> {
    let real = backend.real_part(input)?;
    let imag = backend.imag_part(input)?;

    let (res_r, res_i) = check_components(backend, op, &real, &imag)?;

    let combinator = op.complex_combinator();
    log::debug!("check_complex => {op} combines components with {combinator:?}");
    backend.logical(combinator, &res_r, &res_i)
}

#[cfg(not(feature = "parallel_proc"))]
fn check_components<B: Backend, T: Float>(
    backend: &B,
    op: PredicateOperator,
    real: &DenseArray<T>,
    imag: &DenseArray<T>,
) -> Result<(DenseArray<bool>, DenseArray<bool>), KernelError> {
    let res_r = backend.check(op, real)?;
    let res_i = backend.check(op, imag)?;
    Ok((res_r, res_i))
}

/// The component checks share no data, so they run on both sides of a
/// `rayon::join`. Results are paired positionally.
#[cfg(feature = "parallel_proc")]
fn check_components<B: Backend, T: Float>(
    backend: &B,
    op: PredicateOperator,
    real: &DenseArray<T>,
    imag: &DenseArray<T>,
) -> Result<(DenseArray<bool>, DenseArray<bool>), KernelError> {
    let (res_r, res_i) = rayon::join(|| backend.check(op, real), || backend.check(op, imag));
    Ok((res_r?, res_i?))
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::kernels::cpu::CpuBackend;

    #[test]
    fn test_exp_complex_euler() {
        let backend = CpuBackend::new();
        let z = DenseArray::from_slice(&[
            Complex::new(0.0f64, 0.0),
            Complex::new(0.0, FRAC_PI_2),
            Complex::new(1.0, 2.0),
        ]);
        let out = unary_complex(&backend, UnaryOperator::Exp, ScalarKind::Complex64, &z).unwrap();
        let v = out.to_vec();
        assert_abs_diff_eq!(v[0].re, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[0].im, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[1].re, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[1].im, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v[2].re, 1.0f64.exp() * 2.0f64.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(v[2].im, 1.0f64.exp() * 2.0f64.sin(), epsilon = 1e-12);
        assert_eq!(out.shape, z.shape);
    }

    #[test]
    fn test_non_decomposable_op_is_a_type_error() {
        let backend = CpuBackend::new();
        let z = DenseArray::from_slice(&[Complex::new(1.0f32, 1.0)]);
        let err = unary_complex(&backend, UnaryOperator::Tgamma, ScalarKind::Complex32, &z)
            .unwrap_err();
        assert!(matches!(
            err,
            KernelError::Type {
                kind: ScalarKind::Complex32,
                ..
            }
        ));
    }

    #[test]
    fn test_iszero_needs_both_components() {
        let backend = CpuBackend::new();
        let z = DenseArray::from_slice(&[
            Complex::new(0.0f64, 3.0),
            Complex::new(0.0, 0.0),
            Complex::new(2.0, 0.0),
        ]);
        let out = check_complex(&backend, PredicateOperator::IsZero, &z).unwrap();
        assert_eq!(out.to_vec(), vec![false, true, false]);
    }

    #[test]
    fn test_isnan_and_isinf_need_either_component() {
        let backend = CpuBackend::new();
        let z = DenseArray::from_slice(&[
            Complex::new(f32::NAN, 1.0),
            Complex::new(1.0, f32::NAN),
            Complex::new(1.0, 1.0),
            Complex::new(1.0, f32::INFINITY),
        ]);
        let nan = check_complex(&backend, PredicateOperator::IsNan, &z).unwrap();
        assert_eq!(nan.to_vec(), vec![true, true, false, false]);
        let inf = check_complex(&backend, PredicateOperator::IsInf, &z).unwrap();
        assert_eq!(inf.to_vec(), vec![false, false, false, true]);
    }
}
