// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # CPU Math Kernels
//!
//! Per-element scalar functions behind [`super::CpuBackend`]'s typed
//! kernels, plus the map drivers that run them over a `DenseArray`.
//!
//! Elementary functions come from the `num-traits` `Float` surface. The
//! special functions without an `f32`/`f64` method in `std` run through
//! *statrs* in double precision and are cast back.

use std::f64::consts::PI;

use num_traits::NumCast;
use statrs::function::{erf, gamma};

use crate::enums::operators::{PredicateOperator, UnaryOperator};
use crate::structs::dense_array::DenseArray;
use crate::traits::type_unions::Float;

/// Evaluates `f` in `f64` and casts the result back into `T`.
///
/// An unrepresentable input or result becomes NaN.
#[inline]
fn via_f64<T: Float>(x: T, f: fn(f64) -> f64) -> T {
    x.to_f64()
        .and_then(|v| <T as NumCast>::from(f(v)))
        .unwrap_or_else(T::nan)
}

#[inline]
fn is_pole(x: f64) -> bool {
    x <= 0.0 && x == x.trunc()
}

/// `Γ(x)`. Negative integers and `-inf` give NaN, `±0` gives `±inf`.
fn gamma_fn(x: f64) -> f64 {
    if x == 0.0 {
        f64::INFINITY.copysign(x)
    } else if is_pole(x) {
        f64::NAN
    } else {
        gamma::gamma(x)
    }
}

/// `ln |Γ(x)|`, reflected for `x < 0.5` so negative non-integers stay finite.
/// Poles give `+inf`.
fn ln_abs_gamma(x: f64) -> f64 {
    if is_pole(x) {
        f64::INFINITY
    } else if x < 0.5 {
        (PI / (PI * x).sin().abs()).ln() - gamma::ln_gamma(1.0 - x)
    } else {
        gamma::ln_gamma(x)
    }
}

/// Scalar kernel for `op`.
#[inline]
pub fn apply_unary<T: Float>(op: UnaryOperator, x: T) -> T {
    match op {
        UnaryOperator::Sin => x.sin(),
        UnaryOperator::Cos => x.cos(),
        UnaryOperator::Tan => x.tan(),
        UnaryOperator::Asin => x.asin(),
        UnaryOperator::Acos => x.acos(),
        UnaryOperator::Atan => x.atan(),
        UnaryOperator::Sinh => x.sinh(),
        UnaryOperator::Cosh => x.cosh(),
        UnaryOperator::Tanh => x.tanh(),
        UnaryOperator::Asinh => x.asinh(),
        UnaryOperator::Acosh => x.acosh(),
        UnaryOperator::Atanh => x.atanh(),
        UnaryOperator::Trunc => x.trunc(),
        // half-way cases round away from zero
        UnaryOperator::Round => x.round(),
        UnaryOperator::Floor => x.floor(),
        UnaryOperator::Ceil => x.ceil(),
        // 1 for negative input, 0 otherwise (NaN included)
        UnaryOperator::Sign => {
            if x < T::zero() {
                T::one()
            } else {
                T::zero()
            }
        }
        UnaryOperator::Exp => x.exp(),
        UnaryOperator::Expm1 => x.exp_m1(),
        UnaryOperator::Log => x.ln(),
        UnaryOperator::Log1p => x.ln_1p(),
        UnaryOperator::Log2 => x.log2(),
        UnaryOperator::Log10 => x.log10(),
        UnaryOperator::Sqrt => x.sqrt(),
        UnaryOperator::Cbrt => x.cbrt(),
        UnaryOperator::Sigmoid => T::one() / (T::one() + (-x).exp()),
        UnaryOperator::Erf => via_f64(x, erf::erf),
        UnaryOperator::Erfc => via_f64(x, erf::erfc),
        UnaryOperator::Tgamma => via_f64(x, gamma_fn),
        UnaryOperator::Lgamma => via_f64(x, ln_abs_gamma),
    }
}

/// Scalar predicate for `op`.
#[inline]
pub fn apply_check<T: Float>(op: PredicateOperator, x: T) -> bool {
    match op {
        PredicateOperator::IsNan => x.is_nan(),
        PredicateOperator::IsInf => x.is_infinite(),
        PredicateOperator::IsZero => x == T::zero(),
    }
}

/// Maps `f` over every element, keeping the shape.
#[cfg(not(feature = "parallel_proc"))]
pub fn map_kernel<T, U, F>(input: &DenseArray<T>, f: F) -> DenseArray<U>
where
    T: Copy + Send + Sync,
    U: Send,
    F: Fn(T) -> U + Send + Sync,
{
    input.map(|&x| f(x))
}

/// Maps `f` over every element, keeping the shape.
#[cfg(feature = "parallel_proc")]
pub fn map_kernel<T, U, F>(input: &DenseArray<T>, f: F) -> DenseArray<U>
where
    T: Copy + Send + Sync,
    U: Send,
    F: Fn(T) -> U + Send + Sync,
{
    use rayon::prelude::*;
    use vec64::Vec64;

    let out: Vec<U> = input.as_slice().par_iter().map(|&x| f(x)).collect();
    DenseArray::from_parts(Vec64::from(out), input.shape.clone())
}

/// Real kernel for `op` over a whole array.
pub fn unary_kernel<T: Float>(op: UnaryOperator, input: &DenseArray<T>) -> DenseArray<T> {
    map_kernel(input, |x| apply_unary(op, x))
}

/// Real predicate kernel for `op` over a whole array.
pub fn check_kernel<T: Float>(op: PredicateOperator, input: &DenseArray<T>) -> DenseArray<bool> {
    map_kernel(input, |x| apply_check(op, x))
}
