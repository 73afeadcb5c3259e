// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Derived Operations Module
//!
//! Operations with no kernel of their own, composed from handle-level
//! backend calls and the native unary entry point.
//!
//! Every temporary is held in a [`ScopedHandle`]. On the success path each
//! one is released explicitly so release failures surface. On any early
//! return the guards release whatever was already allocated, the result
//! handle included.

use crate::enums::error::KernelError;
use crate::enums::operators::{BinaryOperator, UnaryOperator};
use crate::enums::scalar_kind::ScalarKind;
use crate::kernels::routing::unary::resolve_unary;
use crate::structs::handle::{ArrayHandle, ScopedHandle};
use crate::traits::backend::Backend;
use crate::traits::shape::Shape;

/// Kind of an arithmetic constant paired with `kind`. Booleans promote to
/// single precision so the constant keeps its value.
fn arithmetic_kind(kind: ScalarKind) -> ScalarKind {
    match kind {
        ScalarKind::Bool => ScalarKind::Float32,
        other => other,
    }
}

/// Argument (phase angle) of `input`.
///
/// Real input has argument zero by convention, so the result is an all-zero
/// array of the input's shape and kind with no trigonometry performed.
/// Complex input computes `atan2(imag(x), real(x))`.
pub fn arg<B: Backend>(backend: &B, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
    let array = backend.array(input)?;
    if !array.is_complex() {
        log::trace!("arg => real {} input, returning zeros", array.kind());
        return backend.constant(0.0, &array.shape(), array.kind());
    }

    let re = ScopedHandle::acquire(backend, backend.real(input))?;
    let im = ScopedHandle::acquire(backend, backend.imag(input))?;
    let out = ScopedHandle::acquire(
        backend,
        backend.binary(BinaryOperator::Atan2, im.handle(), re.handle()),
    )?;

    re.release()?;
    im.release()?;
    Ok(out.into_inner())
}

/// `2^x`, as `pow(two, x)` with `two` shaped and typed like `x`
/// (single precision for boolean `x`).
pub fn pow2<B: Backend>(backend: &B, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
    let array = backend.array(input)?;
    let two = ScopedHandle::acquire(
        backend,
        backend.constant(2.0, &array.shape(), arithmetic_kind(array.kind())),
    )?;
    let out = ScopedHandle::acquire(
        backend,
        backend.binary(BinaryOperator::Pow, two.handle(), input),
    )?;

    two.release()?;
    Ok(out.into_inner())
}

/// `x!`, as `tgamma(x + 1)`.
pub fn factorial<B: Backend>(backend: &B, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
    let array = backend.array(input)?;
    let one = ScopedHandle::acquire(
        backend,
        backend.constant(1.0, &array.shape(), arithmetic_kind(array.kind())),
    )?;
    let shifted = ScopedHandle::acquire(
        backend,
        backend.binary(BinaryOperator::Add, input, one.handle()),
    )?;
    let out = ScopedHandle::acquire(
        backend,
        resolve_unary(backend, UnaryOperator::Tgamma, shifted.handle()),
    )?;

    one.release()?;
    shifted.release()?;
    Ok(out.into_inner())
}

/// Logical negation, as `x == 0` against a zero constant of `x`'s shape and kind.
pub fn not<B: Backend>(backend: &B, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
    let array = backend.array(input)?;
    let zero = ScopedHandle::acquire(backend, backend.constant(0.0, &array.shape(), array.kind()))?;
    let out = ScopedHandle::acquire(
        backend,
        backend.binary(BinaryOperator::Equal, input, zero.handle()),
    )?;

    zero.release()?;
    Ok(out.into_inner())
}
