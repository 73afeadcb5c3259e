// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Unary Routing Module
//!
//! Entry points for the native unary operations and the predicate checks.
//! Each call resolves the computation kind of its input, selects the one
//! kernel binding for (operation, kind), and hands a fresh handle back.

use crate::enums::array::Array;
use crate::enums::error::KernelError;
use crate::enums::operators::{Domains, PredicateOperator, UnaryOperator};
use crate::enums::scalar_kind::ComputeKind;
use crate::kernels::routing::complex::{check_complex, unary_complex};
use crate::kernels::routing::promote::resolve;
use crate::structs::handle::ArrayHandle;
use crate::traits::backend::Backend;

/// Public entry-point for a native unary operation.
///
/// Complex input to a real-only operation is rejected as an argument error
/// before any promotion or computation.
pub fn resolve_unary<B: Backend>(
    backend: &B,
    op: UnaryOperator,
    input: ArrayHandle,
) -> Result<ArrayHandle, KernelError> {
    let array = backend.array(input)?;

    if op.domains() == Domains::RealOnly && array.is_complex() {
        return Err(KernelError::argument(
            1,
            format!("{op} expects real input, got {}", array.kind()),
        ));
    }

    let kind = resolve(array.kind(), 1)?;
    let out = unary_dispatch(backend, op, kind, &array)?;
    backend.acquire(out)
}

/// Selects and invokes the kernel for `op` in computation kind `kind`.
///
/// Each arm casts the input to the matching scalar representation first.
/// Complex arms only exist for operations with a decomposition, every other
/// (operation, complex kind) pair is a type error.
pub fn unary_dispatch<B: Backend>(
    backend: &B,
    op: UnaryOperator,
    kind: ComputeKind,
    input: &Array,
) -> Result<Array, KernelError> {
    log::trace!("unary_dispatch => {op} on {} in {kind:?}", input.kind());
    match (kind, op.domains()) {
        (ComputeKind::F32, _) => Ok(backend.unary(op, &input.to_float::<f32>(1)?)?.into()),
        (ComputeKind::F64, _) => Ok(backend.unary(op, &input.to_float::<f64>(1)?)?.into()),
        (ComputeKind::C32, Domains::RealAndComplex) => Ok(unary_complex(
            backend,
            op,
            kind.scalar_kind(),
            &input.to_complex::<f32>(1)?,
        )?
        .into()),
        (ComputeKind::C64, Domains::RealAndComplex) => Ok(unary_complex(
            backend,
            op,
            kind.scalar_kind(),
            &input.to_complex::<f64>(1)?,
        )?
        .into()),
        (ComputeKind::C32 | ComputeKind::C64, Domains::RealOnly) => Err(KernelError::type_error(
            1,
            input.kind(),
            format!("{op} has no kernel for {kind:?}"),
        )),
    }
}

/// Public entry-point for a predicate check.
///
/// Real kinds run the predicate kernel directly. Complex kinds decompose
/// and merge with the predicate's combinator.
pub fn resolve_check<B: Backend>(
    backend: &B,
    op: PredicateOperator,
    input: ArrayHandle,
) -> Result<ArrayHandle, KernelError> {
    let array = backend.array(input)?;
    let kind = resolve(array.kind(), 1)?;
    let out = check_dispatch(backend, op, kind, &array)?;
    backend.acquire(out)
}

/// Four-way predicate dispatch, one boolean output per call.
pub fn check_dispatch<B: Backend>(
    backend: &B,
    op: PredicateOperator,
    kind: ComputeKind,
    input: &Array,
) -> Result<Array, KernelError> {
    log::trace!("check_dispatch => {op} on {} in {kind:?}", input.kind());
    let out = match kind {
        ComputeKind::F32 => backend.check(op, &input.to_float::<f32>(1)?)?,
        ComputeKind::F64 => backend.check(op, &input.to_float::<f64>(1)?)?,
        ComputeKind::C32 => check_complex(backend, op, &input.to_complex::<f32>(1)?)?,
        ComputeKind::C64 => check_complex(backend, op, &input.to_complex::<f64>(1)?)?,
    };
    Ok(out.into())
}
