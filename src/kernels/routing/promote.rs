// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Promotion Module
//!
//! Resolves the computation kind a unary kernel runs in from the stored kind
//! of its input. Precision is never reduced, and every non-floating kind
//! lands on `Float32`.

use crate::enums::error::KernelError;
use crate::enums::scalar_kind::{ComputeKind, ScalarKind};

/// Implicit promotion of `kind` against the floating `floor` kind.
///
/// Floating real and complex kinds pass through unchanged. Boolean and
/// integer kinds take `floor`.
pub fn promote(kind: ScalarKind, floor: ScalarKind) -> ScalarKind {
    match kind {
        ScalarKind::Float32 | ScalarKind::Float64 | ScalarKind::Complex32 | ScalarKind::Complex64 => {
            kind
        }
        ScalarKind::Bool
        | ScalarKind::Int32
        | ScalarKind::Int64
        | ScalarKind::UInt32
        | ScalarKind::UInt64 => floor,
        #[cfg(feature = "extended_numeric_types")]
        ScalarKind::Int8 | ScalarKind::Int16 | ScalarKind::UInt8 | ScalarKind::UInt16 => floor,
    }
}

/// Computation kind for an input of `kind` at argument `position`.
///
/// Fails with a type error carrying the original kind when promotion does
/// not reach one of the four floating kinds.
pub fn resolve(kind: ScalarKind, position: usize) -> Result<ComputeKind, KernelError> {
    let promoted = promote(kind, ScalarKind::Float32);
    let compute = promoted.as_compute().ok_or_else(|| {
        KernelError::type_error(position, kind, "no floating computation kind for input")
    })?;
    log::trace!("resolve => {kind} promotes to {compute:?}");
    Ok(compute)
}
