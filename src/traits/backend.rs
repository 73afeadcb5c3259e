// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Backend Trait Module
//!
//! The collaborator surface the dispatch engine drives. A backend owns the
//! handle store, the typed per-element kernels, and the binary operations
//! derived pipelines are composed from.
//!
//! The engine never computes an element itself. It decides *which* kernel
//! runs in *which* kind, and in what order.

use std::sync::Arc;

use num_complex::Complex;

use crate::enums::array::Array;
use crate::enums::error::KernelError;
use crate::enums::operators::{BinaryOperator, LogicalOperator, PredicateOperator, UnaryOperator};
use crate::enums::scalar_kind::ScalarKind;
use crate::enums::shape_dim::ShapeDim;
use crate::structs::dense_array::DenseArray;
use crate::structs::handle::ArrayHandle;
use crate::traits::type_unions::Float;

/// Compute backend consumed by [`crate::Engine`].
///
/// Every method that returns an `ArrayHandle` hands a freshly acquired
/// handle to the caller, who must release it exactly once. Typed kernels
/// return owned `DenseArray`s and take no handles.
///
/// Kernels are blocking calls that either complete or fail. They must not
/// mutate their inputs.
pub trait Backend: Send + Sync {
    // ---------------------------- handle store -----------------------------

    /// Stores `array` and issues a new handle for it.
    fn acquire(&self, array: Array) -> Result<ArrayHandle, KernelError>;

    /// Drops the store's reference for `handle`.
    fn release(&self, handle: ArrayHandle) -> Result<(), KernelError>;

    /// Resolves `handle` for introspection and reading.
    fn array(&self, handle: ArrayHandle) -> Result<Arc<Array>, KernelError>;

    // ------------------------- handle-level ops ----------------------------

    /// New array of `shape` and `kind` filled with `value`.
    fn constant(
        &self,
        value: f64,
        shape: &ShapeDim,
        kind: ScalarKind,
    ) -> Result<ArrayHandle, KernelError>;

    /// Elementwise binary operation. `Equal` yields a boolean array.
    fn binary(
        &self,
        op: BinaryOperator,
        lhs: ArrayHandle,
        rhs: ArrayHandle,
    ) -> Result<ArrayHandle, KernelError>;

    /// Real component of `input`, in the matching real kind.
    fn real(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError>;

    /// Imaginary component of `input`, in the matching real kind.
    fn imag(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError>;

    // ---------------------------- typed kernels ----------------------------

    /// Native real kernel for `op`.
    fn unary<T: Float>(
        &self,
        op: UnaryOperator,
        input: &DenseArray<T>,
    ) -> Result<DenseArray<T>, KernelError>;

    /// Native real predicate kernel for `op`.
    fn check<T: Float>(
        &self,
        op: PredicateOperator,
        input: &DenseArray<T>,
    ) -> Result<DenseArray<bool>, KernelError>;

    /// Elementwise logical combination of two boolean arrays.
    fn logical(
        &self,
        op: LogicalOperator,
        lhs: &DenseArray<bool>,
        rhs: &DenseArray<bool>,
    ) -> Result<DenseArray<bool>, KernelError>;

    /// Real component array of a complex array.
    fn real_part<T: Float>(&self, input: &DenseArray<Complex<T>>)
    -> Result<DenseArray<T>, KernelError>;

    /// Imaginary component array of a complex array.
    fn imag_part<T: Float>(&self, input: &DenseArray<Complex<T>>)
    -> Result<DenseArray<T>, KernelError>;

    /// Builds a complex array from component arrays of the same shape.
    fn cplx<T: Float>(
        &self,
        re: &DenseArray<T>,
        im: &DenseArray<T>,
    ) -> Result<DenseArray<Complex<T>>, KernelError>;

    /// Casts a real array into the complex kind of the same precision.
    fn cast_complex<T: Float>(
        &self,
        input: &DenseArray<T>,
    ) -> Result<DenseArray<Complex<T>>, KernelError>;

    /// Elementwise complex product.
    fn mul_complex<T: Float>(
        &self,
        lhs: &DenseArray<Complex<T>>,
        rhs: &DenseArray<Complex<T>>,
    ) -> Result<DenseArray<Complex<T>>, KernelError>;
}
