// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # CPU Backend Module
//!
//! Reference [`Backend`] that keeps arrays in an in-process handle store
//! and runs every kernel on the calling thread, or on the *rayon* pool when
//! `parallel_proc` is enabled.
//!
//! The store also counts releases, which makes it the usual backend for
//! checking that compositions hand back every temporary they take.

pub mod binary;
pub mod math;

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use num_complex::Complex;

use crate::enums::array::Array;
use crate::enums::error::KernelError;
use crate::enums::operators::{BinaryOperator, LogicalOperator, PredicateOperator, UnaryOperator};
use crate::enums::scalar_kind::ScalarKind;
use crate::enums::shape_dim::ShapeDim;
use crate::structs::dense_array::DenseArray;
use crate::structs::handle::ArrayHandle;
use crate::traits::backend::Backend;
use crate::traits::type_unions::Float;

/// # CpuBackend
///
/// In-memory handle store plus scalar CPU kernels.
///
/// ### Fields
/// - `store`: live arrays keyed by raw handle id.
/// - `next_id`: id issued by the next acquisition. Starts at 1, as 0 is
///   [`ArrayHandle::NULL`].
/// - `released`: successful releases since construction.
///
/// Ids are never reused, so releasing a stale handle fails instead of
/// dropping an unrelated array.
#[derive(Debug)]
pub struct CpuBackend {
    store: Mutex<HashMap<u64, Arc<Array>>>,
    next_id: AtomicU64,
    released: AtomicUsize,
}

impl CpuBackend {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
            next_id: AtomicU64::new(1),
            released: AtomicUsize::new(0),
        }
    }

    /// Number of handles acquired and not yet released.
    pub fn live_handles(&self) -> usize {
        self.store
            .lock()
            .map(|s| s.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }

    /// Number of successful releases since construction.
    pub fn released(&self) -> usize {
        self.released.load(Ordering::Relaxed)
    }

    fn store(&self) -> Result<MutexGuard<'_, HashMap<u64, Arc<Array>>>, KernelError> {
        self.store
            .lock()
            .map_err(|_| KernelError::Backend("handle store lock poisoned".into()))
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for CpuBackend {
    fn acquire(&self, array: Array) -> Result<ArrayHandle, KernelError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        log::trace!("acquire => #{id} {} x {}", array.kind(), array.len());
        self.store()?.insert(id, Arc::new(array));
        Ok(ArrayHandle::from_raw(id))
    }

    fn release(&self, handle: ArrayHandle) -> Result<(), KernelError> {
        match self.store()?.remove(&handle.raw()) {
            Some(_) => {
                self.released.fetch_add(1, Ordering::Relaxed);
                log::trace!("release => {handle}");
                Ok(())
            }
            None => Err(KernelError::InvalidHandle(handle.raw())),
        }
    }

    fn array(&self, handle: ArrayHandle) -> Result<Arc<Array>, KernelError> {
        self.store()?
            .get(&handle.raw())
            .cloned()
            .ok_or(KernelError::InvalidHandle(handle.raw()))
    }

    fn constant(
        &self,
        value: f64,
        shape: &ShapeDim,
        kind: ScalarKind,
    ) -> Result<ArrayHandle, KernelError> {
        self.acquire(Array::filled(value, shape, kind)?)
    }

    fn binary(
        &self,
        op: BinaryOperator,
        lhs: ArrayHandle,
        rhs: ArrayHandle,
    ) -> Result<ArrayHandle, KernelError> {
        let (l, r) = (self.array(lhs)?, self.array(rhs)?);
        self.acquire(binary::binary_array(op, &l, &r)?)
    }

    fn real(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        let array = self.array(input)?;
        self.acquire(binary::real_array(&array))
    }

    fn imag(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        let array = self.array(input)?;
        self.acquire(binary::imag_array(&array)?)
    }

    fn unary<T: Float>(
        &self,
        op: UnaryOperator,
        input: &DenseArray<T>,
    ) -> Result<DenseArray<T>, KernelError> {
        Ok(math::unary_kernel(op, input))
    }

    fn check<T: Float>(
        &self,
        op: PredicateOperator,
        input: &DenseArray<T>,
    ) -> Result<DenseArray<bool>, KernelError> {
        Ok(math::check_kernel(op, input))
    }

    fn logical(
        &self,
        op: LogicalOperator,
        lhs: &DenseArray<bool>,
        rhs: &DenseArray<bool>,
    ) -> Result<DenseArray<bool>, KernelError> {
        lhs.zip_map(rhs, |&a, &b| op.apply(a, b))
    }

    fn real_part<T: Float>(
        &self,
        input: &DenseArray<Complex<T>>,
    ) -> Result<DenseArray<T>, KernelError> {
        Ok(input.map(|c| c.re))
    }

    fn imag_part<T: Float>(
        &self,
        input: &DenseArray<Complex<T>>,
    ) -> Result<DenseArray<T>, KernelError> {
        Ok(input.map(|c| c.im))
    }

    fn cplx<T: Float>(
        &self,
        re: &DenseArray<T>,
        im: &DenseArray<T>,
    ) -> Result<DenseArray<Complex<T>>, KernelError> {
        re.zip_map(im, |&r, &i| Complex::new(r, i))
    }

    fn cast_complex<T: Float>(
        &self,
        input: &DenseArray<T>,
    ) -> Result<DenseArray<Complex<T>>, KernelError> {
        Ok(input.map(|&r| Complex::new(r, T::zero())))
    }

    fn mul_complex<T: Float>(
        &self,
        lhs: &DenseArray<Complex<T>>,
        rhs: &DenseArray<Complex<T>>,
    ) -> Result<DenseArray<Complex<T>>, KernelError> {
        lhs.zip_map(rhs, |a, b| a * b)
    }
}
