// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! Shared fixtures: a fault-injecting backend that wraps `CpuBackend` and
//! counts every acquisition, so tests can assert that each temporary a
//! call takes is handed back exactly once on every path.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use num_complex::Complex;
use unarrow::{
    Array, ArrayHandle, Backend, BinaryOperator, CpuBackend, DenseArray, Engine, Float,
    KernelError, LogicalOperator, PredicateOperator, ScalarKind, ShapeDim, UnaryOperator,
};

/// Where the next call should fail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FailPoint {
    /// The nth acquisition after arming, counting from 0.
    Acquire(usize),
    /// The next release. The handle stays in the store.
    Release,
    Constant,
    Binary(BinaryOperator),
    Real,
    Imag,
    Unary(UnaryOperator),
    Check,
    Logical,
    Cplx,
    CastComplex,
    MulComplex,
}

#[derive(Debug, Default)]
pub struct FaultyBackend {
    inner: CpuBackend,
    acquired: AtomicUsize,
    armed_at: AtomicUsize,
    fail: Mutex<Option<FailPoint>>,
    release_calls: Mutex<Vec<ArrayHandle>>,
}

impl FaultyBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fails the first call matching `point` from now on.
    pub fn arm(&self, point: FailPoint) {
        self.armed_at
            .store(self.acquired.load(Ordering::SeqCst), Ordering::SeqCst);
        *self.fail.lock().unwrap() = Some(point);
    }

    pub fn acquired(&self) -> usize {
        self.acquired.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.inner.released()
    }

    pub fn live_handles(&self) -> usize {
        self.inner.live_handles()
    }

    /// Every handle `release` was called with, failed calls included.
    pub fn release_calls(&self) -> Vec<ArrayHandle> {
        self.release_calls.lock().unwrap().clone()
    }

    fn trip(&self, point: FailPoint) -> Result<(), KernelError> {
        let mut fail = self.fail.lock().unwrap();
        if *fail == Some(point) {
            *fail = None;
            return Err(KernelError::Backend(format!("injected failure at {point:?}")));
        }
        Ok(())
    }
}

impl Backend for FaultyBackend {
    fn acquire(&self, array: Array) -> Result<ArrayHandle, KernelError> {
        let nth = self.acquired() - self.armed_at.load(Ordering::SeqCst);
        self.trip(FailPoint::Acquire(nth))?;
        let handle = self.inner.acquire(array)?;
        self.acquired.fetch_add(1, Ordering::SeqCst);
        Ok(handle)
    }

    fn release(&self, handle: ArrayHandle) -> Result<(), KernelError> {
        self.release_calls.lock().unwrap().push(handle);
        self.trip(FailPoint::Release)?;
        self.inner.release(handle)
    }

    fn array(&self, handle: ArrayHandle) -> Result<Arc<Array>, KernelError> {
        self.inner.array(handle)
    }

    fn constant(
        &self,
        value: f64,
        shape: &ShapeDim,
        kind: ScalarKind,
    ) -> Result<ArrayHandle, KernelError> {
        self.trip(FailPoint::Constant)?;
        self.acquire(Array::filled(value, shape, kind)?)
    }

    fn binary(
        &self,
        op: BinaryOperator,
        lhs: ArrayHandle,
        rhs: ArrayHandle,
    ) -> Result<ArrayHandle, KernelError> {
        self.trip(FailPoint::Binary(op))?;
        let (l, r) = (self.array(lhs)?, self.array(rhs)?);
        self.acquire(unarrow::kernels::cpu::binary::binary_array(op, &l, &r)?)
    }

    fn real(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        self.trip(FailPoint::Real)?;
        let array = self.array(input)?;
        self.acquire(unarrow::kernels::cpu::binary::real_array(&array))
    }

    fn imag(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        self.trip(FailPoint::Imag)?;
        let array = self.array(input)?;
        self.acquire(unarrow::kernels::cpu::binary::imag_array(&array)?)
    }

    fn unary<T: Float>(
        &self,
        op: UnaryOperator,
        input: &DenseArray<T>,
    ) -> Result<DenseArray<T>, KernelError> {
        self.trip(FailPoint::Unary(op))?;
        self.inner.unary(op, input)
    }

    fn check<T: Float>(
        &self,
        op: PredicateOperator,
        input: &DenseArray<T>,
    ) -> Result<DenseArray<bool>, KernelError> {
        self.trip(FailPoint::Check)?;
        self.inner.check(op, input)
    }

    fn logical(
        &self,
        op: LogicalOperator,
        lhs: &DenseArray<bool>,
        rhs: &DenseArray<bool>,
    ) -> Result<DenseArray<bool>, KernelError> {
        self.trip(FailPoint::Logical)?;
        self.inner.logical(op, lhs, rhs)
    }

    fn real_part<T: Float>(
        &self,
        input: &DenseArray<Complex<T>>,
    ) -> Result<DenseArray<T>, KernelError> {
        self.inner.real_part(input)
    }

    fn imag_part<T: Float>(
        &self,
        input: &DenseArray<Complex<T>>,
    ) -> Result<DenseArray<T>, KernelError> {
        self.inner.imag_part(input)
    }

    fn cplx<T: Float>(
        &self,
        re: &DenseArray<T>,
        im: &DenseArray<T>,
    ) -> Result<DenseArray<Complex<T>>, KernelError> {
        self.trip(FailPoint::Cplx)?;
        self.inner.cplx(re, im)
    }

    fn cast_complex<T: Float>(
        &self,
        input: &DenseArray<T>,
    ) -> Result<DenseArray<Complex<T>>, KernelError> {
        self.trip(FailPoint::CastComplex)?;
        self.inner.cast_complex(input)
    }

    fn mul_complex<T: Float>(
        &self,
        lhs: &DenseArray<Complex<T>>,
        rhs: &DenseArray<Complex<T>>,
    ) -> Result<DenseArray<Complex<T>>, KernelError> {
        self.trip(FailPoint::MulComplex)?;
        self.inner.mul_complex(lhs, rhs)
    }
}

/// Acquires `arr` on the engine's backend.
pub fn put<B: Backend, A: Into<Array>>(engine: &Engine<B>, arr: A) -> ArrayHandle {
    engine.backend().acquire(arr.into()).unwrap()
}

/// Reads `handle` back from the engine's backend.
pub fn get<B: Backend>(engine: &Engine<B>, handle: ArrayHandle) -> Arc<Array> {
    engine.backend().array(handle).unwrap()
}

pub fn f32s(values: &[f32]) -> DenseArray<f32> {
    DenseArray::from_slice(values)
}

pub fn f64s(values: &[f64]) -> DenseArray<f64> {
    DenseArray::from_slice(values)
}
