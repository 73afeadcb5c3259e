// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Engine Module** - *Handle-level entry points for every operation tag*
//!
//! [`Engine`] binds a [`Backend`] to the routing layer. Each method takes an
//! input handle, returns a freshly acquired output handle, and leaves no
//! temporaries behind on either path.
//!
//! ## Example
//! ```rust
//! use unarrow::{Array, Backend, CpuBackend, DenseArray, Engine, ScalarKind};
//!
//! let engine = Engine::new(CpuBackend::new());
//! let x = engine
//!     .backend()
//!     .acquire(Array::from(DenseArray::from_slice(&[0i32, 1, 2])))
//!     .unwrap();
//!
//! // integer input runs in single precision
//! let y = engine.exp(x).unwrap();
//! assert_eq!(engine.backend().array(y).unwrap().kind(), ScalarKind::Float32);
//! ```

use std::str::FromStr;

use crate::enums::error::KernelError;
use crate::enums::operators::{PredicateOperator, UnaryOperator};
use crate::kernels::routing::{derived, unary};
use crate::structs::handle::ArrayHandle;
use crate::traits::backend::Backend;

/// Names of the composed operations, accepted by [`Engine::call`].
pub const DERIVED_OPERATIONS: [&str; 4] = ["arg", "pow2", "factorial", "not"];

/// Dispatch engine over a backend `B`.
#[derive(Debug, Default)]
pub struct Engine<B: Backend> {
    backend: B,
}

/// One method per native unary tag.
macro_rules! unary_methods {
    ($($name:ident => $op:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
                self.unary(UnaryOperator::$op, input)
            }
        )*
    };
}

impl<B: Backend> Engine<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The backend that owns every handle this engine issues.
    #[inline]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Runs the native unary operation `op` on `input`.
    pub fn unary(&self, op: UnaryOperator, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        unary::resolve_unary(&self.backend, op, input)
    }

    /// Runs predicate `op` on `input`, producing a boolean array.
    pub fn check(
        &self,
        op: PredicateOperator,
        input: ArrayHandle,
    ) -> Result<ArrayHandle, KernelError> {
        unary::resolve_check(&self.backend, op, input)
    }

    unary_methods!(
        sin => Sin, cos => Cos, tan => Tan,
        asin => Asin, acos => Acos, atan => Atan,
        sinh => Sinh, cosh => Cosh, tanh => Tanh,
        asinh => Asinh, acosh => Acosh, atanh => Atanh,
        trunc => Trunc, round => Round, floor => Floor, ceil => Ceil, sign => Sign,
        exp => Exp, expm1 => Expm1, log => Log, log1p => Log1p, log2 => Log2,
        log10 => Log10, sqrt => Sqrt, cbrt => Cbrt, sigmoid => Sigmoid,
        erf => Erf, erfc => Erfc, tgamma => Tgamma, lgamma => Lgamma,
    );

    pub fn isnan(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        self.check(PredicateOperator::IsNan, input)
    }

    pub fn isinf(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        self.check(PredicateOperator::IsInf, input)
    }

    pub fn iszero(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        self.check(PredicateOperator::IsZero, input)
    }

    /// Phase angle. Zero for real input.
    pub fn arg(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        derived::arg(&self.backend, input)
    }

    pub fn pow2(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        derived::pow2(&self.backend, input)
    }

    pub fn factorial(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        derived::factorial(&self.backend, input)
    }

    /// `input == 0`, elementwise.
    #[allow(clippy::should_implement_trait)]
    pub fn not(&self, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        derived::not(&self.backend, input)
    }

    /// Runs the operation named `tag`, e.g. `"sin"`, `"isnan"` or `"factorial"`.
    ///
    /// Unknown tags are an argument error at position 0.
    pub fn call(&self, tag: &str, input: ArrayHandle) -> Result<ArrayHandle, KernelError> {
        if let Ok(op) = UnaryOperator::from_str(tag) {
            return self.unary(op, input);
        }
        if let Ok(op) = PredicateOperator::from_str(tag) {
            return self.check(op, input);
        }
        match tag {
            "arg" => self.arg(input),
            "pow2" => self.pow2(input),
            "factorial" => self.factorial(input),
            "not" => self.not(input),
            _ => Err(KernelError::argument(0, format!("unknown operation '{tag}'"))),
        }
    }
}
