// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **API Module** - *Status-returning entry points, one per operation tag*
//!
//! Each function has the shape `(engine, &mut out, input) -> Status`.
//! On success the output handle is written and `Status::Success` returned.
//! On failure `out` is left exactly as the caller passed it, and the error
//! is reported through its [`Status`] code.
//!
//! ```rust
//! use unarrow::{api, Array, ArrayHandle, Backend, CpuBackend, DenseArray, Engine, Status};
//!
//! let engine = Engine::new(CpuBackend::new());
//! let x = engine
//!     .backend()
//!     .acquire(Array::from(DenseArray::from_slice(&[4.0f64])))
//!     .unwrap();
//!
//! let mut out = ArrayHandle::NULL;
//! assert_eq!(api::factorial(&engine, &mut out, x), Status::Success);
//! assert!(!out.is_null());
//! ```

use crate::enums::error::{KernelError, Status};
use crate::structs::engine::Engine;
use crate::structs::handle::ArrayHandle;
use crate::traits::backend::Backend;

/// Writes the handle of a successful call into `out`, or reports the error.
pub fn report(out: &mut ArrayHandle, result: Result<ArrayHandle, KernelError>) -> Status {
    match result {
        Ok(handle) => {
            *out = handle;
            Status::Success
        }
        Err(e) => {
            ::log::debug!("operation failed: {e}");
            e.status()
        }
    }
}

macro_rules! status_fns {
    ($($name:ident),* $(,)?) => {
        $(
            #[inline]
            pub fn $name<B: Backend>(engine: &Engine<B>, out: &mut ArrayHandle, input: ArrayHandle) -> Status {
                report(out, engine.$name(input))
            }
        )*
    };
}

// trigonometric
status_fns!(sin, cos, tan, asin, acos, atan);
// hyperbolic
status_fns!(sinh, cosh, tanh, asinh, acosh, atanh);
// rounding
status_fns!(trunc, round, floor, ceil, sign);
// exponential and logarithmic
status_fns!(exp, expm1, log, log1p, log2, log10, sqrt, cbrt, sigmoid);
// special
status_fns!(erf, erfc, tgamma, lgamma);
// derived
status_fns!(arg, pow2, factorial, not);
// predicates
status_fns!(isnan, isinf, iszero);
