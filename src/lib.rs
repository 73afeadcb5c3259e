// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Unarrow** - *Type-generic unary elementwise math over array handles*
//!
//! Resolves the computation kind of an input array, routes each operation to
//! the one kernel bound to that kind, decomposes complex inputs into real and
//! imaginary component kernels where no native complex kernel exists, and
//! composes derived operations (`arg`, `pow2`, `factorial`, `not`) from the
//! same entry points.
//!
//! ## Layout
//! - [`Engine`] is the handle-level surface, one method per operation tag.
//! - [`api`] wraps it in status-returning functions that never write their
//!   output on failure.
//! - [`Backend`] is the compute collaborator. [`CpuBackend`] is the reference
//!   implementation with an in-process handle store.
//!
//! ## Example
//! ```rust
//! use unarrow::{Array, Backend, CpuBackend, DenseArray, Engine};
//!
//! let engine = Engine::new(CpuBackend::new());
//! let x = engine
//!     .backend()
//!     .acquire(Array::from(DenseArray::from_slice(&[3.0f32])))
//!     .unwrap();
//!
//! let y = engine.pow2(x).unwrap();
//! assert_eq!(engine.backend().array(y).unwrap().f32().unwrap().to_vec(), vec![8.0]);
//! ```

pub mod enums {
    pub mod array;
    pub mod error;
    pub mod operators;
    pub mod scalar_kind;
    pub mod shape_dim;
}

pub mod structs {
    pub mod dense_array;
    pub mod engine;
    pub mod handle;
}

pub mod traits {
    pub mod backend;
    pub mod print;
    pub mod shape;
    pub mod type_unions;
}

pub mod kernels {
    pub mod cpu;
    pub mod routing;
}

pub mod api;

pub use enums::array::{Array, Complex32, Complex64};
pub use enums::error::{KernelError, Status};
pub use enums::operators::{
    BinaryOperator, Domains, LogicalOperator, PredicateOperator, UnaryOperator,
};
pub use enums::scalar_kind::{ComputeKind, ScalarKind};
pub use enums::shape_dim::ShapeDim;

pub use structs::dense_array::DenseArray;
pub use structs::engine::{DERIVED_OPERATIONS, Engine};
pub use structs::handle::{ArrayHandle, ScopedHandle};

pub use traits::backend::Backend;
pub use traits::print::Print;
pub use traits::shape::Shape;
pub use traits::type_unions::{Float, Numeric};

pub use kernels::cpu::CpuBackend;

pub use vec64::Vec64;
