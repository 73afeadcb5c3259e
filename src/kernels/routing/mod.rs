// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Routing Module
//!
//! Routing and dispatching for unary operations: type promotion, the
//! per-kind kernel dispatcher, complex decomposition, derived compositions,
//! and the length-1 broadcasting binary kernels rely on.

pub mod broadcast;
pub mod complex;
pub mod derived;
pub mod promote;
pub mod unary;

pub use broadcast::{broadcast_length_1_array, maybe_broadcast_scalar_array};
pub use derived::{arg, factorial, not, pow2};
pub use promote::{promote, resolve};
pub use unary::{check_dispatch, resolve_check, resolve_unary, unary_dispatch};
