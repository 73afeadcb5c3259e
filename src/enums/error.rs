// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Error Module - Custom *Unarrow* Error Type
//!
//! Defines the unified error type for the unary dispatch engine, and the
//! `Status` codes reported across the status-returning API surface.
//!
//! ## Features
//! - Covers argument preconditions, unsupported computation kinds,
//! length mismatches, stale handles and propagated backend failures.
//! - Derives `Display` and `Error` through *thiserror* for integration
//! with standard Rust error handling.

use thiserror::Error;

use crate::enums::scalar_kind::ScalarKind;

/// Catch all error type for the unary kernels.
///
/// Errors are never recovered locally. A failure inside a decomposition or a
/// derived pipeline is forwarded verbatim once the temporaries of the
/// current call have been released.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KernelError {
    /// The input fails a precondition, e.g. complex data handed to a real-only operation.
    #[error("Invalid argument at position {position}: {message}")]
    Argument { position: usize, message: String },

    /// The resolved computation kind has no kernel binding for the operation.
    #[error("Invalid type '{kind}' at position {position}: {message}")]
    Type {
        position: usize,
        kind: ScalarKind,
        message: String,
    },

    /// Operands of a binary collaborator cannot be broadcast together.
    #[error("Length mismatch: {0}")]
    LengthMismatch(String),

    /// The handle is unknown to the store, or was already released.
    #[error("Invalid handle: {0}")]
    InvalidHandle(u64),

    /// The backend could not allocate the requested output.
    #[error("Allocation failed: {0}")]
    Allocation(String),

    /// Any other failure raised by a kernel or collaborator.
    #[error("Backend error: {0}")]
    Backend(String),
}

impl KernelError {
    /// Create an argument error for the given 1-based argument position.
    pub fn argument(position: usize, message: impl Into<String>) -> Self {
        Self::Argument {
            position,
            message: message.into(),
        }
    }

    /// Create a type error carrying the offending kind and argument position.
    pub fn type_error(position: usize, kind: ScalarKind, message: impl Into<String>) -> Self {
        Self::Type {
            position,
            kind,
            message: message.into(),
        }
    }

    /// Maps the error onto the status code reported at the API edge.
    pub fn status(&self) -> Status {
        match self {
            KernelError::Argument { .. } => Status::InvalidArgument,
            KernelError::Type { .. } => Status::InvalidType,
            KernelError::LengthMismatch(_) => Status::SizeMismatch,
            KernelError::InvalidHandle(_) => Status::InvalidHandle,
            KernelError::Allocation(_) => Status::NoMemory,
            KernelError::Backend(_) => Status::Internal,
        }
    }
}

/// Status codes returned by the functions in [`crate::api`].
///
/// `Success` is the only non-failure code.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Success = 0,
    NoMemory = 101,
    InvalidArgument = 202,
    SizeMismatch = 203,
    InvalidType = 204,
    InvalidHandle = 201,
    Internal = 998,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}
