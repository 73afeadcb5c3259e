// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Scalar Kind Module
//!
//! Tags for the element representation stored in an [`crate::Array`],
//! and for the representation a unary kernel actually runs in.

use std::fmt::{Display, Formatter};

/// Element representation of a stored array.
///
/// Integer and boolean kinds are valid inputs to the unary family but are
/// never produced by a native unary kernel, as they promote first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    #[cfg(feature = "extended_numeric_types")]
    Int8,
    #[cfg(feature = "extended_numeric_types")]
    Int16,
    Int32,
    Int64,
    #[cfg(feature = "extended_numeric_types")]
    UInt8,
    #[cfg(feature = "extended_numeric_types")]
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Complex32,
    Complex64,
}

impl ScalarKind {
    /// Lower-case type name, as used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            #[cfg(feature = "extended_numeric_types")]
            ScalarKind::Int8 => "int8",
            #[cfg(feature = "extended_numeric_types")]
            ScalarKind::Int16 => "int16",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            #[cfg(feature = "extended_numeric_types")]
            ScalarKind::UInt8 => "uint8",
            #[cfg(feature = "extended_numeric_types")]
            ScalarKind::UInt16 => "uint16",
            ScalarKind::UInt32 => "uint32",
            ScalarKind::UInt64 => "uint64",
            ScalarKind::Float32 => "float32",
            ScalarKind::Float64 => "float64",
            ScalarKind::Complex32 => "complex32",
            ScalarKind::Complex64 => "complex64",
        }
    }

    /// True for the floating real and floating complex kinds.
    #[inline]
    pub fn is_floating(self) -> bool {
        matches!(
            self,
            ScalarKind::Float32 | ScalarKind::Float64 | ScalarKind::Complex32 | ScalarKind::Complex64
        )
    }

    #[inline]
    pub fn is_complex(self) -> bool {
        matches!(self, ScalarKind::Complex32 | ScalarKind::Complex64)
    }

    #[inline]
    pub fn is_real(self) -> bool {
        !self.is_complex()
    }

    /// The computation kind this scalar kind maps onto without promotion,
    /// or `None` for non-floating kinds.
    #[inline]
    pub fn as_compute(self) -> Option<ComputeKind> {
        match self {
            ScalarKind::Float32 => Some(ComputeKind::F32),
            ScalarKind::Float64 => Some(ComputeKind::F64),
            ScalarKind::Complex32 => Some(ComputeKind::C32),
            ScalarKind::Complex64 => Some(ComputeKind::C64),
            _ => None,
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind a unary kernel executes in, after promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComputeKind {
    F32,
    F64,
    C32,
    C64,
}

impl ComputeKind {
    /// Scalar kind of a value-producing kernel's output in this computation kind.
    #[inline]
    pub fn scalar_kind(self) -> ScalarKind {
        match self {
            ComputeKind::F32 => ScalarKind::Float32,
            ComputeKind::F64 => ScalarKind::Float64,
            ComputeKind::C32 => ScalarKind::Complex32,
            ComputeKind::C64 => ScalarKind::Complex64,
        }
    }
}
