// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operators Module
//!
//! Operation tags for the unary family, the predicate checks, and the
//! binary and logical collaborators they are composed from.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::enums::error::KernelError;

/// Domains a unary operation has a kernel binding for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domains {
    /// Real inputs only. Complex inputs are rejected before any computation.
    RealOnly,
    /// Real inputs via the native kernel, complex inputs via decomposition
    /// into real and imaginary component kernels.
    RealAndComplex,
}

/// Unary elementwise operations backed by a typed kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Asinh,
    Acosh,
    Atanh,
    Trunc,
    Round,
    Floor,
    Ceil,
    Sign,
    Exp,
    Expm1,
    Log,
    Log1p,
    Log2,
    Log10,
    Sqrt,
    Cbrt,
    Sigmoid,
    Erf,
    Erfc,
    Tgamma,
    Lgamma,
}

impl UnaryOperator {
    pub const ALL: [UnaryOperator; 30] = [
        UnaryOperator::Sin,
        UnaryOperator::Cos,
        UnaryOperator::Tan,
        UnaryOperator::Asin,
        UnaryOperator::Acos,
        UnaryOperator::Atan,
        UnaryOperator::Sinh,
        UnaryOperator::Cosh,
        UnaryOperator::Tanh,
        UnaryOperator::Asinh,
        UnaryOperator::Acosh,
        UnaryOperator::Atanh,
        UnaryOperator::Trunc,
        UnaryOperator::Round,
        UnaryOperator::Floor,
        UnaryOperator::Ceil,
        UnaryOperator::Sign,
        UnaryOperator::Exp,
        UnaryOperator::Expm1,
        UnaryOperator::Log,
        UnaryOperator::Log1p,
        UnaryOperator::Log2,
        UnaryOperator::Log10,
        UnaryOperator::Sqrt,
        UnaryOperator::Cbrt,
        UnaryOperator::Sigmoid,
        UnaryOperator::Erf,
        UnaryOperator::Erfc,
        UnaryOperator::Tgamma,
        UnaryOperator::Lgamma,
    ];

    /// Fixed domain set of the operation.
    ///
    /// Adding an operator forces a decision here, there is no fallback arm.
    pub fn domains(self) -> Domains {
        use UnaryOperator::*;
        match self {
            Exp => Domains::RealAndComplex,
            Sin | Cos | Tan | Asin | Acos | Atan | Sinh | Cosh | Tanh | Asinh | Acosh | Atanh
            | Trunc | Round | Floor | Ceil | Sign | Expm1 | Log | Log1p | Log2 | Log10 | Sqrt
            | Cbrt | Sigmoid | Erf | Erfc | Tgamma | Lgamma => Domains::RealOnly,
        }
    }

    pub fn name(self) -> &'static str {
        use UnaryOperator::*;
        match self {
            Sin => "sin",
            Cos => "cos",
            Tan => "tan",
            Asin => "asin",
            Acos => "acos",
            Atan => "atan",
            Sinh => "sinh",
            Cosh => "cosh",
            Tanh => "tanh",
            Asinh => "asinh",
            Acosh => "acosh",
            Atanh => "atanh",
            Trunc => "trunc",
            Round => "round",
            Floor => "floor",
            Ceil => "ceil",
            Sign => "sign",
            Exp => "exp",
            Expm1 => "expm1",
            Log => "log",
            Log1p => "log1p",
            Log2 => "log2",
            Log10 => "log10",
            Sqrt => "sqrt",
            Cbrt => "cbrt",
            Sigmoid => "sigmoid",
            Erf => "erf",
            Erfc => "erfc",
            Tgamma => "tgamma",
            Lgamma => "lgamma",
        }
    }
}

impl Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnaryOperator {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UnaryOperator::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| KernelError::argument(0, format!("unknown unary operation '{s}'")))
    }
}

/// Elementwise logical combinators over boolean arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalOperator {
    And,
    Or,
}

impl LogicalOperator {
    #[inline]
    pub fn apply(self, lhs: bool, rhs: bool) -> bool {
        match self {
            LogicalOperator::And => lhs && rhs,
            LogicalOperator::Or => lhs || rhs,
        }
    }
}

/// Boolean-producing checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PredicateOperator {
    IsNan,
    IsInf,
    IsZero,
}

impl PredicateOperator {
    pub const ALL: [PredicateOperator; 3] = [
        PredicateOperator::IsNan,
        PredicateOperator::IsInf,
        PredicateOperator::IsZero,
    ];

    /// Combinator merging the real and imaginary component results of a
    /// complex input.
    ///
    /// A complex value is NaN or infinite when either component is, and is
    /// zero only when both components are.
    pub fn complex_combinator(self) -> LogicalOperator {
        match self {
            PredicateOperator::IsNan => LogicalOperator::Or,
            PredicateOperator::IsInf => LogicalOperator::Or,
            PredicateOperator::IsZero => LogicalOperator::And,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PredicateOperator::IsNan => "isnan",
            PredicateOperator::IsInf => "isinf",
            PredicateOperator::IsZero => "iszero",
        }
    }
}

impl Display for PredicateOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PredicateOperator {
    type Err = KernelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PredicateOperator::ALL
            .iter()
            .copied()
            .find(|op| op.name() == s)
            .ok_or_else(|| KernelError::argument(0, format!("unknown predicate '{s}'")))
    }
}

/// Binary collaborators the derived operations are composed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Multiply,
    Pow,
    Atan2,
    Equal,
}
