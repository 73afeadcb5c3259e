// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Type Unions Module
//!
//! Minimal trait unions over the *num-traits* crate, used to bound the
//! generic kernels and constructors.

use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, Num, NumCast, ToPrimitive};

/// Trait for types valid as float elements, i.e. the two real computation kinds.
///
/// Useful when specifying `my_fn::<T: Float>() {}`.
///
/// Extends and constrains the *num-traits* `Float` implementation to fit the crate's type universe.
pub trait Float:
    NumFloat + Copy + Default + ToPrimitive + PartialEq + Debug + Display + Send + Sync + 'static
{
}
impl Float for f32 {}
impl Float for f64 {}

/// Trait for types valid as numerical.
///
/// Useful when specifying `my_fn::<T: Numeric>() {}`.
///
/// Extends and constrains the *num-traits* `Num` implementation to fit the crate's type universe.
pub trait Numeric:
    Num + NumCast + Copy + Default + ToPrimitive + PartialEq + Debug + Display + Send + Sync + 'static
{
}
impl Numeric for f32 {}
impl Numeric for f64 {}
impl Numeric for i8 {}
impl Numeric for i16 {}
impl Numeric for i32 {}
impl Numeric for i64 {}
impl Numeric for u8 {}
impl Numeric for u16 {}
impl Numeric for u32 {}
impl Numeric for u64 {}
