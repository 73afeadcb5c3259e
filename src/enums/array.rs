// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Array Module** - *Main High-Level Array Type*
//!
//! `Array` is the type-erased container behind every [`crate::ArrayHandle`].
//!
//! ## Features:
//! - direct variant access to each stored scalar kind
//! - kind introspection (`kind`, `is_real`, `is_complex`) for the dispatcher
//! - lossless casts into the real or complex computation kinds
//! - simplifies function signatures by allowing `impl Into<Array>`.

use std::sync::Arc;

use num_complex::Complex;
use num_traits::NumCast;
use vec64::Vec64;

use crate::enums::error::KernelError;
use crate::enums::scalar_kind::ScalarKind;
use crate::enums::shape_dim::ShapeDim;
use crate::structs::dense_array::DenseArray;
use crate::traits::shape::Shape;
use crate::traits::type_unions::{Float, Numeric};

/// Single precision complex element.
pub type Complex32 = Complex<f32>;
/// Double precision complex element.
pub type Complex64 = Complex<f64>;

/// # Array
///
/// Standard `Array` type, one variant per [`ScalarKind`].
///
/// ## Overview
/// - Each variant holds its `DenseArray` behind an `Arc`, so handing an
///   array to several handles, or cloning it into a kernel's scope, never
///   copies the buffer.
/// - Functions match on the variant when they need the concrete element
///   type, and on [`Array::kind`] when the tag is enough.
///
/// ## Examples
/// ```rust
/// use unarrow::{Array, DenseArray, ScalarKind};
///
/// let arr = Array::from(DenseArray::from_slice(&[1.0f64, 2.0, 3.0]));
/// assert_eq!(arr.kind(), ScalarKind::Float64);
/// assert_eq!(arr.len(), 3);
/// assert!(arr.is_real());
/// ```
#[derive(PartialEq, Clone, Debug)]
pub enum Array {
    Bool(Arc<DenseArray<bool>>),
    #[cfg(feature = "extended_numeric_types")]
    Int8(Arc<DenseArray<i8>>),
    #[cfg(feature = "extended_numeric_types")]
    Int16(Arc<DenseArray<i16>>),
    Int32(Arc<DenseArray<i32>>),
    Int64(Arc<DenseArray<i64>>),
    #[cfg(feature = "extended_numeric_types")]
    UInt8(Arc<DenseArray<u8>>),
    #[cfg(feature = "extended_numeric_types")]
    UInt16(Arc<DenseArray<u16>>),
    UInt32(Arc<DenseArray<u32>>),
    UInt64(Arc<DenseArray<u64>>),
    Float32(Arc<DenseArray<f32>>),
    Float64(Arc<DenseArray<f64>>),
    Complex32(Arc<DenseArray<Complex32>>),
    Complex64(Arc<DenseArray<Complex64>>),
}

/// Expands `$body` once per variant with `$a` bound to the inner
/// `Arc<DenseArray<_>>`.
macro_rules! with_array {
    ($arr:expr, $a:ident => $body:expr) => {
        match $arr {
            Array::Bool($a) => $body,
            #[cfg(feature = "extended_numeric_types")]
            Array::Int8($a) => $body,
            #[cfg(feature = "extended_numeric_types")]
            Array::Int16($a) => $body,
            Array::Int32($a) => $body,
            Array::Int64($a) => $body,
            #[cfg(feature = "extended_numeric_types")]
            Array::UInt8($a) => $body,
            #[cfg(feature = "extended_numeric_types")]
            Array::UInt16($a) => $body,
            Array::UInt32($a) => $body,
            Array::UInt64($a) => $body,
            Array::Float32($a) => $body,
            Array::Float64($a) => $body,
            Array::Complex32($a) => $body,
            Array::Complex64($a) => $body,
        }
    };
}

/// Casts every element of a real numeric array into `T`.
fn cast_numeric<S: Numeric, T: Float>(arr: &DenseArray<S>) -> Option<DenseArray<T>> {
    let data: Option<Vec64<T>> = arr.iter().map(|&v| <T as NumCast>::from(v)).collect();
    data.map(|data| DenseArray::from_parts(data, arr.shape.clone()))
}

fn cast_complex<S: Float, T: Float>(arr: &DenseArray<Complex<S>>) -> Option<DenseArray<Complex<T>>> {
    let data: Option<Vec64<Complex<T>>> = arr
        .iter()
        .map(|c| Some(Complex::new(<T as NumCast>::from(c.re)?, <T as NumCast>::from(c.im)?)))
        .collect();
    data.map(|data| DenseArray::from_parts(data, arr.shape.clone()))
}

fn bool_to_float<T: Float>(arr: &DenseArray<bool>) -> DenseArray<T> {
    arr.map(|&b| if b { T::one() } else { T::zero() })
}

/// Fills `shape` with `value` cast to `T`, failing when `value` is not representable.
fn filled_numeric<T: Numeric>(value: f64, shape: &ShapeDim) -> Result<Arc<DenseArray<T>>, KernelError> {
    let v = <T as NumCast>::from(value).ok_or_else(|| {
        KernelError::argument(
            1,
            format!("constant {value} is not representable as {}", std::any::type_name::<T>()),
        )
    })?;
    Ok(Arc::new(DenseArray::filled(v, shape)))
}

impl Array {
    /// Stored scalar kind.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Array::Bool(_) => ScalarKind::Bool,
            #[cfg(feature = "extended_numeric_types")]
            Array::Int8(_) => ScalarKind::Int8,
            #[cfg(feature = "extended_numeric_types")]
            Array::Int16(_) => ScalarKind::Int16,
            Array::Int32(_) => ScalarKind::Int32,
            Array::Int64(_) => ScalarKind::Int64,
            #[cfg(feature = "extended_numeric_types")]
            Array::UInt8(_) => ScalarKind::UInt8,
            #[cfg(feature = "extended_numeric_types")]
            Array::UInt16(_) => ScalarKind::UInt16,
            Array::UInt32(_) => ScalarKind::UInt32,
            Array::UInt64(_) => ScalarKind::UInt64,
            Array::Float32(_) => ScalarKind::Float32,
            Array::Float64(_) => ScalarKind::Float64,
            Array::Complex32(_) => ScalarKind::Complex32,
            Array::Complex64(_) => ScalarKind::Complex64,
        }
    }

    /// Returns the logical length of the array.
    #[inline]
    pub fn len(&self) -> usize {
        with_array!(self, a => a.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn is_real(&self) -> bool {
        self.kind().is_real()
    }

    #[inline]
    pub fn is_complex(&self) -> bool {
        self.kind().is_complex()
    }

    #[inline]
    pub fn is_floating(&self) -> bool {
        self.kind().is_floating()
    }

    /// Returns an array of `shape` and `kind` with every element set to `value`.
    ///
    /// Complex kinds receive `value + 0i`. Boolean arrays are `true` for any
    /// non-zero value.
    pub fn filled(value: f64, shape: &ShapeDim, kind: ScalarKind) -> Result<Array, KernelError> {
        Ok(match kind {
            ScalarKind::Bool => Array::Bool(Arc::new(DenseArray::filled(value != 0.0, shape))),
            #[cfg(feature = "extended_numeric_types")]
            ScalarKind::Int8 => Array::Int8(filled_numeric(value, shape)?),
            #[cfg(feature = "extended_numeric_types")]
            ScalarKind::Int16 => Array::Int16(filled_numeric(value, shape)?),
            ScalarKind::Int32 => Array::Int32(filled_numeric(value, shape)?),
            ScalarKind::Int64 => Array::Int64(filled_numeric(value, shape)?),
            #[cfg(feature = "extended_numeric_types")]
            ScalarKind::UInt8 => Array::UInt8(filled_numeric(value, shape)?),
            #[cfg(feature = "extended_numeric_types")]
            ScalarKind::UInt16 => Array::UInt16(filled_numeric(value, shape)?),
            ScalarKind::UInt32 => Array::UInt32(filled_numeric(value, shape)?),
            ScalarKind::UInt64 => Array::UInt64(filled_numeric(value, shape)?),
            ScalarKind::Float32 => Array::Float32(filled_numeric(value, shape)?),
            ScalarKind::Float64 => Array::Float64(filled_numeric(value, shape)?),
            ScalarKind::Complex32 => Array::Complex32(Arc::new(DenseArray::filled(
                Complex32::new(value as f32, 0.0),
                shape,
            ))),
            ScalarKind::Complex64 => {
                Array::Complex64(Arc::new(DenseArray::filled(Complex64::new(value, 0.0), shape)))
            }
        })
    }

    /// Casts a real array of any kind into the real computation type `T`.
    ///
    /// Zero-copy when the array already holds `T`. Complex input is a type
    /// error at `position`.
    pub fn to_float<T: Float>(&self, position: usize) -> Result<DenseArray<T>, KernelError> {
        let cast = match self {
            Array::Bool(a) => Some(bool_to_float(a)),
            #[cfg(feature = "extended_numeric_types")]
            Array::Int8(a) => cast_numeric(a),
            #[cfg(feature = "extended_numeric_types")]
            Array::Int16(a) => cast_numeric(a),
            Array::Int32(a) => cast_numeric(a),
            Array::Int64(a) => cast_numeric(a),
            #[cfg(feature = "extended_numeric_types")]
            Array::UInt8(a) => cast_numeric(a),
            #[cfg(feature = "extended_numeric_types")]
            Array::UInt16(a) => cast_numeric(a),
            Array::UInt32(a) => cast_numeric(a),
            Array::UInt64(a) => cast_numeric(a),
            Array::Float32(a) => cast_numeric(a),
            Array::Float64(a) => cast_numeric(a),
            Array::Complex32(_) | Array::Complex64(_) => {
                return Err(KernelError::type_error(
                    position,
                    self.kind(),
                    "complex data cannot be cast to a real kind",
                ));
            }
        };
        cast.ok_or_else(|| {
            KernelError::type_error(
                position,
                self.kind(),
                format!("values not representable as {}", std::any::type_name::<T>()),
            )
        })
    }

    /// Casts any array into the complex computation type `Complex<T>`.
    ///
    /// Real input receives a zero imaginary part.
    pub fn to_complex<T: Float>(&self, position: usize) -> Result<DenseArray<Complex<T>>, KernelError> {
        let cast = match self {
            Array::Complex32(a) => cast_complex(a),
            Array::Complex64(a) => cast_complex(a),
            real => Some(real.to_float::<T>(position)?.map(|&re| Complex::new(re, T::zero()))),
        };
        cast.ok_or_else(|| {
            KernelError::type_error(
                position,
                self.kind(),
                format!(
                    "values not representable as Complex<{}>",
                    std::any::type_name::<T>()
                ),
            )
        })
    }

    /// Returns the boolean array, if that is the stored kind.
    pub fn bool(&self) -> Option<&DenseArray<bool>> {
        match self {
            Array::Bool(a) => Some(&**a),
            _ => None,
        }
    }

    pub fn f32(&self) -> Option<&DenseArray<f32>> {
        match self {
            Array::Float32(a) => Some(&**a),
            _ => None,
        }
    }

    pub fn f64(&self) -> Option<&DenseArray<f64>> {
        match self {
            Array::Float64(a) => Some(&**a),
            _ => None,
        }
    }

    pub fn c32(&self) -> Option<&DenseArray<Complex32>> {
        match self {
            Array::Complex32(a) => Some(&**a),
            _ => None,
        }
    }

    pub fn c64(&self) -> Option<&DenseArray<Complex64>> {
        match self {
            Array::Complex64(a) => Some(&**a),
            _ => None,
        }
    }

    pub fn i32(&self) -> Option<&DenseArray<i32>> {
        match self {
            Array::Int32(a) => Some(&**a),
            _ => None,
        }
    }
}

impl Shape for Array {
    fn shape(&self) -> ShapeDim {
        with_array!(self, a => a.shape.clone())
    }
}

macro_rules! impl_array_from_dense {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<DenseArray<$t>> for Array {
                #[inline]
                fn from(arr: DenseArray<$t>) -> Self {
                    Array::$variant(Arc::new(arr))
                }
            }

            impl From<Arc<DenseArray<$t>>> for Array {
                #[inline]
                fn from(arr: Arc<DenseArray<$t>>) -> Self {
                    Array::$variant(arr)
                }
            }
        )*
    };
}

impl_array_from_dense!(
    bool => Bool,
    i32 => Int32,
    i64 => Int64,
    u32 => UInt32,
    u64 => UInt64,
    f32 => Float32,
    f64 => Float64,
    Complex32 => Complex32,
    Complex64 => Complex64,
);

#[cfg(feature = "extended_numeric_types")]
impl_array_from_dense!(
    i8 => Int8,
    i16 => Int16,
    u8 => UInt8,
    u16 => UInt16,
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_introspection() {
        let arr = Array::from(DenseArray::from_slice(&[1i32, 2, 3]));
        assert_eq!(arr.kind(), ScalarKind::Int32);
        assert!(arr.is_real());
        assert!(!arr.is_floating());
        assert_eq!(arr.shape(), ShapeDim::Rank1(3));

        let z = Array::from(DenseArray::from_slice(&[Complex32::new(1.0, 2.0)]));
        assert!(z.is_complex());
        assert!(z.is_floating());
        assert_eq!(z.len(), 1);
    }

    #[test]
    fn test_to_float_casts_integers_and_bools() {
        let ints = Array::from(DenseArray::from_slice(&[1i64, -2, 3]));
        assert_eq!(ints.to_float::<f32>(1).unwrap().to_vec(), vec![1.0, -2.0, 3.0]);

        let bools = Array::from(DenseArray::from_slice(&[true, false]));
        assert_eq!(bools.to_float::<f64>(1).unwrap().to_vec(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_to_float_rejects_complex() {
        let z = Array::from(DenseArray::from_slice(&[Complex64::new(0.0, 1.0)]));
        let err = z.to_float::<f64>(1).unwrap_err();
        assert!(matches!(
            err,
            KernelError::Type {
                position: 1,
                kind: ScalarKind::Complex64,
                ..
            }
        ));
    }

    #[test]
    fn test_to_complex_from_real_and_complex() {
        let re = Array::from(DenseArray::from_slice(&[2.0f32, 3.0]));
        let z = re.to_complex::<f32>(1).unwrap();
        assert_eq!(z.to_vec(), vec![Complex32::new(2.0, 0.0), Complex32::new(3.0, 0.0)]);

        let z64 = Array::from(DenseArray::from_slice(&[Complex64::new(1.5, -0.5)]));
        let z32 = z64.to_complex::<f32>(1).unwrap();
        assert_eq!(z32.get(0), Some(Complex32::new(1.5, -0.5)));
    }

    #[test]
    fn test_filled_matches_kind_and_shape() {
        let shape = ShapeDim::from_dims(&[2, 3]);
        let arr = Array::filled(2.0, &shape, ScalarKind::UInt32).unwrap();
        assert_eq!(arr.kind(), ScalarKind::UInt32);
        assert_eq!(arr.shape(), shape);

        let z = Array::filled(1.0, &shape, ScalarKind::Complex64).unwrap();
        assert_eq!(z.c64().unwrap().get(5), Some(Complex64::new(1.0, 0.0)));

        let b = Array::filled(0.0, &shape, ScalarKind::Bool).unwrap();
        assert!(b.bool().unwrap().iter().all(|v| !v));
    }

    #[test]
    fn test_filled_rejects_unrepresentable_constant() {
        let err = Array::filled(-1.0, &ShapeDim::Rank1(2), ScalarKind::UInt64).unwrap_err();
        assert!(matches!(err, KernelError::Argument { .. }));
    }
}
