// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **DenseArray Module** - *Typed, shaped, 64-byte aligned element buffer*
//!
//! `DenseArray<T>` is the concrete storage behind every [`crate::Array`]
//! variant and the unit the typed kernels consume and produce.

use std::iter::repeat_n;

use vec64::Vec64;

use crate::enums::error::KernelError;
use crate::enums::shape_dim::ShapeDim;
use crate::traits::shape::Shape;

/// Dense n-dimensional array of a single element type.
///
/// ### Fields
/// - `data`: Backing buffer, 64-byte aligned through `Vec64`.
/// - `shape`: Dimension extents. `shape.numel() == data.len()` always holds
///   for arrays built through the constructors.
///
/// Arrays are immutable once wrapped in an [`crate::Array`]. Kernels never
/// write into their input, they return a fresh `DenseArray`.
#[derive(PartialEq, Clone, Debug)]
pub struct DenseArray<T> {
    /// Backing buffer for values.
    pub data: Vec64<T>,
    /// Dimension extents.
    pub shape: ShapeDim,
}

impl<T> DenseArray<T> {
    /// Wraps `data` with `shape`, checking the element count.
    pub fn new(data: Vec64<T>, shape: ShapeDim) -> Result<Self, KernelError> {
        if data.len() != shape.numel() {
            return Err(KernelError::LengthMismatch(format!(
                "DenseArray::new => {} values cannot fill shape {}",
                data.len(),
                shape
            )));
        }
        Ok(Self { data, shape })
    }

    /// Builds the output of an elementwise kernel.
    ///
    /// The caller guarantees `data` was produced from an input of `shape`.
    #[inline]
    pub(crate) fn from_parts(data: Vec64<T>, shape: ShapeDim) -> Self {
        debug_assert_eq!(data.len(), shape.numel(), "elementwise kernel changed length");
        Self { data, shape }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.len() == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Applies `f` to every element, keeping the shape.
    pub fn map<U, F>(&self, f: F) -> DenseArray<U>
    where
        F: Fn(&T) -> U,
    {
        DenseArray::from_parts(self.iter().map(f).collect(), self.shape.clone())
    }

    /// Applies `f` pairwise. Both arrays must hold the same shape.
    pub fn zip_map<U, R, F>(&self, other: &DenseArray<U>, f: F) -> Result<DenseArray<R>, KernelError>
    where
        F: Fn(&T, &U) -> R,
    {
        if self.shape != other.shape {
            return Err(KernelError::LengthMismatch(format!(
                "zip_map => shape mismatch: LHS {} RHS {}",
                self.shape, other.shape
            )));
        }
        Ok(DenseArray::from_parts(
            self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect(),
            self.shape.clone(),
        ))
    }
}

impl<T: Clone> DenseArray<T> {
    /// Creates a vector-shaped array from a slice.
    pub fn from_slice(values: &[T]) -> Self {
        Self::from_parts(
            values.iter().cloned().collect(),
            ShapeDim::from_dims(&[values.len()]),
        )
    }

    /// Creates an array of the given dimension extents from a slice,
    /// checking the element count.
    pub fn with_shape(values: &[T], dims: &[usize]) -> Result<Self, KernelError> {
        Self::new(values.iter().cloned().collect(), ShapeDim::from_dims(dims))
    }

    /// Creates an array of `shape` with every element set to `value`.
    pub fn filled(value: T, shape: &ShapeDim) -> Self {
        Self::from_parts(repeat_n(value, shape.numel()).collect(), shape.clone())
    }
}

impl<T: Copy> DenseArray<T> {
    /// Returns the element at flat index `idx`, if in bounds.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<T> {
        self.as_slice().get(idx).copied()
    }

    /// Copies the elements out into a standard `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }
}

impl<T> Shape for DenseArray<T> {
    fn shape(&self) -> ShapeDim {
        self.shape.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_and_get() {
        let arr = DenseArray::from_slice(&[1.5f64, 2.5, 3.5]);
        assert_eq!(arr.len(), 3);
        assert_eq!(arr.shape, ShapeDim::Rank1(3));
        assert_eq!(arr.get(1), Some(2.5));
        assert_eq!(arr.get(3), None);
        assert!(!arr.is_empty());
    }

    #[test]
    fn test_single_value_is_rank0() {
        let arr = DenseArray::from_slice(&[4.0f32]);
        assert_eq!(arr.shape, ShapeDim::Rank0);
        assert_eq!(arr.numel(), 1);
    }

    #[test]
    fn test_with_shape_checks_count() {
        let ok = DenseArray::with_shape(&[1i32, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        assert_eq!(ok.shape_2d(), (2, 3));
        let err = DenseArray::with_shape(&[1i32, 2, 3], &[2, 3]).unwrap_err();
        assert!(matches!(err, KernelError::LengthMismatch(_)));
    }

    #[test]
    fn test_filled_and_map() {
        let shape = ShapeDim::from_dims(&[2, 2]);
        let arr = DenseArray::filled(2.0f64, &shape);
        assert_eq!(arr.to_vec(), vec![2.0; 4]);
        let squared = arr.map(|v| v * v);
        assert_eq!(squared.shape, shape);
        assert_eq!(squared.to_vec(), vec![4.0; 4]);
    }

    #[test]
    fn test_zip_map_requires_same_shape() {
        let a = DenseArray::from_slice(&[1.0f64, 2.0]);
        let b = DenseArray::from_slice(&[10.0f64, 20.0]);
        let c = DenseArray::from_slice(&[1.0f64, 2.0, 3.0]);
        assert_eq!(a.zip_map(&b, |x, y| x + y).unwrap().to_vec(), vec![11.0, 22.0]);
        assert!(a.zip_map(&c, |x, y| x + y).is_err());
    }

    #[test]
    fn test_empty() {
        let arr = DenseArray::<f32>::from_slice(&[]);
        assert!(arr.is_empty());
        assert_eq!(arr.shape, ShapeDim::Rank1(0));
    }
}
