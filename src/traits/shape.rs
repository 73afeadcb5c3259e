// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Shape Trait Module
//!
//! Unified way to describe the dimensionality “shape” of any array,
//! typed or type-erased, including bare `ShapeDim` values.
//!
//! Includes standard accessors for 1d and 2d so callers that know the
//! rank are not penalised with a match.

use crate::enums::shape_dim::ShapeDim;

/// Shape trait.
///
/// Returns the `ShapeDim` for the receiver.
///
/// The remaining accessors are automatic provided the implementor
/// implements `shape`.
pub trait Shape {
    /// Returns the shape of the receiver
    fn shape(&self) -> ShapeDim;

    /// Total element count
    fn numel(&self) -> usize {
        self.shape().numel()
    }

    /// Number of dimensions
    fn ndims(&self) -> usize {
        self.shape().ndims()
    }

    /// Returns the first dimension extent
    fn shape_1d(&self) -> usize {
        match self.shape() {
            ShapeDim::Rank0 => 1,
            ShapeDim::Rank1(n) => n,
            ShapeDim::Rank2 { rows, .. } => rows,
            ShapeDim::Rank3 { x, .. } => x,
            ShapeDim::Rank4 { a, .. } => a,
            ShapeDim::RankN(dims) => *dims.first().unwrap_or(&1),
        }
    }

    /// Returns the first and second dimension extents
    fn shape_2d(&self) -> (usize, usize) {
        match self.shape() {
            ShapeDim::Rank0 => (1, 1),
            ShapeDim::Rank1(n) => (n, 1),
            ShapeDim::Rank2 { rows, cols } => (rows, cols),
            ShapeDim::Rank3 { x, y, .. } => (x, y),
            ShapeDim::Rank4 { a, b, .. } => (a, b),
            ShapeDim::RankN(dims) => (*dims.first().unwrap_or(&1), *dims.get(1).unwrap_or(&1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let s = ShapeDim::from_dims(&[4, 5, 6]);
        assert_eq!(s.shape_1d(), 4);
        assert_eq!(s.shape_2d(), (4, 5));
        assert_eq!(Shape::numel(&s), 120);
        assert_eq!(ShapeDim::Rank1(7).shape_2d(), (7, 1));
        assert_eq!(ShapeDim::Rank0.shape_1d(), 1);
    }
}
