// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # ShapeDim Enum Module
//!
//! Companion to [crate::traits::shape::Shape];
//!
//! Contains all supported `Shape` variants for dense n-dimensional arrays.

use std::fmt::{Display, Formatter};

use crate::traits::shape::Shape;

/// Dimensional rank of a dense array.
///
/// Dimensions are stored outermost-last, and a constructed shape never
/// carries trailing unit dimensions beyond the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ShapeDim {
    /// Single scalar value.
    Rank0,

    /// Vector length.
    Rank1(usize),

    /// Matrix with row/column counts.
    Rank2 { rows: usize, cols: usize },

    /// 3d volume
    Rank3 { x: usize, y: usize, z: usize },

    /// 4d Object
    Rank4 {
        a: usize,
        b: usize,
        c: usize,
        d: usize,
    },

    /// N-dimensional tensor, rank 5 and above.
    RankN(Vec<usize>),
}

impl ShapeDim {
    /// Builds the shape for the given dimension extents.
    ///
    /// Trailing unit dimensions are dropped, so `[3, 1, 1]` is `Rank1(3)`
    /// and an empty slice is `Rank0`.
    pub fn from_dims(dims: &[usize]) -> Self {
        let mut n = dims.len();
        while n > 1 && dims[n - 1] == 1 {
            n -= 1;
        }
        match &dims[..n] {
            [] => ShapeDim::Rank0,
            [1] => ShapeDim::Rank0,
            [len] => ShapeDim::Rank1(*len),
            [rows, cols] => ShapeDim::Rank2 {
                rows: *rows,
                cols: *cols,
            },
            [x, y, z] => ShapeDim::Rank3 {
                x: *x,
                y: *y,
                z: *z,
            },
            [a, b, c, d] => ShapeDim::Rank4 {
                a: *a,
                b: *b,
                c: *c,
                d: *d,
            },
            more => ShapeDim::RankN(more.to_vec()),
        }
    }

    /// Dimension extents, outermost last. `Rank0` reports `[1]`.
    pub fn dims(&self) -> Vec<usize> {
        match self {
            ShapeDim::Rank0 => vec![1],
            ShapeDim::Rank1(n) => vec![*n],
            ShapeDim::Rank2 { rows, cols } => vec![*rows, *cols],
            ShapeDim::Rank3 { x, y, z } => vec![*x, *y, *z],
            ShapeDim::Rank4 { a, b, c, d } => vec![*a, *b, *c, *d],
            ShapeDim::RankN(dims) => dims.clone(),
        }
    }

    /// Number of dimensions.
    pub fn ndims(&self) -> usize {
        match self {
            ShapeDim::Rank0 | ShapeDim::Rank1(_) => 1,
            ShapeDim::Rank2 { .. } => 2,
            ShapeDim::Rank3 { .. } => 3,
            ShapeDim::Rank4 { .. } => 4,
            ShapeDim::RankN(dims) => dims.len(),
        }
    }

    /// Total element count.
    pub fn numel(&self) -> usize {
        match self {
            ShapeDim::Rank0 => 1,
            ShapeDim::Rank1(n) => *n,
            ShapeDim::Rank2 { rows, cols } => rows * cols,
            ShapeDim::Rank3 { x, y, z } => x * y * z,
            ShapeDim::Rank4 { a, b, c, d } => a * b * c * d,
            ShapeDim::RankN(dims) => dims.iter().product(),
        }
    }
}

impl Display for ShapeDim {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let dims = self.dims();
        write!(f, "[")?;
        for (i, d) in dims.iter().enumerate() {
            if i > 0 {
                write!(f, " x ")?;
            }
            write!(f, "{d}")?;
        }
        write!(f, "]")
    }
}

/// Implement `Shape` for `ShapeDim` so a bare shape can stand in for the
/// array it describes.
impl Shape for ShapeDim {
    fn shape(&self) -> ShapeDim {
        self.clone()
    }
}
