// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

use std::borrow::Cow;

use crate::enums::error::KernelError;
use crate::structs::dense_array::DenseArray;

/// Repeat a length-1 array out to `like`'s shape.
/// Errors if the input length is *not* 1.
pub fn broadcast_length_1_array<T: Clone, U>(
    arr: &DenseArray<T>,
    like: &DenseArray<U>,
) -> Result<DenseArray<T>, KernelError> {
    match arr.as_slice() {
        [v] => Ok(DenseArray::filled(v.clone(), &like.shape)),
        _ => Err(KernelError::LengthMismatch(format!(
            "expected a length-1 array to broadcast, got length {}",
            arr.len()
        ))),
    }
}

/// Ensure `lhs` and `rhs` have identical shape, broadcasting the scalar
/// side if exactly one of them has length 1.
pub fn maybe_broadcast_scalar_array<'a, T: Clone>(
    lhs: &'a DenseArray<T>,
    rhs: &'a DenseArray<T>,
) -> Result<(Cow<'a, DenseArray<T>>, Cow<'a, DenseArray<T>>), KernelError> {
    let (l, r) = (lhs.len(), rhs.len());

    if lhs.shape == rhs.shape {
        return Ok((Cow::Borrowed(lhs), Cow::Borrowed(rhs)));
    }
    if l == 1 {
        return Ok((Cow::Owned(broadcast_length_1_array(lhs, rhs)?), Cow::Borrowed(rhs)));
    }
    if r == 1 {
        return Ok((Cow::Borrowed(lhs), Cow::Owned(broadcast_length_1_array(rhs, lhs)?)));
    }

    Err(KernelError::LengthMismatch(format!(
        "cannot broadcast arrays of shape {} and {}",
        lhs.shape, rhs.shape
    )))
}
