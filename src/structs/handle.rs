// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **Handle Module** - *Opaque array handles and scoped temporaries*
//!
//! An [`ArrayHandle`] is what callers hold. The array behind it lives in the
//! backend's handle store until the handle is released.
//!
//! [`ScopedHandle`] owns a temporary handle for the duration of a derived
//! pipeline and releases it exactly once, on whichever path the pipeline
//! leaves by.

use std::fmt::{Display, Formatter};

use crate::enums::error::KernelError;
use crate::traits::backend::Backend;

/// Opaque reference to an array held by a [`Backend`].
///
/// Handles are plain ids. Copying one does not copy or retain the array,
/// so ownership is tracked by whoever acquired it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ArrayHandle(u64);

impl ArrayHandle {
    /// Handle that refers to nothing. Never issued by a store.
    pub const NULL: ArrayHandle = ArrayHandle(0);

    /// Wraps a raw id issued by a handle store.
    #[inline]
    pub const fn from_raw(id: u64) -> Self {
        ArrayHandle(id)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl Display for ArrayHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Owns a handle and releases it on drop.
///
/// Use [`ScopedHandle::release`] on the success path to surface release
/// failures, and [`ScopedHandle::into_inner`] to hand the handle to the
/// caller instead of releasing it.
pub struct ScopedHandle<'a, B: Backend> {
    backend: &'a B,
    handle: Option<ArrayHandle>,
}

impl<'a, B: Backend> ScopedHandle<'a, B> {
    #[inline]
    pub fn new(backend: &'a B, handle: ArrayHandle) -> Self {
        Self {
            backend,
            handle: Some(handle),
        }
    }

    /// Takes ownership of the handle a fallible acquisition produced.
    #[inline]
    pub fn acquire(
        backend: &'a B,
        acquired: Result<ArrayHandle, KernelError>,
    ) -> Result<Self, KernelError> {
        acquired.map(|handle| Self::new(backend, handle))
    }

    /// The owned handle, still owned by this scope.
    #[inline]
    pub fn handle(&self) -> ArrayHandle {
        self.handle.unwrap_or(ArrayHandle::NULL)
    }

    /// Gives up ownership without releasing.
    #[inline]
    pub fn into_inner(mut self) -> ArrayHandle {
        self.handle.take().unwrap_or(ArrayHandle::NULL)
    }

    /// Releases now, propagating the store's error.
    pub fn release(mut self) -> Result<(), KernelError> {
        match self.handle.take() {
            Some(h) => self.backend.release(h),
            None => Ok(()),
        }
    }
}

impl<B: Backend> Drop for ScopedHandle<'_, B> {
    fn drop(&mut self) {
        if let Some(h) = self.handle.take() {
            if let Err(e) = self.backend.release(h) {
                log::warn!("failed to release temporary array {h}: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernels::cpu::CpuBackend;
    use crate::{Array, DenseArray};

    fn acquire_one(backend: &CpuBackend) -> ArrayHandle {
        backend
            .acquire(Array::from(DenseArray::from_slice(&[1.0f32])))
            .unwrap()
    }

    #[test]
    fn test_drop_releases() {
        let backend = CpuBackend::new();
        {
            let _tmp = ScopedHandle::new(&backend, acquire_one(&backend));
            assert_eq!(backend.live_handles(), 1);
        }
        assert_eq!(backend.live_handles(), 0);
    }

    #[test]
    fn test_into_inner_keeps_handle_alive() {
        let backend = CpuBackend::new();
        let h = ScopedHandle::new(&backend, acquire_one(&backend)).into_inner();
        assert_eq!(backend.live_handles(), 1);
        backend.release(h).unwrap();
        assert_eq!(backend.live_handles(), 0);
    }

    #[test]
    fn test_explicit_release_is_not_repeated_on_drop() {
        let backend = CpuBackend::new();
        let tmp = ScopedHandle::new(&backend, acquire_one(&backend));
        tmp.release().unwrap();
        assert_eq!(backend.live_handles(), 0);
        assert_eq!(backend.released(), 1);
    }

    #[test]
    fn test_null_handle() {
        assert!(ArrayHandle::NULL.is_null());
        assert!(ArrayHandle::default().is_null());
        assert_eq!(ArrayHandle::from_raw(9).raw(), 9);
        assert_eq!(ArrayHandle::from_raw(9).to_string(), "#9");
    }
}
