//! Raw slot storage.
//!
//! `RawBuf` owns an allocation and nothing else: it never constructs or drops
//! elements. Which slots are live is tracked by the owner.

#![allow(unsafe_code)]

use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::GrowVecError;

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

impl<T> RawBuf<T> {
    /// Allocates uninitialized storage for `capacity` slots.
    ///
    /// Zero-sized layouts never reach the allocator.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` if the byte size of the
    /// layout exceeds `isize::MAX`. Nothing is allocated in that case.
    pub(crate) fn allocate(capacity: usize) -> Result<Self, GrowVecError> {
        let layout = Layout::array::<T>(capacity).map_err(|_| GrowVecError::CapacityOverflow {
            requested: capacity,
        })?;

        let ptr = if layout.size() == 0 {
            NonNull::dangling()
        } else {
            // SAFETY: layout has a non-zero size.
            let raw = unsafe { alloc(layout) }.cast::<T>();
            match NonNull::new(raw) {
                Some(ptr) => ptr,
                None => handle_alloc_error(layout),
            }
        };

        Ok(Self {
            ptr,
            capacity,
            _owns: PhantomData,
        })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    fn layout(&self) -> Layout {
        // SAFETY: the same layout was validated by `allocate`.
        unsafe { Layout::array::<T>(self.capacity).unwrap_unchecked() }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let layout = self.layout();
        if layout.size() != 0 {
            // SAFETY: ptr was returned by `alloc` with this exact layout.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
    }
}

// SAFETY: RawBuf is a uniquely owned allocation, like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access to RawBuf exposes only `*const T`.
unsafe impl<T: Sync> Sync for RawBuf<T> {}
