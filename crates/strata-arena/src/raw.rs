//! Low-level primitives for arena memory.
//!
//! [`RawBlock`] owns one system allocation. [`RawSpan`] is a non-owning,
//! bounds-checked window into a block. Turning a span into a `&mut [u8]` is
//! the only `unsafe` operation the regions need; callers must guarantee
//! that no two live slices overlap.

#![allow(unsafe_code)]

use std::ptr::{self, NonNull};
use std::slice;

/// An owned, zero-initialised byte block from the system allocator.
#[derive(Debug)]
pub(crate) struct RawBlock {
    ptr: NonNull<u8>,
    len: usize,
}

impl RawBlock {
    /// Allocate `len` zeroed bytes. Returns `None` if the allocator refuses.
    pub(crate) fn allocate(len: usize) -> Option<Self> {
        let mut buf: Vec<u8> = Vec::new();
        buf.try_reserve_exact(len).ok()?;
        buf.resize(len, 0);
        let leaked: &mut [u8] = Box::leak(buf.into_boxed_slice());
        let len = leaked.len();
        Some(Self {
            ptr: NonNull::from(leaked).cast::<u8>(),
            len,
        })
    }

    /// The whole block as a span.
    pub(crate) fn span(&self) -> RawSpan {
        RawSpan {
            base: self.ptr,
            len: self.len,
        }
    }
}

impl Drop for RawBlock {
    fn drop(&mut self) {
        // SAFETY: `ptr` and `len` come from `Box::leak` of a `Box<[u8]>` of
        // exactly `len` bytes in `allocate`, and the block is dropped once.
        unsafe {
            drop(Box::from_raw(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.len,
            )));
        }
    }
}

/// A window `[base, base + len)` into a [`RawBlock`].
#[derive(Clone, Copy, Debug)]
pub(crate) struct RawSpan {
    base: NonNull<u8>,
    len: usize,
}

impl RawSpan {
    /// Length of the window in bytes.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    /// The sub-window `[start, start + len)`, or `None` if it does not fit.
    pub(crate) fn sub(&self, start: usize, len: usize) -> Option<RawSpan> {
        let end = start.checked_add(len)?;
        if end > self.len {
            return None;
        }
        // SAFETY: `start <= self.len`, so the offset stays within (or one
        // past the end of) the allocation `base` points into.
        let base = unsafe { NonNull::new_unchecked(self.base.as_ptr().add(start)) };
        Some(RawSpan { base, len })
    }

    /// View the window as a mutable byte slice.
    ///
    /// # Safety
    ///
    /// The owning [`RawBlock`] must outlive `'a`, and no other live slice may
    /// overlap this window for the duration of `'a`.
    pub(crate) unsafe fn as_mut_slice<'a>(self) -> &'a mut [u8] {
        // SAFETY: upheld by the caller; `base` is non-null and valid for
        // `len` initialised bytes by construction.
        unsafe { slice::from_raw_parts_mut(self.base.as_ptr(), self.len) }
    }
}
