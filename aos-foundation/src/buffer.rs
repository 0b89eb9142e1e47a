// AOS - aos-foundation
// Module: Buffer - Type-unaware byte regions
// SW-REQ-ID: AOS-CORE-BUF-001, AOS-CORE-MEM-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Raw byte regions in three ownership modes.
//!
//! - [`BufferView`]: borrows a byte slice owned elsewhere
//! - [`StaticBuffer`]: owns `N` bytes inline, freed with the owner
//! - [`DynamicBuffer`]: owns one heap block allocated exactly once
//!
//! A buffer knows its size but not the type stored in it. Typed access goes
//! through [`ArrayView::bind`](crate::ArrayView::bind) and
//! [`StringView::bind`](crate::StringView::bind), which borrow the buffer for
//! as long as the view lives.

use aos_error::{Error, Result};

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};

/// A type-unaware byte region.
pub trait Buffer {
    /// Returns the buffer bytes.
    fn as_bytes(&self) -> &[u8];

    /// Returns the buffer bytes for writing.
    fn as_bytes_mut(&mut self) -> &mut [u8];

    /// Returns the buffer size in bytes.
    fn size(&self) -> usize {
        self.as_bytes().len()
    }

    /// Copies the bytes of `src` to the start of this buffer.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if `src` is larger than this buffer. Nothing is
    /// copied in that case.
    fn copy_from(&mut self, src: &dyn Buffer) -> Result<()> {
        let src = src.as_bytes();
        let dst = self.as_bytes_mut();

        if src.len() > dst.len() {
            trace_event!(debug, src_size = src.len(), dst_size = dst.len(), "buffer copy overflow");
            return Err(Error::NO_MEMORY);
        }

        dst[..src.len()].copy_from_slice(src);

        Ok(())
    }
}

impl PartialEq for dyn Buffer + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// Non-owning view on an external byte region.
#[derive(Debug)]
pub struct BufferView<'a> {
    data: &'a mut [u8],
}

impl<'a> BufferView<'a> {
    /// Creates a view on `data`.
    #[must_use]
    pub fn new(data: &'a mut [u8]) -> Self {
        Self { data }
    }
}

impl Buffer for BufferView<'_> {
    fn as_bytes(&self) -> &[u8] {
        self.data
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        self.data
    }
}

impl PartialEq for BufferView<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

/// Buffer owning `N` bytes of inline storage.
///
/// The storage is zero-initialised and aligned for any primitive, so typed
/// views bound to it need no padding. `N == 0` does not compile.
///
/// # Examples
///
/// ```
/// use aos_foundation::{Buffer, StaticBuffer};
///
/// let buffer = StaticBuffer::<64>::new();
/// assert_eq!(buffer.size(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[repr(C, align(16))]
pub struct StaticBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> StaticBuffer<N> {
    const NON_EMPTY: () = assert!(N > 0, "StaticBuffer size must be greater than zero");

    /// Creates a zeroed buffer.
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;

        Self { data: [0; N] }
    }
}

impl<const N: usize> Default for StaticBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Buffer for StaticBuffer<N> {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Buffer owning one heap block.
///
/// The block is allocated once at construction and its size never changes.
/// Copies go through [`try_clone`](Self::try_clone) and
/// [`assign`](Self::assign), both of which allocate fallibly.
#[cfg(feature = "alloc")]
#[derive(Debug, PartialEq, Eq)]
pub struct DynamicBuffer {
    data: Box<[u8]>,
}

#[cfg(feature = "alloc")]
impl DynamicBuffer {
    /// Allocates a zeroed buffer of `size` bytes.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the allocation fails.
    pub fn new(size: usize) -> Result<Self> {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::AllocationTrace::allocating("buffer", size).entered();

        let mut data = Vec::new();

        data.try_reserve_exact(size).map_err(|_| {
            trace_event!(debug, size, "buffer allocation failed");
            Error::NO_MEMORY
        })?;
        data.resize(size, 0);

        Ok(Self {
            data: data.into_boxed_slice(),
        })
    }

    /// Deep-copies the buffer into a fresh allocation.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the allocation fails.
    pub fn try_clone(&self) -> Result<Self> {
        let mut copy = Self::new(self.data.len())?;

        copy.data.copy_from_slice(&self.data);

        Ok(copy)
    }

    /// Replaces the contents with a copy of `src`, resized to its size.
    ///
    /// The new block is allocated before the old one is released: on
    /// failure the buffer keeps its previous contents.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the allocation fails.
    pub fn assign(&mut self, src: &dyn Buffer) -> Result<()> {
        let mut fresh = Self::new(src.size())?;

        fresh.data.copy_from_slice(src.as_bytes());
        *self = fresh;

        Ok(())
    }
}

#[cfg(feature = "alloc")]
impl Buffer for DynamicBuffer {
    fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Element types that a typed view may place over raw buffer bytes.
///
/// # Safety
///
/// Implementors have no padding, no drop glue, and accept every bit pattern
/// as a valid value. The trait is sealed to the primitive integers.
#[allow(unsafe_code)]
pub unsafe trait Plain: Copy + sealed::Sealed {}

macro_rules! impl_plain {
    ($($ty:ty),+) => {
        $(
            impl sealed::Sealed for $ty {}
            // SAFETY: primitive integers have no padding and no invalid bit patterns
            #[allow(unsafe_code)]
            unsafe impl Plain for $ty {}
        )+
    };
}

impl_plain!(u8, i8, u16, i16, u32, i32, u64, i64, u128, i128, usize, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_buffer_is_zeroed_and_aligned() {
        let buffer = StaticBuffer::<24>::new();

        assert_eq!(buffer.size(), 24);
        assert!(buffer.as_bytes().iter().all(|b| *b == 0));
        assert_eq!(buffer.as_bytes().as_ptr() as usize % 16, 0);
    }

    #[test]
    fn test_copy_from_smaller_source() -> Result<()> {
        let mut src = StaticBuffer::<4>::new();
        src.as_bytes_mut().copy_from_slice(&[1, 2, 3, 4]);

        let mut dst = StaticBuffer::<8>::new();
        dst.copy_from(&src)?;

        assert_eq!(dst.as_bytes(), &[1, 2, 3, 4, 0, 0, 0, 0]);

        Ok(())
    }

    #[test]
    fn test_copy_from_larger_source_is_rejected() {
        let mut src = StaticBuffer::<8>::new();
        src.as_bytes_mut().fill(0xAA);

        let mut dst = StaticBuffer::<4>::new();

        assert_eq!(dst.copy_from(&src), Err(Error::NO_MEMORY));
        assert!(dst.as_bytes().iter().all(|b| *b == 0));
    }

    #[test]
    fn test_view_borrows_external_bytes() {
        let mut raw = [0u8; 6];

        {
            let mut view = BufferView::new(&mut raw);
            view.as_bytes_mut()[5] = 9;
            assert_eq!(view.size(), 6);
        }

        assert_eq!(raw[5], 9);
    }

    #[test]
    fn test_dyn_buffer_equality() {
        let mut a = StaticBuffer::<3>::new();
        let mut raw = [0u8; 3];
        let b = BufferView::new(&mut raw);

        assert!(&a as &dyn Buffer == &b as &dyn Buffer);

        a.as_bytes_mut()[0] = 1;
        assert!(&a as &dyn Buffer != &b as &dyn Buffer);

        let c = StaticBuffer::<4>::new();
        assert!(&c as &dyn Buffer != &b as &dyn Buffer);
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_dynamic_buffer_clone_and_assign() -> Result<()> {
        let mut original = DynamicBuffer::new(4)?;
        original.as_bytes_mut().copy_from_slice(b"abcd");

        let copy = original.try_clone()?;
        assert_eq!(copy, original);
        assert_ne!(copy.as_bytes().as_ptr(), original.as_bytes().as_ptr());

        let mut src = StaticBuffer::<2>::new();
        src.as_bytes_mut().copy_from_slice(b"xy");

        original.assign(&src)?;
        assert_eq!(original.size(), 2);
        assert_eq!(original.as_bytes(), b"xy");
        assert_eq!(copy.as_bytes(), b"abcd");

        Ok(())
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_dynamic_buffer_allocation_failure() {
        assert_eq!(DynamicBuffer::new(usize::MAX).map(|b| b.size()), Err(Error::NO_MEMORY));
    }
}
