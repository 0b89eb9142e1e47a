// AOS - aos-foundation
// Module: String - NUL-terminated bounded strings
// SW-REQ-ID: AOS-CORE-STR-001, AOS-CORE-MEM-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Allow unsafe code for the contiguous view over TerminatedBytes
#![allow(unsafe_code)]

//! NUL-terminated byte strings with fixed capacity.
//!
//! A string of capacity `N` owns `N + 1` bytes: the extra byte keeps a NUL
//! behind the last character at all times, so [`StringBase::c_str`] never
//! copies. Contents are bytes, not necessarily UTF-8.
//!
//! - [`StaticString<N>`]: inline storage
//! - [`DynamicString`]: one heap block allocated fallibly once
//! - [`StringView<'a>`]: bound to a borrowed byte region or [`Buffer`]
//!
//! All of them coerce to [`String<'a>`].
//!
//! # Examples
//!
//! ```
//! use aos_foundation::StaticString;
//!
//! let mut s = StaticString::<5>::try_from("ab")?;
//! s.append("cde")?;
//! assert_eq!(s, "abcde");
//!
//! assert!(s.append("f").is_err());
//! assert_eq!(s.c_str().to_bytes(), b"abcde");
//! # Ok::<(), aos_foundation::Error>(())
//! ```

use core::ffi::CStr;
use core::fmt::{self, Write};
use core::ops::{Index, IndexMut, RangeBounds};

use aos_error::{Error, Result};

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};

use crate::array::{range_bounds, ArrayBase, ItemStorage};
use crate::buffer::Buffer;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Byte storage backing a string.
///
/// The storage holds `capacity + 1` bytes and never changes size.
pub trait ByteStorage {
    /// Returns all bytes, terminator slot included.
    fn bytes(&self) -> &[u8];

    /// Returns all bytes for writing.
    fn bytes_mut(&mut self) -> &mut [u8];
}

/// `N` characters followed by one terminator byte, laid out contiguously.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct TerminatedBytes<const N: usize> {
    chars: [u8; N],
    nul: u8,
}

impl<const N: usize> TerminatedBytes<N> {
    /// Creates zeroed storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            chars: [0; N],
            nul: 0,
        }
    }
}

impl<const N: usize> Default for TerminatedBytes<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ByteStorage for TerminatedBytes<N> {
    fn bytes(&self) -> &[u8] {
        // SAFETY: repr(C) places `nul` right after `chars`, and u8 fields have
        // no padding, so the struct is N + 1 initialized bytes
        unsafe { core::slice::from_raw_parts((self as *const Self).cast::<u8>(), N + 1) }
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        // SAFETY: as above, and the exclusive borrow covers the whole struct
        unsafe { core::slice::from_raw_parts_mut((self as *mut Self).cast::<u8>(), N + 1) }
    }
}

impl ByteStorage for &mut [u8] {
    fn bytes(&self) -> &[u8] {
        self
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

#[cfg(feature = "alloc")]
impl ByteStorage for Box<[u8]> {
    fn bytes(&self) -> &[u8] {
        self
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        self
    }
}

/// A bounded NUL-terminated string over byte storage `S`.
///
/// # Invariants
///
/// 1. `len <= capacity()` always holds
/// 2. The byte at `len` is `0` after every operation
pub struct StringBase<S: ?Sized + ByteStorage> {
    len: usize,
    storage: S,
}

/// Bounded string over any storage.
pub type String<'a> = StringBase<dyn ByteStorage + 'a>;

/// String with capacity `N` and inline storage.
pub type StaticString<const N: usize> = StringBase<TerminatedBytes<N>>;

/// String over one heap block allocated at construction.
#[cfg(feature = "alloc")]
pub type DynamicString = StringBase<Box<[u8]>>;

/// String over a borrowed byte region.
pub type StringView<'a> = StringBase<&'a mut [u8]>;

impl<S: ?Sized + ByteStorage> StringBase<S> {
    /// Returns the length in bytes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the maximum length in bytes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.bytes().len().saturating_sub(1)
    }

    /// Checks if the string is empty.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checks if the string is at capacity.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }

    /// Returns the string bytes without terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage.bytes()[..self.len]
    }

    /// Returns the string as a C string.
    ///
    /// An embedded NUL ends the C string early, as it would in C.
    #[must_use]
    pub fn c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(&self.storage.bytes()[..=self.len]).unwrap_or_default()
    }

    /// Returns the string as `str`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the bytes are not UTF-8.
    pub fn as_str(&self) -> Result<&str> {
        core::str::from_utf8(self.as_bytes()).map_err(|_| Error::INVALID_ARGUMENT)
    }

    fn set_len(&mut self, len: usize) {
        self.len = len;
        self.storage.bytes_mut()[len] = 0;
    }

    /// Sets the length, filling new bytes with NUL.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if `len > capacity()`. The string is unchanged.
    pub fn resize(&mut self, len: usize) -> Result<()> {
        if len > self.capacity() {
            trace_event!(debug, len, capacity = self.capacity(), "string resize overflow");
            return Err(Error::NO_MEMORY);
        }

        if len > self.len {
            let start = self.len;
            self.storage.bytes_mut()[start..len].fill(0);
        }

        self.set_len(len);

        Ok(())
    }

    /// Empties the string.
    pub fn clear(&mut self) {
        self.set_len(0);
    }

    /// Inserts `text` before byte position `pos`.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the result would exceed the capacity, then
    /// `InvalidArgument` if `pos > len()`. The string is unchanged on error.
    pub fn insert<B: AsRef<[u8]> + ?Sized>(&mut self, pos: usize, text: &B) -> Result<()> {
        let text = text.as_ref();
        let count = text.len();
        let len = self.len;

        if count > self.capacity() - len {
            trace_event!(debug, len, count, capacity = self.capacity(), "string insert overflow");
            return Err(Error::NO_MEMORY);
        }

        if pos > len {
            return Err(Error::INVALID_ARGUMENT);
        }

        let bytes = self.storage.bytes_mut();

        bytes.copy_within(pos..len, pos + count);
        bytes[pos..pos + count].copy_from_slice(text);

        self.set_len(len + count);

        Ok(())
    }

    /// Appends `text`.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if it does not fit. The string is unchanged.
    pub fn append<B: AsRef<[u8]> + ?Sized>(&mut self, text: &B) -> Result<&mut Self> {
        self.insert(self.len, text)?;

        Ok(self)
    }

    /// Appends one byte.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the string is full.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        self.insert(self.len, &[byte])
    }

    /// Returns the string bytes for writing, terminator excluded.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let len = self.len;

        &mut self.storage.bytes_mut()[..len]
    }

    /// Returns an iterator over the bytes.
    pub fn iter(&self) -> core::slice::Iter<'_, u8> {
        self.as_bytes().iter()
    }

    /// Returns the byte at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<u8> {
        self.as_bytes().get(index).copied().ok_or(Error::OUT_OF_RANGE)
    }

    /// Returns the byte at `index` for writing.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut u8> {
        self.as_bytes_mut().get_mut(index).ok_or(Error::OUT_OF_RANGE)
    }

    /// Returns the first byte.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the string is empty.
    pub fn front(&self) -> Result<u8> {
        self.as_bytes().first().copied().ok_or(Error::NOT_FOUND)
    }

    /// Returns the last byte.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the string is empty.
    pub fn back(&self) -> Result<u8> {
        self.as_bytes().last().copied().ok_or(Error::NOT_FOUND)
    }

    /// Removes and returns the last byte.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the string is empty.
    pub fn pop_back(&mut self) -> Result<u8> {
        let last = self.back()?;

        self.set_len(self.len - 1);

        Ok(last)
    }

    /// Removes and returns the byte at `index`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<u8> {
        let removed = self.at(index).map_err(|_| Error::INVALID_ARGUMENT)?;

        self.remove_range(index..=index)?;

        Ok(removed)
    }

    /// Removes all bytes matching `pred` and returns their count.
    pub fn remove_if<F: FnMut(u8) -> bool>(&mut self, mut pred: F) -> usize {
        let len = self.len;
        let bytes = self.storage.bytes_mut();
        let mut kept = 0;

        for index in 0..len {
            let byte = bytes[index];

            if !pred(byte) {
                bytes[kept] = byte;
                kept += 1;
            }
        }

        self.set_len(kept);

        len - kept
    }

    /// Returns the index of the first occurrence of `byte`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is none.
    pub fn find(&self, byte: u8) -> Result<usize> {
        self.find_if(|value| value == byte)
    }

    /// Returns the index of the first byte matching `pred`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is none.
    pub fn find_if<F: FnMut(u8) -> bool>(&self, mut pred: F) -> Result<usize> {
        self.iter().position(|byte| pred(*byte)).ok_or(Error::NOT_FOUND)
    }

    /// Copies capture `group` of the first match of `pattern` into `matched`.
    ///
    /// Group `0` is the whole match. `matched` is cleared before the copy.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `pattern` does not compile
    /// - `NotFound` if nothing matches or `group` took no part in the match
    /// - `NoMemory` if the capture does not fit into `matched`
    #[cfg(feature = "regex")]
    pub fn search<M: ?Sized + ByteStorage>(
        &self,
        pattern: &str,
        group: usize,
        matched: &mut StringBase<M>,
    ) -> Result<()> {
        let regex = regex::bytes::Regex::new(pattern).map_err(|_| {
            trace_event!(debug, pattern, "invalid search pattern");
            Error::INVALID_ARGUMENT
        })?;

        let captures = regex.captures(self.as_bytes()).ok_or(Error::NOT_FOUND)?;
        let capture = captures.get(group).ok_or(Error::NOT_FOUND)?;

        matched.clear();
        matched.append(capture.as_bytes())?;

        Ok(())
    }

    /// Removes the bytes in `range`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the range is inverted or reaches past
    /// `len()`.
    pub fn remove_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<()> {
        let (start, end) = range_bounds(&range, self.len)?;
        let len = self.len;

        self.storage.bytes_mut().copy_within(end..len, start);
        self.set_len(len - (end - start));

        Ok(())
    }

    /// Replaces the contents with `text`.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if it does not fit. The string is unchanged.
    pub fn assign<B: AsRef<[u8]> + ?Sized>(&mut self, text: &B) -> Result<()> {
        let text = text.as_ref();

        if text.len() > self.capacity() {
            return Err(Error::NO_MEMORY);
        }

        self.storage.bytes_mut()[..text.len()].copy_from_slice(text);
        self.set_len(text.len());

        Ok(())
    }

    /// Replaces the contents with formatted `args`.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the output does not fit. The string is left
    /// empty in that case, never truncated.
    pub fn format(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        self.clear();

        if self.write_fmt(args).is_err() {
            self.clear();
            return Err(Error::NO_MEMORY);
        }

        Ok(())
    }

    /// Replaces the contents with the decimal or message rendering of `value`.
    ///
    /// An [`Error`] renders as its message followed by ` (file:line)` when
    /// it carries a location.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the output does not fit, leaving the string
    /// empty.
    pub fn try_convert<V: fmt::Display>(&mut self, value: V) -> Result<()> {
        self.format(format_args!("{value}"))
    }

    /// Replaces the contents with the rendering of `value`.
    ///
    /// # Panics
    ///
    /// Panics if the rendering does not fit the capacity. Use
    /// [`try_convert`](Self::try_convert) where that is not known upfront.
    #[track_caller]
    pub fn convert<V: fmt::Display>(&mut self, value: V) -> &mut Self {
        let converted = self.try_convert(value);

        assert!(converted.is_ok(), "converted value exceeds string capacity {}", self.capacity());

        self
    }

    /// Parses the string as a decimal `i32`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for malformed or out-of-range input.
    pub fn to_int(&self) -> Result<i32> {
        self.parse()
    }

    /// Parses the string as a decimal `i64`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for malformed or out-of-range input.
    pub fn to_int64(&self) -> Result<i64> {
        self.parse()
    }

    /// Parses the string as a decimal `u64`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for malformed or out-of-range input.
    pub fn to_uint64(&self) -> Result<u64> {
        self.parse()
    }

    fn parse<V: core::str::FromStr>(&self) -> Result<V> {
        self.as_str()?.trim().parse().map_err(|_| Error::INVALID_ARGUMENT)
    }

    /// Replaces the contents with the upper-case hex rendering of `src`.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the rendering does not fit. The string is
    /// unchanged.
    pub fn byte_array_to_hex(&mut self, src: &[u8]) -> Result<()> {
        if src.len() > self.capacity() / 2 {
            return Err(Error::NO_MEMORY);
        }

        let bytes = self.storage.bytes_mut();

        for (index, byte) in src.iter().enumerate() {
            bytes[index * 2] = HEX_DIGITS[usize::from(byte >> 4)];
            bytes[index * 2 + 1] = HEX_DIGITS[usize::from(byte & 0x0F)];
        }

        self.set_len(src.len() * 2);

        Ok(())
    }

    /// Decodes the string as hex digits into `dst`.
    ///
    /// Digits of either case are accepted. An odd trailing digit becomes the
    /// high nibble of a last byte.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if `dst` is too small and `InvalidArgument` on a
    /// character that is not a hex digit.
    pub fn hex_to_byte_array<A: ?Sized + ItemStorage<u8>>(
        &self,
        dst: &mut ArrayBase<u8, A>,
    ) -> Result<()> {
        let digits = self.as_bytes();

        if digits.len().div_ceil(2) > dst.capacity() {
            return Err(Error::NO_MEMORY);
        }

        dst.clear();

        for pair in digits.chunks(2) {
            let high = hex_value(pair[0])?;
            let low = match pair.get(1) {
                Some(digit) => hex_value(*digit)?,
                None => 0,
            };

            dst.push_back((high << 4) | low)?;
        }

        Ok(())
    }

    /// Splits the string into `list`.
    ///
    /// Splits on `delim`, or on ASCII whitespace when `delim` is `None`.
    /// Adjacent separators yield empty pieces; a trailing separator does not.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if `list` runs out of room or a piece is longer
    /// than `N`.
    pub fn split<const N: usize, A: ?Sized + ItemStorage<StaticString<N>>>(
        &self,
        list: &mut ArrayBase<StaticString<N>, A>,
        delim: Option<u8>,
    ) -> Result<()> {
        list.clear();

        let is_separator = |byte: &u8| match delim {
            Some(delim) => *byte == delim,
            None => byte.is_ascii_whitespace(),
        };

        let bytes = self.as_bytes();
        let mut start = 0;

        for (index, byte) in bytes.iter().enumerate() {
            if is_separator(byte) {
                list.push_back(StaticString::try_from(&bytes[start..index])?)?;
                start = index + 1;
            }
        }

        if start < bytes.len() {
            list.push_back(StaticString::try_from(&bytes[start..])?)?;
        }

        Ok(())
    }
}

fn hex_value(digit: u8) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(Error::INVALID_ARGUMENT),
    }
}

impl<const N: usize> StringBase<TerminatedBytes<N>> {
    /// Creates an empty string.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            len: 0,
            storage: TerminatedBytes::new(),
        }
    }
}

impl<const N: usize> Default for StringBase<TerminatedBytes<N>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Clone for StringBase<TerminatedBytes<N>> {
    fn clone(&self) -> Self {
        Self {
            len: self.len,
            storage: self.storage,
        }
    }
}

impl<const N: usize> TryFrom<&[u8]> for StringBase<TerminatedBytes<N>> {
    type Error = Error;

    fn try_from(text: &[u8]) -> Result<Self> {
        let mut string = Self::new();

        string.assign(text)?;

        Ok(string)
    }
}

impl<const N: usize> TryFrom<&str> for StringBase<TerminatedBytes<N>> {
    type Error = Error;

    fn try_from(text: &str) -> Result<Self> {
        Self::try_from(text.as_bytes())
    }
}

#[cfg(feature = "alloc")]
impl StringBase<Box<[u8]>> {
    /// Allocates an empty string with room for `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let size = capacity.checked_add(1).ok_or(Error::NO_MEMORY)?;

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::AllocationTrace::allocating("string", size).entered();

        let mut bytes = Vec::new();

        bytes.try_reserve_exact(size).map_err(|_| {
            trace_event!(debug, size, "string allocation failed");
            Error::NO_MEMORY
        })?;
        bytes.resize(size, 0);

        Ok(Self {
            len: 0,
            storage: bytes.into_boxed_slice(),
        })
    }

    /// Deep-copies the string into a fresh allocation of the same capacity.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the allocation fails.
    pub fn try_clone(&self) -> Result<Self> {
        let mut copy = Self::with_capacity(self.capacity())?;

        copy.assign(self.as_bytes())?;

        Ok(copy)
    }
}

impl<'a> StringBase<&'a mut [u8]> {
    /// Creates an empty string over `bytes`, with capacity `bytes.len() - 1`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `bytes` has no room for the terminator.
    pub fn new(bytes: &'a mut [u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::INVALID_ARGUMENT);
        }

        let mut string = Self {
            len: 0,
            storage: bytes,
        };

        string.clear();

        Ok(string)
    }

    /// Binds an empty string to the bytes of `buffer`.
    ///
    /// The buffer stays borrowed for as long as the view lives.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the buffer is empty.
    pub fn bind<B: ?Sized + Buffer>(buffer: &'a mut B) -> Result<Self> {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::ContainerTrace::binding("string", buffer.size()).entered();

        Self::new(buffer.as_bytes_mut())
    }
}

impl<S: ?Sized + ByteStorage> Write for StringBase<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s).map(|_| ()).map_err(|_| fmt::Error)
    }
}

impl<S: ?Sized + ByteStorage> fmt::Display for StringBase<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.as_bytes().utf8_chunks() {
            f.write_str(chunk.valid())?;

            if !chunk.invalid().is_empty() {
                f.write_char(char::REPLACEMENT_CHARACTER)?;
            }
        }

        Ok(())
    }
}

impl<S: ?Sized + ByteStorage> fmt::Debug for StringBase<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char('"')?;
        fmt::Display::fmt(self, f)?;
        f.write_char('"')
    }
}

impl<S: ?Sized + ByteStorage> Index<usize> for StringBase<S> {
    type Output = u8;

    #[track_caller]
    fn index(&self, index: usize) -> &u8 {
        &self.as_bytes()[index]
    }
}

impl<S: ?Sized + ByteStorage> IndexMut<usize> for StringBase<S> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.as_bytes_mut()[index]
    }
}

impl<'a, S: ?Sized + ByteStorage> IntoIterator for &'a StringBase<S> {
    type Item = &'a u8;
    type IntoIter = core::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: ?Sized + ByteStorage> AsRef<[u8]> for StringBase<S> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<S1: ?Sized + ByteStorage, S2: ?Sized + ByteStorage> PartialEq<StringBase<S2>>
    for StringBase<S1>
{
    fn eq(&self, other: &StringBase<S2>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<S: ?Sized + ByteStorage> Eq for StringBase<S> {}

impl<S: ?Sized + ByteStorage> PartialEq<str> for StringBase<S> {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<S: ?Sized + ByteStorage> PartialEq<&str> for StringBase<S> {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<S: ?Sized + ByteStorage> PartialEq<[u8]> for StringBase<S> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_bytes() == other
    }
}

impl<S: ?Sized + ByteStorage> PartialEq<StringBase<S>> for str {
    fn eq(&self, other: &StringBase<S>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<S: ?Sized + ByteStorage> PartialEq<StringBase<S>> for &str {
    fn eq(&self, other: &StringBase<S>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<S: ?Sized + ByteStorage> core::hash::Hash for StringBase<S> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

// ============================================================================
// KANI Formal Verification
// ============================================================================

#[cfg(kani)]
mod verification {
    use super::*;

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_string_terminator_invariant() {
        let mut s: StaticString<4> = StaticString::new();
        let len: usize = kani::any();
        kani::assume(len <= 5);

        let resized = s.resize(len);

        assert!(resized.is_ok() == (len <= 4));
        assert!(s.storage.bytes()[s.len()] == 0);

        let _ = s.append(b"xy");
        assert!(s.len() <= 4);
        assert!(s.storage.bytes()[s.len()] == 0);
    }
}

// ============================================================================
// Tests
// ============================================================================
