// AOS - aos-foundation
// Module: Array - Bounded typed sequences
// SW-REQ-ID: AOS-CORE-ARR-001, AOS-CORE-MEM-001
//
// Copyright (c) 2025 The AOS Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

// Allow unsafe code for MaybeUninit operations (documented and verified via KANI)
#![allow(unsafe_code)]

//! Bounded typed sequences with fixed capacity.
//!
//! [`ArrayBase<T, S>`] keeps a logical length over slot storage `S`. The
//! storage decides ownership:
//!
//! - [`StaticArray<T, N>`]: `N` inline slots
//! - [`DynamicArray<T>`]: one heap block, allocated fallibly once
//! - [`ArrayView<'a, T>`]: slots borrowed from elsewhere, or bound to a
//!   [`Buffer`]
//!
//! Every one of them coerces to [`Array<'a, T>`], the unsized form that APIs
//! take when they do not care who owns the slots.
//!
//! # Characteristics
//!
//! - **Zero growth**: capacity is fixed, overflow returns `NoMemory`
//! - **Checked and unchecked access**: `at` returns `OutOfRange`, indexing
//!   panics
//! - **Ordered mutation**: `insert` shifts back to front, `remove` front to
//!   back, one slot at a time
//! - **RAII cleanup**: live elements are dropped with the array

use core::cmp::Ordering;
use core::fmt;
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ops::{Bound, Index, IndexMut, RangeBounds};
use core::slice;

use aos_error::{Error, Result};

#[cfg(feature = "alloc")]
use alloc::{boxed::Box, vec::Vec};

use crate::buffer::{Buffer, Plain};

/// Slot storage backing an array.
///
/// # Safety
///
/// `slots` and `slots_mut` must return the same memory region on every call,
/// with a length that never changes for the lifetime of the storage. Arrays
/// rely on this to keep elements below their length initialized.
pub unsafe trait ItemStorage<T> {
    /// Returns all slots.
    fn slots(&self) -> &[MaybeUninit<T>];

    /// Returns all slots for writing.
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>];
}

// SAFETY: an inline array never moves its slots relative to itself or resizes
unsafe impl<T, const N: usize> ItemStorage<T> for [MaybeUninit<T>; N] {
    fn slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

// SAFETY: a slice has a fixed length
unsafe impl<T> ItemStorage<T> for [MaybeUninit<T>] {
    fn slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

// SAFETY: the borrowed slice is fixed for the borrow lifetime
unsafe impl<T> ItemStorage<T> for &mut [MaybeUninit<T>] {
    fn slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

// SAFETY: the boxed slice is private to the array and never reallocated
#[cfg(feature = "alloc")]
unsafe impl<T> ItemStorage<T> for Box<[MaybeUninit<T>]> {
    fn slots(&self) -> &[MaybeUninit<T>] {
        self
    }

    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

/// A bounded sequence of `T` over slot storage `S`.
///
/// # Invariants
///
/// 1. `len <= capacity()` always holds
/// 2. Slots `[0, len)` hold live values, slots `[len, capacity)` do not
/// 3. No operation changes the capacity
pub struct ArrayBase<T, S: ?Sized + ItemStorage<T>> {
    /// Number of live elements
    /// Invariant: len <= capacity
    len: usize,

    /// Marker for drop checker
    _marker: PhantomData<T>,

    /// Slot storage, last for unsized coercion
    items: S,
}

/// Bounded array over any storage.
///
/// Owning and borrowing arrays all coerce to `&mut Array<'_, T>`.
pub type Array<'a, T> = ArrayBase<T, dyn ItemStorage<T> + 'a>;

/// Array with `N` inline slots.
///
/// # Examples
///
/// ```
/// use aos_foundation::StaticArray;
///
/// let mut array = StaticArray::<u32, 3>::new();
/// array.push_back(1)?;
/// array.push_back(2)?;
/// array.push_back(3)?;
///
/// assert!(array.push_back(4).is_err()); // Full
/// assert_eq!(array.pop_back()?, 3);
/// # Ok::<(), aos_foundation::Error>(())
/// ```
pub type StaticArray<T, const N: usize> = ArrayBase<T, [MaybeUninit<T>; N]>;

/// Array over one heap block allocated at construction.
#[cfg(feature = "alloc")]
pub type DynamicArray<T> = ArrayBase<T, Box<[MaybeUninit<T>]>>;

/// Array over borrowed slots.
pub type ArrayView<'a, T> = ArrayBase<T, &'a mut [MaybeUninit<T>]>;

impl<T, S: ?Sized + ItemStorage<T>> ArrayBase<T, S> {
    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the maximum number of elements.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.slots().len()
    }

    /// Checks if the array holds no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Checks if the array is at capacity.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity()
    }

    /// Returns the live elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        let live = &self.items.slots()[..self.len];

        // SAFETY: slots [0, len) are initialized and MaybeUninit<T> has the
        // layout of T
        unsafe { slice::from_raw_parts(live.as_ptr().cast::<T>(), live.len()) }
    }

    /// Returns the live elements as a mutable slice.
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        let live = &mut self.items.slots_mut()[..len];

        // SAFETY: slots [0, len) are initialized and MaybeUninit<T> has the
        // layout of T
        unsafe { slice::from_raw_parts_mut(live.as_mut_ptr().cast::<T>(), live.len()) }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over the elements for writing.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.as_slice().get(index).ok_or(Error::OUT_OF_RANGE)
    }

    /// Returns the element at `index` for writing.
    ///
    /// # Errors
    ///
    /// Returns `OutOfRange` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        self.as_mut_slice().get_mut(index).ok_or(Error::OUT_OF_RANGE)
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the array is empty.
    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(Error::NOT_FOUND)
    }

    /// Returns the first element for writing.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the array is empty.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().first_mut().ok_or(Error::NOT_FOUND)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the array is empty.
    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(Error::NOT_FOUND)
    }

    /// Returns the last element for writing.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the array is empty.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().last_mut().ok_or(Error::NOT_FOUND)
    }

    /// Appends an element.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the array is full. The length is unchanged.
    pub fn push_back(&mut self, value: T) -> Result<()> {
        self.emplace_back(|| value).map(|_| ())
    }

    /// Constructs an element in the next free slot.
    ///
    /// `make` runs only if there is room.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the array is full.
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> Result<&mut T> {
        if self.is_full() {
            trace_event!(debug, capacity = self.capacity(), "array full");
            return Err(Error::NO_MEMORY);
        }

        let index = self.len;
        let slot = &mut self.items.slots_mut()[index];
        let value = slot.write(make());

        self.len += 1;

        Ok(value)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the array is empty.
    pub fn pop_back(&mut self) -> Result<T> {
        if self.len == 0 {
            return Err(Error::NOT_FOUND);
        }

        self.len -= 1;

        // SAFETY: the slot at the old last index was live and is now past len
        Ok(unsafe { self.items.slots_mut()[self.len].assume_init_read() })
    }

    /// Drops trailing elements until the length is at most `len`.
    pub fn truncate(&mut self, len: usize) {
        while self.len > len {
            self.len -= 1;

            let index = self.len;
            // SAFETY: the slot was live and len no longer covers it
            unsafe { self.items.slots_mut()[index].assume_init_drop() };
        }
    }

    /// Drops all elements.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Sets the length to `len`, cloning `fill` into new slots.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if `len > capacity()`. The array is unchanged.
    pub fn resize(&mut self, len: usize, fill: T) -> Result<()>
    where
        T: Clone,
    {
        self.resize_with(len, || fill.clone())
    }

    /// Sets the length to `len`, filling new slots with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if `len > capacity()`. The array is unchanged.
    pub fn resize_default(&mut self, len: usize) -> Result<()>
    where
        T: Default,
    {
        self.resize_with(len, T::default)
    }

    /// Sets the length to `len`, filling new slots from `make`.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if `len > capacity()`. The array is unchanged.
    pub fn resize_with<F: FnMut() -> T>(&mut self, len: usize, mut make: F) -> Result<()> {
        if len > self.capacity() {
            trace_event!(debug, len, capacity = self.capacity(), "array resize overflow");
            return Err(Error::NO_MEMORY);
        }

        self.truncate(len);

        while self.len < len {
            let index = self.len;
            self.items.slots_mut()[index].write(make());
            self.len += 1;
        }

        Ok(())
    }

    /// Inserts clones of `items` before position `pos`.
    ///
    /// The tail `[pos, len)` moves right back to front, then the new
    /// elements are cloned into the gap in source order.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the result would exceed the capacity, then
    /// `InvalidArgument` if `pos > len()`. Nothing is changed on error.
    pub fn insert(&mut self, pos: usize, items: &[T]) -> Result<()>
    where
        T: Clone,
    {
        let count = items.len();

        if count > self.capacity() - self.len {
            trace_event!(
                debug,
                len = self.len,
                count,
                capacity = self.capacity(),
                "array insert overflow"
            );
            return Err(Error::NO_MEMORY);
        }

        if pos > self.len {
            return Err(Error::INVALID_ARGUMENT);
        }

        if count == 0 {
            return Ok(());
        }

        #[cfg(feature = "tracing")]
        let _span =
            crate::tracing::ContainerTrace::inserting("array", self.len, count, self.capacity())
                .entered();

        let old_len = self.len;

        // The tail is outside len while it is moved: a panicking clone leaks
        // it instead of dropping it twice.
        self.len = pos;

        let slots = self.items.slots_mut();

        for index in (pos..old_len).rev() {
            // SAFETY: index < old_len is live, index + count < capacity is free
            // because slots are visited back to front
            let value = unsafe { slots[index].assume_init_read() };
            slots[index + count].write(value);
        }

        for (offset, item) in items.iter().enumerate() {
            slots[pos + offset].write(item.clone());
        }

        self.len = old_len + count;

        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// Elements after it move left front to back, one slot at a time.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        if index >= self.len {
            return Err(Error::INVALID_ARGUMENT);
        }

        let len = self.len;
        let slots = self.items.slots_mut();

        // SAFETY: index < len is live, the slot is refilled or leaves len below
        let removed = unsafe { slots[index].assume_init_read() };

        for next in index + 1..len {
            // SAFETY: next < len is live, next - 1 was just vacated
            let value = unsafe { slots[next].assume_init_read() };
            slots[next - 1].write(value);
        }

        self.len -= 1;

        Ok(removed)
    }

    /// Removes all elements matching `pred` and returns their count.
    pub fn remove_if<F: FnMut(&T) -> bool>(&mut self, mut pred: F) -> usize {
        let mut removed = 0;
        let mut index = 0;

        while index < self.len {
            if !pred(&self.as_slice()[index]) {
                index += 1;
                continue;
            }

            match self.remove(index) {
                Ok(item) => {
                    drop(item);
                    removed += 1;
                }
                Err(_) => break,
            }
        }

        removed
    }

    /// Removes the elements in `range`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the range is inverted or reaches past
    /// `len()`.
    pub fn remove_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<()> {
        let (start, end) = range_bounds(&range, self.len)?;
        let count = end - start;

        if count == 0 {
            return Ok(());
        }

        let old_len = self.len;

        // Shrink first: a panicking drop leaks the tail instead of dropping
        // it twice.
        self.len = start;

        let slots = self.items.slots_mut();

        for slot in &mut slots[start..end] {
            // SAFETY: slots in [start, end) were live and are no longer covered
            unsafe { slot.assume_init_drop() };
        }

        for next in end..old_len {
            // SAFETY: next < old_len is live, next - count has been vacated
            let value = unsafe { slots[next].assume_init_read() };
            slots[next - count].write(value);
        }

        self.len = old_len - count;

        Ok(())
    }

    /// Returns the index of the first element equal to `item`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no such element.
    pub fn find(&self, item: &T) -> Result<usize>
    where
        T: PartialEq,
    {
        self.find_if(|value| value == item)
    }

    /// Returns the index of the first element matching `pred`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if there is no such element.
    pub fn find_if<F: FnMut(&T) -> bool>(&self, pred: F) -> Result<usize> {
        self.iter().position(pred).ok_or(Error::NOT_FOUND)
    }

    /// Sorts the elements in ascending order.
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Sorts the elements with an exchange sort.
    ///
    /// Adjacent elements are swapped when `compare` returns `Greater`. The
    /// sort is stable and in place.
    pub fn sort_by<F: FnMut(&T, &T) -> Ordering>(&mut self, mut compare: F) {
        let items = self.as_mut_slice();
        let len = items.len();

        if len < 2 {
            return;
        }

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::ContainerTrace::sorting(len).entered();

        for pass in 0..len - 1 {
            for index in 0..len - pass - 1 {
                if compare(&items[index], &items[index + 1]) == Ordering::Greater {
                    items.swap(index, index + 1);
                }
            }
        }
    }

    /// Appends clones of `items`.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if they do not fit. The array is unchanged.
    pub fn extend_from_slice(&mut self, items: &[T]) -> Result<()>
    where
        T: Clone,
    {
        self.insert(self.len, items)
    }

    /// Appends clones of the elements of `other`.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if they do not fit. The array is unchanged.
    pub fn append<S2: ?Sized + ItemStorage<T>>(&mut self, other: &ArrayBase<T, S2>) -> Result<()>
    where
        T: Clone,
    {
        self.extend_from_slice(other.as_slice())
    }

    /// Replaces the contents with clones of `items`.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if they do not fit. The array is unchanged.
    pub fn assign(&mut self, items: &[T]) -> Result<()>
    where
        T: Clone,
    {
        if items.len() > self.capacity() {
            return Err(Error::NO_MEMORY);
        }

        self.clear();
        self.extend_from_slice(items)
    }
}

/// Resolves `range` against `len` into `[start, end)`.
pub(crate) fn range_bounds<R: RangeBounds<usize>>(range: &R, len: usize) -> Result<(usize, usize)> {
    let start = match range.start_bound() {
        Bound::Included(&start) => start,
        Bound::Excluded(&start) => start.checked_add(1).ok_or(Error::INVALID_ARGUMENT)?,
        Bound::Unbounded => 0,
    };

    let end = match range.end_bound() {
        Bound::Included(&end) => end.checked_add(1).ok_or(Error::INVALID_ARGUMENT)?,
        Bound::Excluded(&end) => end,
        Bound::Unbounded => len,
    };

    if start > end || end > len {
        return Err(Error::INVALID_ARGUMENT);
    }

    Ok((start, end))
}

impl<T, const N: usize> ArrayBase<T, [MaybeUninit<T>; N]> {
    const NON_EMPTY: () = assert!(N > 0, "StaticArray capacity must be greater than zero");

    /// Creates an empty array.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;

        Self {
            len: 0,
            _marker: PhantomData,
            items: [const { MaybeUninit::uninit() }; N],
        }
    }
}

impl<T, const N: usize> Default for ArrayBase<T, [MaybeUninit<T>; N]> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for ArrayBase<T, [MaybeUninit<T>; N]> {
    fn clone(&self) -> Self {
        let mut copy = Self::new();

        for item in self.iter() {
            copy.items[copy.len].write(item.clone());
            copy.len += 1;
        }

        copy
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for ArrayBase<T, [MaybeUninit<T>; N]> {
    type Error = Error;

    fn try_from(items: &[T]) -> Result<Self> {
        let mut array = Self::new();

        array.extend_from_slice(items)?;

        Ok(array)
    }
}

#[cfg(feature = "alloc")]
impl<T> ArrayBase<T, Box<[MaybeUninit<T>]>> {
    /// Allocates an empty array with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for a zero capacity and `NoMemory` if the
    /// allocation fails.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::INVALID_ARGUMENT);
        }

        #[cfg(feature = "tracing")]
        let _span = crate::tracing::AllocationTrace::allocating("array", capacity).entered();

        let mut slots = Vec::new();

        slots.try_reserve_exact(capacity).map_err(|_| {
            trace_event!(debug, capacity, "array allocation failed");
            Error::NO_MEMORY
        })?;
        slots.resize_with(capacity, MaybeUninit::uninit);

        Ok(Self {
            len: 0,
            _marker: PhantomData,
            items: slots.into_boxed_slice(),
        })
    }

    /// Deep-copies the array into a fresh allocation of the same capacity.
    ///
    /// # Errors
    ///
    /// Returns `NoMemory` if the allocation fails.
    pub fn try_clone(&self) -> Result<Self>
    where
        T: Clone,
    {
        let mut copy = Self::with_capacity(self.capacity())?;

        copy.extend_from_slice(self.as_slice())?;

        Ok(copy)
    }
}

impl<'a, T> ArrayBase<T, &'a mut [MaybeUninit<T>]> {
    /// Creates an empty array over external slots.
    #[must_use]
    pub fn from_slots(slots: &'a mut [MaybeUninit<T>]) -> Self {
        Self {
            len: 0,
            _marker: PhantomData,
            items: slots,
        }
    }

    /// Creates a full array over initialized elements.
    ///
    /// Writes through the view land in `items`.
    #[must_use]
    pub fn from_init(items: &'a mut [T]) -> Self
    where
        T: Copy,
    {
        let len = items.len();

        // SAFETY: MaybeUninit<T> has the layout of T, every slot starts
        // initialized, and T: Copy has no drop glue to run on removal
        let slots = unsafe {
            core::slice::from_raw_parts_mut(items.as_mut_ptr().cast::<MaybeUninit<T>>(), len)
        };

        Self {
            len,
            _marker: PhantomData,
            items: slots,
        }
    }

    /// Binds an empty array to the bytes of `buffer`.
    ///
    /// The first slot is aligned for `T`; the capacity is the number of
    /// whole elements that fit after it. The buffer stays borrowed for as
    /// long as the view lives, so no second view can alias it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if not a single element fits.
    pub fn bind<B: ?Sized + Buffer>(buffer: &'a mut B) -> Result<Self>
    where
        T: Plain,
    {
        #[cfg(feature = "tracing")]
        let _span = crate::tracing::ContainerTrace::binding("array", buffer.size()).entered();

        // SAFETY: any byte pattern is a valid MaybeUninit<T>, and T: Plain
        // leaves only plain bytes behind once the view is gone
        let (_, slots, _) = unsafe { buffer.as_bytes_mut().align_to_mut::<MaybeUninit<T>>() };

        if slots.is_empty() {
            trace_event!(debug, "buffer too small for a single element");
            return Err(Error::INVALID_ARGUMENT);
        }

        Ok(Self::from_slots(slots))
    }
}

impl<T, S: ?Sized + ItemStorage<T>> Drop for ArrayBase<T, S> {
    fn drop(&mut self) {
        // RAII
        self.clear();
    }
}

impl<T, S: ?Sized + ItemStorage<T>> Index<usize> for ArrayBase<T, S> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T, S: ?Sized + ItemStorage<T>> IndexMut<usize> for ArrayBase<T, S> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<T, S1, S2> PartialEq<ArrayBase<T, S2>> for ArrayBase<T, S1>
where
    T: PartialEq,
    S1: ?Sized + ItemStorage<T>,
    S2: ?Sized + ItemStorage<T>,
{
    fn eq(&self, other: &ArrayBase<T, S2>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, S: ?Sized + ItemStorage<T>> Eq for ArrayBase<T, S> {}

impl<T: PartialEq, S: ?Sized + ItemStorage<T>> PartialEq<[T]> for ArrayBase<T, S> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: core::hash::Hash, S: ?Sized + ItemStorage<T>> core::hash::Hash for ArrayBase<T, S> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug, S: ?Sized + ItemStorage<T>> fmt::Debug for ArrayBase<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T, S: ?Sized + ItemStorage<T>> IntoIterator for &'a ArrayBase<T, S> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S: ?Sized + ItemStorage<T>> IntoIterator for &'a mut ArrayBase<T, S> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
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
    fn verify_array_push_pop_bounds() {
        let mut array: StaticArray<u8, 4> = StaticArray::new();
        let count: usize = kani::any();
        kani::assume(count <= 5);

        for value in 0..count {
            let pushed = array.push_back(value as u8);
            assert!(pushed.is_ok() == (value < 4));
            assert!(array.len() <= array.capacity());
        }

        while array.pop_back().is_ok() {
            assert!(array.len() < 4);
        }

        assert!(array.is_empty());
    }

    #[kani::proof]
    #[kani::unwind(6)]
    fn verify_array_insert_remove_bounds() {
        let mut array: StaticArray<u8, 4> = StaticArray::new();
        array.push_back(1).unwrap();
        array.push_back(2).unwrap();

        let pos: usize = kani::any();
        kani::assume(pos <= 3);

        let inserted = array.insert(pos, &[7, 8]);

        if pos <= 2 {
            assert!(inserted.is_ok());
            assert!(array.len() == 4);
            assert!(array[pos] == 7);
            assert!(array.remove_range(pos..pos + 2).is_ok());
        } else {
            assert!(inserted.is_err());
        }

        assert!(array.as_slice() == [1, 2]);
    }
}

// ============================================================================
// Tests
// ============================================================================
