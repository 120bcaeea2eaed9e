#![allow(unsafe_code)]

use core::fmt;
use core::mem::{self, ManuallyDrop};
use core::ops::{Index, IndexMut};
use core::ptr;
use core::slice;

use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::GrowVecError;
use crate::iter::{Iter, IterMut};
use crate::raw::RawBuf;

/// Capacity of a freshly constructed or moved-from vector.
pub const INITIAL_CAPACITY: usize = 1;
const GROWTH_FACTOR: usize = 2;

/// A contiguous, growable vector that owns its heap buffer.
///
/// Slots `[0, len)` hold live values, slots `[len, capacity)` are allocated
/// but unconstructed. Capacity is never zero and only grows, by doubling,
/// when an insertion finds the buffer full.
pub struct GrowVec<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> GrowVec<T> {
    /// Creates an empty vector with `INITIAL_CAPACITY` slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }

    /// Creates an empty vector with room for `count` elements.
    ///
    /// A `count` of zero is raised to `INITIAL_CAPACITY`.
    ///
    /// # Panics
    ///
    /// Panics if `count` elements of `T` do not fit in `isize::MAX` bytes.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn with_capacity(count: usize) -> Self {
        Self::try_with_capacity(count).expect("capacity overflow")
    }

    /// Creates an empty vector with room for `count` elements.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` if `count` elements of `T`
    /// do not fit in `isize::MAX` bytes.
    pub fn try_with_capacity(count: usize) -> Result<Self, GrowVecError> {
        Ok(Self {
            buf: RawBuf::allocate(count.max(INITIAL_CAPACITY))?,
            len: 0,
        })
    }

    /// Creates a vector holding `count` clones of `value`, with capacity
    /// `count`.
    ///
    /// # Panics
    ///
    /// Panics if `count` elements of `T` do not fit in `isize::MAX` bytes.
    #[must_use]
    pub fn from_elem(count: usize, value: &T) -> Self
    where
        T: Clone,
    {
        let mut vec = Self::with_capacity(count);
        for _ in 0..count {
            // SAFETY: capacity is at least `count`.
            unsafe { vec.push_unchecked(value.clone()) };
        }
        vec
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Cursor at the first slot.
    #[must_use]
    pub fn begin(&self) -> Cursor<T> {
        Cursor::new(0)
    }

    /// Cursor one past the last live element.
    #[must_use]
    pub fn end(&self) -> Cursor<T> {
        Cursor::new(self.len)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the first `len` slots are live and the pointer is aligned.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: the first `len` slots are live and uniquely borrowed.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns an iterator over the elements.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice())
    }

    /// Returns an iterator that allows modifying each element.
    #[must_use]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self.as_mut_slice())
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees the slot is live.
        unsafe { &*self.buf.as_ptr().add(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds
    /// checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: caller guarantees the slot is live.
        unsafe { &mut *self.buf.as_mut_ptr().add(index) }
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Bounds-checked access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, GrowVecError> {
        self.as_slice()
            .get(index)
            .ok_or(GrowVecError::IndexOutOfBounds {
                index,
                length: self.len,
            })
    }

    /// Bounds-checked mutable access to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, GrowVecError> {
        let length = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(GrowVecError::IndexOutOfBounds { index, length })
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[must_use]
    pub fn front(&self) -> &T {
        assert!(self.len > 0, "Cannot access front of empty vector");
        &self[0]
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn front_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "Cannot access front of empty vector");
        &mut self[0]
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[must_use]
    pub fn back(&self) -> &T {
        assert!(self.len > 0, "Cannot access back of empty vector");
        &self[self.len - 1]
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the vector is empty.
    pub fn back_mut(&mut self) -> &mut T {
        assert!(self.len > 0, "Cannot access back of empty vector");
        let last = self.len - 1;
        &mut self[last]
    }

    /// Returns the first element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::EmptyVector` if the vector is empty.
    pub fn try_front(&self) -> Result<&T, GrowVecError> {
        self.as_slice().first().ok_or(GrowVecError::EmptyVector)
    }

    /// Returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::EmptyVector` if the vector is empty.
    pub fn try_back(&self) -> Result<&T, GrowVecError> {
        self.as_slice().last().ok_or(GrowVecError::EmptyVector)
    }

    /// Drops every element. Capacity and the buffer are kept.
    pub fn clear(&mut self) {
        let live = ptr::slice_from_raw_parts_mut(self.buf.as_mut_ptr(), self.len);
        // Length first, so a panicking destructor cannot lead to a second drop.
        self.len = 0;
        // SAFETY: `live` covers exactly the slots that were constructed.
        unsafe { ptr::drop_in_place(live) };
    }

    /// Appends `value`, doubling the capacity first if the buffer is full.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity does not fit in `isize::MAX` bytes.
    #[allow(clippy::expect_used)]
    pub fn push_back(&mut self, value: T) {
        self.try_push_back(value).expect("capacity overflow");
    }

    /// Appends a clone of `value`.
    ///
    /// # Panics
    ///
    /// Panics if the doubled capacity does not fit in `isize::MAX` bytes.
    pub fn push_back_cloned(&mut self, value: &T)
    where
        T: Clone,
    {
        self.push_back(value.clone());
    }

    /// Appends `value`, reporting a failed growth instead of panicking.
    ///
    /// On error the vector is unchanged and `value` is dropped.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::CapacityOverflow` if the buffer is full and
    /// cannot be doubled.
    pub fn try_push_back(&mut self, value: T) -> Result<(), GrowVecError> {
        if self.len == self.capacity() {
            self.grow()?;
        }
        // SAFETY: the buffer has a free slot at `len`.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Removes and returns the last element, or `None` if the vector is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: slot `len` was live and is now outside the live range.
        Some(unsafe { ptr::read(self.buf.as_ptr().add(self.len)) })
    }

    /// Inserts `value` at `position`, shifting later elements toward the end.
    ///
    /// `position` is converted to an index before any growth, so a cursor
    /// taken from this vector stays usable for the call itself.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past `end()`, or if growth overflows.
    #[allow(clippy::expect_used)]
    pub fn insert(&mut self, position: Cursor<T>, value: T) {
        let index = position - self.begin();
        let index = usize::try_from(index).unwrap_or(usize::MAX);
        assert!(
            index <= self.len,
            "Insertion index {} out of bounds for vector of length {}",
            index,
            self.len
        );

        if self.len == self.capacity() {
            self.grow().expect("capacity overflow");
        }

        // SAFETY: index <= len < capacity, so the shifted range and the hole
        // stay inside the buffer. `ptr::copy` handles the overlap.
        unsafe {
            let hole = self.buf.as_mut_ptr().add(index);
            ptr::copy(hole, hole.add(1), self.len - index);
            ptr::write(hole, value);
        }
        self.len += 1;
    }

    /// Inserts a clone of `value` at `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is past `end()`, or if growth overflows.
    pub fn insert_cloned(&mut self, position: Cursor<T>, value: &T)
    where
        T: Clone,
    {
        self.insert(position, value.clone());
    }

    /// Drops the element at `position` and closes the gap.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not inside the live range.
    pub fn erase(&mut self, position: Cursor<T>) {
        let index = position - self.begin();
        drop(self.remove(usize::try_from(index).unwrap_or(usize::MAX)));
    }

    /// Removes and returns the element at `index`, shifting later elements
    /// toward the start.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "Index {} out of bounds for vector of length {}",
            index,
            self.len
        );

        // SAFETY: index < len; the tail `(index, len)` is live and moves down
        // by one slot, leaving slot `len - 1` unconstructed.
        unsafe {
            let hole = self.buf.as_mut_ptr().add(index);
            let removed = ptr::read(hole);
            ptr::copy(hole.add(1), hole, self.len - index - 1);
            self.len -= 1;
            removed
        }
    }

    /// Moves the contents out, leaving `self` as a new empty vector with
    /// `INITIAL_CAPACITY` and its own buffer.
    #[must_use]
    pub fn take(&mut self) -> Self {
        mem::replace(self, Self::new())
    }

    /// Drops the current contents and buffer of `self`, then adopts the
    /// contents of `source`, which is left as a new empty vector.
    pub fn move_from(&mut self, source: &mut Self) {
        *self = source.take();
    }

    pub(crate) fn into_raw_parts(self) -> (RawBuf<T>, usize) {
        let me = ManuallyDrop::new(self);
        // SAFETY: `me` is never dropped, so the buffer is moved out exactly once.
        let buf = unsafe { ptr::read(&me.buf) };
        (buf, me.len)
    }

    /// # Safety
    ///
    /// `len` must be less than the capacity.
    unsafe fn push_unchecked(&mut self, value: T) {
        debug_assert!(self.len < self.capacity());
        // SAFETY: slot `len` is allocated and unconstructed.
        unsafe { ptr::write(self.buf.as_mut_ptr().add(self.len), value) };
        self.len += 1;
    }

    fn grow(&mut self) -> Result<(), GrowVecError> {
        let new_capacity = self
            .capacity()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(GrowVecError::CapacityOverflow {
                requested: usize::MAX,
            })?;
        self.reallocate(new_capacity)
    }

    /// Moves every live element into a fresh buffer of `new_capacity` slots
    /// and releases the old one. All growth goes through here.
    ///
    /// On error nothing has been allocated or moved.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), GrowVecError> {
        if new_capacity < self.len {
            debug!(
                requested = new_capacity,
                len = self.len,
                "rejected reallocation below live length"
            );
            return Err(GrowVecError::CapacityTooSmall {
                requested: new_capacity,
                length: self.len,
            });
        }

        let mut new_buf = RawBuf::allocate(new_capacity).inspect_err(|error| {
            debug!(requested = new_capacity, %error, "reallocation failed");
        })?;

        // SAFETY: the buffers are distinct, the old one has `len` live slots
        // and the new one has room for at least `len`.
        unsafe { ptr::copy_nonoverlapping(self.buf.as_ptr(), new_buf.as_mut_ptr(), self.len) };

        trace!(
            old_capacity = self.buf.capacity(),
            new_capacity,
            len = self.len,
            "reallocated buffer"
        );

        // The old slots were moved bitwise; only the allocation is released.
        drop(mem::replace(&mut self.buf, new_buf));
        Ok(())
    }
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Copies keep the source's capacity, not just its length.
impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.capacity());
        for value in self {
            // SAFETY: the copy has the source's capacity, which is >= len.
            unsafe { copy.push_unchecked(value.clone()) };
        }
        copy
    }

    #[allow(clippy::expect_used)]
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        if self.capacity() != source.capacity() {
            self.buf = RawBuf::allocate(source.capacity())
                .expect("Source capacity was already allocated once");
        }
        for value in source {
            // SAFETY: capacity now equals the source's, which is >= its len.
            unsafe { self.push_unchecked(value.clone()) };
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for GrowVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

impl<T> Index<usize> for GrowVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "Index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        // SAFETY: bounds checked above.
        unsafe { self.get_unchecked(index) }
    }
}

impl<T> IndexMut<usize> for GrowVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "Index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        // SAFETY: bounds checked above.
        unsafe { self.get_unchecked_mut(index) }
    }
}

impl<T> Index<Cursor<T>> for GrowVec<T> {
    type Output = T;

    fn index(&self, cursor: Cursor<T>) -> &T {
        &self[cursor.position()]
    }
}

impl<T> IndexMut<Cursor<T>> for GrowVec<T> {
    fn index_mut(&mut self, cursor: Cursor<T>) -> &mut T {
        &mut self[cursor.position()]
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(values: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        for value in values {
            // SAFETY: capacity is at least N.
            unsafe { vec.push_unchecked(value) };
        }
        vec
    }
}
