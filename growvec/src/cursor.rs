use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Sub, SubAssign};

use crate::core::GrowVec;

/// A random-access position inside a `GrowVec`.
///
/// A cursor is only a slot offset. It does not borrow the vector, is not tied
/// to any particular instance, and performs no bounds checking of its own.
/// Arithmetic may move it anywhere, including before the first slot.
///
/// # Invalidation
///
/// Any operation that grows, shifts, clears or drops the vector leaves
/// existing cursors pointing at their old offset. After `push_back` a
/// previously taken `end()` no longer equals the new `end()`; after `erase`
/// a cursor at the erased slot names the element that moved into it.
/// Dereferencing through the vector is still bounds checked and panics
/// rather than reading unconstructed slots.
pub struct Cursor<T> {
    pos: usize,
    _elem: PhantomData<fn() -> T>,
}

impl<T> Cursor<T> {
    pub(crate) fn new(pos: usize) -> Self {
        Self {
            pos,
            _elem: PhantomData,
        }
    }

    /// Slot offset from the start of the buffer.
    #[must_use]
    pub fn position(self) -> usize {
        self.pos
    }

    /// Returns the element under the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not inside the live range of `vec`.
    #[must_use]
    pub fn get(self, vec: &GrowVec<T>) -> &T {
        &vec[self]
    }

    /// Returns the element under the cursor mutably.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is not inside the live range of `vec`.
    pub fn get_mut(self, vec: &mut GrowVec<T>) -> &mut T {
        &mut vec[self]
    }

    /// Returns the element `offset` slots away from the cursor.
    ///
    /// # Panics
    ///
    /// Panics if the target is not inside the live range of `vec`.
    #[must_use]
    pub fn get_at(self, vec: &GrowVec<T>, offset: isize) -> &T {
        &vec[self + offset]
    }

    /// Moves one slot forward.
    pub fn inc(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_add(1);
        self
    }

    /// Moves one slot backward.
    pub fn dec(&mut self) -> &mut Self {
        self.pos = self.pos.wrapping_sub(1);
        self
    }

    /// Moves one slot forward, returning the position before the move.
    pub fn post_inc(&mut self) -> Self {
        let before = *self;
        self.inc();
        before
    }

    /// Moves one slot backward, returning the position before the move.
    pub fn post_dec(&mut self) -> Self {
        let before = *self;
        self.dec();
        before
    }
}

impl<T> Clone for Cursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cursor<T> {}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.pos).finish()
    }
}

impl<T> PartialEq for Cursor<T> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<T> Eq for Cursor<T> {}

impl<T> PartialOrd for Cursor<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Cursor<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.pos.cmp(&other.pos)
    }
}

impl<T> Hash for Cursor<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pos.hash(state);
    }
}

impl<T> AddAssign<isize> for Cursor<T> {
    fn add_assign(&mut self, offset: isize) {
        self.pos = self.pos.wrapping_add_signed(offset);
    }
}

impl<T> Add<isize> for Cursor<T> {
    type Output = Self;

    fn add(mut self, offset: isize) -> Self {
        self += offset;
        self
    }
}

impl<T> SubAssign<isize> for Cursor<T> {
    fn sub_assign(&mut self, offset: isize) {
        self.pos = self.pos.wrapping_add_signed(offset.wrapping_neg());
    }
}

impl<T> Sub<isize> for Cursor<T> {
    type Output = Self;

    fn sub(mut self, offset: isize) -> Self {
        self -= offset;
        self
    }
}

/// Signed slot distance. Only meaningful for cursors into the same vector.
impl<T> Sub for Cursor<T> {
    type Output = isize;

    #[allow(clippy::cast_possible_wrap)]
    fn sub(self, other: Self) -> isize {
        self.pos.wrapping_sub(other.pos) as isize
    }
}
