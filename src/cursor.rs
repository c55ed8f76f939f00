// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Positions over the live region of a [`FixedVector`].
//!
//! A position is an index in `[0, len]`; `len` is the end position and names
//! no element. [`Cursor`] borrows the vector shared, so the vector cannot be
//! mutated while it exists. [`CursorMut`] borrows it exclusively and stays
//! valid across the insertions and removals it performs itself.

// Crate imports
use crate::{
    error::{Error, Rejected},
    vec::FixedVector,
};

// Core imports
use core::{
    cmp::Ordering,
    fmt,
    ops::{Add, AddAssign, Sub, SubAssign},
    ptr,
};

/// A read-only, random-access position in a [`FixedVector`].
///
/// Cursors compare and subtract like indices, but only when they belong to
/// the same vector instance: cursors into two different vectors are never
/// equal and have no ordering, even if both vectors hold the same elements.
///
/// ```
/// # use fixed_vector::{FixedVector, fixed_vector};
/// let v: FixedVector<i32, 4> = fixed_vector![10, 20, 30];
/// let mut c = v.cursor_front();
/// assert_eq!(c.get(), Some(&10));
/// c += 2;
/// assert_eq!(c.get(), Some(&30));
/// assert_eq!(c - v.cursor_front(), 2);
/// assert!(c < v.cursor_end());
/// ```
pub struct Cursor<'a, T, const N: usize> {
    vec: &'a FixedVector<T, N>,
    index: usize,
}

impl<'a, T, const N: usize> Cursor<'a, T, N> {
    /// The position, in `[0, len]`.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The element at this position, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        let vec: &'a FixedVector<T, N> = self.vec;
        vec.as_slice().get(self.index)
    }

    /// The element `offset` positions away, or `None` if that is not a live
    /// element.
    #[inline]
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        let vec: &'a FixedVector<T, N> = self.vec;
        vec.as_slice().get(self.index.checked_add_signed(offset)?)
    }

    /// Advances by one. Returns `false`, without moving, at the end position.
    #[inline]
    pub fn move_next(&mut self) -> bool {
        if self.index < self.vec.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Steps back by one. Returns `false`, without moving, at position 0.
    #[inline]
    pub fn move_prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// The cursor `offset` positions away, or `None` if that leaves `[0, len]`.
    #[inline]
    pub fn checked_offset(self, offset: isize) -> Option<Self> {
        let index = self.index.checked_add_signed(offset)?;
        (index <= self.vec.len()).then_some(Self { index, ..self })
    }

    /// Signed distance `self - other`, or `None` if the cursors belong to
    /// different vectors.
    #[inline]
    pub fn distance_from(&self, other: &Self) -> Option<isize> {
        // Positions are at most `N`, the length of an in-memory array.
        ptr::eq(self.vec, other.vec).then(|| self.index as isize - other.index as isize)
    }

    /// The live elements from this position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a [T] {
        let vec: &'a FixedVector<T, N> = self.vec;
        &vec.as_slice()[self.index..]
    }
}

impl<T, const N: usize> Clone for Cursor<'_, T, N> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, const N: usize> Copy for Cursor<'_, T, N> {}

impl<T, const N: usize> PartialEq for Cursor<'_, T, N> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.vec, other.vec) && self.index == other.index
    }
}

impl<T, const N: usize> PartialOrd for Cursor<'_, T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        ptr::eq(self.vec, other.vec).then(|| self.index.cmp(&other.index))
    }
}

impl<T, const N: usize> fmt::Debug for Cursor<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("index", &self.index)
            .field("len", &self.vec.len())
            .finish()
    }
}

impl<T, const N: usize> Add<isize> for Cursor<'_, T, N> {
    type Output = Self;
    #[track_caller]
    fn add(self, offset: isize) -> Self {
        match self.checked_offset(offset) {
            Some(c) => c,
            None => panic!(
                "cursor at {} offset by {} leaves 0..={}",
                self.index,
                offset,
                self.vec.len()
            ),
        }
    }
}

impl<T, const N: usize> Sub<isize> for Cursor<'_, T, N> {
    type Output = Self;
    #[track_caller]
    fn sub(self, offset: isize) -> Self {
        match offset.checked_neg() {
            Some(neg) => self + neg,
            None => panic!("cursor offset {offset} overflows"),
        }
    }
}

impl<T, const N: usize> AddAssign<isize> for Cursor<'_, T, N> {
    #[track_caller]
    fn add_assign(&mut self, offset: isize) {
        *self = *self + offset;
    }
}

impl<T, const N: usize> SubAssign<isize> for Cursor<'_, T, N> {
    #[track_caller]
    fn sub_assign(&mut self, offset: isize) {
        *self = *self - offset;
    }
}

impl<T, const N: usize> Sub for Cursor<'_, T, N> {
    type Output = isize;
    #[track_caller]
    fn sub(self, other: Self) -> isize {
        match self.distance_from(&other) {
            Some(d) => d,
            None => panic!("distance between cursors of different vectors"),
        }
    }
}

/// A position in a [`FixedVector`] that can edit the vector in place.
///
/// ```
/// # use fixed_vector::{FixedVector, fixed_vector};
/// let mut v: FixedVector<i32, 6> = fixed_vector![1, 2, 3, 4];
/// let mut c = v.cursor_front_mut();
/// while let Some(x) = c.current() {
///     if x % 2 == 0 {
///         c.remove_current();
///     } else {
///         c.move_next();
///     }
/// }
/// assert_eq!(v, [1, 3]);
/// ```
pub struct CursorMut<'a, T, const N: usize> {
    vec: &'a mut FixedVector<T, N>,
    index: usize,
}

impl<T, const N: usize> CursorMut<'_, T, N> {
    /// The position, in `[0, len]`.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The element at this position, or `None` at the end position.
    #[inline]
    pub fn current(&self) -> Option<&T> {
        self.vec.as_slice().get(self.index)
    }

    /// Mutable variant of [`current`](CursorMut::current).
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        self.vec.as_mut_slice().get_mut(self.index)
    }

    /// Advances by one. Returns `false`, without moving, at the end position.
    #[inline]
    pub fn move_next(&mut self) -> bool {
        if self.index < self.vec.len() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Steps back by one. Returns `false`, without moving, at position 0.
    #[inline]
    pub fn move_prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    /// Moves to `index`. Returns [`Error::OutOfBounds`], without moving, if
    /// `index > len`.
    #[inline]
    pub fn seek(&mut self, index: usize) -> Result<(), Error> {
        if index > self.vec.len() {
            return Err(Error::OutOfBounds);
        }
        self.index = index;
        Ok(())
    }

    /// Inserts `value` before the current element; the cursor then points at
    /// the inserted element. On a full vector the value is handed back.
    #[inline]
    pub fn insert_before(&mut self, value: T) -> Result<(), Rejected<T>> {
        self.vec.insert(self.index, value).map(drop)
    }

    /// Inserts the value produced by `make` before the current element.
    /// `make` only runs if there is room.
    #[inline]
    pub fn emplace_before<F: FnOnce() -> T>(&mut self, make: F) -> Result<(), Error> {
        self.vec.emplace(self.index, make).map(drop)
    }

    /// Removes the current element; the cursor then points at its follower,
    /// or the end position. Returns `None` at the end position.
    #[inline]
    pub fn remove_current(&mut self) -> Option<T> {
        self.vec.remove(self.index)
    }

    /// A read-only cursor at the same position.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T, N> {
        Cursor {
            vec: &*self.vec,
            index: self.index,
        }
    }
}

impl<T, const N: usize> fmt::Debug for CursorMut<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("index", &self.index)
            .field("len", &self.vec.len())
            .finish()
    }
}

impl<T, const N: usize> FixedVector<T, N> {
    /// A cursor at the first element (the end position when empty).
    #[inline]
    pub fn cursor_front(&self) -> Cursor<'_, T, N> {
        Cursor {
            vec: self,
            index: 0,
        }
    }

    /// A cursor at the end position, one past the last element.
    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, T, N> {
        Cursor {
            vec: self,
            index: self.len,
        }
    }

    /// A cursor at `index`, or `None` if `index > len`.
    #[inline]
    pub fn cursor_at(&self, index: usize) -> Option<Cursor<'_, T, N>> {
        (index <= self.len).then_some(Cursor { vec: self, index })
    }

    /// An editing cursor at the first element.
    #[inline]
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T, N> {
        CursorMut {
            vec: self,
            index: 0,
        }
    }

    /// An editing cursor at the end position.
    #[inline]
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T, N> {
        let index = self.len;
        CursorMut { vec: self, index }
    }

    /// An editing cursor at `index`, or `None` if `index > len`.
    #[inline]
    pub fn cursor_at_mut(&mut self, index: usize) -> Option<CursorMut<'_, T, N>> {
        if index > self.len {
            return None;
        }
        Some(CursorMut { vec: self, index })
    }
}
