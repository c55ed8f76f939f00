// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `FixedVector` type and its inherent API.
//!
//! `FixedVector<T, N>` is a fixed-capacity vector for arbitrary `T`. It stores
//! elements inline in a `[MaybeUninit<T>; N]` buffer and tracks a logical
//! length. Methods generally mirror slice/vector semantics, with explicit
//! capacity checks and fallible variants where appropriate.
//!
//! No heap allocations are performed.

mod clone;
mod drain;
mod extend;
mod from;
mod insert;
mod into_array;
mod new;
mod pop;
mod push;
mod remove;
mod resize;
mod retain;
mod split_off;
mod storage;

pub use drain::Drain;

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    mem::MaybeUninit,
    ops::{Bound, Deref, DerefMut, RangeBounds},
};

/// A fixed-capacity vector that stores its elements inline.
///
/// `FixedVector<T, N>` owns a buffer of `N` slots and a logical length
/// `len ∈ 0..=N`:
///
/// - capacity is known at compile time (`N`) and never changes;
/// - the buffer is stored inline (on the stack, or inside whatever contains
///   the vector);
/// - any `T` is accepted; elements are dropped exactly once;
/// - no heap allocations are performed.
///
/// # Layout and invariants
///
/// - `buf: [MaybeUninit<T>; N]`, the slot storage;
/// - `len` with `0 <= len <= N`.
///
/// Slots `buf[..len]` are *live* (hold a constructed `T`), slots `buf[len..]`
/// are *empty* (never read as `T`). Every public method restores this before
/// returning, including when an element's `Clone`, `Drop` or a user closure
/// panics part way through.
///
/// # Positional operations
///
/// [`insert`](FixedVector::insert) and [`erase`](FixedVector::erase) move
/// elements one slot at a time. Inserting constructs the new element in the
/// first empty slot and swaps it down to its position; erasing swaps the
/// victim up to the last live slot and drops it there. Both return the index
/// of the affected position, which a [`CursorMut`](crate::CursorMut) tracks
/// automatically.
///
/// # Fallible vs truncating operations
///
/// - **Fallible** (error on overflow, no changes on error): [`push`],
///   [`insert`], [`insert_n`], [`insert_iter`], [`insert_slice`],
///   [`extend_from_slice`], [`try_extend_from_iter`], [`resize`],
///   [`from_elem`], [`try_from_iter`], [`TryFrom<&[T]>`](TryFrom).
/// - **Truncating** (silently stop at `N`): [`push_truncated`],
///   [`extend_from_slice_truncated`], [`from_slice_truncated`],
///   [`Extend<T>`](core::iter::Extend), [`FromIterator<T>`](core::iter::FromIterator).
///
/// # Copy elements
///
/// `Clone` copies element by element. When `T: Copy`,
/// [`copied`](FixedVector::copied) and
/// [`extend_from_copied`](FixedVector::extend_from_copied) copy the storage as
/// plain bytes instead. When `T` has no drop glue, [`clear`] and [`truncate`]
/// only move the length.
///
/// # Examples
///
/// ```rust
/// use fixed_vector::FixedVector;
///
/// let mut v: FixedVector<i32, 5> = FixedVector::new();
/// v.push(1).unwrap();
/// v.push(2).unwrap();
/// v.push(3).unwrap();
/// assert_eq!(v.at(2), Ok(&3));
///
/// v.insert(1, 9).unwrap();
/// assert_eq!(v, [1, 9, 2, 3]);
///
/// v.erase_range(1..3).unwrap();
/// assert_eq!(v, [1, 3]);
/// ```
///
/// [`push`]: FixedVector::push
/// [`insert`]: FixedVector::insert
/// [`insert_n`]: FixedVector::insert_n
/// [`insert_iter`]: FixedVector::insert_iter
/// [`insert_slice`]: FixedVector::insert_slice
/// [`extend_from_slice`]: FixedVector::extend_from_slice
/// [`try_extend_from_iter`]: FixedVector::try_extend_from_iter
/// [`resize`]: FixedVector::resize
/// [`from_elem`]: FixedVector::from_elem
/// [`try_from_iter`]: FixedVector::try_from_iter
/// [`push_truncated`]: FixedVector::push_truncated
/// [`extend_from_slice_truncated`]: FixedVector::extend_from_slice_truncated
/// [`from_slice_truncated`]: FixedVector::from_slice_truncated
/// [`clear`]: FixedVector::clear
/// [`truncate`]: FixedVector::truncate
pub struct FixedVector<T, const N: usize> {
    pub(crate) buf: [MaybeUninit<T>; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> FixedVector<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `true` if another element fits (`len < N`).
    #[inline]
    pub const fn has_space(&self) -> bool {
        self.len < N
    }

    /// Returns `N - len`, the number of additional elements that can be pushed.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns the element at `index`, or [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.as_slice().get(index).ok_or(Error::OutOfBounds)
    }

    /// Mutable variant of [`at`](FixedVector::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.as_mut_slice().get_mut(index).ok_or(Error::OutOfBounds)
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`. Reverse with `.rev()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }
}

/// Resolves `range` against `len`, returning `None` when it is inverted or
/// reaches past `len`.
pub(crate) fn resolve_range<R: RangeBounds<usize>>(range: &R, len: usize) -> Option<(usize, usize)> {
    let start = match range.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.checked_add(1)?,
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&i) => i.checked_add(1)?,
        Bound::Excluded(&i) => i,
        Bound::Unbounded => len,
    };
    (start <= end && end <= len).then_some((start, end))
}

impl<T, const N: usize> Drop for FixedVector<T, N> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for FixedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedVector")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for FixedVector<T, N> {
    fn eq(&self, other: &Self) -> bool {
        if self.len != other.len {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}
impl<T: Eq, const N: usize> Eq for FixedVector<T, N> {}

impl<T: PartialEq, const N: usize> PartialEq<[T]> for FixedVector<T, N> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}
impl<T: PartialEq, const N: usize> PartialEq<&[T]> for FixedVector<T, N> {
    fn eq(&self, other: &&[T]) -> bool {
        self.as_slice() == *other
    }
}
impl<T: PartialEq, const N: usize, const M: usize> PartialEq<[T; M]> for FixedVector<T, N> {
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other
    }
}

impl<T: Ord, const N: usize> Ord for FixedVector<T, N> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd, const N: usize> PartialOrd for FixedVector<T, N> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash, const N: usize> Hash for FixedVector<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T, const N: usize> Deref for FixedVector<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for FixedVector<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedVector<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for FixedVector<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for FixedVector<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for FixedVector<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
