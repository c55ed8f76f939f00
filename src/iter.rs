// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`FixedVector`](crate::FixedVector).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&FixedVector` and `&mut FixedVector` iterate as slices.
//! - `FromIterator` keeps at most the first `N` items.

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::{fmt, iter::FusedIterator};

/// Owned iterator returned by `FixedVector::into_iter()`.
///
/// Yields elements by value from front to back and supports double-ended
/// iteration via [`DoubleEndedIterator`]. Elements not yielded are dropped
/// with the iterator.
pub struct IntoIter<T, const N: usize> {
    // `v.len` is 0: the iterator, not the vector, owns `buf[front..back]`.
    v: FixedVector<T, N>,
    front: usize,
    back: usize, // exclusive
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the elements not yet yielded.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `buf[front..back]` are initialized and owned by the iterator.
        unsafe { self.v.detached(self.front, self.back) }
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was in the owned range and is read out once.
            Some(unsafe { self.v.take_slot(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        for _ in 0..skip {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was in the owned range and is dropped once.
            unsafe { self.v.destroy(i) };
        }
        self.next()
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: slot `back` was in the owned range and is read out once.
            Some(unsafe { self.v.take_slot(self.back) })
        } else {
            None
        }
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        let rem = self.back - self.front;
        let skip = n.min(rem);
        for _ in 0..skip {
            self.back -= 1;
            // SAFETY: slot `back` was in the owned range and is dropped once.
            unsafe { self.v.destroy(self.back) };
        }
        self.next_back()
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        while self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: slot `i` was in the owned range; `front` has moved past
            // it, so a panicking destructor cannot cause a second drop.
            unsafe { self.v.destroy(i) };
        }
    }
}

impl<T: Clone, const N: usize> Clone for IntoIter<T, N> {
    fn clone(&self) -> Self {
        self.as_slice().iter().cloned().collect::<FixedVector<T, N>>().into_iter()
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for FixedVector<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = self.len();
        // SAFETY: ownership of `buf[..back]` moves to the iterator, which
        // drops what it does not yield.
        unsafe { self.set_len(0) };
        IntoIter {
            v: self,
            front: 0,
            back,
        }
    }
}

impl<T, const N: usize> FromIterator<T> for FixedVector<T, N> {
    /// Collecting into `FixedVector<T, N>` takes at most the first `N`
    /// elements from the iterator and does not consume any further elements.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::FixedVector;
    use crate::test_util::{Tracker, ids};
    use alloc::{format, string::String, vec::Vec};

    #[test]
    fn test_double_ended_and_nth() {
        let v: FixedVector<i32, 6> = FixedVector::try_from(&[10, 20, 30, 40][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.nth(1), Some(30));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iter_nth_back_sequence() {
        let v: FixedVector<i32, 6> = FixedVector::try_from(&[1, 2, 3, 4, 5][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.nth_back(0), Some(5));
        assert_eq!(it.nth_back(1), Some(3)); // skip 1 from back, take 3
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
    }

    #[test]
    #[allow(clippy::iter_nth_zero)]
    fn test_size_hint_tracks_consumption() {
        let v: FixedVector<i32, 6> = FixedVector::try_from(&[10, 20, 30, 40][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.nth(0), Some(20));
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next(), Some(30));
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }

    #[test]
    #[allow(clippy::iter_nth_zero)]
    fn test_nth_and_nth_back_boundary_conditions() {
        let v: FixedVector<i32, 5> = FixedVector::try_from(&[1, 2, 3, 4, 5][..]).unwrap();
        let mut it = v.into_iter();

        // nth exactly remaining-1 returns last; nth >= remaining drains
        assert_eq!(it.nth(3), Some(4)); // consumed [1,2,3], returns 4, remaining [5]
        assert_eq!(it.nth(0), Some(5));
        assert_eq!(it.nth(0), None);

        let v2: FixedVector<i32, 5> = FixedVector::try_from(&[1, 2, 3, 4, 5][..]).unwrap();
        let mut it2 = v2.into_iter();
        assert_eq!(it2.nth_back(4), Some(1)); // exactly remaining-1 from back
        assert_eq!(it2.next(), None);
    }

    #[test]
    fn test_into_iter_zero_sized_type() {
        let v: FixedVector<(), 3> = FixedVector::from([(); 3]);
        let it = v.into_iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.count(), 3);
    }

    #[test]
    fn test_into_iter_zero_capacity() {
        let v: FixedVector<u8, 0> = FixedVector::default();
        let mut it = v.into_iter();
        assert_eq!(it.next(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_nth_back_overflow_branch() {
        let v: FixedVector<i32, 5> = FixedVector::try_from(&[10, 20, 30][..]).unwrap();
        let mut it = v.into_iter();

        // remaining = 3; n >= 3 drains everything
        assert_eq!(it.nth_back(3), None);

        // Iterator must now be fully drained
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_nth_skipped_elements_are_dropped() {
        let tracker = Tracker::new();
        let mut v: FixedVector<_, 5> = FixedVector::new();
        for id in 0..5 {
            v.push(tracker.make(id)).unwrap();
        }
        let mut it = v.into_iter();
        let third = it.nth(2).unwrap();
        assert_eq!(third.id, 2);
        assert_eq!(tracker.dropped(), 2);
        assert_eq!(ids(it.as_slice()), [3, 4]);
        let last = it.nth_back(5);
        assert!(last.is_none());
        assert_eq!(tracker.dropped(), 4);
        drop(third);
        assert_eq!(tracker.live(), 0);
    }

    #[test]
    fn test_partially_consumed_iterator_drops_the_rest() {
        let tracker = Tracker::new();
        let mut v: FixedVector<_, 4> = FixedVector::new();
        for id in 0..4 {
            v.push(tracker.make(id)).unwrap();
        }
        let mut it = v.into_iter();
        let a = it.next().unwrap();
        let b = it.next_back().unwrap();
        drop(it);
        assert_eq!(tracker.dropped(), 2);
        assert_eq!((a.id, b.id), (0, 3));
    }

    #[test]
    fn test_into_iter_owned_strings() {
        let v: FixedVector<String, 3> = ["a", "b"].map(String::from).into_iter().collect();
        let joined: Vec<String> = v.into_iter().rev().collect();
        assert_eq!(joined, ["b", "a"]);
    }

    #[test]
    fn test_into_iter_clone_and_debug() {
        let v: FixedVector<i32, 4> = [1, 2, 3].into_iter().collect();
        let mut it = v.into_iter();
        it.next();
        let c = it.clone();
        assert_eq!(format!("{c:?}"), "IntoIter([2, 3])");
        assert_eq!(it.collect::<Vec<_>>(), c.collect::<Vec<_>>());
    }

    #[test]
    fn test_ref_iteration() {
        let mut v: FixedVector<i32, 3> = [1, 2, 3].into();
        for x in &mut v {
            *x *= 10;
        }
        let sum: i32 = (&v).into_iter().sum();
        assert_eq!(sum, 60);
    }

    #[test]
    fn test_from_iter_truncates_and_stops_consuming() {
        let mut src = 0..10;
        let v: FixedVector<i32, 3> = src.by_ref().collect();
        assert_eq!(v.as_slice(), &[0, 1, 2]);
        assert_eq!(src.next(), Some(3));
    }
}
