// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    iter::IntoIter,
    vec::{FixedVector, resolve_range},
};

// Core imports
use core::{
    fmt,
    iter::FusedIterator,
    ops::RangeBounds,
};

/// Owned iterator returned by [`FixedVector::drain`].
///
/// - Holds a mutable borrow of the parent vector for the iterator's lifetime.
/// - The drained elements have already been moved out of the parent into a
///   temporary vector; dropping the `Drain` drops whatever was not yielded.
pub struct Drain<'a, T, const N: usize> {
    pub(crate) _parent: &'a mut FixedVector<T, N>,
    pub(crate) iter: IntoIter<T, N>,
}

impl<'a, T, const N: usize> Iterator for Drain<'a, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }

    fn nth(&mut self, n: usize) -> Option<T> {
        self.iter.nth(n)
    }
}
impl<'a, T, const N: usize> DoubleEndedIterator for Drain<'a, T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.iter.next_back()
    }

    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.iter.nth_back(n)
    }
}
impl<'a, T, const N: usize> ExactSizeIterator for Drain<'a, T, N> {}
impl<'a, T, const N: usize> FusedIterator for Drain<'a, T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for Drain<'_, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Drain").field(&self.iter).finish()
    }
}

impl<T, const N: usize> FixedVector<T, N> {
    /// Drains the specified range of elements and returns them as an iterator.
    ///
    /// The range is rotated to the end of the vector and split off into a
    /// temporary vector before the iterator is returned, so the parent is
    /// already in its final state and leaking the `Drain` leaks nothing
    /// from it.
    ///
    /// This matches the behavior of [`Vec::drain`].
    ///
    /// # Panics
    ///
    /// Panics if the specified range is invalid:
    /// - `start > end`
    /// - `end > self.len()`
    ///
    /// (A range with `start == end` yields an empty iterator and leaves
    /// the vector unchanged.)
    ///
    /// # Examples
    /// ```
    /// # use fixed_vector::FixedVector;
    /// let mut v: FixedVector<_, 4> = [1, 2, 3, 4].into();
    /// let drained: FixedVector<_, 4> = v.drain(1..3).collect();
    /// assert_eq!(drained.as_slice(), &[2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 4]);
    /// ```
    #[track_caller]
    pub fn drain<R>(&mut self, range: R) -> Drain<'_, T, N>
    where
        R: RangeBounds<usize>,
    {
        let len = self.len;
        let Some((start, end)) = resolve_range(&range, len) else {
            // Re-resolve without the length bound to tell the two failures apart.
            match resolve_range(&range, usize::MAX) {
                Some((_, end)) if end != usize::MAX => {
                    panic!("drain range end {} exceeds length {}", end, len)
                }
                _ => panic!("drain range start > end (length {})", len),
            }
        };

        let count = end - start;
        let tail = if count == 0 {
            Self::new()
        } else {
            self.as_mut_slice()[start..].rotate_left(count);
            let tail = self.split_off(len - count);
            // `len - count <= len` by the checks above.
            debug_assert!(tail.is_ok());
            tail.unwrap_or_default()
        };

        Drain {
            _parent: self,
            iter: tail.into_iter(),
        }
    }

    /// Moves every element out, front to back, leaving `self` empty.
    ///
    /// Unlike `drain(..)`, the returned iterator does not borrow `self`.
    #[inline]
    pub fn drain_all(&mut self) -> IntoIter<T, N> {
        self.take().into_iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        FixedVector,
        test_util::{Tracker, ids},
    };
    use alloc::vec::Vec;

    #[test]
    fn test_drain_middle_and_all() {
        let mut v: FixedVector<i32, 6> = FixedVector::try_from(&[1, 2, 3, 4, 5][..]).unwrap();
        let drained: Vec<_> = v.drain(1..4).collect();
        assert_eq!(drained, [2, 3, 4]);
        assert_eq!(v.as_slice(), &[1, 5]);

        let rest: Vec<_> = v.drain(..).collect();
        assert_eq!(rest, [1, 5]);
        assert!(v.is_empty());
    }

    #[test]
    fn test_drain_non_default_type() {
        #[derive(Clone, Debug, PartialEq, Eq)]
        struct NoDefault(i32); // intentionally no Default

        let mut v: FixedVector<NoDefault, 5> = FixedVector::from_slice_truncated(&[
            NoDefault(1),
            NoDefault(2),
            NoDefault(3),
            NoDefault(4),
        ]);

        // Drain the middle two
        let drained: Vec<_> = v.drain(1..3).collect();
        assert_eq!(drained, [NoDefault(2), NoDefault(3)]);

        // Remaining should be [1,4] in order
        assert_eq!(v.len(), 2);
        assert_eq!(v.as_slice(), &[NoDefault(1), NoDefault(4)]);
    }

    #[test]
    fn test_drain_empty_range_is_noop() {
        let mut v: FixedVector<i32, 4> = [1, 2, 3].into_iter().collect();
        let mut d = v.drain(2..2);
        assert_eq!(d.len(), 0);
        assert_eq!(d.next(), None);
        drop(d);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_drain_double_ended() {
        let mut v: FixedVector<i32, 5> = [1, 2, 3, 4, 5].into();
        let mut d = v.drain(1..=3);
        assert_eq!(d.len(), 3);
        assert_eq!(d.next_back(), Some(4));
        assert_eq!(d.next(), Some(2));
        assert_eq!(d.nth_back(0), Some(3));
        assert_eq!(d.next(), None);
        drop(d);
        assert_eq!(v.as_slice(), &[1, 5]);
    }

    #[test]
    fn test_drain_drops_unyielded_elements() {
        let tracker = Tracker::new();
        let mut v: FixedVector<_, 5> = FixedVector::new();
        for id in 0..5 {
            v.push(tracker.make(id)).unwrap();
        }
        {
            let mut d = v.drain(1..4);
            let first = d.next().unwrap();
            assert_eq!(first.id, 1);
        }
        assert_eq!(ids(&v), [0, 4]);
        assert_eq!(tracker.dropped(), 3);
        assert_eq!(tracker.live(), 2);
    }

    #[test]
    fn test_forgotten_drain_leaves_parent_consistent() {
        let tracker = Tracker::new();
        let mut v: FixedVector<_, 3> = FixedVector::new();
        for id in 0..3 {
            v.push(tracker.make(id)).unwrap();
        }
        core::mem::forget(v.drain(..2));
        assert_eq!(ids(&v), [2]);
        drop(v);
        assert_eq!(tracker.dropped(), 1);
    }

    #[test]
    #[should_panic(expected = "drain range end 4 exceeds length 3")]
    fn test_drain_end_past_len_panics() {
        let mut v: FixedVector<i32, 4> = [1, 2, 3].into_iter().collect();
        let _ = v.drain(1..4);
    }

    #[test]
    #[should_panic(expected = "drain range start > end")]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_drain_inverted_range_panics() {
        let mut v: FixedVector<i32, 4> = [1, 2, 3].into_iter().collect();
        let _ = v.drain(2..1);
    }

    #[test]
    fn test_drain_all_leaves_empty_and_unborrowed() {
        let mut v: FixedVector<i32, 3> = [1, 2, 3].into();
        let it = v.drain_all();
        v.push(9).unwrap();
        assert_eq!(it.collect::<Vec<_>>(), [1, 2, 3]);
        assert_eq!(v.as_slice(), &[9]);
    }

    #[test]
    #[should_panic(expected = "drain range start > end")]
    fn test_drain_unbounded_end_with_start_past_len_panics() {
        let mut v: FixedVector<i32, 4> = [1, 2, 3].into_iter().collect();
        let _ = v.drain(5..);
    }

    #[test]
    fn test_drain_accepts_every_range_form() {
        let base: FixedVector<i32, 5> = [0, 1, 2, 3, 4].into();

        let mut v = base.clone();
        assert_eq!(v.drain(..2).collect::<Vec<_>>(), [0, 1]);
        let mut w = base.clone();
        assert_eq!(w.drain(3..).collect::<Vec<_>>(), [3, 4]);
        let mut x = base.clone();
        assert_eq!(x.drain(..=1).collect::<Vec<_>>(), [0, 1]);
        let mut y = base.clone();
        assert_eq!(y.drain(5..).len(), 0);
        assert_eq!(y, base);
    }
}
