// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::mem;

impl<T: Clone, const N: usize> Clone for FixedVector<T, N> {
    /// Clones element by element, front to back.
    ///
    /// If an element's `clone` panics, the clones made so far are dropped and
    /// the source is untouched.
    fn clone(&self) -> Self {
        let mut out = Self::new();
        for item in self.iter() {
            // SAFETY: `out` holds fewer elements than `self`, so `out.len < N`.
            unsafe { out.push_unchecked(item.clone()) };
        }
        out
    }

    /// Clears `self`, then clones every element of `source` into it.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        for item in source.iter() {
            // SAFETY: as in `clone`.
            unsafe { self.push_unchecked(item.clone()) };
        }
    }
}

impl<T, const N: usize> FixedVector<T, N> {
    /// Moves every element out into a new vector, leaving `self` empty.
    ///
    /// No element is cloned or dropped; the buffer is moved as a whole.
    #[inline]
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Move-assigns from `other`: drops the current elements of `self`,
    /// takes all of `other`'s elements and leaves `other` empty.
    #[inline]
    pub fn move_from(&mut self, other: &mut Self) {
        *self = other.take();
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        FixedVector,
        test_util::{Tracker, ids},
    };
    use alloc::string::String;

    #[test]
    fn test_clone_is_deep() {
        let mut a: FixedVector<String, 3> = FixedVector::new();
        a.push(String::from("x")).unwrap();
        a.push(String::from("y")).unwrap();
        let b = a.clone();
        a[0].push('!');
        assert_eq!(a, ["x!", "y"].map(String::from));
        assert_eq!(b, ["x", "y"].map(String::from));
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn test_clone_counts_one_clone_per_element() {
        let tracker = Tracker::new();
        let mut a: FixedVector<_, 4> = FixedVector::new();
        for id in 0..3 {
            a.push(tracker.make(id)).unwrap();
        }
        let b = a.clone();
        assert_eq!(tracker.live(), 6);
        drop(a);
        assert_eq!(ids(&b), [0, 1, 2]);
        assert_eq!(tracker.live(), 3);
        drop(b);
        assert_eq!(tracker.live(), 0);
        assert_eq!(tracker.dropped(), 6);
    }

    #[test]
    fn test_clone_from_replaces_contents() {
        let tracker = Tracker::new();
        let mut dst: FixedVector<_, 4> = FixedVector::new();
        for id in 10..14 {
            dst.push(tracker.make(id)).unwrap();
        }
        let mut src: FixedVector<_, 4> = FixedVector::new();
        src.push(tracker.make(1)).unwrap();

        dst.clone_from(&src);
        assert_eq!(ids(&dst), [1]);
        assert_eq!(ids(&src), [1]);
        assert_eq!(tracker.dropped(), 4);
        assert_eq!(tracker.live(), 2);
    }

    #[test]
    fn test_clone_of_empty_and_full() {
        let empty: FixedVector<i32, 2> = FixedVector::new();
        assert!(empty.clone().is_empty());

        let full: FixedVector<i32, 2> = [1, 2].into();
        let c = full.clone();
        assert!(c.is_full());
        assert_eq!(c, full);
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let tracker = Tracker::new();
        let mut a: FixedVector<_, 3> = FixedVector::new();
        a.push(tracker.make(1)).unwrap();
        a.push(tracker.make(2)).unwrap();

        let b = a.take();
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 3);
        assert_eq!(ids(&b), [1, 2]);
        assert_eq!(tracker.live(), 2);
        assert_eq!(tracker.dropped(), 0);

        // the source stays usable
        a.push(tracker.make(3)).unwrap();
        assert_eq!(ids(&a), [3]);
    }

    #[test]
    fn test_move_from_drops_old_and_empties_other() {
        let tracker = Tracker::new();
        let mut dst: FixedVector<_, 3> = FixedVector::new();
        dst.push(tracker.make(9)).unwrap();
        let mut src: FixedVector<_, 3> = FixedVector::new();
        src.push(tracker.make(1)).unwrap();
        src.push(tracker.make(2)).unwrap();

        dst.move_from(&mut src);
        assert_eq!(ids(&dst), [1, 2]);
        assert!(src.is_empty());
        assert_eq!(tracker.dropped(), 1);
        assert_eq!(tracker.live(), 2);
    }

    #[test]
    fn test_move_from_empty_source_clears_target() {
        let mut dst: FixedVector<i32, 3> = [1, 2, 3].into();
        let mut src: FixedVector<i32, 3> = FixedVector::new();
        dst.move_from(&mut src);
        assert!(dst.is_empty());
        assert!(src.is_empty());
    }
}
