// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVector};

impl<T, const N: usize> FixedVector<T, N> {
    /// Splits the vector into two at index `at`.
    ///
    /// On success:
    /// - `self` is left containing the prefix `[0..at)`,
    /// - the returned vector contains the tail `[at..len)`, in order.
    ///
    /// Returns [`Error::OutOfBounds`] if `at > self.len()`. On error, `self`
    /// is left unchanged.
    #[inline]
    pub fn split_off(&mut self, at: usize) -> Result<Self, Error> {
        if at > self.len {
            return Err(Error::OutOfBounds);
        }
        let mut other = Self::new();
        while self.len > at {
            self.len -= 1;
            // SAFETY: the slot at the old `len - 1` is detached and read out
            // once; `other` holds fewer than `N` elements.
            unsafe {
                let value = self.take_slot(self.len);
                other.push_unchecked(value);
            }
        }
        other.as_mut_slice().reverse();
        Ok(other)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        Error, FixedVector,
        test_util::{Tracker, ids},
    };

    #[test]
    fn test_split_off_and_truncate() {
        let mut v: FixedVector<i32, 6> = FixedVector::try_from(&[1, 2, 3, 4, 5][..]).unwrap();
        let tail = v.split_off(2).unwrap();
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(tail.as_slice(), &[3, 4, 5]);
        assert_eq!(v.split_off(5), Err(Error::OutOfBounds));
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_split_off_at_ends() {
        let mut v: FixedVector<i32, 4> = [1, 2, 3].into_iter().collect();
        let empty_tail = v.split_off(3).unwrap();
        assert!(empty_tail.is_empty());
        assert_eq!(v.as_slice(), &[1, 2, 3]);

        let all = v.split_off(0).unwrap();
        assert!(v.is_empty());
        assert_eq!(all.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_split_off_moves_without_drops() {
        let tracker = Tracker::new();
        let mut v: FixedVector<_, 4> = FixedVector::new();
        for id in 0..4 {
            v.push(tracker.make(id)).unwrap();
        }
        let tail = v.split_off(1).unwrap();
        assert_eq!(ids(&v), [0]);
        assert_eq!(ids(&tail), [1, 2, 3]);
        assert_eq!(tracker.dropped(), 0);
        assert_eq!(tracker.live(), 4);
    }
}
