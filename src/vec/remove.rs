// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    vec::{FixedVector, resolve_range},
};

// Core imports
use core::ops::RangeBounds;

impl<T, const N: usize> FixedVector<T, N> {
    /// Removes and returns the element at `index`, shifting subsequent elements left.
    ///
    /// Returns `None` if `index >= len`. The element is swapped up to the last
    /// live slot one step at a time and taken out from there.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let tail = &mut self.as_mut_slice()[index..];
        for i in 1..tail.len() {
            tail.swap(i - 1, i);
        }
        self.pop()
    }

    /// Fallible variant of [`remove`](FixedVector::remove), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_remove(&mut self, index: usize) -> Result<T, Error> {
        self.remove(index).ok_or(Error::OutOfBounds)
    }

    /// Drops the element at `index`, shifting subsequent elements left.
    ///
    /// Returns `index`, which now names the element that followed the erased
    /// one, or equals `len()` if the last element was erased. Returns
    /// [`Error::OutOfBounds`] if `index >= len`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> Result<usize, Error> {
        drop(self.try_remove(index)?);
        Ok(index)
    }

    /// Drops the elements in `range`, shifting the tail left to close the gap.
    ///
    /// Returns the start of the range, which now names the element that
    /// followed the erased range. An empty range is a no-op. Returns
    /// [`Error::OutOfBounds`] if the range is inverted or ends past `len`.
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) -> Result<usize, Error> {
        let (start, end) = resolve_range(&range, self.len).ok_or(Error::OutOfBounds)?;
        let count = end - start;
        if count == 0 {
            return Ok(start);
        }
        self.as_mut_slice()[start..].rotate_left(count);
        self.truncate(self.len - count);
        Ok(start)
    }

    /// Removes and returns the element at `index` by swapping with the last element.
    ///
    /// Does not preserve order. Returns `None` when `index >= len`. Removing
    /// the last element avoids a swap.
    #[inline]
    pub fn swap_remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let last = self.len - 1;
        if index != last {
            self.as_mut_slice().swap(index, last);
        }
        self.pop()
    }

    /// Fallible variant of [`swap_remove`](FixedVector::swap_remove),
    /// returning [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_swap_remove(&mut self, index: usize) -> Result<T, Error> {
        self.swap_remove(index).ok_or(Error::OutOfBounds)
    }
}
