// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, Rejected},
    vec::FixedVector,
};

impl<T, const N: usize> FixedVector<T, N> {
    /// Inserts `value` at `index`, shifting the elements after it right.
    ///
    /// - Returns [`Error::OutOfBounds`] if `index > len`.
    /// - Returns [`Error::Full`] if at capacity.
    ///
    /// In both cases `value` is handed back and the vector is unchanged. On
    /// success returns `index`, the position of the new element.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<usize, Rejected<T>> {
        if index > self.len {
            return Err(Rejected::new(Error::OutOfBounds, value));
        }
        if self.len == N {
            return Err(Rejected::new(Error::Full, value));
        }
        // SAFETY: `len < N` was checked above.
        unsafe { self.push_unchecked(value) };
        self.sink_last(index);
        Ok(index)
    }

    /// Inserts the value produced by `make` at `index`.
    ///
    /// Both checks of [`insert`](FixedVector::insert) run before `make` is
    /// called.
    #[inline]
    pub fn emplace<F: FnOnce() -> T>(&mut self, index: usize, make: F) -> Result<usize, Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        self.emplace_back(make)?;
        self.sink_last(index);
        Ok(index)
    }

    /// Inserts `count` clones of `value` at `index`.
    ///
    /// Returns [`Error::OutOfBounds`] if `index > len` and [`Error::Full`] if
    /// `len + count > N`, leaving the vector unchanged. Inserting zero
    /// elements is a no-op. On success returns `index`, the position of the
    /// first inserted element.
    pub fn insert_n(&mut self, index: usize, count: usize, value: T) -> Result<usize, Error>
    where
        T: Clone,
    {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        if count > self.spare_capacity() {
            return Err(Error::Full);
        }
        if count == 0 {
            return Ok(index);
        }
        for _ in 1..count {
            // SAFETY: `count <= spare_capacity()` was checked above.
            unsafe { self.push_unchecked(value.clone()) };
        }
        // SAFETY: as above, this is the `count`-th push.
        unsafe { self.push_unchecked(value) };
        self.as_mut_slice()[index..].rotate_right(count);
        Ok(index)
    }

    /// Inserts a clone of every element of `src` at `index`, keeping their order.
    ///
    /// Same errors and return value as [`insert_n`](FixedVector::insert_n).
    pub fn insert_slice(&mut self, index: usize, src: &[T]) -> Result<usize, Error>
    where
        T: Clone,
    {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        if src.len() > self.spare_capacity() {
            return Err(Error::Full);
        }
        self.insert_iter(index, src.iter().cloned())
    }

    /// Inserts every item of `iter` at `index`, keeping their order.
    ///
    /// All-or-nothing: if the iterator yields more items than fit, the items
    /// taken so far are dropped, the vector is left unchanged and
    /// [`Error::Full`] is returned. The iterator is not polled past the first
    /// item that does not fit.
    pub fn insert_iter<I: IntoIterator<Item = T>>(
        &mut self,
        index: usize,
        iter: I,
    ) -> Result<usize, Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        let old_len = self.len;
        for item in iter {
            if self.push(item).is_err() {
                self.truncate(old_len);
                return Err(Error::Full);
            }
        }
        let added = self.len - old_len;
        if added > 0 {
            self.as_mut_slice()[index..].rotate_right(added);
        }
        Ok(index)
    }

    /// Moves the last element down to `index` one slot at a time, shifting
    /// `index..len - 1` up by one. Every step swaps two live slots.
    fn sink_last(&mut self, index: usize) {
        let tail = &mut self.as_mut_slice()[index..];
        for i in (1..tail.len()).rev() {
            tail.swap(i - 1, i);
        }
    }
}
