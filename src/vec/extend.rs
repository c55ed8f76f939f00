// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVector};

impl<T, const N: usize> Extend<T> for FixedVector<T, N> {
    /// Appends items until the vector is full. The iterator is not polled
    /// past the last item that fits.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let remaining = N - self.len;
        if remaining == 0 {
            return;
        }

        for item in iter.into_iter().take(remaining) {
            // SAFETY: `take(remaining)` yields at most `N - len` items.
            unsafe { self.push_unchecked(item) };
        }
    }
}

impl<'a, T: Clone + 'a, const N: usize> Extend<&'a T> for FixedVector<T, N> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T, const N: usize> FixedVector<T, N> {
    /// Appends clones of `src` if they all fit; otherwise no-op and returns
    /// [`Error::Full`].
    #[inline]
    pub fn extend_from_slice(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Clone,
    {
        if src.len() > self.spare_capacity() {
            return Err(Error::Full);
        }
        self.extend(src.iter().cloned());
        Ok(())
    }

    /// Clones as many elements from `src` as will fit and returns the count copied.
    #[inline]
    pub fn extend_from_slice_truncated(&mut self, src: &[T]) -> usize
    where
        T: Clone,
    {
        let take = self.spare_capacity().min(src.len());
        self.extend(src[..take].iter().cloned());
        take
    }

    /// Appends `src` as one byte copy if it fits; otherwise no-op and returns
    /// [`Error::Full`].
    ///
    /// Same result as [`extend_from_slice`](FixedVector::extend_from_slice),
    /// without a per-element `clone` call.
    #[inline]
    pub fn extend_from_copied(&mut self, src: &[T]) -> Result<(), Error>
    where
        T: Copy,
    {
        if src.len() > self.spare_capacity() {
            return Err(Error::Full);
        }
        // SAFETY: `src.len() <= N - len` was checked above.
        unsafe { self.construct_copied(src) };
        Ok(())
    }

    /// Tries to extend `self` from an iterator **without truncation**.
    ///
    /// Semantics:
    /// - All-or-nothing:
    ///   - If the iterator yields at most `spare_capacity()` items, they are
    ///     appended in order and `Ok(())` is returned.
    ///   - If it yields more than `spare_capacity()`, the items appended so
    ///     far are dropped, `self` is left unchanged and `Err(Error::Full)` is
    ///     returned.
    /// - The source iterator may be partially consumed on error.
    #[inline]
    pub fn try_extend_from_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) -> Result<(), Error> {
        let old_len = self.len;
        for item in iter {
            if self.push(item).is_err() {
                self.truncate(old_len);
                return Err(Error::Full);
            }
        }
        Ok(())
    }
}
