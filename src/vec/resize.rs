// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVector};

impl<T, const N: usize> FixedVector<T, N> {
    /// Resizes to `new_len`, filling with clones of `value` when growing.
    ///
    /// Shrinking drops the tail. Returns [`Error::Full`] if `new_len > N`,
    /// leaving the vector unchanged.
    pub fn resize(&mut self, new_len: usize, value: T) -> Result<(), Error>
    where
        T: Clone,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        if new_len > N {
            return Err(Error::Full);
        }
        while self.len + 1 < new_len {
            // SAFETY: `len + 1 < new_len <= N`.
            unsafe { self.push_unchecked(value.clone()) };
        }
        // SAFETY: `len + 1 == new_len <= N`; the last slot takes `value` itself.
        unsafe { self.push_unchecked(value) };
        Ok(())
    }

    /// Resizes to `new_len`, filling new slots with the results of `f`.
    ///
    /// Returns [`Error::Full`] if `new_len > N` without calling `f`.
    pub fn resize_with<F: FnMut() -> T>(&mut self, new_len: usize, mut f: F) -> Result<(), Error> {
        if new_len <= self.len {
            self.truncate(new_len);
            return Ok(());
        }
        if new_len > N {
            return Err(Error::Full);
        }
        while self.len < new_len {
            let value = f();
            // SAFETY: `len < new_len <= N`.
            unsafe { self.push_unchecked(value) };
        }
        Ok(())
    }
}
