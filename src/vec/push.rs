// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, Rejected},
    vec::FixedVector,
};

impl<T, const N: usize> FixedVector<T, N> {
    /// Appends `value` and returns a reference to it.
    ///
    /// When the vector is full, returns [`Error::Full`] together with `value`
    /// and leaves the vector unchanged.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<&mut T, Rejected<T>> {
        if self.len == N {
            return Err(Rejected::new(Error::Full, value));
        }
        // SAFETY: `len < N` was checked above.
        Ok(unsafe { self.push_unchecked(value) })
    }

    /// Appends the value produced by `make` and returns a reference to it.
    ///
    /// `make` is only called once the capacity check has passed, so nothing is
    /// constructed when the vector is full.
    #[inline]
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> Result<&mut T, Error> {
        if self.len == N {
            return Err(Error::Full);
        }
        let value = make();
        // SAFETY: `len < N` was checked above and `make` cannot reach `self`.
        Ok(unsafe { self.push_unchecked(value) })
    }

    /// Pushes `value` if not full; if at capacity, drops it and returns `false`.
    #[inline]
    #[must_use]
    pub fn push_truncated(&mut self, value: T) -> bool {
        self.push(value).is_ok()
    }
}
