// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVector};

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> FixedVector<T, N> {
    /// Constructs an empty vector. Usable in `const` contexts.
    #[inline]
    pub const fn new() -> Self {
        Self {
            buf: [const { MaybeUninit::uninit() }; N],
            len: 0,
        }
    }

    /// Constructs a vector holding `count` clones of `value`.
    ///
    /// Returns [`Error::Full`] if `count > N`.
    pub fn from_elem(count: usize, value: T) -> Result<Self, Error>
    where
        T: Clone,
    {
        let mut v = Self::new();
        v.resize(count, value)?;
        Ok(v)
    }
}

impl<T, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self::new()
    }
}
