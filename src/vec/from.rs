// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::FixedVector};

// Core imports
use core::mem::MaybeUninit;

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(src: [T; N]) -> Self {
        Self {
            buf: src.map(MaybeUninit::new),
            len: N,
        }
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for FixedVector<T, N> {
    fn from(src: &[T; N]) -> Self {
        src.clone().into()
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for FixedVector<T, N> {
    type Error = Error;
    fn try_from(src: &[T]) -> Result<Self, Error> {
        let mut v = Self::new();
        v.extend_from_slice(src)?;
        Ok(v)
    }
}

impl<T, const N: usize> FixedVector<T, N> {
    /// Tries to construct from an iterator, erroring with [`Error::Full`] if it would overflow.
    ///
    /// Semantics:
    /// - Elements are pushed in iterator order.
    /// - On the first element that would exceed capacity `N`, this returns `Err(Error::Full)`.
    /// - Any elements pushed before the overflow are dropped; the returned `Err` does *not*
    ///   include the partially filled vector.
    /// - The source iterator may be left partially consumed (it stops at the first overflow).
    #[inline]
    pub fn try_from_iter<I: IntoIterator<Item = T>>(iter: I) -> Result<Self, Error> {
        let mut v = Self::new();
        v.try_extend_from_iter(iter)?;
        Ok(v)
    }

    /// Constructs from clones of at most `N` elements of `src`, truncating if necessary.
    #[inline]
    pub fn from_slice_truncated(src: &[T]) -> Self
    where
        T: Clone,
    {
        let mut v = Self::new();
        let _ = v.extend_from_slice_truncated(src);
        v
    }

    /// Constructs from at most `N` elements of `src`, truncating if necessary.
    ///
    /// Convenience wrapper over [`from_slice_truncated`](FixedVector::from_slice_truncated)
    /// for arrays.
    #[inline]
    pub fn from_array_truncated<const M: usize>(src: &[T; M]) -> Self
    where
        T: Clone,
    {
        Self::from_slice_truncated(&src[..])
    }

    /// Duplicates the vector by copying its whole buffer as bytes.
    ///
    /// Equivalent to [`Clone::clone`] for `Copy` elements.
    #[inline]
    pub fn copied(&self) -> Self
    where
        T: Copy,
    {
        Self {
            buf: self.buf,
            len: self.len,
        }
    }
}
