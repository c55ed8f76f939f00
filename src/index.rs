// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`FixedVector`](crate::FixedVector).
//!
//! `Index` and `IndexMut` accept anything a slice accepts (`usize` and every
//! range form) and mirror slice behavior:
//! - panics on out-of-bounds;
//! - views are restricted to the live prefix `[0..len)`.
//!
//! Use [`FixedVector::at`](crate::FixedVector::at) or `get` for a
//! non-panicking lookup.

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>, const N: usize> Index<I> for FixedVector<T, N> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>, const N: usize> IndexMut<I> for FixedVector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
