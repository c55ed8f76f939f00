// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `FixedVector`.
//!
//! [`Error`] names the broken precondition. It is `Copy` and implements
//! `core::error::Error`. [`Rejected`] additionally hands back the element an
//! operation could not store, so non-`Copy` values are never lost on failure.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`FixedVector`](crate::FixedVector).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    Full,
    /// An index or position was out of the current logical bounds.
    OutOfBounds,
    /// An operation required `len == N`, which was not met.
    ///
    /// Currently used by [`FixedVector::try_into_array`](crate::FixedVector::try_into_array)
    /// when the vector is not full.
    InvalidLen,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
            Self::InvalidLen => f.write_str("invalid length"),
        }
    }
}

impl CoreError for Error {}

/// A failed operation together with the value it was given back.
///
/// Returned by [`FixedVector::push`](crate::FixedVector::push),
/// [`FixedVector::insert`](crate::FixedVector::insert) and
/// [`FixedVector::try_into_array`](crate::FixedVector::try_into_array).
/// Converts into [`Error`] with `?` when the value is not needed.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Rejected<T> {
    error: Error,
    value: T,
}

impl<T> Rejected<T> {
    #[inline]
    pub(crate) const fn new(error: Error, value: T) -> Self {
        Self { error, value }
    }

    /// The reason the operation failed.
    #[inline]
    pub const fn error(&self) -> Error {
        self.error
    }

    /// Borrows the value that was handed back.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Recovers the value that was handed back.
    #[inline]
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rejected")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl<T> CoreError for Rejected<T> {}

impl<T> From<Rejected<T>> for Error {
    fn from(rejected: Rejected<T>) -> Self {
        rejected.error
    }
}
