// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `fixed-vector`
//!
//! A `no_std`, fixed-capacity vector that stores its elements inline, with no
//! heap allocation, and supports the full mutable-sequence interface.
//!
//! The core type, [`FixedVector<T, N>`], owns an inline buffer of `N` slots and
//! a logical length `len ∈ 0..=N`. Slots `[0, len)` hold live elements; slots
//! `[len, N)` are uninitialized and are never read. Unlike a `Copy`-only stack
//! buffer, any `T` is accepted: elements are constructed in place, dropped
//! exactly once, and moved out by value.
//!
//! ## When to use this crate
//!
//! This crate may be useful when:
//!
//! - You are in a `no_std` or embedded environment, or on an
//!   allocation-sensitive hot path.
//! - You know the maximum number of elements at compile time.
//! - You need positional insert/erase, not only push/pop.
//!
//! It may not be the best fit if:
//!
//! - You need to grow past a fixed bound. Exceeding `N` is always an error,
//!   never a reallocation.
//! - `N * size_of::<T>()` is large and the vector is moved around by value.
//!
//! ## Error policy
//!
//! Capacity and position failures never panic and never leave the vector
//! half-modified:
//!
//! - [`FixedVector::push`] and [`FixedVector::insert`] return a [`Rejected`]
//!   that hands the element back together with the [`Error`].
//! - [`FixedVector::at`], [`FixedVector::erase`], [`FixedVector::erase_range`],
//!   [`FixedVector::resize`], [`FixedVector::insert_n`],
//!   [`FixedVector::insert_iter`] and friends return [`Error::Full`] or
//!   [`Error::OutOfBounds`].
//!
//! Indexing (`v[i]`, `v[a..b]`), [`FixedVector::drain`] with an invalid range
//! and cursor arithmetic that leaves `[0, len]` **panic**, exactly like slices.
//!
//! Element operations (`Clone`, `Drop`, user closures) may panic. The vector
//! stays structurally sound when they do: no slot is read before it is
//! constructed and none is dropped twice, though elements may be leaked.
//!
//! ## Cursors
//!
//! [`Cursor`] is a random-access position over the live region, ordered and
//! offset like an index. It borrows the vector, so it can never observe a slot
//! that changed state after the cursor was created. [`CursorMut`] holds the
//! vector exclusively and can insert or remove at its own position.
//!
//! ## Features
//!
//! - `serde`
//!   - Enables `Serialize` / `Deserialize` for `FixedVector<T, N>`.
//!   - Deserializing more than `N` elements is an error.
//!
//! ## Example
//!
//! ```rust
//! use fixed_vector::{FixedVector, fixed_vector};
//!
//! let mut v: FixedVector<String, 4> = FixedVector::new();
//! v.push("a".to_string()).unwrap();
//! v.push("c".to_string()).unwrap();
//! v.insert(1, "b".to_string()).unwrap();
//! assert_eq!(v, ["a", "b", "c"].map(String::from));
//!
//! let w: FixedVector<u8, 5> = fixed_vector![1, 2, 3];
//! assert_eq!(w.len(), 3);
//! assert!(w.has_space());
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
extern crate alloc;

// Modules
mod cursor;
mod error;
mod index;
mod iter;
mod macros;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod test_util;
mod vec;

// Public exports (crate API surface)
pub use cursor::{Cursor, CursorMut};
pub use error::{Error, Rejected};
pub use iter::IntoIter;
pub use vec::{Drain, FixedVector};

// The buffer adds exactly one `usize` of bookkeeping.
static_assertions::assert_eq_size!(FixedVector<u8, 0>, usize);
static_assertions::assert_eq_size!(FixedVector<u64, 4>, [u64; 5]);
static_assertions::assert_impl_all!(FixedVector<u32, 8>: Send, Sync, Clone, Default, Eq);
static_assertions::assert_not_impl_any!(FixedVector<u32, 8>: Copy);
static_assertions::assert_impl_all!(Error: Copy, core::error::Error);
