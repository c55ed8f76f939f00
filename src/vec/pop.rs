// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVector;

impl<T, const N: usize> FixedVector<T, N> {
    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: before the decrement `buf[self.len]` was the last live slot;
        // it is now detached and read out exactly once.
        Some(unsafe { self.take_slot(self.len) })
    }
}
