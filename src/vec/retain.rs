// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::FixedVector;

impl<T, const N: usize> FixedVector<T, N> {
    /// Retains only the elements specified by the predicate `f`, preserving order.
    ///
    /// The predicate is applied to each element in iteration order. Kept
    /// elements are swapped forward into place; rejected ones collect at the
    /// tail and are dropped together at the end. If `f` panics every element
    /// is still owned by the vector.
    pub fn retain<F: FnMut(&mut T) -> bool>(&mut self, mut f: F) {
        let mut kept = 0;
        let slice = self.as_mut_slice();
        for read in 0..slice.len() {
            if f(&mut slice[read]) {
                if kept != read {
                    slice.swap(kept, read);
                }
                kept += 1;
            }
        }
        self.truncate(kept);
    }
}
