// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::{Error, Rejected},
    vec::FixedVector,
};

impl<T, const N: usize> FixedVector<T, N> {
    /// Converts to `[T; N]` when **full** (`len == N`).
    ///
    /// Otherwise returns [`Error::InvalidLen`] together with the vector,
    /// unchanged. The elements are moved, never cloned.
    #[inline]
    pub fn try_into_array(self) -> Result<[T; N], Rejected<Self>> {
        if self.len != N {
            return Err(Rejected::new(Error::InvalidLen, self));
        }
        // SAFETY: `len == N` was checked above.
        Ok(unsafe { self.into_array_unchecked() })
    }
}

impl<T, const N: usize> TryFrom<FixedVector<T, N>> for [T; N] {
    type Error = Rejected<FixedVector<T, N>>;
    fn try_from(v: FixedVector<T, N>) -> Result<Self, Self::Error> {
        v.try_into_array()
    }
}
