// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`FixedVector`](crate::FixedVector).
//!
//! - **Serialize**: as a sequence of the `len` live elements.
//! - **Deserialize**: from any sequence of at most `N` elements. Elements are
//!   written straight into empty slots as they arrive, so `T` needs neither
//!   `Default` nor `Clone`. A longer sequence is an error; the elements read
//!   so far are dropped.

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{Deserialize, Deserializer, Serialize, Serializer, de, ser};

impl<T: Serialize, const N: usize> Serialize for FixedVector<T, N> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct VecVisitor<T, const N: usize>(PhantomData<T>);

impl<'de, T, const N: usize> de::Visitor<'de> for VecVisitor<T, N>
where
    T: Deserialize<'de>,
{
    type Value = FixedVector<T, N>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "array or sequence with at most {} elements", N)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        if let Some(hint) = a.size_hint() {
            if hint > N {
                return Err(de::Error::invalid_length(hint, &self));
            }
        }
        let mut out = FixedVector::<T, N>::new();
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem)
                .map_err(|_| de::Error::custom(format_args!("too many elements (capacity {N})")))?;
        }
        Ok(out)
    }
}

impl<'de, T, const N: usize> Deserialize<'de> for FixedVector<T, N>
where
    T: Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(VecVisitor::<T, N>(PhantomData))
    }
}
