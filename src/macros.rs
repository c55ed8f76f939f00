// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

/// Creates a [`FixedVector`](crate::FixedVector) holding the given elements.
///
/// - `fixed_vector![a, b, c]` pushes each element in order.
/// - `fixed_vector![x; n]` holds `n` clones of `x`.
/// - `fixed_vector![]` is empty.
///
/// The capacity comes from the surrounding type annotation.
///
/// # Panics
///
/// Panics if the elements do not fit in the capacity. Use
/// [`FixedVector::try_from_iter`](crate::FixedVector::try_from_iter) or
/// [`FixedVector::from_elem`](crate::FixedVector::from_elem) to handle that
/// case as an error instead.
///
/// # Examples
/// ```
/// # use fixed_vector::{FixedVector, fixed_vector};
/// let v: FixedVector<i32, 4> = fixed_vector![1, 2, 3];
/// assert_eq!(v, [1, 2, 3]);
///
/// let zeros: FixedVector<u8, 8> = fixed_vector![0; 5];
/// assert_eq!(zeros.len(), 5);
/// ```
#[macro_export]
macro_rules! fixed_vector {
    () => {
        $crate::FixedVector::new()
    };
    ($elem:expr; $n:expr) => {
        match $crate::FixedVector::from_elem($n, $elem) {
            ::core::result::Result::Ok(v) => v,
            ::core::result::Result::Err(e) => ::core::panic!("fixed_vector!: {}", e),
        }
    };
    ($($x:expr),+ $(,)?) => {{
        let mut v = $crate::FixedVector::new();
        $(
            if let ::core::result::Result::Err(r) = v.push($x) {
                ::core::panic!("fixed_vector!: {}", r.error());
            }
        )+
        v
    }};
}
