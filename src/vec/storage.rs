// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Slot lifetime rules:
// - `0 <= len <= N` always holds.
// - `buf[..len]` are initialized `T` values (live).
// - `buf[len..N]` are logically uninitialized (empty) and must never be read
//   as `T`.
// - `construct`, `destroy` and `take_slot` only touch slots at or past `len`.
//   Growing writes the slot first and bumps `len` after; shrinking lowers
//   `len` first and then destroys or reads out the slot. A panic in between
//   can leak an element but never exposes an empty slot as live.
// - Every typed view is re-derived from `buf` on each call; nothing caches a
//   `*const T` across a mutation.

// Crate imports
use crate::vec::FixedVector;

// Core imports
use core::{
    mem::{self, ManuallyDrop},
    ptr::{self, NonNull},
    slice,
};

impl<T, const N: usize> FixedVector<T, N> {
    /// Writes `value` into the empty slot `i`. Does not change `len`.
    ///
    /// # Safety
    ///
    /// `self.len <= i < N`: the slot must not hold a live element.
    #[inline]
    pub(crate) unsafe fn construct(&mut self, i: usize, value: T) {
        debug_assert!(self.len <= i && i < N, "construct into live slot {i}");
        self.buf[i].write(value);
    }

    /// Runs `T`'s destructor on slot `i` in place.
    ///
    /// # Safety
    ///
    /// Slot `i` holds an initialized `T` that is no longer counted by `len`
    /// (`self.len <= i < N`) and is never read or destroyed again.
    #[inline]
    pub(crate) unsafe fn destroy(&mut self, i: usize) {
        debug_assert!(self.len <= i && i < N, "destroy of counted slot {i}");
        // SAFETY: the caller guarantees slot `i` is initialized and detached.
        unsafe { self.buf[i].assume_init_drop() }
    }

    /// Moves the value out of slot `i`, leaving it empty.
    ///
    /// # Safety
    ///
    /// Same as [`destroy`](Self::destroy).
    #[inline]
    pub(crate) unsafe fn take_slot(&mut self, i: usize) -> T {
        debug_assert!(self.len <= i && i < N, "take of counted slot {i}");
        // SAFETY: the caller guarantees slot `i` is initialized and detached,
        // so reading it out transfers the only copy.
        unsafe { self.buf[i].assume_init_read() }
    }

    /// Borrows the live slot `i`.
    ///
    /// # Safety
    ///
    /// `i < self.len`.
    #[inline]
    pub(crate) unsafe fn slot(&self, i: usize) -> &T {
        debug_assert!(i < self.len, "access to empty slot {i}");
        // SAFETY: slots below `len` are initialized.
        unsafe { self.buf[i].assume_init_ref() }
    }

    /// Mutable variant of [`slot`](Self::slot).
    ///
    /// # Safety
    ///
    /// `i < self.len`.
    #[inline]
    pub(crate) unsafe fn slot_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len, "access to empty slot {i}");
        // SAFETY: slots below `len` are initialized.
        unsafe { self.buf[i].assume_init_mut() }
    }

    /// Borrows the detached but initialized slots `start..end`.
    ///
    /// # Safety
    ///
    /// Every slot in `start..end` holds an initialized `T` and `end <= N`.
    #[inline]
    pub(crate) unsafe fn detached(&self, start: usize, end: usize) -> &[T] {
        debug_assert!(start <= end && end <= N);
        // SAFETY: the caller guarantees the range is in bounds and initialized;
        // `MaybeUninit<T>` has the layout of `T`.
        unsafe { slice::from_raw_parts(self.as_ptr().add(start), end - start) }
    }

    /// Returns the live prefix as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`, so this creates a valid shared slice of initialized `T`.
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Returns the live prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: By invariant, all elements in `buf[..self.len]` are initialized,
        // and `self.len <= N`. We have exclusive access via `&mut self`, so it is
        // sound to create a mutable slice over `buf[..self.len]`.
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), self.len) }
    }

    /// Returns a raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized. Code that dereferences
    /// this pointer must not read from `ptr.add(i)` for any `i >= self.len()`.
    #[inline]
    pub const fn as_ptr(&self) -> *const T {
        self.buf.as_ptr().cast::<T>()
    }

    /// Returns a mutable raw pointer to the start of the backing storage.
    ///
    /// Only the first `len` elements are initialized. Writing past `len` does
    /// **not** update `len`, and overwriting a live element through this
    /// pointer skips its destructor.
    #[inline]
    pub const fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr().cast::<T>()
    }

    /// Returns a pointer to the first live element, or `None` when empty.
    ///
    /// The pointer is derived from a shared borrow and is only valid for
    /// reads of `len()` elements, until the next mutation.
    #[inline]
    pub fn data(&self) -> Option<NonNull<T>> {
        self.as_slice().first().map(NonNull::from)
    }

    /// Mutable variant of [`data`](FixedVector::data).
    #[inline]
    pub fn data_mut(&mut self) -> Option<NonNull<T>> {
        self.as_mut_slice().first_mut().map(NonNull::from)
    }

    /// Forces the length of the vector to `new_len`.
    ///
    /// # Safety
    ///
    /// - `new_len <= N`.
    /// - The slots `old_len..new_len` must be initialized when growing.
    /// - When shrinking, the slots `new_len..old_len` are forgotten, not
    ///   dropped; the caller takes responsibility for them.
    #[inline]
    pub unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= N);
        self.len = new_len;
    }

    /// Pushes `value` without checking the capacity.
    ///
    /// # Safety
    ///
    /// The caller has to ensure that `self.len() < self.capacity()`.
    #[inline]
    #[track_caller]
    pub unsafe fn push_unchecked(&mut self, value: T) -> &mut T {
        let len = self.len;
        debug_assert!(len < N, "push_unchecked on a full FixedVector");
        // SAFETY: `len < N` by the caller's contract, and slot `len` is empty
        // by invariant.
        unsafe { self.construct(len, value) };
        self.len = len + 1;
        // SAFETY: slot `len` was just constructed and is now counted.
        unsafe { self.slot_mut(len) }
    }

    /// Drops the elements past `new_len`, last first. No-op if `new_len >= len`.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        if !mem::needs_drop::<T>() {
            self.len = new_len;
            return;
        }
        while self.len > new_len {
            self.len -= 1;
            // SAFETY: the slot at the old `len - 1` was live and is now
            // detached; it is destroyed exactly once here.
            unsafe { self.destroy(self.len) };
        }
    }

    /// Drops every element, last first, and sets `len = 0`.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends a copy of `src` as a single byte copy.
    ///
    /// # Safety
    ///
    /// `src.len() <= N - self.len`.
    #[inline]
    pub(crate) unsafe fn construct_copied(&mut self, src: &[T])
    where
        T: Copy,
    {
        let len = self.len;
        debug_assert!(src.len() <= N - len);
        // SAFETY: the destination `buf[len..len + src.len()]` is in bounds and
        // empty; `src` cannot overlap it because `&mut self` is exclusive.
        unsafe { ptr::copy_nonoverlapping(src.as_ptr(), self.as_mut_ptr().add(len), src.len()) };
        self.len = len + src.len();
    }

    /// Consumes a full vector and returns its elements as an array.
    ///
    /// # Safety
    ///
    /// `self.len() == N`.
    #[inline]
    pub(crate) unsafe fn into_array_unchecked(self) -> [T; N] {
        debug_assert_eq!(self.len, N);
        let this = ManuallyDrop::new(self);
        // SAFETY: `this` is never dropped, so reading `buf` out moves the only
        // copy of each element.
        let buf = unsafe { ptr::read(&this.buf) };
        // SAFETY: `len == N`, so every slot is initialized.
        buf.map(|slot| unsafe { slot.assume_init() })
    }
}
