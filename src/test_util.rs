// This file is part of fixed-vector.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Drop accounting for lifetime tests.
//!
//! A [`Tracker`] hands out [`Tracked`] values. Each one bumps the live count
//! when it is created or cloned and decrements it when dropped; dropping the
//! same value twice trips an assertion.

// Std imports
use alloc::rc::Rc;
use core::cell::Cell;

#[derive(Default)]
struct Counts {
    live: Cell<usize>,
    dropped: Cell<usize>,
}

#[derive(Clone, Default)]
pub(crate) struct Tracker(Rc<Counts>);

impl Tracker {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn make(&self, id: i32) -> Tracked {
        self.0.live.set(self.0.live.get() + 1);
        Tracked {
            id,
            alive: true,
            counts: Rc::clone(&self.0),
        }
    }

    /// Elements constructed and not yet dropped.
    pub(crate) fn live(&self) -> usize {
        self.0.live.get()
    }

    pub(crate) fn dropped(&self) -> usize {
        self.0.dropped.get()
    }
}

#[derive(Debug)]
pub(crate) struct Tracked {
    pub(crate) id: i32,
    alive: bool,
    counts: Rc<Counts>,
}

impl core::fmt::Debug for Counts {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Counts")
            .field("live", &self.live.get())
            .finish()
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        self.counts.live.set(self.counts.live.get() + 1);
        Self {
            id: self.id,
            alive: true,
            counts: Rc::clone(&self.counts),
        }
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        assert!(self.alive, "element {} dropped twice", self.id);
        self.alive = false;
        self.counts.live.set(self.counts.live.get() - 1);
        self.counts.dropped.set(self.counts.dropped.get() + 1);
    }
}

/// Collects the ids of a slice of tracked values.
pub(crate) fn ids(items: &[Tracked]) -> alloc::vec::Vec<i32> {
    items.iter().map(|t| t.id).collect()
}
