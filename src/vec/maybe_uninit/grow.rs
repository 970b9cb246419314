// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{GrowableSequence, grown_capacity};

// Super imports
use super::uninit_slots;

// Core imports
use core::ptr;

impl<T> GrowableSequence<T> {
    /// Doubles the capacity, keeping every element in place.
    #[inline]
    pub(crate) fn grow(&mut self) {
        self.reallocate(grown_capacity(self.capacity()));
    }

    /// Moves the elements into a fresh buffer of `new_capacity` slots.
    pub(crate) fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.len && new_capacity > 0);
        trace!(
            "reallocating sequence: {} -> {} slots, {} live",
            self.capacity(),
            new_capacity,
            self.len
        );

        let mut buf = uninit_slots::<T>(new_capacity);
        unsafe {
            // SAFETY: Both buffers have at least `len` slots and are distinct
            // allocations. The first `len` source slots are initialized by
            // invariant. After the copy the old buffer is dropped as
            // `MaybeUninit`, which never drops its contents, so each element
            // keeps exactly one owner.
            ptr::copy_nonoverlapping(self.buf.as_ptr(), buf.as_mut_ptr(), self.len);
        }
        self.buf = buf;
    }
}
