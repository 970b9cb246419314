// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Super imports
use super::uninit_slots;

// Core imports
use core::ptr;

impl<T> GrowableSequence<T> {
    /// Drops every element and replaces the buffer with a fresh one of the
    /// **same** capacity. `len` becomes 0.
    ///
    /// Capacity is kept so that clear-and-refill loops do not regrow.
    pub fn clear(&mut self) {
        let capacity = self.capacity();
        trace!("clearing sequence: {} live, keeping {} slots", self.len, capacity);

        let live: *mut [T] = self.as_mut_slice();
        // A panicking element destructor must not lead to a second drop.
        self.len = 0;
        unsafe {
            // SAFETY: `live` covers exactly the formerly initialized prefix, and
            // `len` is already 0 so nothing else will drop these values.
            ptr::drop_in_place(live);
        }
        self.buf = uninit_slots(capacity);
    }
}
