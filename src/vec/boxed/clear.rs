// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Super imports
use super::default_slots;

impl<T: Default> GrowableSequence<T> {
    /// Drops every element and replaces the buffer with a fresh one of the
    /// **same** capacity. `len` becomes 0.
    ///
    /// Capacity is kept so that clear-and-refill loops do not regrow.
    pub fn clear(&mut self) {
        let capacity = self.capacity();
        trace!("clearing sequence: {} live, keeping {} slots", self.len, capacity);
        self.len = 0;
        self.buf = default_slots(capacity);
    }
}
