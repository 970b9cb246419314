// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

impl<T> GrowableSequence<T> {
    /// Appends `value` at position `len`, doubling the capacity first if the
    /// buffer is full.
    #[inline]
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }

        self.buf[self.len].write(value);

        self.len += 1;
    }
}
