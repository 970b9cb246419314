// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

impl<T: Default> GrowableSequence<T> {
    /// Reallocates to exactly `max(len, 1)` slots. No-op if already that tight.
    pub fn shrink_to_fit(&mut self) {
        let target = self.len.max(1);
        if target < self.capacity() {
            self.reallocate(target);
        }
    }
}
