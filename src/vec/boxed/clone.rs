// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

impl<T: Clone + Default> Clone for GrowableSequence<T> {
    /// Deep copy: a new buffer of the same capacity holding clones of every element.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        for item in self.as_slice() {
            out.push(item.clone());
        }
        out
    }

    fn clone_from(&mut self, source: &Self) {
        // Build the replacement before the current buffer is released.
        let replacement = source.clone();
        *self = replacement;
    }
}
