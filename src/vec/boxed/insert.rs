// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowableSequence};

impl<T: Default> GrowableSequence<T> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot to the right.
    ///
    /// `index == len` appends. Returns [`Error::InvalidIndex`] if `index > len`,
    /// before touching the buffer. A full buffer is grown after the check.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::InvalidIndex);
        }
        if self.len == self.capacity() {
            self.grow();
        }
        let len = self.len;

        // Park the value in the first spare slot, then rotate it down into place:
        // [index..len] -> [value, index..len)
        self.buf[len] = value;
        self.buf[index..=len].rotate_right(1);

        self.len = len + 1;
        Ok(())
    }
}
