// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowableSequence};

// Core imports
use core::mem;

impl<T: Default> GrowableSequence<T> {
    /// Removes and returns the element at `index`, shifting `[index+1..len)`
    /// one slot to the left.
    ///
    /// Returns [`Error::InvalidIndex`] if `index >= len`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::InvalidIndex);
        }
        let len = self.len;

        // Rotate the removed element to the end of the prefix, then take it.
        self.buf[index..len].rotate_left(1);
        self.len = len - 1;
        Ok(mem::take(&mut self.buf[len - 1]))
    }
}
