// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowableSequence};

// Core imports
use core::ptr;

impl<T> GrowableSequence<T> {
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

        let out = unsafe {
            // SAFETY: `index < len`, so `buf[index]` is initialized and reading it
            // moves the value out. The tail `[index+1..len)` is initialized and is
            // shifted down over the vacated slot; `ptr::copy` handles the overlap.
            // Slot `len - 1` becomes logically uninitialized once `len` drops.
            let p = self.buf.as_mut_ptr().cast::<T>().add(index);
            let out = ptr::read(p);
            ptr::copy(p.add(1), p, len - index - 1);
            out
        };

        self.len = len - 1;
        Ok(out)
    }
}
