// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::GrowableSequence};

// Core imports
use core::ptr;

impl<T> GrowableSequence<T> {
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

        unsafe {
            // SAFETY: `index <= len < buf.len()` after the growth check, so both
            // `[index..len)` and `[index+1..len+1)` lie inside the buffer.
            // `ptr::copy` handles the overlap. Slot `index` is then overwritten
            // without being dropped, as its old value now lives at `index + 1`.
            let p = self.buf.as_mut_ptr().cast::<T>().add(index);
            ptr::copy(p, p.add(1), len - index);
            ptr::write(p, value);
        }

        self.len = len + 1;
        Ok(())
    }
}
