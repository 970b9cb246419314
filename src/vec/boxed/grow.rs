// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::{GrowableSequence, grown_capacity};

// Super imports
use super::default_slots;

// Core imports
use core::mem;

impl<T: Default> GrowableSequence<T> {
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

        let mut buf = default_slots(new_capacity);
        // Swap rather than clone: the old buffer is dropped right after and
        // only receives defaults in exchange.
        for (dst, src) in buf.iter_mut().zip(self.as_mut_slice()) {
            mem::swap(dst, src);
        }
        self.buf = buf;
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::GrowableSequence;

    #[test]
    fn test_grow_preserves_len_and_elements() {
        let mut s: GrowableSequence<u16> = GrowableSequence::with_capacity(2);
        s.push(11);
        s.push(22);
        s.grow();
        assert_eq!(s.capacity(), 4);
        assert_eq!(s.len(), 2);
        assert_eq!(s.as_slice(), &[11, 22]);
    }

    #[test]
    fn test_spare_slots_hold_defaults() {
        let mut s: GrowableSequence<u8> = GrowableSequence::with_capacity(1);
        s.push(7);
        s.push(8);
        s.push(9);
        assert_eq!(&s.buf[..], &[7, 8, 9, 0]);
    }
}
