// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`GrowableSequence`](crate::GrowableSequence).
//!
//! `s[i]` mirrors slice indexing: it panics when `i >= len`, and the view is
//! restricted to the initialized prefix `[0..len)`. Use
//! [`try_get`](crate::GrowableSequence::try_get) for a non-panicking lookup.

// Crate imports
use crate::vec::GrowableSequence;

// Core imports
use core::ops::{Index, IndexMut};

impl<T> Index<usize> for GrowableSequence<T> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.as_slice()[i]
    }
}

impl<T> IndexMut<usize> for GrowableSequence<T> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[i]
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::GrowableSequence;

    #[test]
    fn test_index_reads_and_writes_in_place() {
        let mut s: GrowableSequence<i32> = GrowableSequence::from(&[1, 2, 3, 4][..]);
        assert_eq!(s[0], 1);
        assert_eq!(s[3], 4);

        s[1] = 10;
        s[3] += 36;
        assert_eq!(s.as_slice(), &[1, 10, 3, 40]);
    }

    #[test]
    #[should_panic]
    fn test_oob_panics() {
        let s: GrowableSequence<i32> = GrowableSequence::new();
        let _ = s[0];
    }

    #[test]
    #[should_panic]
    fn test_index_past_len_within_capacity_panics() {
        // Slot 2 is allocated but not part of the sequence.
        let s: GrowableSequence<i32> = GrowableSequence::from(&[1, 2][..]);
        assert!(s.capacity() > 2);
        let _ = s[2];
    }

    #[test]
    #[should_panic]
    fn test_index_mut_oob_panics() {
        let mut s: GrowableSequence<i32> = GrowableSequence::from(&[1][..]);
        s[1] = 5;
    }
}
