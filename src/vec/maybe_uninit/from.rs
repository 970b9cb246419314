// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::GrowableSequence;

impl<T: Clone> From<&[T]> for GrowableSequence<T> {
    /// Clones `src` into a sequence with `max(DEFAULT_CAPACITY, src.len())` slots.
    fn from(src: &[T]) -> Self {
        let mut out = Self::with_capacity(src.len().max(Self::DEFAULT_CAPACITY));
        for item in src {
            out.push(item.clone());
        }
        out
    }
}

impl<T, const M: usize> From<[T; M]> for GrowableSequence<T> {
    fn from(src: [T; M]) -> Self {
        let mut out = Self::with_capacity(M.max(Self::DEFAULT_CAPACITY));
        for item in src {
            out.push(item);
        }
        out
    }
}
