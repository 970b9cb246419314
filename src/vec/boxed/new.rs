// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Super imports
use super::default_slots;

impl<T: Default> GrowableSequence<T> {
    /// Constructs an empty sequence with [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Constructs an empty sequence with room for `capacity` elements.
    ///
    /// A request for zero slots is rounded up to one.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: default_slots(capacity.max(1)),
            len: 0,
        }
    }
}

impl<T: Default> Default for GrowableSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}
