// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Core imports
use core::ops::Add;

impl<T: Clone + Default> GrowableSequence<T> {
    /// Returns a new sequence holding the elements of `self` followed by those
    /// of `other`. Both operands are left unchanged.
    ///
    /// The result starts with `self.capacity() + other.capacity()` slots.
    pub fn concat(&self, other: &Self) -> Self {
        let mut out = Self::with_capacity(self.capacity().saturating_add(other.capacity()));
        for item in self.as_slice().iter().chain(other.as_slice()) {
            out.push(item.clone());
        }
        out
    }
}

impl<T: Clone + Default> Add<&GrowableSequence<T>> for &GrowableSequence<T> {
    type Output = GrowableSequence<T>;

    /// Same as [`GrowableSequence::concat`].
    fn add(self, rhs: &GrowableSequence<T>) -> Self::Output {
        self.concat(rhs)
    }
}
