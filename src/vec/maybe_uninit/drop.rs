// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

// Core imports
use core::ptr;

impl<T> Drop for GrowableSequence<T> {
    fn drop(&mut self) {
        unsafe {
            // SAFETY: `buf[..len]` holds initialized values owned by `self`; they
            // are dropped exactly once here. The `Box<[MaybeUninit<T>]>` then frees
            // the allocation without touching the slots again.
            ptr::drop_in_place(self.as_mut_slice());
        }
    }
}
