// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::GrowableSequence;

impl<T: Clone> Clone for GrowableSequence<T> {
    /// Deep copy: a new buffer of the same capacity holding clones of every element.
    ///
    /// If an element's `clone` panics, the partially built copy drops only the
    /// elements it already received.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        for item in self.as_slice() {
            out.push(item.clone());
        }
        out
    }

    fn clone_from(&mut self, source: &Self) {
        // Build the replacement before the current buffer is released.
        let replacement = source.clone();
        *self = replacement;
    }
}

#[cfg(test)]
mod tests {
    use crate::vec::GrowableSequence;

    // NOTE: NoDefault does NOT implement Default on purpose.
    #[derive(Clone, PartialEq, Eq, Debug)]
    struct NoDefault(u8);

    #[test]
    fn test_clone_non_default_type_in_maybe_uninit_backend() {
        let mut s: GrowableSequence<NoDefault> = GrowableSequence::new();
        s.push(NoDefault(1));
        s.push(NoDefault(2));
        let mut c = s.clone();
        c.push(NoDefault(3));
        assert_eq!(s.as_slice(), &[NoDefault(1), NoDefault(2)]);
        assert_eq!(c.as_slice(), &[NoDefault(1), NoDefault(2), NoDefault(3)]);
        assert_eq!(c.capacity(), s.capacity());

        let joined = s.concat(&c);
        assert_eq!(joined.len(), 5);
        assert_eq!(joined.capacity(), 20);
    }
}
