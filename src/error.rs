// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `GrowableSequence`.
//!
//! Only positional misses are reported. They are `Copy` and implement
//! `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`GrowableSequence`](crate::GrowableSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A position fell outside the range accepted by the operation.
    ///
    /// `insert` accepts `0..=len`; `remove` and element access accept `0..len`.
    InvalidIndex,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIndex => f.write_str("invalid index"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::InvalidIndex);
        assert_eq!(s, "invalid index");
    }
}
