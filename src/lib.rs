// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `growable-seq`
//!
//! A `no_std` (with `alloc`), heap-backed, growable sequence with
//! bounds-checked positional access and deep-copy value semantics,
//! **with no `unsafe` by default**.
//!
//! The core type, [`GrowableSequence<T>`], owns a contiguous buffer of
//! `capacity` slots and tracks a logical length `len ∈ 0..=capacity`. Only the
//! prefix `[0..len)` holds live elements.
//!
//! ## Growth and capacity
//!
//! - A new sequence starts with [`GrowableSequence::DEFAULT_CAPACITY`] (10) slots.
//! - When a push (direct, through [`insert`](GrowableSequence::insert), or
//!   through [`concat`](GrowableSequence::concat)) finds the buffer full, the
//!   buffer is reallocated with **twice** the capacity and the existing
//!   elements are moved over in order. Appends are amortized `O(1)`.
//! - Capacity never shrinks on its own. [`clear`](GrowableSequence::clear)
//!   keeps the current capacity; only
//!   [`shrink_to_fit`](GrowableSequence::shrink_to_fit) reduces it.
//! - [`concat`](GrowableSequence::concat) sizes its result by the *capacities*
//!   of both operands, not their lengths.
//!
//! ## Errors
//!
//! Positional operations that can miss ([`insert`](GrowableSequence::insert),
//! [`remove`](GrowableSequence::remove),
//! [`try_get`](GrowableSequence::try_get),
//! [`try_get_mut`](GrowableSequence::try_get_mut)) return
//! [`Error::InvalidIndex`] and leave the sequence untouched. Plain indexing
//! (`s[i]`) panics like a slice does.
//!
//! ## Backends and safety
//!
//! Two internal backends are selected by the `unsafe-maybe-uninit`
//! feature flag:
//!
//! - **Default backend (safe)**:
//!   - Storage is `Box<[T]>`.
//!   - The crate is `#![forbid(unsafe_code)]`.
//!   - Every slot holds a real `T`, so unused slots are filled with
//!     `T::default()`. Constructors and growth require `T: Default`.
//!
//! - **`unsafe-maybe-uninit` backend**:
//!   - Storage is `Box<[core::mem::MaybeUninit<T>]>`.
//!   - A small amount of internal `unsafe` treats only `[0..len)` as
//!     initialized; the `T: Default` requirement disappears.
//!
//! In both backends the **public API is fully safe**.
//!
//! ## Features
//!
//! - `unsafe-maybe-uninit`: see above.
//! - `log`: emits a `trace`-level record through the `log` facade on every
//!   reallocation (growth, clear, shrink).
//!
//! ## Example
//!
//! ```rust
//! use growable_seq::{Error, GrowableSequence};
//!
//! let mut s: GrowableSequence<i32> = GrowableSequence::new();
//! s.push(1);
//! s.push(2);
//! s.push(3);
//! s.insert(1, 99).unwrap();
//! assert_eq!(s.as_slice(), &[1, 99, 2, 3]);
//!
//! assert_eq!(s.remove(0), Ok(1));
//! assert_eq!(s.try_get(7), Err(Error::InvalidIndex));
//!
//! let tail: GrowableSequence<i32> = GrowableSequence::from(&[7, 8][..]);
//! let joined = s.concat(&tail);
//! assert_eq!(joined.as_slice(), &[99, 2, 3, 7, 8]);
//! assert_eq!(joined.to_string(), "99 2 3 7 8  size: 5 cap: 20");
//! ```

#![cfg_attr(not(feature = "unsafe-maybe-uninit"), forbid(unsafe_code))]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Emits a trace record when the `log` feature is on; expands to nothing otherwise.
macro_rules! trace {
    ($($arg:tt)+) => {{
        #[cfg(feature = "log")]
        {
            log::trace!($($arg)+);
        }
    }};
}

// Modules
mod error;
mod index;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use vec::GrowableSequence;
