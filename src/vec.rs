// This file is part of growable-seq.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `GrowableSequence` type and its backend-independent API.
//!
//! `GrowableSequence<T>` owns a heap buffer of `capacity` slots and a logical
//! length. Storage-specific operations (allocation, growth, shifting, drop) live
//! in the backend module selected by the `unsafe-maybe-uninit` feature; this
//! module holds everything expressed over the initialized prefix.

#[cfg(not(feature = "unsafe-maybe-uninit"))]
mod boxed;
#[cfg(feature = "unsafe-maybe-uninit")]
mod maybe_uninit;

// Crate imports
use crate::error::Error;

// Alloc imports
use alloc::{
    boxed::Box,
    string::{String, ToString},
};

// Core imports
use core::{
    fmt,
    hash::{Hash, Hasher},
};

/// A growable, heap-allocated sequence with bounds-checked positional access.
///
/// `GrowableSequence<T>` stores its elements in an exclusively owned buffer of
/// `capacity` slots and tracks a logical length `len ∈ 0..=capacity`:
///
/// - a fresh sequence has [`DEFAULT_CAPACITY`](Self::DEFAULT_CAPACITY) slots;
/// - a push into a full buffer reallocates to twice the capacity;
/// - capacity is always at least 1 and never shrinks implicitly;
/// - cloning is a deep copy into a new buffer of the same capacity.
///
/// # Layout and invariants
///
/// Internally, `GrowableSequence<T>` maintains:
///
/// - a boxed slice of `capacity` slots (`Box<[T]>` or
///   `Box<[MaybeUninit<T>]>`, depending on the backend); and
/// - a logical length `len` with `0 <= len <= capacity`.
///
/// Only the prefix `buf[..len]` is visible through [`as_slice`](Self::as_slice),
/// [`as_mut_slice`](Self::as_mut_slice), indexing and the accessors.
///
/// # Complexity characteristics
///
/// - [`push`](Self::push) is amortized `O(1)`; a reallocation is `O(len)`.
/// - [`insert`](Self::insert) and [`remove`](Self::remove) are `O(len - index)`.
/// - [`clear`](Self::clear) is `O(len)` for dropping plus one allocation of
///   the *current* capacity.
/// - [`concat`](Self::concat) allocates `self.capacity() + other.capacity()`
///   slots up front, which over-allocates whenever either operand has spare
///   slots. Call [`shrink_to_fit`](Self::shrink_to_fit) afterwards if a tight
///   buffer matters.
///
/// # Fallible vs panicking access
///
/// - [`insert`](Self::insert), [`remove`](Self::remove),
///   [`try_get`](Self::try_get) and [`try_get_mut`](Self::try_get_mut) return
///   [`Error::InvalidIndex`] on a bad position and leave the sequence unchanged.
/// - [`get`](Self::get) and [`get_mut`](Self::get_mut) return `None`.
/// - `s[i]` panics, exactly like slice indexing.
///
/// # Element bounds
///
/// - In the **default backend**, operations that allocate slots
///   (`new`, `with_capacity`, `push`, `insert`, `clear`, `concat`, `Clone`,
///   `From`) require `T: Default`, because every slot of a `Box<[T]>` holds a
///   real value.
/// - With `unsafe-maybe-uninit`, no `Default` bound is needed.
///
/// # Examples
///
/// ```rust
/// use growable_seq::GrowableSequence;
///
/// let mut s: GrowableSequence<u32> = GrowableSequence::new();
/// assert_eq!(s.capacity(), GrowableSequence::<u32>::DEFAULT_CAPACITY);
/// for i in 0..11 {
///     s.push(i);
/// }
/// assert_eq!(s.len(), 11);
/// assert_eq!(s.capacity(), 20);
///
/// *s.try_get_mut(0).unwrap() = 100;
/// assert_eq!(s[0], 100);
/// ```
#[cfg(not(feature = "unsafe-maybe-uninit"))]
pub struct GrowableSequence<T> {
    pub(crate) buf: Box<[T]>,
    pub(crate) len: usize,
}
#[cfg(feature = "unsafe-maybe-uninit")]
pub struct GrowableSequence<T> {
    pub(crate) buf: Box<[core::mem::MaybeUninit<T>]>,
    pub(crate) len: usize,
}

/// Capacity after one growth step: doubled, and at least one slot.
#[inline]
pub(crate) const fn grown_capacity(capacity: usize) -> usize {
    let doubled = capacity.saturating_mul(2);
    if doubled == 0 { 1 } else { doubled }
}

impl<T> GrowableSequence<T> {
    /// Number of slots allocated by [`new`](Self::new) and [`Default::default`].
    pub const DEFAULT_CAPACITY: usize = 10;

    /// Returns the number of allocated slots (always `>= 1`).
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Fallible variant of [`get`](Self::get), returning [`Error::InvalidIndex`]
    /// when `i >= len`.
    #[inline]
    pub fn try_get(&self, i: usize) -> Result<&T, Error> {
        self.get(i).ok_or(Error::InvalidIndex)
    }

    /// Fallible variant of [`get_mut`](Self::get_mut), returning
    /// [`Error::InvalidIndex`] when `i >= len`.
    ///
    /// The reference points into the stored slot; writes through it change the
    /// sequence in place.
    #[inline]
    pub fn try_get_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.get_mut(i).ok_or(Error::InvalidIndex)
    }

    /// Replaces the contents of `self` with a deep copy of `other`, adopting its
    /// capacity, and returns `self` for chaining.
    ///
    /// The replacement buffer is fully built before the current one is
    /// released, so a panicking `Clone` leaves `self` untouched.
    #[inline]
    pub fn assign(&mut self, other: &Self) -> &mut Self
    where
        Self: Clone,
    {
        self.clone_from(other);
        self
    }

    /// Renders the elements and the size/capacity summary as a diagnostic string.
    ///
    /// Same output as the [`Display`](fmt::Display) impl, e.g.
    /// `"1 2 3  size: 3 cap: 10"`. Not meant to be parsed.
    pub fn render(&self) -> String
    where
        T: fmt::Display,
    {
        self.to_string()
    }
}

impl<T: fmt::Display> fmt::Display for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in self.as_slice() {
            write!(f, "{item} ")?;
        }
        write!(f, " size: {} cap: {}", self.len, self.capacity())
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableSequence")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

// Comparisons and hashing look at the elements only, never at capacity.
impl<T: PartialEq> PartialEq for GrowableSequence<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for GrowableSequence<T> {}
impl<T: Ord> Ord for GrowableSequence<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for GrowableSequence<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for GrowableSequence<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}
