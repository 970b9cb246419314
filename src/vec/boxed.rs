// Invariants for the default (safe) backend:
// - `buf.len()` is the capacity and is never 0.
// - `0 <= len <= buf.len()` always holds.
// - `buf[..len]` are the elements; `buf[len..]` hold `T::default()` values
//   and are never observable through the public API.

mod clear;
mod clone;
mod concat;
mod from;
mod grow;
mod insert;
mod new;
mod push;
mod remove;
mod shrink;
mod slice;

// Alloc imports
use alloc::boxed::Box;

/// Allocates `n` slots, each holding `T::default()`.
fn default_slots<T: Default>(n: usize) -> Box<[T]> {
    core::iter::repeat_with(T::default).take(n).collect()
}
