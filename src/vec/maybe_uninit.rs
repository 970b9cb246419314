// Invariants for the `unsafe-maybe-uninit` backend:
// - `buf.len()` is the capacity and is never 0.
// - `0 <= len <= buf.len()` always holds.
// - Elements in `buf[..len]` are initialized `T` values, owned by the sequence.
// - Elements in `buf[len..]` are logically uninitialized and must never be
//   read as `T`.
// - All public methods maintain these invariants.

mod clear;
mod clone;
mod concat;
mod drop;
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

// Core imports
use core::mem::MaybeUninit;

/// Allocates `n` uninitialized slots.
fn uninit_slots<T>(n: usize) -> Box<[MaybeUninit<T>]> {
    Box::<[T]>::new_uninit_slice(n)
}
