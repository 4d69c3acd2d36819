//! Bounded-capacity unsigned big-integer arithmetic.
//!
//! The [`LargeUInt`] struct is the root of the API of this crate: a
//! nonnegative integer of at most [`MAX_BYTES`] little-endian bytes, with a
//! canonical text encoding and in-place arithmetic.

pub mod codec;

mod arith;
mod div;
mod mul;
mod sqrt;
mod uint;

pub use uint::*;
