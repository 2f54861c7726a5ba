//! Wraparound-aware bulk primitives over a ring buffer.
//!
//! Positions taken by these functions are physical offsets into the buffer;
//! transfers that cross the end of a buffer continue at offset 0.

pub mod clear;
pub mod copy;
pub mod shift;

pub use self::clear::clear_range;
pub use self::copy::{clone_between, fill_from, move_between};
pub use self::shift::self_shift;
