//! Carrier module: the puzzle state representation.
//!
//! Depends on nothing internal.

pub mod linear_state;
