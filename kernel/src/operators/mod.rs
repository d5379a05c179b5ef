//! Operators module: the state-permuting moves.
//!
//! Depends on `carrier`.

pub mod swap;
