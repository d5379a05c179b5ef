//! Linear puzzle kernel: the domain carrier for the calibration puzzle.
//!
//! # API Surface
//!
//! - [`carrier::linear_state::LinearState`] -- a validated arrangement of the
//!   four symbols `1..=4`
//! - [`operators::swap::Swap`] -- the three adjacent-swap moves
//!
//! # Module Dependency Direction
//!
//! `carrier` ← `operators`
//!
//! The kernel knows nothing about search strategy. It implements the
//! engine's `SearchState` contract for [`carrier::linear_state::LinearState`];
//! the harness builds problems from the two.

#![forbid(unsafe_code)]

pub mod carrier;
pub mod operators;
