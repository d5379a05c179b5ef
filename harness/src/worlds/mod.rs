//! World implementations for the harness runner.

pub mod linear_puzzle;
