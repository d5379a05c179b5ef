//! Linear puzzle harness: settings, logging, node persistence, and run
//! orchestration around the generic search engine.
//!
//! The harness does not implement search. It builds the puzzle problem from
//! validated settings, hands it to `linpuzzle-search` with a node log as the
//! persistence hook, and reports the outcome.

#![forbid(unsafe_code)]

pub mod config;
pub mod digest;
pub mod logging;
pub mod node_log;
pub mod prompt;
pub mod runner;
pub mod worlds;
