//! Linear Puzzle Search: a generic, strategy-parameterized tree search engine.
//!
//! Given a [`problem::Problem`] (operators, auxiliary-info policy, initial
//! state, goal test) the engine explores a tree of reachable states and
//! returns the sequence of operator names that leads to a goal, or reports
//! that the frontier was exhausted.
//!
//! This crate depends on no other workspace crate. Domain crates implement
//! [`node::SearchState`] and [`problem::Operator`] for their own types.
//!
//! # Crate dependency graph
//!
//! ```text
//! linpuzzle_search  ←  linpuzzle_kernel  ←  linpuzzle_harness
//! (generic engine)     (puzzle state)       (settings, node log, CLI)
//! ```
//!
//! # Key types
//!
//! - [`node::Node`]: immutable record of one explored state and its provenance
//! - [`problem::Problem`]: operator set, info policy, initial state, goal test
//! - [`tree::SearchTree`]: frontier + closed set
//! - [`strategy::FrontierStrategy`]: how new nodes merge into the frontier
//! - [`sink::NodeSink`]: persistence hook for generated nodes
//! - [`search::run_search`]: the search driver

#![forbid(unsafe_code)]

pub mod error;
pub mod expand;
pub mod node;
pub mod path;
pub mod policy;
pub mod problem;
pub mod search;
pub mod sink;
pub mod strategy;
pub mod tree;
