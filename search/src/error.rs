//! Typed search errors.
//!
//! `SearchError` covers structural failures only. "No solution" is not an
//! error: it is [`crate::search::TerminationReason::FrontierExhausted`],
//! returned inside an `Ok` result.

use crate::node::NodeId;
use crate::sink::SinkError;

/// Structural failure that stops a search run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// A node was built from a state that failed its structural check, or
    /// with inconsistent provenance (parent without operator, or the reverse).
    #[error("invalid state: {detail}")]
    InvalidState { detail: String },
    /// A node's auxiliary info does not match the problem's info layout.
    #[error("auxiliary info type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },
    /// `select_node` was called on an empty frontier.
    #[error("frontier is empty")]
    EmptyFrontier,
    /// A parent identifier could not be resolved in the search tree.
    #[error("node {node} references parent {parent}, which is not in the tree")]
    DanglingParentReference { node: NodeId, parent: NodeId },
    /// Following parent links from `node` never reached a root.
    #[error("parent chain from node {node} does not reach a root")]
    ParentCycle { node: NodeId },
    /// The persistence hook failed.
    #[error(transparent)]
    Sink(#[from] SinkError),
}
