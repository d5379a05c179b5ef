//! Search node, node identifiers and auxiliary info.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

/// Contract for states the engine can search over.
///
/// The engine only compares states for equality (goal tests) and runs
/// [`SearchState::check`] when a node is constructed.
pub trait SearchState: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Structural validity check.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the state is malformed.
    fn check(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Unique, monotonically assigned node identifier.
///
/// Rendered as `node_<n>` in logs and paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(u64);

impl NodeId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node_{}", self.0)
    }
}

/// Single-owner identifier source.
///
/// The search driver owns one generator per run, so identifier sequences are
/// deterministic: the root of every run is `node_1`.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// A generator whose first identifier is `first`.
    #[must_use]
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Hand out the next identifier.
    pub fn allocate(&mut self) -> NodeId {
        let id = NodeId(self.next);
        self.next += 1;
        id
    }

    /// The identifier the next call to [`IdGenerator::allocate`] will return.
    #[must_use]
    pub fn peek(&self) -> NodeId {
        NodeId(self.next)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Type tag of one auxiliary-info slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoKind {
    /// A copy of a search state.
    State,
    /// A non-negative counter (e.g. depth).
    Count,
}

impl fmt::Display for InfoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::State => f.write_str("state"),
            Self::Count => f.write_str("count"),
        }
    }
}

/// One auxiliary-info value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InfoValue<S> {
    State(S),
    Count(u64),
}

impl<S> InfoValue<S> {
    #[must_use]
    pub fn kind(&self) -> InfoKind {
        match self {
            Self::State(_) => InfoKind::State,
            Self::Count(_) => InfoKind::Count,
        }
    }

    #[must_use]
    pub fn as_count(&self) -> Option<u64> {
        match self {
            Self::Count(n) => Some(*n),
            Self::State(_) => None,
        }
    }

    #[must_use]
    pub fn as_state(&self) -> Option<&S> {
        match self {
            Self::State(s) => Some(s),
            Self::Count(_) => None,
        }
    }
}

/// The fixed length and type layout of auxiliary info for a whole run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoLayout(Vec<InfoKind>);

impl InfoLayout {
    #[must_use]
    pub fn new(kinds: Vec<InfoKind>) -> Self {
        Self(kinds)
    }

    /// The layout with no slots.
    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn kinds(&self) -> &[InfoKind] {
        &self.0
    }

    /// Whether `info` has exactly this layout.
    #[must_use]
    pub fn matches<S>(&self, info: &[InfoValue<S>]) -> bool {
        self.0.len() == info.len() && self.0.iter().zip(info).all(|(k, v)| *k == v.kind())
    }

    /// Check `info` against this layout.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::TypeMismatch`] naming both layouts.
    pub fn check<S>(&self, info: &[InfoValue<S>]) -> Result<(), SearchError> {
        if self.matches(info) {
            return Ok(());
        }
        Err(SearchError::TypeMismatch {
            expected: self.to_string(),
            found: render_kinds(info.iter().map(InfoValue::kind)),
        })
    }
}

impl fmt::Display for InfoLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_kinds(self.0.iter().copied()))
    }
}

fn render_kinds(kinds: impl Iterator<Item = InfoKind>) -> String {
    let parts: Vec<String> = kinds.map(|k| k.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// An immutable search node.
///
/// Fields are private; construct with [`Node::new`] or [`Node::root`], which
/// enforce the state check and the info layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<S> {
    id: NodeId,
    state: S,
    parent_id: Option<NodeId>,
    operator: Option<String>,
    info: Vec<InfoValue<S>>,
}

impl<S: SearchState> Node<S> {
    /// Build a node.
    ///
    /// `parent_id` and `operator` must both be present (child) or both be
    /// absent (root).
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidState`] if `state.check()` fails or the
    ///   provenance fields are inconsistent.
    /// - [`SearchError::TypeMismatch`] if `info` does not match `layout`.
    pub fn new(
        id: NodeId,
        state: S,
        parent_id: Option<NodeId>,
        operator: Option<String>,
        info: Vec<InfoValue<S>>,
        layout: &InfoLayout,
    ) -> Result<Self, SearchError> {
        state
            .check()
            .map_err(|detail| SearchError::InvalidState { detail })?;
        if parent_id.is_some() != operator.is_some() {
            return Err(SearchError::InvalidState {
                detail: format!("node {id} must have both a parent and an operator, or neither"),
            });
        }
        layout.check(&info)?;
        Ok(Self {
            id,
            state,
            parent_id,
            operator,
            info,
        })
    }

    /// Build a root node (no parent, no operator).
    ///
    /// # Errors
    ///
    /// Same as [`Node::new`].
    pub fn root(
        id: NodeId,
        state: S,
        info: Vec<InfoValue<S>>,
        layout: &InfoLayout,
    ) -> Result<Self, SearchError> {
        Self::new(id, state, None, None, info, layout)
    }
}

impl<S> Node<S> {
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    #[must_use]
    pub fn parent_id(&self) -> Option<NodeId> {
        self.parent_id
    }

    /// Name of the operator that produced this node from its parent.
    #[must_use]
    pub fn operator(&self) -> Option<&str> {
        self.operator.as_deref()
    }

    /// Everything beyond the fixed `(id, state, parent, operator)` fields.
    #[must_use]
    pub fn info(&self) -> &[InfoValue<S>] {
        &self.info
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}
