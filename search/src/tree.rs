//! Tree/frontier store: nodes awaiting expansion plus nodes already expanded.
//!
//! The closed set exists only so that parent links can be resolved during
//! path reconstruction. It is never consulted for deduplication.
//!
//! Updates happen in place, but every operation corresponds one-to-one with
//! the functional formulation (`store → store'`), so the sequence of
//! `(frontier, closed)` values an observer sees is the same.

use std::collections::VecDeque;

use crate::error::SearchError;
use crate::node::{Node, NodeId};
use crate::strategy::FrontierStrategy;

/// Frontier and closed set.
#[derive(Debug, Clone)]
pub struct SearchTree<S> {
    frontier: VecDeque<Node<S>>,
    closed: Vec<Node<S>>,
    high_water: usize,
}

impl<S> SearchTree<S> {
    /// A tree whose frontier holds only `root`.
    #[must_use]
    pub fn seed(root: Node<S>) -> Self {
        Self {
            frontier: VecDeque::from([root]),
            closed: Vec::new(),
            high_water: 1,
        }
    }

    /// The next node to expand (head of the frontier).
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyFrontier`] when nothing is pending.
    pub fn select_node(&self) -> Result<&Node<S>, SearchError> {
        self.frontier.front().ok_or(SearchError::EmptyFrontier)
    }

    /// Remove and return the head of the frontier. The closed set is untouched.
    pub fn drop_selected(&mut self) -> Option<Node<S>> {
        self.frontier.pop_front()
    }

    /// Close `expanded` and merge `new_nodes` into the frontier via `strategy`.
    pub fn merge_new_nodes<T>(&mut self, strategy: &T, expanded: Node<S>, new_nodes: Vec<Node<S>>)
    where
        T: FrontierStrategy<S> + ?Sized,
    {
        self.closed.push(expanded);
        strategy.merge(&mut self.frontier, new_nodes);
        self.high_water = self.high_water.max(self.frontier.len());
    }

    /// Find a node by identifier, searching the frontier first, then the
    /// closed set. Linear; only path reconstruction calls this.
    #[must_use]
    pub fn lookup(&self, id: NodeId) -> Option<&Node<S>> {
        self.frontier
            .iter()
            .find(|n| n.id() == id)
            .or_else(|| self.closed.iter().find(|n| n.id() == id))
    }

    #[must_use]
    pub fn frontier(&self) -> &VecDeque<Node<S>> {
        &self.frontier
    }

    #[must_use]
    pub fn closed(&self) -> &[Node<S>] {
        &self.closed
    }

    #[must_use]
    pub fn is_frontier_empty(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Total nodes held (frontier + closed).
    #[must_use]
    pub fn len(&self) -> usize {
        self.frontier.len() + self.closed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest frontier size observed so far.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
