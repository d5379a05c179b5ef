//! Persistence hook for generated nodes.
//!
//! The expansion engine reports every surviving child to a [`NodeSink`], in
//! generation order, before returning the expansion. The hook is blocking
//! and ordered; a failure stops the run.

use crate::node::Node;

/// Failure reported by a sink.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SinkError {
    /// The backing store could not be written.
    #[error("node sink I/O error: {detail}")]
    Io { detail: String },
    /// A node could not be encoded for storage.
    #[error("node sink encoding error: {detail}")]
    Encode { detail: String },
}

/// Receives every generated node.
pub trait NodeSink<S> {
    /// Record one node.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError`] if the node could not be stored.
    fn record(&mut self, node: &Node<S>) -> Result<(), SinkError>;
}

impl<S, T: NodeSink<S> + ?Sized> NodeSink<S> for &mut T {
    fn record(&mut self, node: &Node<S>) -> Result<(), SinkError> {
        (**self).record(node)
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl<S> NodeSink<S> for NullSink {
    fn record(&mut self, _node: &Node<S>) -> Result<(), SinkError> {
        Ok(())
    }
}

/// Keeps a clone of every recorded node, in order.
#[derive(Debug, Clone)]
pub struct MemorySink<S> {
    nodes: Vec<Node<S>>,
}

impl<S> MemorySink<S> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    #[must_use]
    pub fn nodes(&self) -> &[Node<S>] {
        &self.nodes
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<Node<S>> {
        self.nodes
    }
}

impl<S> Default for MemorySink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone> NodeSink<S> for MemorySink<S> {
    fn record(&mut self, node: &Node<S>) -> Result<(), SinkError> {
        self.nodes.push(node.clone());
        Ok(())
    }
}
