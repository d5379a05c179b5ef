//! Node expansion: apply every operator to a node and build its children.
//!
//! Per operator, in problem order:
//!
//! 1. If the operator has the same name as the one that produced the node,
//!    it is suppressed without being called. Re-applying a self-inverse move
//!    would only regenerate the parent.
//! 2. Otherwise the operator is applied. [`OperatorOutcome::Inapplicable`]
//!    produces no child.
//! 3. A produced state gets a fresh identifier and becomes a child whose info
//!    comes from the problem's [`crate::problem::InfoPolicy`].
//!
//! Surviving children are reported to the [`NodeSink`] in generation order
//! before the expansion is returned.

use crate::error::SearchError;
use crate::node::{IdGenerator, Node, NodeId, SearchState};
use crate::problem::{OperatorOutcome, Problem};
use crate::sink::NodeSink;

/// What happened to one operator during an expansion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorDecision {
    /// Applied; created the given child.
    Applied { to_node: NodeId },
    /// Same operator as the one that produced the expanded node; not applied.
    SuppressedParentOperator,
    /// The operator reported itself inapplicable.
    Inapplicable,
}

/// Ordered decision log entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorRecord {
    pub operator: String,
    pub decision: OperatorDecision,
}

/// Result of expanding one node.
#[derive(Debug, Clone)]
pub struct Expansion<S> {
    /// The node that was expanded.
    pub parent: NodeId,
    /// Generated children, in operator order.
    pub children: Vec<Node<S>>,
    /// One record per operator, in operator order.
    pub records: Vec<OperatorRecord>,
}

impl<S> Expansion<S> {
    /// Count records with the given decision shape.
    #[must_use]
    pub fn count(&self, pred: impl Fn(&OperatorDecision) -> bool) -> usize {
        self.records.iter().filter(|r| pred(&r.decision)).count()
    }
}

/// Expand `node` under `problem`.
///
/// # Errors
///
/// - [`SearchError::InvalidState`] / [`SearchError::TypeMismatch`] if an
///   operator or the info policy produced a malformed child.
/// - [`SearchError::Sink`] if the persistence hook fails.
pub fn expand<S: SearchState>(
    node: &Node<S>,
    problem: &Problem<S>,
    ids: &mut IdGenerator,
    sink: &mut dyn NodeSink<S>,
) -> Result<Expansion<S>, SearchError> {
    let parent_state = node.state();
    let parent_info = node.info();
    let parent_operator = node.operator();

    let mut children = Vec::new();
    let mut records = Vec::with_capacity(problem.operators().len());

    for op in problem.operators() {
        let name = op.name();

        if parent_operator == Some(name) {
            records.push(OperatorRecord {
                operator: name.to_string(),
                decision: OperatorDecision::SuppressedParentOperator,
            });
            continue;
        }

        match op.apply(parent_state, parent_info) {
            OperatorOutcome::Inapplicable => {
                records.push(OperatorRecord {
                    operator: name.to_string(),
                    decision: OperatorDecision::Inapplicable,
                });
            }
            OperatorOutcome::Produced(child_state) => {
                let info =
                    problem
                        .info_policy()
                        .child_info(parent_state, parent_info, &child_state, name);
                let child = Node::new(
                    ids.allocate(),
                    child_state,
                    Some(node.id()),
                    Some(name.to_string()),
                    info,
                    problem.layout(),
                )?;
                records.push(OperatorRecord {
                    operator: name.to_string(),
                    decision: OperatorDecision::Applied { to_node: child.id() },
                });
                children.push(child);
            }
        }
    }

    for child in &children {
        tracing::info!(
            node = %child.id(),
            parent = %node.id(),
            op = child.operator().unwrap_or_default(),
            state = %child.state(),
            "adding node to the tree"
        );
        sink.record(child)?;
    }

    Ok(Expansion {
        parent: node.id(),
        children,
        records,
    })
}
