//! Path reconstruction from a goal node back to the root.

use crate::error::SearchError;
use crate::node::Node;
use crate::tree::SearchTree;

/// Operator names from the root to `goal`, in application order.
///
/// Walks parent links iteratively. The root yields an empty path.
///
/// # Errors
///
/// - [`SearchError::DanglingParentReference`] if a parent identifier does
///   not resolve in `tree`.
/// - [`SearchError::ParentCycle`] if the walk visits more nodes than the
///   tree holds without reaching a root.
pub fn reconstruct_path<S>(
    tree: &SearchTree<S>,
    goal: &Node<S>,
) -> Result<Vec<String>, SearchError> {
    let mut operators = Vec::new();
    let mut cursor = goal;
    // The goal itself may already be out of the tree, hence the +1.
    let max_steps = tree.len() + 1;

    while let Some(parent_id) = cursor.parent_id() {
        if operators.len() >= max_steps {
            return Err(SearchError::ParentCycle { node: goal.id() });
        }
        if let Some(op) = cursor.operator() {
            operators.push(op.to_string());
        }
        cursor = tree
            .lookup(parent_id)
            .ok_or(SearchError::DanglingParentReference {
                node: cursor.id(),
                parent: parent_id,
            })?;
    }

    operators.reverse();
    Ok(operators)
}
