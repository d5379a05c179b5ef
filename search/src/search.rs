//! Search entry point and the select → test → expand → merge loop.
//!
//! ```text
//! seed(root) ─▶ RUNNING ──frontier empty──▶ FRONTIER_EXHAUSTED
//!                  │
//!                  ├──head satisfies goal──▶ GOAL_FOUND (path)
//!                  │
//!                  ├──budget spent─────────▶ BUDGET_EXCEEDED
//!                  │
//!                  └──expand + merge──▶ RUNNING
//! ```
//!
//! The loop is iterative; path reconstruction is iterative too, so deep
//! searches are bounded by memory, not call depth.

use serde::{Deserialize, Serialize};

use crate::error::SearchError;
use crate::expand::{expand, OperatorDecision};
use crate::node::{IdGenerator, Node, NodeId, SearchState};
use crate::path::reconstruct_path;
use crate::policy::SearchPolicy;
use crate::problem::Problem;
use crate::sink::NodeSink;
use crate::strategy::FrontierStrategy;
use crate::tree::SearchTree;

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TerminationReason {
    /// The selected node satisfied the goal test.
    GoalReached { node_id: NodeId },
    /// Nothing left to expand: no solution.
    FrontierExhausted,
    /// `SearchPolicy::max_expansions` was reached first.
    ExpansionBudgetExceeded,
}

/// Run counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Nodes expanded (goal node excluded).
    pub expansions: u64,
    /// Children created across all expansions (root excluded).
    pub nodes_generated: u64,
    /// Operators skipped because they produced the expanded node.
    pub suppressed_parent_operator: u64,
    /// Operators that reported themselves inapplicable.
    pub inapplicable: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
    /// Size of the closed set at termination.
    pub closed_nodes: u64,
}

/// Outcome of a search run.
#[derive(Debug, Clone)]
pub struct SearchResult<S> {
    pub termination: TerminationReason,
    /// Operator names from the initial state to the goal, when one was found.
    pub path: Option<Vec<String>>,
    pub goal_node: Option<Node<S>>,
    pub stats: SearchStats,
}

impl<S> SearchResult<S> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached { .. })
    }

    /// `true` when the frontier ran dry without reaching a goal.
    #[must_use]
    pub fn is_no_solution(&self) -> bool {
        self.termination == TerminationReason::FrontierExhausted
    }
}

/// Run a search with no budget.
///
/// # Errors
///
/// See [`run_search_with_policy`].
pub fn run_search<S, T>(
    problem: &Problem<S>,
    strategy: &T,
    sink: &mut dyn NodeSink<S>,
) -> Result<SearchResult<S>, SearchError>
where
    S: SearchState,
    T: FrontierStrategy<S> + ?Sized,
{
    run_search_with_policy(problem, strategy, &SearchPolicy::default(), sink)
}

/// Run a search from the problem's initial state.
///
/// "No solution" and budget exhaustion are normal results, reported through
/// [`SearchResult::termination`].
///
/// # Errors
///
/// Returns [`SearchError`] for structural failures only: a malformed root or
/// child node, a dangling parent link, or a failing sink. The run stops at
/// the first one.
pub fn run_search_with_policy<S, T>(
    problem: &Problem<S>,
    strategy: &T,
    policy: &SearchPolicy,
    sink: &mut dyn NodeSink<S>,
) -> Result<SearchResult<S>, SearchError>
where
    S: SearchState,
    T: FrontierStrategy<S> + ?Sized,
{
    let mut ids = IdGenerator::new();
    let initial = problem.initial_state().clone();
    let root_info = problem.info_policy().initial_info(&initial);
    let root = Node::root(ids.allocate(), initial, root_info, problem.layout())?;

    tracing::debug!(
        strategy = strategy.name(),
        root = %root.id(),
        state = %root.state(),
        "search started"
    );

    let mut tree = SearchTree::seed(root);
    let mut stats = SearchStats::default();
    let mut path = None;
    let mut goal_node = None;

    let termination = loop {
        if tree.is_frontier_empty() {
            break TerminationReason::FrontierExhausted;
        }
        let selected = tree.select_node()?;
        tracing::debug!(
            node = %selected.id(),
            state = %selected.state(),
            frontier = tree.frontier().len(),
            closed = tree.closed().len(),
            "selected node"
        );

        if problem.is_goal(selected.state()) {
            let node_id = selected.id();
            path = Some(reconstruct_path(&tree, selected)?);
            goal_node = tree.drop_selected();
            break TerminationReason::GoalReached { node_id };
        }

        if policy.budget_spent(stats.expansions) {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        let current = tree.drop_selected().ok_or(SearchError::EmptyFrontier)?;
        let expansion = expand(&current, problem, &mut ids, sink)?;
        stats.expansions += 1;
        stats.nodes_generated += expansion.children.len() as u64;
        stats.suppressed_parent_operator +=
            expansion.count(|d| matches!(d, OperatorDecision::SuppressedParentOperator)) as u64;
        stats.inapplicable +=
            expansion.count(|d| matches!(d, OperatorDecision::Inapplicable)) as u64;

        tree.merge_new_nodes(strategy, current, expansion.children);
        tracing::debug!(
            frontier = tree.frontier().len(),
            closed = tree.closed().len(),
            "tree updated"
        );
    };

    stats.frontier_high_water = tree.high_water() as u64;
    stats.closed_nodes = tree.closed().len() as u64;

    tracing::info!(
        termination = ?termination,
        expansions = stats.expansions,
        generated = stats.nodes_generated,
        path_len = path.as_ref().map(Vec::len),
        "search finished"
    );

    Ok(SearchResult {
        termination,
        path,
        goal_node,
        stats,
    })
}
