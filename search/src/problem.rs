//! Problem descriptor and the contracts it bundles.
//!
//! A [`Problem`] is built once per run and never mutated. It owns:
//!
//! - the ordered operator set ([`Operator`])
//! - the auxiliary-info policy ([`InfoPolicy`]), which fixes the info layout
//! - the initial state
//! - the goal test ([`GoalTest`])

use std::fmt;

use crate::node::{InfoKind, InfoLayout, InfoValue};

/// Result of applying an operator to a state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperatorOutcome<S> {
    /// The operator produced a child state.
    Produced(S),
    /// The operator does not apply here (e.g. a depth bound was reached).
    Inapplicable,
}

/// A named state transform.
///
/// Operators are identified by name. The expansion engine never re-applies
/// the operator that produced the node being expanded, so operators are
/// expected to be self-inverse or at least not worth repeating back-to-back.
pub trait Operator<S> {
    /// Stable name, unique within a problem.
    fn name(&self) -> &str;

    /// Apply to `state`, with the auxiliary info of the node being expanded.
    fn apply(&self, state: &S, info: &[InfoValue<S>]) -> OperatorOutcome<S>;
}

/// Goal predicate.
pub trait GoalTest<S> {
    fn is_goal(&self, state: &S) -> bool;
}

impl<S, F> GoalTest<S> for F
where
    F: Fn(&S) -> bool,
{
    fn is_goal(&self, state: &S) -> bool {
        self(state)
    }
}

/// Goal test that compares against one fixed state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalState<S>(pub S);

impl<S: PartialEq> GoalTest<S> for GoalState<S> {
    fn is_goal(&self, state: &S) -> bool {
        *state == self.0
    }
}

/// Builds the auxiliary info threaded through every node.
pub trait InfoPolicy<S> {
    /// The layout every node's info must follow.
    fn layout(&self) -> InfoLayout;

    /// Info for the root node.
    fn initial_info(&self, state: &S) -> Vec<InfoValue<S>>;

    /// Info for a child produced by `operator` from a parent.
    fn child_info(
        &self,
        parent_state: &S,
        parent_info: &[InfoValue<S>],
        child_state: &S,
        operator: &str,
    ) -> Vec<InfoValue<S>>;
}

/// No auxiliary info: every node carries an empty list.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInfo;

impl<S> InfoPolicy<S> for NoInfo {
    fn layout(&self) -> InfoLayout {
        InfoLayout::empty()
    }

    fn initial_info(&self, _state: &S) -> Vec<InfoValue<S>> {
        Vec::new()
    }

    fn child_info(
        &self,
        _parent_state: &S,
        _parent_info: &[InfoValue<S>],
        _child_state: &S,
        _operator: &str,
    ) -> Vec<InfoValue<S>> {
        Vec::new()
    }
}

/// Depth tracking: info is `[state, depth]`, root depth 0, child depth
/// parent depth + 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthInfo;

impl DepthInfo {
    /// Slot holding the depth counter.
    pub const DEPTH_SLOT: usize = 1;

    /// Read the depth from info laid out by this policy.
    ///
    /// Returns `None` for info with a different layout.
    #[must_use]
    pub fn depth_of<S>(info: &[InfoValue<S>]) -> Option<u64> {
        info.get(Self::DEPTH_SLOT).and_then(InfoValue::as_count)
    }
}

impl<S: Clone> InfoPolicy<S> for DepthInfo {
    fn layout(&self) -> InfoLayout {
        InfoLayout::new(vec![InfoKind::State, InfoKind::Count])
    }

    fn initial_info(&self, state: &S) -> Vec<InfoValue<S>> {
        vec![InfoValue::State(state.clone()), InfoValue::Count(0)]
    }

    fn child_info(
        &self,
        _parent_state: &S,
        parent_info: &[InfoValue<S>],
        child_state: &S,
        _operator: &str,
    ) -> Vec<InfoValue<S>> {
        // Parent info that lost its depth yields empty info, which the
        // child's layout check rejects.
        let Some(depth) = Self::depth_of(parent_info) else {
            return Vec::new();
        };
        vec![InfoValue::State(child_state.clone()), InfoValue::Count(depth + 1)]
    }
}

/// Immutable problem descriptor.
pub struct Problem<S> {
    operators: Vec<Box<dyn Operator<S>>>,
    info_policy: Box<dyn InfoPolicy<S>>,
    layout: InfoLayout,
    initial_state: S,
    goal: Box<dyn GoalTest<S>>,
}

impl<S> Problem<S> {
    /// Bundle the parts of a problem. The info layout is read from the policy
    /// once and fixed for the lifetime of the descriptor.
    pub fn new(
        operators: Vec<Box<dyn Operator<S>>>,
        info_policy: Box<dyn InfoPolicy<S>>,
        initial_state: S,
        goal: Box<dyn GoalTest<S>>,
    ) -> Self {
        let layout = info_policy.layout();
        Self {
            operators,
            info_policy,
            layout,
            initial_state,
            goal,
        }
    }

    #[must_use]
    pub fn operators(&self) -> &[Box<dyn Operator<S>>] {
        &self.operators
    }

    #[must_use]
    pub fn info_policy(&self) -> &dyn InfoPolicy<S> {
        self.info_policy.as_ref()
    }

    #[must_use]
    pub fn layout(&self) -> &InfoLayout {
        &self.layout
    }

    #[must_use]
    pub fn initial_state(&self) -> &S {
        &self.initial_state
    }

    #[must_use]
    pub fn is_goal(&self, state: &S) -> bool {
        self.goal.is_goal(state)
    }

    /// Operator names in expansion order.
    #[must_use]
    pub fn operator_names(&self) -> Vec<&str> {
        self.operators.iter().map(|op| op.name()).collect()
    }
}

impl<S: fmt::Debug> fmt::Debug for Problem<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Problem")
            .field("operators", &self.operator_names())
            .field("layout", &self.layout)
            .field("initial_state", &self.initial_state)
            .finish_non_exhaustive()
    }
}
