//! `LinearPuzzle`: the four-cell swap puzzle as a search problem.
//!
//! Two problem shapes:
//!
//! - [`ProblemKind::Unbounded`]: plain swaps, no auxiliary info. Used with
//!   breadth-first search.
//! - [`ProblemKind::DepthTracked`]: info is `[state, depth]` and every swap
//!   becomes inapplicable once the node's depth reaches the limit. Used with
//!   depth-first search, which would otherwise never terminate on a cycle.
//!
//! Goal: [`LinearState::GOAL`].

use linpuzzle_kernel::carrier::linear_state::LinearState;
use linpuzzle_kernel::operators::swap::Swap;
use linpuzzle_search::node::InfoValue;
use linpuzzle_search::problem::{
    DepthInfo, GoalState, InfoPolicy, NoInfo, Operator, OperatorOutcome, Problem,
};
use linpuzzle_search::strategy::StrategyKind;
use serde::{Deserialize, Serialize};

/// Which variant of the puzzle to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ProblemKind {
    Unbounded,
    DepthTracked { limit: u64 },
}

impl ProblemKind {
    /// The variant each strategy runs against.
    #[must_use]
    pub const fn for_strategy(strategy: StrategyKind, depth_limit: u64) -> Self {
        match strategy {
            StrategyKind::Breadth => Self::Unbounded,
            StrategyKind::Depth => Self::DepthTracked { limit: depth_limit },
        }
    }

    #[must_use]
    pub const fn depth_limit(self) -> Option<u64> {
        match self {
            Self::Unbounded => None,
            Self::DepthTracked { limit } => Some(limit),
        }
    }
}

/// A swap, optionally gated on the expanding node's depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapOperator {
    swap: Swap,
    depth_limit: Option<u64>,
}

impl SwapOperator {
    #[must_use]
    pub const fn unbounded(swap: Swap) -> Self {
        Self {
            swap,
            depth_limit: None,
        }
    }

    #[must_use]
    pub const fn depth_limited(swap: Swap, limit: u64) -> Self {
        Self {
            swap,
            depth_limit: Some(limit),
        }
    }
}

impl Operator<LinearState> for SwapOperator {
    fn name(&self) -> &str {
        self.swap.name()
    }

    fn apply(
        &self,
        state: &LinearState,
        info: &[InfoValue<LinearState>],
    ) -> OperatorOutcome<LinearState> {
        if let Some(limit) = self.depth_limit {
            // Info without a depth slot cannot be bounded, so it is refused.
            match DepthInfo::depth_of(info) {
                Some(depth) if depth < limit => {}
                _ => return OperatorOutcome::Inapplicable,
            }
        }
        OperatorOutcome::Produced(self.swap.apply(*state))
    }
}

/// The puzzle world: an initial arrangement plus a problem shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearPuzzle {
    initial: LinearState,
    kind: ProblemKind,
}

impl LinearPuzzle {
    #[must_use]
    pub const fn new(initial: LinearState, kind: ProblemKind) -> Self {
        Self { initial, kind }
    }

    #[allow(clippy::unused_self)]
    #[must_use]
    pub const fn world_id(&self) -> &'static str {
        "linear_puzzle"
    }

    #[must_use]
    pub const fn initial(&self) -> LinearState {
        self.initial
    }

    #[must_use]
    pub const fn kind(&self) -> ProblemKind {
        self.kind
    }

    /// Build the problem descriptor. Operators are in fixed order:
    /// `ie`, `ic`, `id`.
    #[must_use]
    pub fn problem(&self) -> Problem<LinearState> {
        let depth_limit = self.kind.depth_limit();
        let operators = Swap::ALL
            .iter()
            .map(|&swap| -> Box<dyn Operator<LinearState>> {
                Box::new(SwapOperator { swap, depth_limit })
            })
            .collect();
        let info_policy: Box<dyn InfoPolicy<LinearState>> = match self.kind {
            ProblemKind::Unbounded => Box::new(NoInfo),
            ProblemKind::DepthTracked { .. } => Box::new(DepthInfo),
        };
        Problem::new(
            operators,
            info_policy,
            self.initial,
            Box::new(GoalState(LinearState::GOAL)),
        )
    }
}
