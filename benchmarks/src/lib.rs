//! Shared helpers for the benchmark suites.

use linpuzzle_harness::worlds::linear_puzzle::{LinearPuzzle, ProblemKind};
use linpuzzle_kernel::carrier::linear_state::LinearState;
use linpuzzle_search::node::{InfoLayout, Node, NodeId};
use linpuzzle_search::problem::Problem;
use linpuzzle_search::search::{run_search, SearchResult};
use linpuzzle_search::sink::NullSink;
use linpuzzle_search::strategy::StrategyKind;

/// A named benchmark input: a start state and the strategy to run it with.
pub struct Regime {
    pub name: &'static str,
    pub initial: LinearState,
    pub strategy: StrategyKind,
    pub depth_limit: u64,
}

impl Regime {
    #[must_use]
    pub fn problem(&self) -> Problem<LinearState> {
        let kind = ProblemKind::for_strategy(self.strategy, self.depth_limit);
        LinearPuzzle::new(self.initial, kind).problem()
    }
}

/// The hardest start (six inversions) under both strategies, plus the
/// sample start.
///
/// # Panics
///
/// Never in practice; the literal states are valid permutations.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    let reversed = LinearState::new([4, 3, 2, 1]).expect("valid");
    let sample = LinearState::new([4, 1, 3, 2]).expect("valid");
    vec![
        Regime {
            name: "reversed/breadth",
            initial: reversed,
            strategy: StrategyKind::Breadth,
            depth_limit: 6,
        },
        Regime {
            name: "reversed/depth",
            initial: reversed,
            strategy: StrategyKind::Depth,
            depth_limit: 6,
        },
        Regime {
            name: "sample/breadth",
            initial: sample,
            strategy: StrategyKind::Breadth,
            depth_limit: 6,
        },
        Regime {
            name: "sample/depth",
            initial: sample,
            strategy: StrategyKind::Depth,
            depth_limit: 6,
        },
    ]
}

/// Run a prepared problem with no persistence.
///
/// # Panics
///
/// Panics if the engine reports a structural error.
#[must_use]
pub fn run_quiet(
    problem: &Problem<LinearState>,
    strategy: StrategyKind,
) -> SearchResult<LinearState> {
    run_search(problem, &strategy, &mut NullSink).expect("search run failed")
}

/// `n` child nodes of node 1, cycling through all 24 states.
///
/// # Panics
///
/// Panics only if node construction rejects a valid state.
#[must_use]
pub fn make_children(n: u64) -> Vec<Node<LinearState>> {
    let states = LinearState::all();
    let layout = InfoLayout::empty();
    (0..n)
        .map(|i| {
            let state = states[usize::try_from(i).unwrap_or(0) % states.len()];
            Node::new(
                NodeId::new(i + 2),
                state,
                Some(NodeId::new(1)),
                Some("ie".to_string()),
                Vec::new(),
                &layout,
            )
            .expect("valid node")
        })
        .collect()
}
