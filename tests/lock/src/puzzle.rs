//! Thin wrappers that run the puzzle through the engine directly.

use linpuzzle_harness::worlds::linear_puzzle::{LinearPuzzle, ProblemKind};
use linpuzzle_kernel::carrier::linear_state::LinearState;
use linpuzzle_search::search::{run_search, SearchResult};
use linpuzzle_search::sink::{MemorySink, NullSink};
use linpuzzle_search::strategy::StrategyKind;

/// Build a state from literal symbols.
///
/// # Panics
///
/// Panics if `symbols` is not a permutation of `1..=4`.
#[must_use]
pub fn state(symbols: [u8; 4]) -> LinearState {
    LinearState::new(symbols).unwrap()
}

/// Breadth-first over the unbounded puzzle.
///
/// # Panics
///
/// Panics if the engine reports a structural error.
#[must_use]
pub fn breadth_first(initial: LinearState) -> SearchResult<LinearState> {
    let problem = LinearPuzzle::new(initial, ProblemKind::Unbounded).problem();
    run_search(&problem, &StrategyKind::Breadth, &mut NullSink).unwrap()
}

/// Depth-first over the depth-tracked puzzle, keeping every generated node.
///
/// # Panics
///
/// Panics if the engine reports a structural error.
#[must_use]
pub fn depth_first_recorded(
    initial: LinearState,
    limit: u64,
) -> (SearchResult<LinearState>, MemorySink<LinearState>) {
    let problem = LinearPuzzle::new(initial, ProblemKind::DepthTracked { limit }).problem();
    let mut sink = MemorySink::new();
    let result = run_search(&problem, &StrategyKind::Depth, &mut sink).unwrap();
    (result, sink)
}
