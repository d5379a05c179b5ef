//! Depth-first search under a depth bound.

use linpuzzle_kernel::carrier::linear_state::LinearState;
use linpuzzle_kernel::operators::swap::Swap;
use linpuzzle_search::problem::DepthInfo;
use linpuzzle_search::search::TerminationReason;
use lock_tests::puzzle::{depth_first_recorded, state};

#[test]
fn no_generated_node_exceeds_the_limit() {
    for initial in LinearState::all() {
        for limit in 0..=6 {
            let (_, sink) = depth_first_recorded(initial, limit);
            for node in sink.nodes() {
                let depth = DepthInfo::depth_of(node.info()).expect("depth slot present");
                assert!(
                    depth <= limit,
                    "{initial} limit {limit}: node {} at depth {depth}",
                    node.id()
                );
            }
        }
    }
}

#[test]
fn found_paths_fit_the_limit_and_reach_the_goal() {
    for initial in LinearState::all() {
        for limit in 0..=6 {
            let (result, _) = depth_first_recorded(initial, limit);
            if let Some(path) = result.path {
                assert!(path.len() as u64 <= limit, "{initial} limit {limit}");
                assert_eq!(Swap::replay(initial, &path).unwrap(), LinearState::GOAL);
                for pair in path.windows(2) {
                    assert_ne!(pair[0], pair[1]);
                }
            }
        }
    }
}

#[test]
fn solvable_exactly_when_limit_covers_the_distance() {
    // The bounded tree is searched exhaustively and a shortest path never
    // repeats a swap, so a solution exists iff limit >= inversions.
    for initial in LinearState::all() {
        for limit in 0..=6u64 {
            let (result, _) = depth_first_recorded(initial, limit);
            let expected = limit >= initial.inversions() as u64;
            assert_eq!(
                result.is_goal_reached(),
                expected,
                "{initial} limit {limit}: {:?}",
                result.termination
            );
            if !expected {
                assert_eq!(result.termination, TerminationReason::FrontierExhausted);
            }
        }
    }
}

#[test]
fn zero_limit_on_unsolved_start_has_no_solution() {
    let (result, sink) = depth_first_recorded(state([2, 1, 3, 4]), 0);
    assert!(result.is_no_solution());
    assert!(result.path.is_none());
    assert!(sink.nodes().is_empty());
    assert_eq!(result.stats.expansions, 1);
    assert_eq!(result.stats.inapplicable, 3);
}

#[test]
fn default_limit_solves_the_sample() {
    let (result, sink) = depth_first_recorded(state([4, 1, 3, 2]), 6);
    let path = result.path.expect("solvable within six swaps");
    assert!(path.len() <= 6);
    assert_eq!(sink.nodes().len() as u64, result.stats.nodes_generated);
}

#[test]
fn depth_first_dives_before_widening() {
    // First expansion of [2, 1, 3, 4] with limit 2 puts the `ie` child
    // (the goal) at the head of the frontier.
    let (result, _) = depth_first_recorded(state([2, 1, 3, 4]), 2);
    assert_eq!(result.path, Some(vec!["ie".to_string()]));
    assert_eq!(result.stats.expansions, 1);
}
