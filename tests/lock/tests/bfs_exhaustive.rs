//! Breadth-first search over every starting arrangement.
//!
//! For all 24 permutations: the returned path replays to the goal, is as
//! short as the independent oracle says, and never applies the same swap
//! twice in a row.

use linpuzzle_kernel::carrier::linear_state::LinearState;
use linpuzzle_kernel::operators::swap::Swap;
use linpuzzle_search::search::TerminationReason;
use lock_tests::oracle::distances_to_goal;
use lock_tests::puzzle::{breadth_first, state};

#[test]
fn every_start_is_solved_by_a_shortest_path() {
    let oracle = distances_to_goal();
    for initial in LinearState::all() {
        let result = breadth_first(initial);
        assert!(result.is_goal_reached(), "{initial}: {:?}", result.termination);

        let path = result.path.expect("goal reached implies a path");
        let end = Swap::replay(initial, &path).expect("path names known swaps");
        assert_eq!(end, LinearState::GOAL, "{initial}: {path:?}");
        assert_eq!(path.len(), oracle[&initial], "{initial}: {path:?}");
        assert_eq!(path.len(), initial.inversions(), "{initial}");
    }
}

#[test]
fn paths_never_repeat_a_swap_back_to_back() {
    for initial in LinearState::all() {
        let path = breadth_first(initial).path.expect("solvable");
        for pair in path.windows(2) {
            assert_ne!(pair[0], pair[1], "{initial}: {path:?}");
        }
    }
}

#[test]
fn sample_arrangement_is_solved() {
    let result = breadth_first(state([4, 1, 3, 2]));
    let path = result.path.expect("solvable");
    assert!(!path.is_empty());
    assert_eq!(path.len(), 4);
    assert_eq!(
        Swap::replay(state([4, 1, 3, 2]), &path).unwrap(),
        LinearState::GOAL
    );
}

#[test]
fn solved_start_needs_no_work() {
    let result = breadth_first(LinearState::GOAL);
    assert_eq!(result.path, Some(Vec::new()));
    assert_eq!(result.stats.expansions, 0);
    assert_eq!(result.stats.nodes_generated, 0);
    assert!(matches!(
        result.termination,
        TerminationReason::GoalReached { .. }
    ));
}

#[test]
fn goal_node_carries_the_goal_state() {
    for initial in LinearState::all() {
        let result = breadth_first(initial);
        let goal = result.goal_node.expect("solvable");
        assert_eq!(goal.state(), &LinearState::GOAL);
        assert_eq!(goal.is_root(), initial == LinearState::GOAL);
    }
}

#[test]
fn one_swap_starts_take_the_matching_swap() {
    for swap in Swap::ALL {
        let initial = swap.apply(LinearState::GOAL);
        let path = breadth_first(initial).path.expect("solvable");
        assert_eq!(path, vec![swap.name().to_string()]);
    }
}
