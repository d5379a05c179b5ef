//! Independent shortest-distance oracle for the linear puzzle.
//!
//! Plain breadth-first search over the 24-state permutation graph, built
//! with std collections and the kernel swaps only. Shares no code with the
//! search engine, so engine results can be checked against it.

use std::collections::{BTreeMap, VecDeque};

use linpuzzle_kernel::carrier::linear_state::LinearState;
use linpuzzle_kernel::operators::swap::Swap;

/// Minimum number of swaps from every state to the goal.
///
/// Swaps are self-inverse, so distances from the goal equal distances to it.
#[must_use]
pub fn distances_to_goal() -> BTreeMap<LinearState, usize> {
    let mut dist = BTreeMap::new();
    let mut queue = VecDeque::new();
    dist.insert(LinearState::GOAL, 0);
    queue.push_back(LinearState::GOAL);

    while let Some(state) = queue.pop_front() {
        let d = dist[&state];
        for swap in Swap::ALL {
            let next = swap.apply(state);
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_covers_every_state() {
        let dist = distances_to_goal();
        assert_eq!(dist.len(), 24);
        assert_eq!(dist.values().max(), Some(&6));
        for (state, d) in &dist {
            assert_eq!(*d, state.inversions(), "{state}");
        }
    }
}
