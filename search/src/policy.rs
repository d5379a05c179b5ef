//! Search policy: run budgets.

use serde::{Deserialize, Serialize};

/// Budget configuration for one search run.
///
/// The engine itself has no timeout or cancellation. Callers who need a
/// bounded run set `max_expansions`; the driver then stops with
/// [`crate::search::TerminationReason::ExpansionBudgetExceeded`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` means unbounded.
    pub max_expansions: Option<u64>,
}

impl SearchPolicy {
    /// No budget.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_expansions: None,
        }
    }

    /// Stop after `max` expansions.
    #[must_use]
    pub const fn with_max_expansions(max: u64) -> Self {
        Self {
            max_expansions: Some(max),
        }
    }

    /// Whether `expansions` has reached the budget.
    #[must_use]
    pub fn budget_spent(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }
}
