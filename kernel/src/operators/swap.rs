//! The three adjacent-swap moves of the linear puzzle.
//!
//! | Move     | Name | Label            | Cells exchanged |
//! |----------|------|------------------|-----------------|
//! | `Left`   | `ie` | left exchange    | 0 and 1         |
//! | `Center` | `ic` | central exchange | 1 and 2         |
//! | `Right`  | `id` | right exchange   | 2 and 3         |
//!
//! Every move is self-inverse: applying the same move twice restores the
//! original state. The search engine's parent-operator rule relies on this.

use std::fmt;

use crate::carrier::linear_state::LinearState;

/// An adjacent-swap move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Swap {
    Left,
    Center,
    Right,
}

/// Failure replaying a sequence of move names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReplayError {
    /// A name in the sequence is not one of the three moves.
    #[error("unknown move {name:?} at position {index}")]
    UnknownMove { index: usize, name: String },
}

impl Swap {
    /// All moves in canonical expansion order.
    pub const ALL: [Self; 3] = [Self::Left, Self::Center, Self::Right];

    /// Stable operator name used in paths and node logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "ie",
            Self::Center => "ic",
            Self::Right => "id",
        }
    }

    /// Human-readable description.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Left => "left exchange",
            Self::Center => "central exchange",
            Self::Right => "right exchange",
        }
    }

    /// Look up a move by its operator name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// The pair of cell indices this move exchanges.
    #[must_use]
    pub const fn cells(self) -> (usize, usize) {
        match self {
            Self::Left => (0, 1),
            Self::Center => (1, 2),
            Self::Right => (2, 3),
        }
    }

    /// Apply the move. Always succeeds.
    #[must_use]
    pub fn apply(self, state: LinearState) -> LinearState {
        let (a, b) = self.cells();
        let next = state.swapped(a, b);
        tracing::debug!(op = self.name(), from = %state, to = %next, "swap applied");
        next
    }

    /// Apply a sequence of named moves to `start`, in order.
    ///
    /// # Errors
    ///
    /// Returns [`ReplayError::UnknownMove`] for the first name that is not a
    /// move; nothing after it is applied.
    pub fn replay<N: AsRef<str>>(
        start: LinearState,
        names: &[N],
    ) -> Result<LinearState, ReplayError> {
        names.iter().enumerate().try_fold(start, |state, (index, name)| {
            let name = name.as_ref();
            Self::from_name(name)
                .map(|swap| swap.apply(state))
                .ok_or_else(|| ReplayError::UnknownMove {
                    index,
                    name: name.to_string(),
                })
        })
    }
}

impl fmt::Display for Swap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
