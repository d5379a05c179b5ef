//! `LinearState`: an arrangement of the four puzzle symbols.
//!
//! A state is exactly four cells holding the symbols `1..=4`, each exactly
//! once. Construction is fail-closed: every public constructor validates, so
//! a `LinearState` value is always a permutation.
//!
//! # Serialization
//!
//! Serialized as a plain list (`[4, 1, 3, 2]`) so that settings files and
//! node logs stay human-readable. Deserialization re-runs validation.

use std::fmt;

use linpuzzle_search::node::SearchState;
use serde::{Deserialize, Serialize};

/// Number of cells in a linear state.
pub const CELL_COUNT: usize = 4;

/// The solved arrangement.
pub const GOAL_SYMBOLS: [u8; CELL_COUNT] = [1, 2, 3, 4];

/// Typed failure for state construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    /// The input did not have exactly [`CELL_COUNT`] symbols.
    #[error("a linear state has exactly {expected} symbols, got {found}")]
    WrongLength { expected: usize, found: usize },
    /// The input was the right length but not a permutation of `1..=4`.
    #[error("symbols {symbols:?} must contain exactly the numbers 1, 2, 3, and 4")]
    NotAPermutation { symbols: Vec<u8> },
}

/// A validated arrangement of the symbols `1..=4`.
///
/// Derives `Ord` so states can key ordered maps in tests and oracles.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct LinearState([u8; CELL_COUNT]);

impl LinearState {
    /// The goal arrangement `[1, 2, 3, 4]`.
    pub const GOAL: Self = Self(GOAL_SYMBOLS);

    /// Construct a state, checking that `symbols` is a permutation of `1..=4`.
    ///
    /// # Errors
    ///
    /// Returns [`StateError::NotAPermutation`] if any symbol is outside
    /// `1..=4` or appears more than once.
    pub fn new(symbols: [u8; CELL_COUNT]) -> Result<Self, StateError> {
        let mut seen = [false; CELL_COUNT];
        for &s in &symbols {
            let slot = usize::from(s).wrapping_sub(1);
            if slot >= CELL_COUNT || seen[slot] {
                return Err(StateError::NotAPermutation {
                    symbols: symbols.to_vec(),
                });
            }
            seen[slot] = true;
        }
        Ok(Self(symbols))
    }

    /// The symbols in cell order.
    #[must_use]
    pub const fn symbols(&self) -> [u8; CELL_COUNT] {
        self.0
    }

    /// Whether this is the solved arrangement.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        *self == Self::GOAL
    }

    /// Return a copy with cells `a` and `b` exchanged.
    ///
    /// Any transposition of a permutation is a permutation, so no
    /// revalidation is needed.
    #[must_use]
    pub(crate) fn swapped(self, a: usize, b: usize) -> Self {
        let mut cells = self.0;
        cells.swap(a, b);
        Self(cells)
    }

    /// Number of out-of-order pairs.
    ///
    /// With adjacent swaps as the only moves, this is the minimum number of
    /// moves needed to reach [`LinearState::GOAL`].
    #[must_use]
    pub fn inversions(&self) -> usize {
        let mut count = 0;
        for i in 0..CELL_COUNT {
            for j in (i + 1)..CELL_COUNT {
                if self.0[i] > self.0[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// All 24 states in lexicographic order.
    #[must_use]
    pub fn all() -> Vec<Self> {
        let mut out = Vec::with_capacity(24);
        for a in 1..=4u8 {
            for b in 1..=4u8 {
                for c in 1..=4u8 {
                    for d in 1..=4u8 {
                        if let Ok(state) = Self::new([a, b, c, d]) {
                            out.push(state);
                        }
                    }
                }
            }
        }
        out
    }
}

impl SearchState for LinearState {
    fn check(&self) -> Result<(), String> {
        Self::new(self.0).map(|_| ()).map_err(|e| e.to_string())
    }
}

impl TryFrom<&[u8]> for LinearState {
    type Error = StateError;

    fn try_from(symbols: &[u8]) -> Result<Self, Self::Error> {
        let cells: [u8; CELL_COUNT] = symbols.try_into().map_err(|_| StateError::WrongLength {
            expected: CELL_COUNT,
            found: symbols.len(),
        })?;
        Self::new(cells)
    }
}

impl TryFrom<Vec<u8>> for LinearState {
    type Error = StateError;

    fn try_from(symbols: Vec<u8>) -> Result<Self, Self::Error> {
        Self::try_from(symbols.as_slice())
    }
}

impl From<LinearState> for Vec<u8> {
    fn from(state: LinearState) -> Self {
        state.0.to_vec()
    }
}

impl fmt::Display for LinearState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "[{a}, {b}, {c}, {d}]")
    }
}

impl fmt::Debug for LinearState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LinearState{self}")
    }
}
