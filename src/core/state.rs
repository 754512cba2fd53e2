//! State identifiers for pushdown automata.
//!
//! States are plain integer indexes. They are never declared up front: the
//! state set of an automaton is whatever its transitions (and its accepting
//! state) mention, and it is fixed once the table is loaded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Index of an automaton state.
///
/// The display label (`q0`, `q1`, ...) is derived from the index and carries
/// no weight during matching.
///
/// # Example
///
/// ```rust
/// use pushdown::core::StateId;
///
/// let state: StateId = "3".parse().unwrap();
/// assert_eq!(state, StateId(3));
/// assert_eq!(state.label(), "q3");
/// assert_eq!(StateId::INITIAL, StateId(0));
/// ```
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct StateId(pub u32);

impl StateId {
    /// The state every run starts from unless configured otherwise.
    pub const INITIAL: StateId = StateId(0);

    /// Get the raw index.
    pub fn index(self) -> u32 {
        self.0
    }

    /// Get the state's label for dumps and logging.
    pub fn label(self) -> String {
        format!("q{}", self.0)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StateId {
    fn from(index: u32) -> Self {
        StateId(index)
    }
}

impl FromStr for StateId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(StateId)
    }
}
