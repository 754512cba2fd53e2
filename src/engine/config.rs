//! Engine configuration.

use crate::core::StateId;
use serde::{Deserialize, Serialize};

/// Symbol seeded at the bottom of every fresh stack.
pub const DEFAULT_BOTTOM_MARKER: &str = "e";

/// Upper bound on epsilon moves within a single run.
pub const DEFAULT_EPSILON_LIMIT: usize = 10_000;

/// Settings fixed for the lifetime of an engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// State every run starts from
    pub initial_state: StateId,

    /// Symbol the stack is seeded with
    pub bottom_marker: String,

    /// Reset the stack to the bottom marker before each run.
    ///
    /// When `false` the stack left by one run (including a failed one) is
    /// the starting stack of the next, while the state still restarts.
    pub reset_stack_between_runs: bool,

    /// Maximum number of epsilon moves per run
    pub epsilon_limit: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_state: StateId::INITIAL,
            bottom_marker: DEFAULT_BOTTOM_MARKER.to_string(),
            reset_stack_between_runs: true,
            epsilon_limit: DEFAULT_EPSILON_LIMIT,
        }
    }
}
