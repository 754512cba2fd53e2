//! Builder for constructing engines.

use crate::builder::error::BuildError;
use crate::core::{StateId, DONT_CARE, TERMINATOR};
use crate::engine::{EngineConfig, Pda};
use crate::table::TransitionTable;

/// Builder for constructing engines with a fluent API.
///
/// Without a table the engine runs over an empty one, which rejects every
/// input.
#[derive(Clone, Debug, Default)]
pub struct PdaBuilder {
    table: Option<TransitionTable>,
    config: EngineConfig,
}

impl PdaBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transition table.
    pub fn table(mut self, table: TransitionTable) -> Self {
        self.table = Some(table);
        self
    }

    pub fn initial_state(mut self, state: u32) -> Self {
        self.config.initial_state = StateId(state);
        self
    }

    pub fn bottom_marker(mut self, symbol: impl Into<String>) -> Self {
        self.config.bottom_marker = symbol.into();
        self
    }

    /// Reset the stack before each run (default), or carry it over.
    pub fn reset_stack_between_runs(mut self, reset: bool) -> Self {
        self.config.reset_stack_between_runs = reset;
        self
    }

    /// Cap the number of epsilon moves per run.
    pub fn epsilon_limit(mut self, limit: usize) -> Self {
        self.config.epsilon_limit = limit;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the engine.
    /// Returns an error if the configuration is unusable.
    pub fn build(self) -> Result<Pda, BuildError> {
        let marker = self.config.bottom_marker.as_str();
        if marker.is_empty() {
            return Err(BuildError::EmptyBottomMarker);
        }
        if marker == DONT_CARE || marker == TERMINATOR {
            return Err(BuildError::ReservedBottomMarker(marker.to_string()));
        }
        if self.config.epsilon_limit == 0 {
            return Err(BuildError::ZeroEpsilonLimit);
        }

        Ok(Pda::with_config(self.table.unwrap_or_default(), self.config))
    }
}
