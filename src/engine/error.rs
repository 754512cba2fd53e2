//! Run errors.

use crate::core::StateId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that abort a single run
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunError {
    /// No applicable transition for the current state and input symbol.
    ///
    /// `blocked_by_stack` is set when rules for this state and symbol exist
    /// but none of their pop symbols matched the stack top.
    #[error("no transition from state {state} on symbol '{symbol}' (input position {position})")]
    NoTransition {
        state: StateId,
        symbol: char,
        position: usize,
        stack_top: Option<String>,
        blocked_by_stack: bool,
    },

    #[error("epsilon loop detected: more than {limit} epsilon moves, last in state {state}")]
    EpsilonLoop { state: StateId, limit: usize },
}

impl RunError {
    /// State the engine was in when the run failed.
    pub fn state(&self) -> StateId {
        match self {
            RunError::NoTransition { state, .. } | RunError::EpsilonLoop { state, .. } => *state,
        }
    }
}
