//! The pushdown automaton engine.
//!
//! A run has three phases:
//! - **Consumption**: every input character fires the first applicable
//!   transition for the current state, or the run fails
//! - **Epsilon closure**: epsilon transitions fire until none applies,
//!   bounded by [`EngineConfig::epsilon_limit`]
//! - **Verdict**: the reached state is compared with the accepting state
//!
//! The engine owns its stack. Whether the stack survives from one run to
//! the next is decided by [`EngineConfig::reset_stack_between_runs`].

mod config;
mod error;
mod machine;
mod outcome;

pub use config::{EngineConfig, DEFAULT_BOTTOM_MARKER, DEFAULT_EPSILON_LIMIT};
pub use error::RunError;
pub use machine::Pda;
pub use outcome::{LineOutcome, RunReport, RunSummary, Verdict};
