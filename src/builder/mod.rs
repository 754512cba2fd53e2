//! Builder API for ergonomic engine and transition construction.
//!
//! This module provides fluent builders for assembling automata in code
//! rather than from a table file.

pub mod error;
pub mod machine;
pub mod transition;

pub use error::BuildError;
pub use machine::PdaBuilder;
pub use transition::TransitionBuilder;

use crate::core::{Slot, StateId, Trigger};
use crate::table::Transition;

/// Create a transition from table tokens.
///
/// Tokens follow the text table conventions: `-` is epsilon as a trigger and
/// don't-care as a pop or push slot.
///
/// # Example
///
/// ```
/// use pushdown::builder::token_transition;
/// use pushdown::core::{Slot, Trigger};
///
/// let transition = token_transition(1, 2, "-", "x", &[]);
/// assert_eq!(transition.trigger, Trigger::Epsilon);
/// assert_eq!(transition.pop, Slot::Symbol("x".to_string()));
/// ```
pub fn token_transition(
    from: u32,
    to: u32,
    trigger: &str,
    pop: &str,
    push: &[&str],
) -> Transition {
    Transition::new(
        StateId(from),
        StateId(to),
        Trigger::from_token(trigger),
        Slot::from_token(pop),
        push.iter().map(|token| Slot::from_token(token)).collect(),
    )
}
