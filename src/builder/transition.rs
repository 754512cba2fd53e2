//! Builder for constructing transitions.

use crate::builder::error::BuildError;
use crate::core::{Slot, StateId, Trigger};
use crate::table::Transition;

/// Builder for constructing transitions with a fluent API.
///
/// The pop slot defaults to don't-care and the push list to empty.
///
/// # Example
///
/// ```rust
/// use pushdown::builder::TransitionBuilder;
/// use pushdown::core::{Slot, StateId};
///
/// let transition = TransitionBuilder::new()
///     .from(0)
///     .to(1)
///     .on('a')
///     .push(["-", "x"])
///     .build()
///     .unwrap();
///
/// assert_eq!(transition.to, StateId(1));
/// assert_eq!(transition.pop, Slot::DontCare);
/// assert_eq!(transition.pushes().collect::<Vec<_>>(), vec!["x"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TransitionBuilder {
    from: Option<StateId>,
    to: Option<StateId>,
    trigger: Option<Trigger>,
    pop: Option<Slot>,
    push: Vec<Slot>,
}

impl TransitionBuilder {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the source state (required).
    pub fn from(mut self, state: u32) -> Self {
        self.from = Some(StateId(state));
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: u32) -> Self {
        self.to = Some(StateId(state));
        self
    }

    /// Fire on an input character.
    pub fn on(mut self, symbol: char) -> Self {
        self.trigger = Some(Trigger::Symbol(symbol));
        self
    }

    /// Fire on a table token: `-` for epsilon, otherwise the token itself.
    pub fn on_token(mut self, token: &str) -> Self {
        self.trigger = Some(Trigger::from_token(token));
        self
    }

    /// Fire without consuming input.
    pub fn epsilon(mut self) -> Self {
        self.trigger = Some(Trigger::Epsilon);
        self
    }

    /// Require and pop this stack top; `-` means don't care.
    pub fn pop(mut self, symbol: &str) -> Self {
        self.pop = Some(Slot::from_token(symbol));
        self
    }

    /// Append push slots in push order; `-` entries are no-ops.
    pub fn push<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.push
            .extend(symbols.into_iter().map(|s| Slot::from_token(s.as_ref())));
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition, BuildError> {
        let from = self.from.ok_or(BuildError::MissingFromState)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;
        let trigger = self.trigger.ok_or(BuildError::MissingTrigger)?;

        Ok(Transition::new(
            from,
            to,
            trigger,
            self.pop.unwrap_or(Slot::DontCare),
            self.push,
        ))
    }
}
