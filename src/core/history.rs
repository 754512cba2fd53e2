//! Run trace tracking.
//!
//! Records every transition fired during one run so callers can replay the
//! path an input took through the automaton.

use super::state::StateId;
use super::symbol::Trigger;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Record of a single fired transition.
///
/// # Example
///
/// ```rust
/// use pushdown::core::{StateId, Step, Trigger};
///
/// let step = Step {
///     from: StateId(0),
///     to: StateId(1),
///     trigger: Trigger::Symbol('a'),
///     popped: None,
///     pushed: vec!["x".to_string()],
/// };
/// assert_eq!(step.to_string(), "0 -> 1 on 'a', push 'x'");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// The state being left
    pub from: StateId,
    /// The state being entered
    pub to: StateId,
    /// What fired the transition
    pub trigger: Trigger,
    /// Symbol removed from the stack, if the transition popped
    pub popped: Option<String>,
    /// Symbols added to the stack, in push order
    pub pushed: Vec<String>,
}

impl Step {
    pub fn is_epsilon(&self) -> bool {
        self.trigger.is_epsilon()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.trigger {
            Trigger::Epsilon => write!(f, "{} -> {} on epsilon", self.from, self.to)?,
            trigger => write!(f, "{} -> {} on '{}'", self.from, self.to, trigger)?,
        }
        if let Some(popped) = &self.popped {
            write!(f, ", pop '{popped}'")?;
        }
        if !self.pushed.is_empty() {
            f.write_str(", push")?;
            for symbol in &self.pushed {
                write!(f, " '{symbol}'")?;
            }
        }
        Ok(())
    }
}

/// Ordered trace of the steps taken by one run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Create a new empty trace.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a fired step.
    pub fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the source state of the first step, then the target state of
    /// each step. An empty trace has an empty path.
    ///
    /// ```rust
    /// use pushdown::core::{StateId, Step, Trace, Trigger};
    ///
    /// let mut trace = Trace::new();
    /// for (from, to) in [(0, 1), (1, 2)] {
    ///     trace.record(Step {
    ///         from: StateId(from),
    ///         to: StateId(to),
    ///         trigger: Trigger::Epsilon,
    ///         popped: None,
    ///         pushed: Vec::new(),
    ///     });
    /// }
    /// assert_eq!(trace.path(), vec![StateId(0), StateId(1), StateId(2)]);
    /// ```
    pub fn path(&self) -> Vec<StateId> {
        let mut path = Vec::with_capacity(self.steps.len() + 1);
        if let Some(first) = self.steps.first() {
            path.push(first.from);
        }
        path.extend(self.steps.iter().map(|step| step.to));
        path
    }

    /// Get all steps in firing order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of epsilon moves in the trace.
    pub fn epsilon_moves(&self) -> usize {
        self.steps.iter().filter(|step| step.is_epsilon()).count()
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn clear(&mut self) {
        self.steps.clear();
    }
}
