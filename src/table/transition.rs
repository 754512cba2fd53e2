//! Transition rules.

use crate::core::{Slot, StateId, Step, SymbolStack, Trigger};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A rule moving the automaton from one state to another.
///
/// The pop slot is checked against the stack top before firing; the push
/// slots are pushed in listed order, so the last one ends on top.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transition {
    pub from: StateId,
    pub to: StateId,
    pub trigger: Trigger,
    pub pop: Slot,
    pub push: Vec<Slot>,
}

impl Transition {
    pub fn new(from: StateId, to: StateId, trigger: Trigger, pop: Slot, push: Vec<Slot>) -> Self {
        Self {
            from,
            to,
            trigger,
            pop,
            push,
        }
    }

    /// Check if this transition can fire against the given stack (pure)
    pub fn is_applicable(&self, stack: &SymbolStack) -> bool {
        stack.matches(&self.pop)
    }

    /// Apply the stack effect and describe what happened.
    ///
    /// Only call this after [`Transition::is_applicable`] returned `true`:
    /// a concrete pop slot removes the top unconditionally. Don't-care push
    /// slots are skipped.
    pub fn apply(&self, stack: &mut SymbolStack) -> Step {
        let popped = match self.pop {
            Slot::Symbol(_) => stack.pop(),
            Slot::DontCare => None,
        };
        let pushed: Vec<String> = self.pushes().map(str::to_owned).collect();
        for symbol in &pushed {
            stack.push(symbol.as_str());
        }
        Step {
            from: self.from,
            to: self.to,
            trigger: self.trigger.clone(),
            popped,
            pushed,
        }
    }

    /// Concrete symbols this transition pushes, in push order.
    pub fn pushes(&self) -> impl Iterator<Item = &str> {
        self.push.iter().filter_map(Slot::symbol)
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "from state {} to state {} on '{}' popping '{}' and pushing",
            self.from, self.to, self.trigger, self.pop
        )?;
        if self.push.is_empty() {
            return f.write_str(" nothing");
        }
        for slot in &self.push {
            write!(f, " '{slot}'")?;
        }
        Ok(())
    }
}
