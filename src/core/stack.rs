//! The symbol stack.

use super::symbol::Slot;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Last-in-first-out sequence of stack symbols.
///
/// # Example
///
/// ```rust
/// use pushdown::core::SymbolStack;
///
/// let mut stack = SymbolStack::seeded("e");
/// stack.push("x");
/// assert_eq!(stack.top(), Some("x"));
/// assert_eq!(stack.depth(), 2);
/// assert_eq!(stack.to_string(), "'x' 'e'");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolStack {
    symbols: Vec<String>,
}

impl SymbolStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Create a stack holding only the bottom marker.
    pub fn seeded(bottom: impl Into<String>) -> Self {
        Self {
            symbols: vec![bottom.into()],
        }
    }

    pub fn top(&self) -> Option<&str> {
        self.symbols.last().map(String::as_str)
    }

    pub fn push(&mut self, symbol: impl Into<String>) {
        self.symbols.push(symbol.into());
    }

    pub fn pop(&mut self) -> Option<String> {
        self.symbols.pop()
    }

    pub fn depth(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether a pop slot accepts the current top.
    ///
    /// Don't-care always matches, even on an empty stack; a concrete symbol
    /// matches only a non-empty stack whose top equals it.
    pub fn matches(&self, slot: &Slot) -> bool {
        match slot {
            Slot::DontCare => true,
            Slot::Symbol(symbol) => self.top() == Some(symbol.as_str()),
        }
    }

    /// Iterate symbols from the top down.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter().rev().map(String::as_str)
    }

    /// Symbols from the bottom up.
    pub fn as_slice(&self) -> &[String] {
        &self.symbols
    }

    /// Drop everything and put the bottom marker back.
    pub fn reset_to(&mut self, bottom: &str) {
        self.symbols.clear();
        self.symbols.push(bottom.to_string());
    }
}

impl fmt::Display for SymbolStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("empty");
        }
        for (i, symbol) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "'{symbol}'")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_stack_holds_bottom_marker() {
        let stack = SymbolStack::seeded("e");
        assert_eq!(stack.depth(), 1);
        assert_eq!(stack.top(), Some("e"));
    }

    #[test]
    fn push_and_pop_are_lifo() {
        let mut stack = SymbolStack::new();
        stack.push("a");
        stack.push("b");
        assert_eq!(stack.pop().as_deref(), Some("b"));
        assert_eq!(stack.pop().as_deref(), Some("a"));
        assert_eq!(stack.pop(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn dont_care_matches_even_empty_stack() {
        assert!(SymbolStack::new().matches(&Slot::DontCare));
        assert!(SymbolStack::seeded("e").matches(&Slot::DontCare));
    }

    #[test]
    fn concrete_slot_matches_only_top() {
        let mut stack = SymbolStack::seeded("e");
        stack.push("x");
        assert!(stack.matches(&Slot::from("x")));
        assert!(!stack.matches(&Slot::from("e")));
        assert!(!SymbolStack::new().matches(&Slot::from("x")));
    }

    #[test]
    fn iter_walks_from_top() {
        let mut stack = SymbolStack::seeded("e");
        stack.push("a");
        stack.push("b");
        assert_eq!(stack.iter().collect::<Vec<_>>(), vec!["b", "a", "e"]);
        assert_eq!(stack.as_slice(), &["e", "a", "b"]);
    }

    #[test]
    fn reset_restores_bottom_marker() {
        let mut stack = SymbolStack::seeded("e");
        stack.push("a");
        stack.pop();
        stack.pop();
        stack.reset_to("Z");
        assert_eq!(stack.as_slice(), &["Z"]);
    }

    #[test]
    fn empty_stack_displays_as_empty() {
        assert_eq!(SymbolStack::new().to_string(), "empty");
    }
}
