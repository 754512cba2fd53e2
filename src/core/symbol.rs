//! Triggers and stack slots.
//!
//! Both are read from single tokens of a transition table, where the
//! reserved token `-` stands for "no input" in a trigger position and for
//! "don't care" in a stack position.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Reserved token for the epsilon trigger and the don't-care stack slot.
pub const DONT_CARE: &str = "-";

/// Reserved token closing a push list.
pub const TERMINATOR: &str = ";";

/// What a transition reacts to.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    /// Fires without consuming input.
    Epsilon,

    /// Fires on exactly this input character.
    Symbol(char),

    /// A multi-character token. Input is consumed one character at a time,
    /// so a word trigger is kept for display but never fires.
    Word(String),
}

impl Trigger {
    /// Read a trigger from a table token.
    ///
    /// ```rust
    /// use pushdown::core::Trigger;
    ///
    /// assert_eq!(Trigger::from_token("-"), Trigger::Epsilon);
    /// assert_eq!(Trigger::from_token("a"), Trigger::Symbol('a'));
    /// assert_eq!(Trigger::from_token("ab"), Trigger::Word("ab".to_string()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        if token == DONT_CARE {
            return Trigger::Epsilon;
        }
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Trigger::Symbol(symbol),
            _ => Trigger::Word(token.to_string()),
        }
    }

    /// The trigger an input character is matched against.
    ///
    /// Input is compared with table tokens, so a literal `-` in the input
    /// selects the rules written with the `-` trigger.
    ///
    /// ```rust
    /// use pushdown::core::Trigger;
    ///
    /// assert_eq!(Trigger::for_input('a'), Trigger::Symbol('a'));
    /// assert_eq!(Trigger::for_input('-'), Trigger::Epsilon);
    /// ```
    pub fn for_input(symbol: char) -> Self {
        let mut buf = [0; 4];
        Self::from_token(symbol.encode_utf8(&mut buf))
    }

    pub fn is_epsilon(&self) -> bool {
        matches!(self, Trigger::Epsilon)
    }

    /// Lookup key: `None` for epsilon, the character for a symbol trigger.
    /// Word triggers have no key.
    pub(crate) fn key(&self) -> Option<Option<char>> {
        match self {
            Trigger::Epsilon => Some(None),
            Trigger::Symbol(symbol) => Some(Some(*symbol)),
            Trigger::Word(_) => None,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::Epsilon => f.write_str(DONT_CARE),
            Trigger::Symbol(symbol) => write!(f, "{symbol}"),
            Trigger::Word(word) => f.write_str(word),
        }
    }
}

/// A pop or push position of a transition.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    /// No constraint when popping, no effect when pushing.
    DontCare,

    /// A concrete stack symbol.
    Symbol(String),
}

impl Slot {
    /// Read a slot from a table token, `-` being the don't-care marker.
    pub fn from_token(token: &str) -> Self {
        if token == DONT_CARE {
            Slot::DontCare
        } else {
            Slot::Symbol(token.to_string())
        }
    }

    /// The concrete symbol, if any.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Slot::DontCare => None,
            Slot::Symbol(symbol) => Some(symbol),
        }
    }

    pub fn is_dont_care(&self) -> bool {
        matches!(self, Slot::DontCare)
    }
}

impl From<&str> for Slot {
    fn from(token: &str) -> Self {
        Slot::from_token(token)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::DontCare => f.write_str(DONT_CARE),
            Slot::Symbol(symbol) => f.write_str(symbol),
        }
    }
}
