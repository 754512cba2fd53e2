//! Transition tables.
//!
//! A table is the fixed rule set of an automaton plus its single accepting
//! state. Rules keep their load order, and lookups return candidates in that
//! order, so the first applicable candidate always wins.
//!
//! # Example
//!
//! ```rust
//! use pushdown::core::StateId;
//! use pushdown::table::TransitionTable;
//!
//! let (table, summary) = TransitionTable::parse("1\n0 1 a - ;").unwrap();
//! assert_eq!(summary.records, 1);
//! assert!(table.is_accepting(StateId(1)));
//! assert_eq!(table.candidates(StateId(0), Some('a')).count(), 1);
//! ```

mod error;
mod parser;
mod transition;

pub use error::{LoadError, RecordError};
pub use parser::{LoadSummary, Truncation};
pub use transition::Transition;

use crate::core::{StateId, SymbolStack, Trigger};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::fs;
use std::path::Path;

/// Immutable-after-load rule set with its accepting state.
///
/// Candidates are indexed by (state, input character) with `None` standing
/// for epsilon; each index entry lists rule positions in insertion order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(from = "TableRepr", into = "TableRepr")]
pub struct TransitionTable {
    accept_state: Option<StateId>,
    transitions: Vec<Transition>,
    index: HashMap<(StateId, Option<char>), Vec<usize>>,
}

/// Serialized shape of a table; the index is rebuilt on load.
#[derive(Serialize, Deserialize)]
struct TableRepr {
    accept_state: Option<StateId>,
    #[serde(default)]
    transitions: Vec<Transition>,
}

impl From<TableRepr> for TransitionTable {
    fn from(repr: TableRepr) -> Self {
        TransitionTable::from_transitions(repr.accept_state, repr.transitions)
    }
}

impl From<TransitionTable> for TableRepr {
    fn from(table: TransitionTable) -> Self {
        TableRepr {
            accept_state: table.accept_state,
            transitions: table.transitions,
        }
    }
}

impl TransitionTable {
    /// Create an empty table accepting in `accept_state`.
    pub fn new(accept_state: StateId) -> Self {
        Self {
            accept_state: Some(accept_state),
            ..Self::default()
        }
    }

    /// Build a table from rules in priority order.
    pub fn from_transitions(
        accept_state: Option<StateId>,
        transitions: impl IntoIterator<Item = Transition>,
    ) -> Self {
        let mut table = Self {
            accept_state,
            ..Self::default()
        };
        for transition in transitions {
            table.push(transition);
        }
        table
    }

    /// Parse the text table format.
    pub fn parse(text: &str) -> Result<(Self, LoadSummary), LoadError> {
        parser::parse_table(text)
    }

    /// Parse a JSON table.
    pub fn from_json(text: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a table file. Files ending in `.json` are read as JSON, anything
    /// else as the text format.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, LoadSummary), LoadError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        if path.extension().is_some_and(|ext| ext == "json") {
            let table = Self::from_json(&text)?;
            let summary = LoadSummary {
                records: table.len(),
                stopped_at: None,
            };
            Ok((table, summary))
        } else {
            Self::parse(&text)
        }
    }

    /// Append a rule with the lowest priority so far.
    pub fn push(&mut self, transition: Transition) {
        let position = self.transitions.len();
        if let Some(key) = transition.trigger.key() {
            self.index
                .entry((transition.from, key))
                .or_default()
                .push(position);
        }
        self.transitions.push(transition);
    }

    pub fn accept_state(&self) -> Option<StateId> {
        self.accept_state
    }

    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accept_state == Some(state)
    }

    /// All rules in load order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Rules leaving `state` on `symbol` (`None` for epsilon), in load order.
    pub fn candidates(
        &self,
        state: StateId,
        symbol: Option<char>,
    ) -> impl Iterator<Item = &Transition> {
        self.index
            .get(&(state, symbol))
            .into_iter()
            .flatten()
            .map(|&position| &self.transitions[position])
    }

    /// The first candidate whose pop slot accepts the stack.
    pub fn first_applicable(
        &self,
        state: StateId,
        symbol: Option<char>,
        stack: &SymbolStack,
    ) -> Option<&Transition> {
        self.candidates(state, symbol)
            .find(|transition| transition.is_applicable(stack))
    }

    /// Whether any rule leaves `state` on `trigger`, regardless of the stack.
    ///
    /// Diagnostic only; it scans the whole table.
    pub fn has_transition(&self, state: StateId, trigger: &Trigger) -> bool {
        self.transitions
            .iter()
            .any(|transition| transition.from == state && transition.trigger == *trigger)
    }

    /// Every state the table mentions, including the accepting state.
    pub fn states(&self) -> BTreeSet<StateId> {
        self.transitions
            .iter()
            .flat_map(|transition| [transition.from, transition.to])
            .chain(self.accept_state)
            .collect()
    }
}

impl PartialEq for TransitionTable {
    fn eq(&self, other: &Self) -> bool {
        self.accept_state == other.accept_state && self.transitions == other.transitions
    }
}

impl Eq for TransitionTable {}

impl fmt::Display for TransitionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.accept_state {
            Some(state) => writeln!(f, "accepting state: {state}")?,
            None => writeln!(f, "accepting state: none")?,
        }
        writeln!(f, "transitions:")?;
        for transition in &self.transitions {
            writeln!(f, "  {transition}")?;
        }
        Ok(())
    }
}
