//! Text transition-table format.
//!
//! A table is a whitespace-delimited token stream: the accepting state
//! identifier, then records of the form
//!
//! ```text
//! <from> <to> <trigger> <pop> [<push> ...] ;
//! ```
//!
//! Loading stops quietly at the end of input and, with a warning, at the
//! first record that does not start with two state indexes and two tokens.

use super::error::{LoadError, RecordError};
use super::transition::Transition;
use super::TransitionTable;
use crate::core::{Slot, StateId, Trigger, TERMINATOR};
use log::{debug, warn};

/// Where and why loading stopped early.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Truncation {
    /// One-based number of the record that failed to parse
    pub record: usize,
    pub reason: RecordError,
}

/// Outcome of a successful load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Number of records loaded
    pub records: usize,
    /// Set when a malformed record cut the table short
    pub stopped_at: Option<Truncation>,
}

impl LoadSummary {
    /// Whether every record in the source was loaded.
    pub fn is_complete(&self) -> bool {
        self.stopped_at.is_none()
    }
}

struct Record {
    transition: Transition,
    terminated: bool,
}

pub(crate) fn parse_table(text: &str) -> Result<(TransitionTable, LoadSummary), LoadError> {
    let mut tokens = text.split_whitespace();

    let accept = tokens.next().ok_or(LoadError::MissingAcceptState)?;
    let accept: StateId = accept
        .parse()
        .map_err(|_| LoadError::InvalidAcceptState(accept.to_string()))?;
    debug!("accepting state set to {accept}");

    let mut table = TransitionTable::new(accept);
    let mut summary = LoadSummary::default();

    loop {
        let number = summary.records + 1;
        match read_record(&mut tokens) {
            Ok(Some(record)) => {
                if !record.terminated {
                    warn!(
                        "record {number} ends without '{TERMINATOR}', closing it at end of input"
                    );
                }
                if let Trigger::Word(word) = &record.transition.trigger {
                    warn!(
                        "record {number} has multi-character trigger '{word}' which can never fire"
                    );
                }
                table.push(record.transition);
                summary.records += 1;
            }
            Ok(None) => break,
            Err(reason) => {
                warn!(
                    "stopped loading transitions at record {number}: {reason} ({} loaded)",
                    summary.records
                );
                summary.stopped_at = Some(Truncation {
                    record: number,
                    reason,
                });
                break;
            }
        }
    }

    debug!("loaded {} transition(s)", summary.records);
    Ok((table, summary))
}

/// Read one record, or `None` at a clean end of input.
fn read_record<'a, I>(tokens: &mut I) -> Result<Option<Record>, RecordError>
where
    I: Iterator<Item = &'a str>,
{
    let Some(from) = tokens.next() else {
        return Ok(None);
    };
    let from: StateId = from
        .parse()
        .map_err(|_| RecordError::InvalidFrom(from.to_string()))?;

    let to = tokens.next().ok_or(RecordError::Incomplete("target state"))?;
    let to: StateId = to
        .parse()
        .map_err(|_| RecordError::InvalidTo(to.to_string()))?;

    let trigger = tokens.next().ok_or(RecordError::Incomplete("trigger"))?;
    let pop = tokens.next().ok_or(RecordError::Incomplete("pop symbol"))?;

    let mut push = Vec::new();
    let mut terminated = false;
    for token in tokens.by_ref() {
        if token == TERMINATOR {
            terminated = true;
            break;
        }
        push.push(Slot::from_token(token));
    }

    Ok(Some(Record {
        transition: Transition::new(
            from,
            to,
            Trigger::from_token(trigger),
            Slot::from_token(pop),
            push,
        ),
        terminated,
    }))
}
