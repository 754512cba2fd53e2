//! Table loading errors.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that prevent a transition table from loading at all
#[derive(Debug, Error)]
pub enum LoadError {
    /// The table file could not be read
    #[error("failed to read transition table '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("missing accepting state identifier")]
    MissingAcceptState,

    #[error("could not parse accepting state identifier '{0}'")]
    InvalidAcceptState(String),

    #[error("invalid JSON transition table: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a single transition record fails to parse.
///
/// These never fail a load: the loader stops at the bad record and keeps
/// what it has read so far.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecordError {
    #[error("expected a source state, found '{0}'")]
    InvalidFrom(String),

    #[error("expected a target state, found '{0}'")]
    InvalidTo(String),

    #[error("record ends before its {0}")]
    Incomplete(&'static str),
}
