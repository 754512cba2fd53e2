//! Build errors for engine and transition builders.

use thiserror::Error;

/// Errors that can occur when building engines and transitions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Transition trigger not specified. Call .on(symbol), .on_token(token) or .epsilon()")]
    MissingTrigger,

    #[error("Bottom marker must not be empty")]
    EmptyBottomMarker,

    #[error("Bottom marker '{0}' is a reserved token")]
    ReservedBottomMarker(String),

    #[error("Epsilon limit must be at least 1")]
    ZeroEpsilonLimit,
}
