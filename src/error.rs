//! Error types.

use std::num::ParseIntError;

/// Decoding hit an internal fault. Malformed directives are not errors; they decode as text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Grammar: {0}")]
    Grammar(String),
    #[error("Malformed parse tree: {0}")]
    Tree(String),
}

/// A query found a parameter value of the wrong shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
    #[error("Invalid mention id {value:?} in segment {index}: {source}")]
    InvalidMentionId {
        index: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Mention in segment {index} has no qq parameter")]
    MissingMentionId { index: usize },
}

/// Reading a OneBot event or array-format message failed.
#[derive(Debug, thiserror::Error)]
pub enum EventError {
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("Event has no string or array message field")]
    MissingMessage,
}
