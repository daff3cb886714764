//! Errors surfaced by the builders.

use thiserror::Error;

/// Failures that have a typed form. Everything else out of contract
/// (inverted bounds, nonsensical parts) is a caller bug.
#[derive(Debug, Error)]
pub enum BuilderError {
    #[error("Assembled timestamp {value:?} is not a valid date: {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: time::error::Parse,
    },

    #[error("Custom charset must contain at least one character")]
    EmptyCharset,
}
