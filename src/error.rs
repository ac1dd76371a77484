//! Typed errors raised by the phrase core.
//!
//! Application layers (document loading, CLI) wrap these in `anyhow` with context.

use thiserror::Error;

use crate::core::{OutputFormat, PhraseKind};

#[derive(Debug, Error)]
pub enum PhraseError {
    /// A value was set for a sub-key outside the phrase's fixed key set.
    #[error("unknown sub-key '{0}'")]
    UnknownSubKey(String),

    /// A quantity id did not name one of the plural categories.
    #[error("unknown quantity id '{0}'")]
    UnknownQuantity(String),

    /// The payload was not well-formed JSON or lacked a required field.
    #[error("failed to decode payload")]
    Decode(#[source] serde_json::Error),

    /// The payload describes a different kind of phrase.
    #[error("payload of class '{found}' cannot be imported into a {expected} phrase")]
    ClassMismatch {
        expected: PhraseKind,
        found: PhraseKind,
    },

    #[error("failed to encode payload")]
    Encode(#[source] serde_json::Error),

    /// The phrase has no rendering for the requested format.
    #[error("{kind} phrases cannot be rendered as {format}")]
    UnsupportedFormat {
        kind: PhraseKind,
        format: OutputFormat,
    },
}

pub type Result<T, E = PhraseError> = std::result::Result<T, E>;
