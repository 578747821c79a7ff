//! Error types for dictionary loading and conversion.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything the library can fail with.
///
/// All variants are deterministic, local failures: callers should treat them
/// as fatal to the requested operation rather than retry.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The dictionary resource is missing or could not be opened.
    #[error("dictionary not found: {}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dictionary header lacks a required column, or a row is unreadable.
    #[error("malformed dictionary: {0}")]
    MalformedSchema(String),

    /// Input that is not valid UTF-8 text.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ConvertError {
    pub fn malformed_schema<S: Into<String>>(msg: S) -> Self {
        ConvertError::MalformedSchema(msg.into())
    }

    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        ConvertError::InvalidInput(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
