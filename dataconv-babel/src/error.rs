//! Error types for format operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, parsing or serializing a format
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Malformed source text, carrying the underlying parser diagnostic
    #[error("Parse error ({format}): {message}")]
    Parse { format: String, message: String },
    /// Value cannot be represented in the target format
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Source parsed but held no data
    #[error("Source document holds no data")]
    Empty,
    /// Reading or writing the file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl FormatError {
    pub(crate) fn parse(format: &str, message: impl ToString) -> Self {
        FormatError::Parse {
            format: format.to_string(),
            message: message.to_string(),
        }
    }
}

/// Fatal conversion failures. Load-side problems are reported through
/// [`crate::convert::Outcome`] instead.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Failed to save '{}': {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: FormatError,
    },
}
