//! Error types for the tweetscan library.
//!
//! Every fallible operation in the crate returns [`Result`]. Nothing is retried
//! and nothing is logged-and-continued: the first error aborts the call and is
//! handed back with enough context (path, line number, row number, HTTP status)
//! to diagnose it.

use std::path::PathBuf;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lexicon line is not `key<TAB>integer`.
    #[error("malformed lexicon entry on line {line}: {message}")]
    Format { line: usize, message: String },

    /// The requested text column is absent from a corpus row.
    #[error("column '{column}' missing from row {row}")]
    Column { column: String, row: usize },

    /// Invalid caller input, such as an unknown aggregation mode or missing credentials.
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("malformed corpus file: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("Twitter API error for operation '{operation}' ({status})")]
    Api {
        operation: String,
        status: reqwest::StatusCode,
    },

    #[error("invalid JSON in API response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
