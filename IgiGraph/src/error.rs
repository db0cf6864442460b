//! Error types for `IgiGraph`

use std::path::PathBuf;

use thiserror::Error;

/// The error type for `IgiGraph` operations.
///
/// Only conditions that abort a file live here. Skipped markers, short
/// payloads and unknown material codes are recoverable and are collected as
/// [`Diagnostic`](crate::formats::graph::Diagnostic) values instead.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The graph file could not be opened or read.
    #[error("cannot read graph file {}: {source}", path.display())]
    FileUnreadable {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    // ==================== Graph Format Errors ====================
    /// Positionally correlated columns disagree in length (strict mode only).
    #[error("field '{field}' has {found} values, expected {expected}")]
    InconsistentSequences {
        /// Name of the offending field descriptor.
        field: &'static str,
        /// Length of the reference column.
        expected: usize,
        /// Length actually found.
        found: usize,
    },

    /// Edge records were found without both endpoints (strict mode only).
    #[error("{count} edge record(s) are missing an endpoint")]
    IncompleteRecords {
        /// Number of records that could not form an edge.
        count: usize,
    },

    // ==================== Parsing Errors ====================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 conversion error.
    #[error("UTF-8 conversion error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The configuration file could not be parsed.
    #[error("invalid config {}: {message}", path.display())]
    ConfigParse {
        /// The configuration file path.
        path: PathBuf,
        /// The parser's message.
        message: String,
    },

    // ==================== File System Errors ====================
    /// Directory traversal error.
    #[error("directory walk error: {0}")]
    WalkDir(String),
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::WalkDir(err.to_string())
    }
}

/// A specialized Result type for `IgiGraph` operations.
pub type Result<T> = std::result::Result<T, Error>;
