//! Error types for document sources.

use std::path::PathBuf;

/// Errors raised while loading or persisting configuration documents.
///
/// Each variant names the offending source so failures are attributable
/// when several inputs are in play.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The source file does not exist.
    #[error("missing input: {}", .path.display())]
    Missing { path: PathBuf },

    /// The source file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The source content is not valid JSON.
    #[error("malformed input {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The source parsed, but its top-level value is not an object.
    #[error("invalid input {}: top-level value is {kind}, expected an object", .path.display())]
    NotARecord { path: PathBuf, kind: &'static str },

    /// Writing the output file failed.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing a document failed.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience alias for source results.
pub type SourceResult<T> = Result<T, SourceError>;
