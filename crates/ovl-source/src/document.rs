//! Reading and writing configuration documents.
//!
//! Every source must parse as a JSON object; arrays and scalars at the top
//! level are rejected with an error naming the source. Output is
//! pretty-printed with keys in insertion order and a trailing newline.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use ovl_merge::Document;
use serde_json::Value;
use tracing::debug;

use crate::error::{SourceError, SourceResult};

/// Read and parse one document from `path`.
///
/// Distinguishes a missing file from an unreadable one, a parse failure
/// (carrying the underlying JSON error), and a well-formed file whose
/// top-level value is not an object.
pub fn read_document(path: &Path) -> SourceResult<Document> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => SourceError::Missing {
            path: path.to_path_buf(),
        },
        _ => SourceError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let value: Value = serde_json::from_str(&text).map_err(|source| SourceError::Malformed {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Object(document) => {
            debug!(path = %path.display(), keys = document.len(), "loaded document");
            Ok(document)
        }
        other => Err(SourceError::NotARecord {
            path: path.to_path_buf(),
            kind: kind_name(&other),
        }),
    }
}

/// Read several documents in order, failing fast on the first error.
///
/// The fold is all-or-nothing: if any source is missing or malformed no
/// document is returned, so no partial merge can be observed downstream.
pub fn read_documents(paths: &[PathBuf]) -> SourceResult<Vec<Document>> {
    paths.iter().map(|path| read_document(path)).collect()
}

/// Pretty-print a document with insertion-order keys and a trailing newline.
pub fn render(document: &Document) -> SourceResult<String> {
    let mut text = serde_json::to_string_pretty(document)
        .map_err(|e| SourceError::Serialization(e.to_string()))?;
    text.push('\n');
    Ok(text)
}

/// Render `document` and persist it at `path`.
pub fn write_document(path: &Path, document: &Document) -> SourceResult<()> {
    let text = render(document)?;
    fs::write(path, text).map_err(|source| SourceError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote merged document");
    Ok(())
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
