//! Document I/O for Overlay.
//!
//! Reads configuration documents from disk, enforcing that every source
//! parses as a JSON object, and persists merged results pretty-printed with
//! insertion-order keys. The merge engine itself never sees raw bytes; all
//! fallible work lives here.
//!
//! # Key Types
//!
//! - [`SourceError`] -- The error taxonomy: missing, unreadable, malformed,
//!   or non-record input
//! - [`read_document`] / [`read_documents`] -- Parse sources into documents
//! - [`write_document`] / [`render`] -- Persist or pretty-print a document

pub mod document;
pub mod error;

pub use document::{read_document, read_documents, render, write_document};
pub use error::{SourceError, SourceResult};
