//! Merge engine for Overlay.
//!
//! Combines a base configuration document with one or more overlay documents
//! via recursive deep merge. Records merge key-by-key, sequences and scalars
//! are replaced wholesale, and later overlays take precedence over earlier
//! ones and over the base.
//!
//! Everything in this crate is pure: no I/O, no shared state, and no error
//! type. The engine is total over well-formed documents and may be invoked
//! concurrently on independent document sets.
//!
//! # Key Types
//!
//! - [`Document`] -- An insertion-ordered JSON object, the unit of merging
//! - [`Merged`] -- One merge step: the combined document and its change count
//! - [`FoldReport`] -- A full overlay fold: merged document plus statistics

pub mod classify;
pub mod equal;
pub mod fold;
pub mod merge;

pub use classify::{as_record, is_mergeable_record};
pub use equal::deep_equal;
pub use fold::{fold_overlays, leaf_count, FoldReport};
pub use merge::{merge_documents, Merged};

/// A parsed configuration document: a mapping from string keys to JSON
/// values. Key order is insertion order and survives merging.
pub type Document = serde_json::Map<String, serde_json::Value>;
