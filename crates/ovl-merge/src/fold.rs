//! Sequential composition of overlays and merge statistics.
//!
//! Overlays are folded left-to-right onto the base, so later overlays take
//! precedence over earlier ones. Per-overlay change counts are collected in
//! sequence order for reporting.

use serde::Serialize;

use crate::classify::as_record;
use crate::merge::merge_documents;
use crate::Document;

/// The outcome of folding a sequence of overlays onto a base document.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FoldReport {
    /// The fully merged document.
    pub document: Document,
    /// Change count contributed by each overlay, in application order.
    pub overlay_changes: Vec<usize>,
    /// Sum of all per-overlay change counts.
    pub total_changes: usize,
    /// Leaf count of the base, measured before any overlay is applied.
    pub base_leaves: usize,
    /// `base_leaves` minus `total_changes`. Negative when overlays introduce
    /// keys absent from the base: those inflate the change count but are not
    /// part of the base leaf denominator.
    pub untouched: i64,
}

/// Count key occurrences at every nesting level of a document.
///
/// Each key counts once; a record-valued key additionally contributes the
/// count of its children. `{"a": {"x": 1, "y": 2}, "b": 5}` has 4 leaves.
pub fn leaf_count(document: &Document) -> usize {
    document
        .values()
        .map(|value| match as_record(value) {
            Some(nested) => 1 + leaf_count(nested),
            None => 1,
        })
        .sum()
}

/// Fold `overlays` onto `base` left-to-right.
///
/// Equivalent to chaining [`merge_documents`] pairwise: the result of each
/// step becomes the base of the next. An empty overlay list returns the
/// base unchanged with zero changes.
pub fn fold_overlays(base: Document, overlays: &[Document]) -> FoldReport {
    let base_leaves = leaf_count(&base);
    let mut document = base;
    let mut overlay_changes = Vec::with_capacity(overlays.len());

    for overlay in overlays {
        let merged = merge_documents(&document, overlay);
        overlay_changes.push(merged.changes);
        document = merged.document;
    }

    let total_changes = overlay_changes.iter().sum();
    FoldReport {
        document,
        overlay_changes,
        total_changes,
        base_leaves,
        untouched: base_leaves as i64 - total_changes as i64,
    }
}
