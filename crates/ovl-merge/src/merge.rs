//! Recursive deep merge of two documents.
//!
//! The overlay is applied key-by-key onto a copy of the base. When both
//! sides of a key hold mergeable records the merge recurses; in every other
//! case the overlay value wins wholesale. A wholesale replacement counts as
//! one change when the incoming value is not deep-equal to the prior one,
//! regardless of how many leaves the incoming subtree contains.

use serde_json::Value;

use crate::classify::as_record;
use crate::equal::deep_equal;
use crate::Document;

/// The outcome of one merge step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Merged {
    /// The combined document.
    pub document: Document,
    /// How many leaf assignments differed from the base, by deep equality.
    pub changes: usize,
}

/// Merge `overlay` onto `base`, producing a new document.
///
/// Neither input is mutated. Keys present only in the base are retained
/// untouched and never counted. Keys present only in the overlay always
/// count as one change each. A key present in both counts as changed only
/// when the values differ by [`deep_equal`]; re-specifying an identical
/// value is a no-op for counting purposes.
///
/// Merged keys keep the base's insertion order; keys new to the overlay are
/// appended in overlay order.
///
/// # Examples
///
/// ```
/// use ovl_merge::{as_record, merge_documents};
/// use serde_json::json;
///
/// let base = json!({"a": {"x": 1, "y": 2}, "b": 5});
/// let overlay = json!({"a": {"y": 3, "z": 4}});
/// let merged = merge_documents(
///     as_record(&base).unwrap(),
///     as_record(&overlay).unwrap(),
/// );
/// assert_eq!(merged.document, *as_record(&json!({"a": {"x": 1, "y": 3, "z": 4}, "b": 5})).unwrap());
/// assert_eq!(merged.changes, 2);
/// ```
pub fn merge_documents(base: &Document, overlay: &Document) -> Merged {
    let mut document = base.clone();
    let mut changes = 0;

    for (key, incoming) in overlay {
        let merged = match (base.get(key).and_then(as_record), as_record(incoming)) {
            // Both sides are records: recurse and adopt the nested result.
            (Some(prior), Some(patch)) => {
                let nested = merge_documents(prior, patch);
                changes += nested.changes;
                Value::Object(nested.document)
            }
            // Everything else replaces wholesale. An absent base key is
            // never equal to a present overlay value.
            _ => {
                if !base
                    .get(key)
                    .is_some_and(|prior| deep_equal(prior, incoming))
                {
                    changes += 1;
                }
                incoming.clone()
            }
        };
        document.insert(key.clone(), merged);
    }

    Merged { document, changes }
}
