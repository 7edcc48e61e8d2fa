//! Structural classification: which values participate in deep merge.
//!
//! Only JSON objects are mergeable. Sequences are structurally composite but
//! atomic for merge purposes: an overlay sequence always replaces the base
//! value wholesale, never element-wise.

use serde_json::Value;

use crate::Document;

/// Returns `true` iff the value is a mergeable record (a JSON object).
///
/// Arrays, scalars, and null are atomic: the merge engine replaces them
/// outright instead of recursing.
///
/// # Examples
///
/// ```
/// use ovl_merge::is_mergeable_record;
/// use serde_json::json;
///
/// assert!(is_mergeable_record(&json!({"port": 8080})));
/// assert!(!is_mergeable_record(&json!([1, 2, 3])));
/// assert!(!is_mergeable_record(&json!(null)));
/// ```
pub fn is_mergeable_record(value: &Value) -> bool {
    as_record(value).is_some()
}

/// The record view of a value, or `None` when the value is atomic.
///
/// This is the form the merge engine consumes: matching on the returned
/// `Option` decides between recursion and wholesale replacement.
pub fn as_record(value: &Value) -> Option<&Document> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
