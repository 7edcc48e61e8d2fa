//! Structural value equality.
//!
//! Used by the merge engine to decide whether an overlay value actually
//! changes the base value. Change counting depends on this; merge
//! correctness does not.

use serde_json::Value;

/// Compare two values structurally.
///
/// - Primitives compare by value; null is equal only to null.
/// - Values of differing kind are never equal.
/// - Sequences are equal iff they have the same length and every element is
///   pairwise deep-equal, order-sensitive.
/// - Records are equal iff they have the same key set (order-insensitive)
///   and every value is pairwise deep-equal.
///
/// Recursion is unbounded; documents are assumed acyclic.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| deep_equal(x, y)))
        }
        _ => false,
    }
}
