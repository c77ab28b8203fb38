//! Structural weight of a JSON value.

use serde_json::Value;

/// Recursive size of a value: every node counts as 1, containers additionally
/// count their children.
///
/// Empty containers therefore have size 1, same as a scalar. The metric
/// weights missing or extra branches in a diff and ranks candidate pairs
/// during list matching; a larger size means a bigger structural difference
/// when a whole subtree goes unmatched.
pub fn value_size(value: &Value) -> usize {
    match value {
        Value::Object(map) => 1 + map.values().map(value_size).sum::<usize>(),
        Value::Array(items) => 1 + items.iter().map(value_size).sum::<usize>(),
        _ => 1,
    }
}
