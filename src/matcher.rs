//! Wildcard-aware string matching.
//!
//! Expected strings may be patterns: `"*"` matches anything (including the
//! empty string), and a leading `~` turns the remainder into a
//! substring-containment test. Containment is symmetric so that either side
//! of a comparison can author the wildcard; received strings in practice
//! never contain one.

use crate::types::Diff;
use serde_json::Value;

/// Whether an expected string pattern matches a received string.
///
/// Rules, checked in order:
/// 1. either side is exactly `"*"` → match;
/// 2. `expected` starts with `~` → the remainder must be contained in `actual`;
/// 3. `actual` starts with `~` → the remainder must be contained in `expected`;
/// 4. otherwise the strings must be equal.
pub fn matches(expected: &str, actual: &str) -> bool {
    if expected == "*" || actual == "*" {
        return true;
    }
    if let Some(needle) = expected.strip_prefix('~') {
        return actual.contains(needle);
    }
    if let Some(needle) = actual.strip_prefix('~') {
        return expected.contains(needle);
    }
    expected == actual
}

/// Diff two strings under the wildcard rules.
///
/// A match costs nothing; a mismatch is reported as the pair of literals with
/// a fixed cost of 2 (one per string, regardless of length).
pub fn diff_strings(expected: &str, actual: &str) -> (Option<Diff>, usize) {
    if matches(expected, actual) {
        (None, 0)
    } else {
        (
            Some(Diff::Leaf(
                Value::String(expected.to_string()),
                Value::String(actual.to_string()),
            )),
            2,
        )
    }
}
