//! The structural diff engine.
//!
//! Compares a partially-specified expected value against a received one and
//! explains every mismatch, while ignoring extra data on the received side.
//! Every operation returns the pair `(difference, cost)`: `None` for a full
//! match, otherwise a [`Diff`] node plus the scalar weight of the mismatch
//! (see [`crate::size`]). All functions are pure and never fail — a type
//! mismatch or a missing container is itself a reportable difference.

use crate::matcher::diff_strings;
use crate::size::value_size;
use crate::types::Diff;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

// ─── Value differ ───────────────────────────────────────────────────────────

/// Diff two values, dispatching on the type of the expected side.
///
/// When the expected side is a container and the received side is not, the
/// received value is reported wholesale and the cost is the combined size of
/// both subtrees. Scalars compare by value, with numbers compared
/// numerically so `1` equals `1.0`.
pub fn diff_values(expected: &Value, actual: &Value) -> (Option<Diff>, usize) {
    match expected {
        Value::Object(map) => match actual {
            Value::Object(actual_map) => diff_dicts(map, Some(actual_map)),
            _ => type_mismatch(expected, actual),
        },
        Value::Array(items) => match actual {
            Value::Array(actual_items) => diff_lists(items, Some(actual_items)),
            _ => type_mismatch(expected, actual),
        },
        Value::String(pattern) => match actual {
            Value::String(text) => diff_strings(pattern, text),
            _ => leaf_mismatch(expected, actual),
        },
        _ => {
            if scalars_equal(expected, actual) {
                (None, 0)
            } else {
                leaf_mismatch(expected, actual)
            }
        }
    }
}

fn type_mismatch(expected: &Value, actual: &Value) -> (Option<Diff>, usize) {
    (
        Some(Diff::Entire(actual.clone())),
        value_size(actual) + value_size(expected),
    )
}

fn leaf_mismatch(expected: &Value, actual: &Value) -> (Option<Diff>, usize) {
    (
        Some(Diff::Leaf(expected.clone(), actual.clone())),
        value_size(actual) + value_size(expected),
    )
}

/// Scalar equality with numeric coercion: integer 1 equals float 1.0.
///
/// Same-representation integers compare exactly, so values above 2^53 are
/// not conflated by the float fallback; only genuinely mixed int/float
/// pairs go through f64.
fn scalars_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            if let (Some(ix), Some(iy)) = (x.as_i64(), y.as_i64()) {
                return ix == iy;
            }
            if let (Some(ux), Some(uy)) = (x.as_u64(), y.as_u64()) {
                return ux == uy;
            }
            match (x.as_f64(), y.as_f64()) {
                (Some(fx), Some(fy)) => fx == fy,
                _ => x == y,
            }
        }
        _ => a == b,
    }
}

// ─── Dict differ ────────────────────────────────────────────────────────────

/// Diff two mappings key by key.
///
/// Keys present only on the received side are ignored: the expectation is a
/// lower bound on required fields, not an exact schema. A key missing from
/// the received side reports the whole expected subtree at the subtree's
/// size. An absent received mapping (as opposed to an empty one) yields
/// `(Missing, 1)`.
pub fn diff_dicts(
    expected: &Map<String, Value>,
    actual: Option<&Map<String, Value>>,
) -> (Option<Diff>, usize) {
    let Some(actual) = actual else {
        return (Some(Diff::Missing), 1);
    };

    let mut entries = BTreeMap::new();
    let mut cost = 0;

    for (key, value) in expected {
        match actual.get(key) {
            None => {
                cost += value_size(value);
                entries.insert(key.clone(), Diff::Entire(value.clone()));
            }
            Some(actual_value) => {
                let (sub_diff, sub_cost) = diff_values(value, actual_value);
                if let Some(sub_diff) = sub_diff {
                    cost += sub_cost;
                    entries.insert(key.clone(), sub_diff);
                }
            }
        }
    }

    if entries.is_empty() {
        (None, 0)
    } else {
        (Some(Diff::Object(entries)), cost)
    }
}

// ─── List differ ────────────────────────────────────────────────────────────

/// Diff two sequences without regard to order.
///
/// Extra received items are ignored, like extra mapping keys. Matching runs
/// in two phases so non-identical elements are never paired while an exact
/// counterpart is still available:
///
/// 1. each expected item, in order, claims the first received item it matches
///    perfectly, recording the cost of every imperfect pairing seen on the
///    way;
/// 2. the recorded pairings are sorted by `(cost, expected index, received
///    index)` and committed greedily, each side used at most once.
///
/// Expected items left over after both phases (the received sequence was
/// shorter) are reported as `(item, null)` at cost 1 each, in original order.
///
/// The greedy commit is a deliberate heuristic, not an optimal assignment:
/// it is O(n²), deterministic, and its exact pairing choices on ambiguous
/// input are part of the contract, since they decide which diffs get
/// reported.
pub fn diff_lists(expected: &[Value], actual: Option<&[Value]>) -> (Option<Diff>, usize) {
    let Some(actual) = actual else {
        return (Some(Diff::Missing), 1);
    };

    let mut expected_matched = vec![false; expected.len()];
    let mut actual_matched = vec![false; actual.len()];

    // Exact-match phase. Candidate pairings are recorded as
    // (cost, expected index, received index) for the best-fit phase.
    let mut candidates: Vec<(usize, usize, usize)> = Vec::new();
    for (ei, item) in expected.iter().enumerate() {
        for (ai, received) in actual.iter().enumerate() {
            if actual_matched[ai] {
                continue;
            }
            let (sub_diff, sub_cost) = diff_values(item, received);
            if sub_diff.is_none() {
                actual_matched[ai] = true;
                expected_matched[ei] = true;
                break;
            }
            candidates.push((sub_cost, ei, ai));
        }
    }

    // Best-fit phase: commit the cheapest remaining pairings first.
    candidates.sort_unstable();

    let mut entries = Vec::new();
    let mut cost = 0;
    for (_, ei, ai) in candidates {
        if expected_matched[ei] || actual_matched[ai] {
            continue;
        }
        let (sub_diff, sub_cost) = diff_values(&expected[ei], &actual[ai]);
        if let Some(sub_diff) = sub_diff {
            entries.push(sub_diff);
        }
        cost += sub_cost;
        expected_matched[ei] = true;
        actual_matched[ai] = true;
    }

    // Leftover phase: expected items with no received counterpart at all.
    for (ei, item) in expected.iter().enumerate() {
        if !expected_matched[ei] {
            entries.push(Diff::Leaf(item.clone(), Value::Null));
            cost += 1;
        }
    }

    if entries.is_empty() {
        (None, 0)
    } else {
        (Some(Diff::Array(entries)), cost)
    }
}
