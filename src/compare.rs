//! Comparing a whole expectation against a received response.
//!
//! Combines the body, header and status-code differences into a single
//! [`Report`]; an empty report means the response met the expectation.

use crate::diff::{diff_dicts, diff_values};
use crate::matcher::diff_strings;
use crate::types::{Diff, Expectation, Received, Report};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};

/// Reserved top-level report key for a status-code mismatch.
pub const STATUS_CODE_KEY: &str = "status_code";

/// Compare a received response against an expectation.
///
/// Pure and infallible: every mismatch, including a body that failed to
/// decode (surfaced upstream as an empty map), ends up as report entries
/// rather than an error.
pub fn compare(expectation: &Expectation, received: &Received) -> Report {
    let mut entries = diff_body(
        expectation.expected_body.as_ref(),
        expectation.body_strict,
        received.body.as_ref(),
    );

    entries.extend(diff_headers(
        expectation.expected_headers.as_ref(),
        &received.headers,
    ));

    if received.status != expectation.expected_status {
        entries.insert(
            STATUS_CODE_KEY.to_string(),
            Diff::Leaf(
                Value::from(expectation.expected_status),
                Value::from(received.status),
            ),
        );
    }

    Report { entries }
}

// ─── Body ───────────────────────────────────────────────────────────────────

/// Top-level body comparison.
///
/// With no received body, the whole expected body (if any) is the diff. With
/// no expected body, strict mode reports the whole received body and lenient
/// mode reports nothing. When both are present the expected side is diffed
/// against the received side as usual; strict mode additionally merges in
/// the reverse diff so received-only top-level keys are flagged too. Where
/// both directions report the same key, the forward entry wins.
fn diff_body(
    expected: Option<&Map<String, Value>>,
    strict: bool,
    actual: Option<&Map<String, Value>>,
) -> BTreeMap<String, Diff> {
    let Some(actual) = actual else {
        return match expected {
            None => BTreeMap::new(),
            Some(expected) => whole_map_as_diff(expected),
        };
    };

    let Some(expected) = expected else {
        if strict {
            return whole_map_as_diff(actual);
        }
        return BTreeMap::new();
    };

    let mut entries = BTreeMap::new();

    if strict {
        if let (Some(Diff::Object(reverse)), _) = diff_dicts(actual, Some(expected)) {
            entries.extend(reverse);
        }
    }

    if let (Some(Diff::Object(forward)), _) = diff_dicts(expected, Some(actual)) {
        entries.extend(forward);
    }

    entries
}

/// Report every entry of a map wholesale, as when the other side is absent.
fn whole_map_as_diff(map: &Map<String, Value>) -> BTreeMap<String, Diff> {
    map.iter()
        .map(|(key, value)| (key.clone(), Diff::Entire(value.clone())))
        .collect()
}

// ─── Headers ────────────────────────────────────────────────────────────────

/// Header comparison with case-insensitive keys.
///
/// Only expected headers are checked; extra received headers are never
/// reported, strict or not. Values go through the string matcher, so header
/// expectations can use `*` and `~` like body strings.
fn diff_headers(
    expected: Option<&HashMap<String, String>>,
    received: &HashMap<String, String>,
) -> BTreeMap<String, Diff> {
    let Some(expected) = expected.filter(|map| !map.is_empty()) else {
        return BTreeMap::new();
    };

    if received.is_empty() {
        return expected
            .iter()
            .map(|(key, value)| {
                (
                    key.to_lowercase(),
                    Diff::Entire(Value::String(value.clone())),
                )
            })
            .collect();
    }

    let received = lowercase_keys(received);

    let mut entries = BTreeMap::new();
    for (key, value) in expected {
        let key = key.to_lowercase();
        match received.get(&key) {
            None => {
                entries.insert(key, Diff::Entire(Value::String(value.clone())));
            }
            Some(received_value) => {
                let (sub_diff, _) = diff_strings(value, received_value);
                if let Some(sub_diff) = sub_diff {
                    entries.insert(key, sub_diff);
                }
            }
        }
    }

    entries
}

fn lowercase_keys(headers: &HashMap<String, String>) -> HashMap<String, String> {
    headers
        .iter()
        .map(|(key, value)| (key.to_lowercase(), value.clone()))
        .collect()
}

// ─── Values entry point ─────────────────────────────────────────────────────

/// Compare two standalone values outside the request/response framing.
///
/// Convenience wrapper over [`diff_values`] returning a report-shaped result:
/// `None` on a full match, the diff node otherwise.
pub fn compare_values(expected: &Value, actual: &Value) -> Option<Diff> {
    diff_values(expected, actual).0
}
