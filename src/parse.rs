//! Decoding inputs: YAML expectation suites and raw response bodies.

use crate::error::{ParseError, ParseErrorKind};
use crate::types::Expectation;
use serde_json::{Map, Value};

/// Parse a YAML suite into a list of expectations.
///
/// A suite is a YAML sequence of expectation records; any field a record
/// omits takes its default (`GET`, strict body, status 200). Suites let test
/// corpora be authored declaratively instead of in code.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input is empty, is not valid YAML, is not
/// a sequence at the root, or contains records that do not map onto
/// [`Expectation`].
pub fn parse_suite(input: &str) -> Result<Vec<Expectation>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError {
            kind: ParseErrorKind::Syntax,
            message: "empty input".to_string(),
        });
    }

    // Deserialize through serde_json::Value so YAML quirks are flattened
    // before the typed mapping.
    let value: Value = serde_saphyr::from_str(input).map_err(|e| ParseError {
        kind: ParseErrorKind::Syntax,
        message: e.to_string(),
    })?;

    if !value.is_array() {
        return Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: "suite root must be a YAML sequence".to_string(),
        });
    }

    serde_json::from_value(value).map_err(|e| ParseError {
        kind: ParseErrorKind::TypeMismatch,
        message: e.to_string(),
    })
}

/// Decode a response body leniently.
///
/// Malformed JSON and JSON whose root is not an object both degrade to an
/// empty map, so a comparison always runs: the subsequent diff then reports
/// every expected key as missing instead of the engine failing mid-test.
pub fn decode_body(raw: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
