use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

use crate::parse::decode_body;

// ─── Method ─────────────────────────────────────────────────────────────────

/// HTTP method of the request the expectation describes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

// ─── Expectation ────────────────────────────────────────────────────────────

/// The expected response to a REST request, plus the request description
/// itself (method, url, input body and headers) for whatever transport
/// collaborator performs the actual call.
///
/// Expected values are a lower bound on the response, not an exact schema:
/// keys and list items the expectation does not mention are ignored, and
/// expected strings may use the wildcard forms of [`crate::matcher`].
/// `body_strict` tightens the top level only — when set, keys present in the
/// received body but absent from `expected_body` are reported too.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Expectation {
    pub url: String,
    pub method: Method,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_headers: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_body: Option<Map<String, Value>>,
    pub body_strict: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_headers: Option<HashMap<String, String>>,
    pub expected_status: u16,
}

impl Default for Expectation {
    fn default() -> Self {
        Expectation {
            url: String::new(),
            method: Method::Get,
            params: None,
            input_headers: None,
            input_body: None,
            expected_body: None,
            body_strict: true,
            expected_headers: None,
            expected_status: 200,
        }
    }
}

// ─── Received ───────────────────────────────────────────────────────────────

/// What the transport collaborator actually received from the service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Received {
    pub status: u16,
    #[serde(default)]
    pub headers: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<Map<String, Value>>,
}

impl Received {
    /// Assemble a `Received` from the raw pieces of an HTTP response.
    ///
    /// The body is decoded leniently: malformed JSON or a non-object document
    /// degrades to an empty map rather than failing, so a comparison always
    /// runs to completion. Callers that need to distinguish a parse failure
    /// from a genuinely empty body must inspect the raw text themselves.
    pub fn from_parts(status: u16, headers: HashMap<String, String>, raw_body: &str) -> Self {
        Received {
            status,
            headers,
            body: Some(decode_body(raw_body)),
        }
    }
}

// ─── Diff ───────────────────────────────────────────────────────────────────

/// One node of a diff tree.
///
/// Serializes untagged so reports read naturally as JSON: `Missing` becomes
/// `null`, a `Leaf` becomes the two-element array `[expected, actual]`, and
/// containers nest.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Diff {
    /// A whole container was expected but the actual side is absent.
    /// Distinct from an empty container, which is a legitimate match.
    Missing,
    /// A leaf mismatch: the expected and actual fragments side by side.
    Leaf(Value, Value),
    /// A subtree reported wholesale: the expected subtree when a key is
    /// missing, or the actual value on a container type mismatch.
    Entire(Value),
    /// Per-key differences of a mapping. Keys only present on the actual
    /// side never appear here.
    Object(BTreeMap<String, Diff>),
    /// Differences of a sequence, in best-match order followed by leftover
    /// expected items paired with `null`.
    Array(Vec<Diff>),
}

// ─── Report ─────────────────────────────────────────────────────────────────

/// The merged outcome of comparing an [`Expectation`] against a [`Received`]:
/// body, header and status differences keyed by field name, with the status
/// difference (if any) under the reserved key `status_code`.
///
/// An empty report is the success condition; test code asserts
/// [`Report::is_match`].
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report {
    pub entries: BTreeMap<String, Diff>,
}

impl Report {
    /// True when nothing differed.
    pub fn is_match(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = serde_json::to_string_pretty(self).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}
