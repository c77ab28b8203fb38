//! Structural expectation-diff engine for REST API integration tests.
//!
//! An [`Expectation`] describes the response a test requires from a service:
//! an expected JSON body that may under-specify containers and use wildcard
//! strings, expected headers, and an expected status code. Some transport
//! collaborator performs the actual call and packs the result into a
//! [`Received`]; [`compare`] then explains every way the response fell short:
//!
//! ```text
//! Expectation ──┐
//!               ├── compare ──► Report (empty ⇔ match)
//! Received ─────┘
//! ```
//!
//! Extra data on the received side — object keys or list items the
//! expectation does not mention — is deliberately ignored, and lists are
//! matched without regard to order. The engine is pure and synchronous, and
//! it never fails: type mismatches, missing containers and undecodable
//! bodies are all reported as differences.
//!
//! # Quick Start
//!
//! ```rust
//! use restdiff::{compare, Expectation, Received};
//! use serde_json::json;
//!
//! let expectation = Expectation {
//!     url: "/dogs".to_string(),
//!     expected_body: json!({
//!         "dogs": [{"id": 1, "first_name": "Blacky"}],
//!     })
//!     .as_object()
//!     .cloned(),
//!     body_strict: false,
//!     ..Expectation::default()
//! };
//!
//! let received = Received::from_parts(
//!     200,
//!     Default::default(),
//!     r#"{"dogs": [{"id": 1, "first_name": "Blacky", "last_name": "Doggy"}],
//!         "total_item_count": 1}"#,
//! );
//!
//! let report = compare(&expectation, &received);
//! assert!(report.is_match());
//! ```

pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod matcher;
pub mod parse;
pub mod size;
pub mod types;

pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use compare::{compare, compare_values};
pub use diff::{diff_dicts, diff_lists, diff_values};
pub use matcher::matches;
pub use parse::{decode_body, parse_suite};
pub use size::value_size;
