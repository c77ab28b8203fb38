use serde::{Deserialize, Serialize};
use std::fmt;

/// Error kind for suite parse failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
}

/// Produced by [`crate::parse::parse_suite`] when a YAML suite cannot be
/// turned into expectations.
///
/// The diff engine itself never produces errors: every failure mode it knows
/// about (type mismatch, missing container, undecodable body) is reported as
/// part of a [`crate::types::Report`] instead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ParseError {}
