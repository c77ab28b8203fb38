//! Caller-side context for the transport collaborator.
//!
//! The engine itself is pure; these types hold the state a test harness
//! shares across expectations — the base URL every expectation's path is
//! relative to, and a cache of auth tokens so each test run logs in once per
//! user. Both are explicit values owned by the caller, never process
//! globals.

use std::collections::HashMap;

const BASE_URL_ENV: &str = "BACKENDURL";
const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Configuration for resolving expectation URLs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Config {
            base_url: base_url.into(),
        }
    }

    /// Read the base URL from the `BACKENDURL` environment variable, falling
    /// back to `http://localhost:3000`.
    pub fn from_env() -> Self {
        Config {
            base_url: std::env::var(BASE_URL_ENV)
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Resolve an expectation's relative URL against the base URL.
    pub fn build_full_url(&self, url: &str) -> String {
        format!("{}{}", self.base_url, url)
    }
}

/// Cache of auth tokens keyed by credentials.
///
/// Avoids a login round-trip per test case. Clear it when the user database
/// changes incompatibly or when a test needs to exercise a real login.
#[derive(Clone, Debug, Default)]
pub struct AuthCache {
    tokens: HashMap<(String, String), String>,
}

impl AuthCache {
    pub fn new() -> Self {
        AuthCache::default()
    }

    pub fn get(&self, user: &str, password: &str) -> Option<&str> {
        self.tokens
            .get(&(user.to_string(), password.to_string()))
            .map(String::as_str)
    }

    pub fn insert(&mut self, user: &str, password: &str, token: &str) {
        self.tokens
            .insert((user.to_string(), password.to_string()), token.to_string());
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

/// Request headers carrying a bearer token, as produced by a login flow.
pub fn bearer_headers(token: &str) -> HashMap<String, String> {
    HashMap::from([("Authorization".to_string(), format!("Bearer {token}"))])
}
