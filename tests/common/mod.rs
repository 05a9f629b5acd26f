//! Shared utilities for integration tests.

use std::collections::HashMap;

use backend_config::config::keys::VARIABLES;

/// Build an in-memory environment from `(name, value)` pairs.
pub fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Names of every recognized variable, for clearing the process environment.
#[allow(dead_code)]
pub fn all_unset() -> Vec<(&'static str, Option<&'static str>)> {
    VARIABLES.iter().map(|spec| (spec.name, None)).collect()
}
