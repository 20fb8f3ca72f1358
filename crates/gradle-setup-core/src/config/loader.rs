//! Env loading helpers
//!
//! Blank values count as unset everywhere, so `FOO=` in a shell profile never
//! overrides a default.

use std::env;

/// Trimmed value of `key`, or `None` when unset or blank.
pub fn env_optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Value of `key`, falling back to `default` when unset or blank.
pub fn env_or<F>(key: &str, default: F) -> String
where
    F: FnOnce() -> String,
{
    env_optional(key).unwrap_or_else(default)
}

/// Boolean flag: 0/false/no/off are false, any other non-blank value is true.
pub fn env_bool(key: &str, default: bool) -> bool {
    match env_optional(key) {
        Some(s) => !matches!(s.to_lowercase().as_str(), "0" | "false" | "no" | "off"),
        None => default,
    }
}
