//! Config structs grouped by concern, loaded from the environment.

use super::env_keys::observability as obv_keys;
use super::loader::{env_bool, env_or};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    pub quiet: bool,
    pub log_level: String,
    pub log_json: bool,
}

impl ObservabilityConfig {
    pub fn from_env() -> Self {
        Self {
            quiet: env_bool(obv_keys::GRADLE_SETUP_QUIET, false),
            log_level: env_or(obv_keys::GRADLE_SETUP_LOG_LEVEL, || {
                "gradle_setup=warn".to_string()
            }),
            log_json: env_bool(obv_keys::GRADLE_SETUP_LOG_JSON, false),
        }
    }

    /// Filter directive handed to `EnvFilter` when `RUST_LOG` is unset.
    pub fn filter_directive(&self) -> String {
        if self.quiet {
            "gradle_setup=warn,gradle_setup_core=warn".to_string()
        } else {
            self.log_level.clone()
        }
    }
}
