//! Environment variable key constants, grouped by concern.

/// Logging
pub mod observability {
    pub const GRADLE_SETUP_QUIET: &str = "GRADLE_SETUP_QUIET";
    pub const GRADLE_SETUP_LOG_LEVEL: &str = "GRADLE_SETUP_LOG_LEVEL";
    pub const GRADLE_SETUP_LOG_JSON: &str = "GRADLE_SETUP_LOG_JSON";
}

/// Project location (read by the CLI through clap's `env` support)
pub mod paths {
    pub const GRADLE_SETUP_PROJECT_DIR: &str = "GRADLE_SETUP_PROJECT_DIR";
}
