//! Observability: tracing init.
//!
//! Uses config::ObservabilityConfig for GRADLE_SETUP_QUIET, GRADLE_SETUP_LOG_LEVEL
//! and GRADLE_SETUP_LOG_JSON. `RUST_LOG` wins over all of them.

use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;

/// Initialize tracing. Call once at process startup.
///
/// `force_quiet` comes from the `--quiet` flag and behaves like GRADLE_SETUP_QUIET=1.
/// Log records go to stderr so they never interleave with the progress lines on stdout.
pub fn init_tracing(force_quiet: bool) {
    let mut cfg = ObservabilityConfig::from_env();
    cfg.quiet |= force_quiet;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.filter_directive()));

    let _ = if cfg.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()
    };
}
