//! Ctrl-C / SIGTERM handling.
//!
//! The handler only raises a flag. The runner polls it between steps, between
//! download chunks and between archive entries, so an interrupt always unwinds
//! through cleanup.

use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Process-wide interrupt flag set by the Ctrl-C handler.
pub fn flag() -> &'static AtomicBool {
    &INTERRUPTED
}

/// Installs the Ctrl-C handler (SIGINT/SIGTERM on Unix, console events on
/// Windows). Can only be installed once per process.
pub fn install_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        tracing::info!("Received Ctrl+C, stopping after the current step...");
        INTERRUPTED.store(true, Ordering::SeqCst);
    })
    .context("Failed to set Ctrl+C handler")
}

pub fn is_set(flag: &AtomicBool) -> bool {
    flag.load(Ordering::SeqCst)
}
