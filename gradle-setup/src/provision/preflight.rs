//! Companion runtime check. Never fatal.

use std::process::{Command, Stdio};

use crate::config::RuntimeProbe;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeStatus {
    Available,
    Missing { reason: String },
}

/// Runs the probe with all output discarded and warns when it does not succeed.
pub fn check_runtime(probe: &RuntimeProbe) -> RuntimeStatus {
    let result = Command::new(&probe.program)
        .args(&probe.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    let status = match result {
        Ok(s) if s.success() => RuntimeStatus::Available,
        Ok(s) => RuntimeStatus::Missing {
            reason: format!("`{}` exited with {}", probe.command_line(), s),
        },
        Err(e) => RuntimeStatus::Missing {
            reason: format!("could not run `{}`: {}", probe.command_line(), e),
        },
    };

    match &status {
        RuntimeStatus::Available => {
            tracing::debug!(probe = %probe.command_line(), "runtime probe succeeded");
        }
        RuntimeStatus::Missing { reason } => {
            tracing::debug!(%reason, "runtime probe failed");
            eprintln!("WARNING: Java (JDK) may not be on PATH. Gradle needs Java to run.");
        }
    }
    status
}
