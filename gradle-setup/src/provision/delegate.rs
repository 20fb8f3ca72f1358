//! Runs the unpacked launcher with the wrapper sub-command.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::ProvisionConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelegateOutcome {
    Succeeded,
    /// The launcher was not where the distribution layout puts it.
    MissingExecutable(PathBuf),
    /// The launcher could not be started or exited non-zero.
    Failed {
        exit_code: Option<i32>,
        detail: String,
    },
}

/// Runs `<launcher> <subcommand>` in the project directory with inherited stdio.
/// Every failure is reported here and returned as an outcome, never as an error.
pub fn run_wrapper(config: &ProvisionConfig) -> DelegateOutcome {
    let exe = config.delegate_executable();
    if !exe.exists() {
        eprintln!("Error: {} not found.", exe.display());
        return DelegateOutcome::MissingExecutable(exe);
    }

    if config.platform.needs_exec_bit() {
        if let Err(e) = make_executable(&exe) {
            tracing::warn!(path = %exe.display(), error = %e, "could not mark launcher executable");
        }
    }

    println!("Running command: {} {}", exe.display(), config.subcommand);
    let outcome = match Command::new(&exe)
        .arg(&config.subcommand)
        .current_dir(&config.project_dir)
        .status()
    {
        Ok(status) if status.success() => DelegateOutcome::Succeeded,
        Ok(status) => DelegateOutcome::Failed {
            exit_code: status.code(),
            detail: format!("`{} {}` returned {}", exe.display(), config.subcommand, status),
        },
        Err(e) => DelegateOutcome::Failed {
            exit_code: None,
            detail: format!("could not start {}: {}", exe.display(), e),
        },
    };

    match &outcome {
        DelegateOutcome::Succeeded => {
            println!("\nSUCCESS: 'gradlew' and 'gradlew.bat' generated.");
        }
        DelegateOutcome::Failed { detail, .. } => {
            eprintln!(
                "\nERROR: Failed to run gradle {}. Make sure Java (JDK) is installed and on PATH.\nDetail: {}",
                config.subcommand, detail
            );
        }
        DelegateOutcome::MissingExecutable(_) => {}
    }
    outcome
}

#[cfg(unix)]
fn make_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> std::io::Result<()> {
    Ok(())
}
