use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use gradle_setup::cli::Cli;
use gradle_setup::{interrupt, ProvisionConfig, ProvisionRunner};
use gradle_setup_core::observability;

fn main() -> Result<()> {
    let cli = Cli::parse();
    observability::init_tracing(cli.quiet);

    let project_dir = resolve_project_dir(cli.project_dir)?;
    interrupt::install_handler()?;

    let config = ProvisionConfig::new(project_dir);
    tracing::debug!(?config, "provisioning");
    let outcome = ProvisionRunner::new(config, interrupt::flag()).run();

    // Scratch files are already gone here: the guard lives inside `run`.
    std::process::exit(outcome.exit_code());
}

/// `--project-dir` (or GRADLE_SETUP_PROJECT_DIR), else the current directory.
/// Relative paths are anchored at the current directory so the launcher path
/// stays valid after the child changes directory.
fn resolve_project_dir(arg: Option<PathBuf>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let dir = match arg {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => cwd.join(dir),
        None => cwd,
    };
    if !dir.is_dir() {
        anyhow::bail!("Project directory {} does not exist", dir.display());
    }
    Ok(dir)
}
