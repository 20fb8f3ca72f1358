use std::path::PathBuf;

use clap::Parser;
use gradle_setup_core::config::env_keys::paths::GRADLE_SETUP_PROJECT_DIR;

/// gradle-setup - Generate the Gradle wrapper (gradlew) in a project without a local Gradle install
///
/// Downloads the Gradle 8.13 distribution next to the project, runs `gradle wrapper`
/// from it, and removes the download and the extracted files afterwards.
#[derive(Parser, Debug)]
#[command(name = "gradle-setup")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Project directory to generate the wrapper in (default: current directory)
    #[arg(long, value_name = "DIR", env = GRADLE_SETUP_PROJECT_DIR)]
    pub project_dir: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}
