//! Per-run provisioning configuration.
//!
//! Everything the runner needs (tool, version, download location, file names)
//! lives in one value built at startup and passed in, so no step reads globals.

use std::path::PathBuf;

use crate::platform::HostPlatform;

pub const GRADLE_TOOL: &str = "gradle";
pub const GRADLE_VERSION: &str = "8.13";
pub const DISTRIBUTION_BASE: &str = "https://services.gradle.org/distributions";
pub const SCRATCH_DIR_NAME: &str = "gradle_temp";
pub const WRAPPER_SUBCOMMAND: &str = "wrapper";

/// Command used to check that the companion runtime is on PATH.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeProbe {
    pub program: String,
    pub args: Vec<String>,
}

impl RuntimeProbe {
    pub fn java() -> Self {
        Self {
            program: "java".to_string(),
            args: vec!["-version".to_string()],
        }
    }

    /// Display form, e.g. `java -version`.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone)]
pub struct ProvisionConfig {
    pub tool: String,
    pub version: String,
    /// Base URL of the distribution server, without trailing slash.
    pub distribution_base: String,
    pub scratch_name: String,
    pub subcommand: String,
    /// Where the archive and scratch dir are created and where the delegate runs.
    pub project_dir: PathBuf,
    pub runtime_probe: RuntimeProbe,
    pub platform: HostPlatform,
}

impl ProvisionConfig {
    /// Gradle 8.13 `-bin` distribution, provisioned into `project_dir`.
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            tool: GRADLE_TOOL.to_string(),
            version: GRADLE_VERSION.to_string(),
            distribution_base: DISTRIBUTION_BASE.to_string(),
            scratch_name: SCRATCH_DIR_NAME.to_string(),
            subcommand: WRAPPER_SUBCOMMAND.to_string(),
            project_dir: project_dir.into(),
            runtime_probe: RuntimeProbe::java(),
            platform: HostPlatform::current(),
        }
    }

    pub fn archive_name(&self) -> String {
        format!("{}-{}-bin.zip", self.tool, self.version)
    }

    pub fn distribution_url(&self) -> String {
        format!(
            "{}/{}",
            self.distribution_base.trim_end_matches('/'),
            self.archive_name()
        )
    }

    pub fn archive_path(&self) -> PathBuf {
        self.project_dir.join(self.archive_name())
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.project_dir.join(&self.scratch_name)
    }

    /// Top-level directory inside the archive, e.g. `gradle_temp/gradle-8.13`.
    pub fn unpacked_root(&self) -> PathBuf {
        self.scratch_dir()
            .join(format!("{}-{}", self.tool, self.version))
    }

    pub fn delegate_executable(&self) -> PathBuf {
        self.platform.launcher_path(&self.unpacked_root(), &self.tool)
    }
}
