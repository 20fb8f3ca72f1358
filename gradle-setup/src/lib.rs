//! gradle-setup: fetch a pinned Gradle distribution, run `gradle wrapper` in a
//! project, and leave nothing behind but the generated wrapper files.

pub mod cli;
pub mod config;
pub mod error;
pub mod interrupt;
pub mod platform;
pub mod provision;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::{ProvisionConfig, RuntimeProbe};
pub use error::ProvisionError;
pub use platform::HostPlatform;
pub use provision::{ProvisionRunner, RunOutcome};
