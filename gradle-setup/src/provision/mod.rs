//! Provisioning pipeline: preflight, fetch, unpack, delegate, cleanup.
//!
//! Preflight and delegate failures are reported and the run carries on.
//! Fetch and unpack failures end the run with a non-zero exit code. In every
//! case, interrupts included, the scratch guard removes the archive and the
//! scratch directory before `run` returns.

pub mod delegate;
pub mod fetch;
pub mod preflight;
pub mod scratch;
pub mod unpack;

use std::sync::atomic::AtomicBool;

use crate::config::ProvisionConfig;
use crate::error::ProvisionError;
use crate::interrupt;

pub use delegate::DelegateOutcome;
pub use preflight::RuntimeStatus;
pub use scratch::ScratchGuard;

/// How a run ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// All steps ran; the delegate may still have failed (non-fatal).
    Completed(DelegateOutcome),
    /// Fetch or unpack failed.
    Fatal(ProvisionError),
    Interrupted,
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            RunOutcome::Completed(_) | RunOutcome::Interrupted => 0,
            RunOutcome::Fatal(_) => 1,
        }
    }
}

pub struct ProvisionRunner<'a> {
    config: ProvisionConfig,
    interrupted: &'a AtomicBool,
}

impl<'a> ProvisionRunner<'a> {
    pub fn new(config: ProvisionConfig, interrupted: &'a AtomicBool) -> Self {
        Self {
            config,
            interrupted,
        }
    }

    pub fn config(&self) -> &ProvisionConfig {
        &self.config
    }

    pub fn run(&self) -> RunOutcome {
        println!("Working directory: {}", self.config.project_dir.display());

        tracing::info!(step = "preflight", probe = %self.config.runtime_probe.command_line());
        preflight::check_runtime(&self.config.runtime_probe);

        let scratch = ScratchGuard::new(self.config.archive_path(), self.config.scratch_dir());
        let outcome = match self.provision(&scratch) {
            Ok(delegated) => RunOutcome::Completed(delegated),
            Err(e) if matches!(e, ProvisionError::Interrupted) || interrupt::is_set(self.interrupted) => {
                tracing::debug!(error = %e, "run interrupted");
                println!("\nProcess interrupted.");
                RunOutcome::Interrupted
            }
            Err(e) => {
                eprintln!("{}", e);
                RunOutcome::Fatal(e)
            }
        };
        drop(scratch);
        outcome
    }

    fn provision(&self, scratch: &ScratchGuard) -> Result<DelegateOutcome, ProvisionError> {
        self.checkpoint()?;
        let url = self.config.distribution_url();
        tracing::info!(step = "fetch", %url);
        fetch::download(&url, scratch.archive(), self.interrupted)?;

        self.checkpoint()?;
        tracing::info!(step = "unpack", dest = %scratch.dir().display());
        unpack::extract(scratch.archive(), scratch.dir(), self.interrupted)?;

        self.checkpoint()?;
        tracing::info!(step = "delegate", exe = %self.config.delegate_executable().display());
        let delegated = delegate::run_wrapper(&self.config);

        // A Ctrl-C while the launcher runs kills it and lands here.
        self.checkpoint()?;
        Ok(delegated)
    }

    fn checkpoint(&self) -> Result<(), ProvisionError> {
        if interrupt::is_set(self.interrupted) {
            Err(ProvisionError::Interrupted)
        } else {
            Ok(())
        }
    }
}
