//! Scoped ownership of the downloaded archive and the scratch directory.

use std::fs;
use std::path::{Path, PathBuf};

/// Removes the archive and scratch directory when dropped, on every exit path
/// out of the provisioning steps. Removal failures are swallowed.
#[derive(Debug)]
pub struct ScratchGuard {
    archive: PathBuf,
    dir: PathBuf,
}

impl ScratchGuard {
    pub fn new(archive: PathBuf, dir: PathBuf) -> Self {
        Self { archive, dir }
    }

    pub fn archive(&self) -> &Path {
        &self.archive
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Drop for ScratchGuard {
    fn drop(&mut self) {
        println!("Cleaning up temporary files...");
        if self.archive.exists() {
            if let Err(e) = fs::remove_file(&self.archive) {
                tracing::debug!(path = %self.archive.display(), error = %e, "archive removal failed");
            }
        }
        if self.dir.exists() {
            if let Err(e) = fs::remove_dir_all(&self.dir) {
                tracing::debug!(path = %self.dir.display(), error = %e, "scratch removal failed");
            }
        }
        println!("Cleanup complete.");
    }
}
