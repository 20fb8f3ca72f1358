//! Archive extraction into the scratch directory.

use std::fs::{self, File};
use std::io;
use std::path::Path;
use std::sync::atomic::AtomicBool;

use crate::error::ProvisionError;
use crate::interrupt;

/// Extracts every entry of `archive_path` under `dest`, keeping the archive's
/// directory layout. Returns the number of file entries written.
///
/// Entries that would land outside `dest` (absolute names, `..`) are skipped.
/// The interrupt flag is checked before each entry.
pub fn extract(
    archive_path: &Path,
    dest: &Path,
    interrupted: &AtomicBool,
) -> Result<usize, ProvisionError> {
    println!("Extracting zip...");

    fs::create_dir_all(dest).map_err(ProvisionError::io("Failed to create", dest))?;
    let file = File::open(archive_path).map_err(ProvisionError::io("Failed to open", archive_path))?;
    let archive_err = |source| ProvisionError::Archive {
        path: archive_path.to_path_buf(),
        source,
    };
    let mut archive = zip::ZipArchive::new(file).map_err(archive_err)?;

    let mut written = 0usize;
    for i in 0..archive.len() {
        if interrupt::is_set(interrupted) {
            return Err(ProvisionError::Interrupted);
        }
        let mut entry = archive.by_index(i).map_err(archive_err)?;
        let Some(relative) = entry.enclosed_name().map(Path::to_path_buf) else {
            tracing::warn!(name = entry.name(), "skipping archive entry outside the target directory");
            continue;
        };
        let out_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(ProvisionError::io("Failed to create", &out_path))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(ProvisionError::io("Failed to create", parent))?;
        }
        let mut out_file =
            File::create(&out_path).map_err(ProvisionError::io("Failed to create", &out_path))?;
        io::copy(&mut entry, &mut out_file).map_err(ProvisionError::io("Failed to extract", &out_path))?;

        #[cfg(unix)]
        if let Some(mode) = entry.unix_mode() {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&out_path, fs::Permissions::from_mode(mode & 0o7777))
                .map_err(ProvisionError::io("Failed to set permissions on", &out_path))?;
        }
        written += 1;
    }

    tracing::info!(files = written, dest = %dest.display(), "extraction complete");
    println!("Extraction complete.");
    Ok(written)
}
