//! Errors that abort a provisioning run.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Fatal provisioning errors. Non-fatal conditions (missing runtime, missing
/// launcher, failed wrapper task, cleanup trouble) are reported in place and
/// never become a `ProvisionError`.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// ureq's transport error already names the URL.
    #[error("Download failed: {source}")]
    Http {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("Download failed for {url}: server returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Extraction failed for {}: {source}", .path.display())]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Interrupted")]
    Interrupted,
}

impl ProvisionError {
    /// Builds a `map_err` adapter for I/O failures on `path`.
    pub(crate) fn io(op: &'static str, path: &Path) -> impl FnOnce(io::Error) -> Self {
        let path = path.to_path_buf();
        move |source| ProvisionError::Io { op, path, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_message_names_operation_and_path() {
        let err = ProvisionError::io("Failed to create", Path::new("gradle_temp"))(
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "Failed to create gradle_temp: denied");
    }

    #[test]
    fn test_status_message_names_url() {
        let err = ProvisionError::HttpStatus {
            url: "http://host/gradle-8.13-bin.zip".to_string(),
            status: 404,
        };
        assert!(err.to_string().contains("HTTP 404"));
        assert!(err.to_string().contains("http://host/gradle-8.13-bin.zip"));
    }
}
