//! Distribution download.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

use crate::error::ProvisionError;
use crate::interrupt;

const CHUNK_SIZE: usize = 64 * 1024;
const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
/// Bounds a single socket read. Interrupted reads are restarted, so without it
/// a stalled server would keep the interrupt flag from being checked.
const READ_TIMEOUT: Duration = Duration::from_secs(30);

/// Streams `url` into `dest`. Returns the number of bytes written.
pub fn download(url: &str, dest: &Path, interrupted: &AtomicBool) -> Result<u64, ProvisionError> {
    println!("Downloading {}...", url);

    let agent = ureq::AgentBuilder::new()
        .timeout_connect(CONNECT_TIMEOUT)
        .timeout_read(READ_TIMEOUT)
        .build();
    let resp = agent.get(url).call().map_err(|e| match e {
        ureq::Error::Status(status, _) => ProvisionError::HttpStatus {
            url: url.to_string(),
            status,
        },
        other => ProvisionError::Http {
            url: url.to_string(),
            source: Box::new(other),
        },
    })?;
    tracing::debug!(
        status = resp.status(),
        content_length = resp.header("Content-Length").unwrap_or("-"),
        "distribution response"
    );

    let mut reader = resp.into_reader();
    let mut file = File::create(dest).map_err(ProvisionError::io("Failed to create", dest))?;
    let written = copy_interruptible(&mut reader, &mut file, dest, interrupted)?;

    tracing::info!(bytes = written, path = %dest.display(), "download complete");
    println!("Download complete.");
    Ok(written)
}

/// `io::copy` that gives up as soon as the interrupt flag is raised.
fn copy_interruptible<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    dest: &Path,
    interrupted: &AtomicBool,
) -> Result<u64, ProvisionError> {
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut total = 0u64;
    loop {
        if interrupt::is_set(interrupted) {
            return Err(ProvisionError::Interrupted);
        }
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(ProvisionError::io("Failed to download into", dest)(e)),
        };
        writer
            .write_all(&buf[..n])
            .map_err(ProvisionError::io("Failed to write", dest))?;
        total += n as u64;
    }
    writer
        .flush()
        .map_err(ProvisionError::io("Failed to write", dest))?;
    Ok(total)
}
