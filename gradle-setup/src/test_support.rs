//! Fixtures shared by the provisioning tests: a one-shot HTTP server and
//! in-memory zip archives.

use std::io::{Cursor, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use zip::write::FileOptions;

/// Serves a single HTTP response on an ephemeral port.
///
/// Returns the base URL (`http://127.0.0.1:<port>/dist`) and a handle that
/// yields the raw request text once the server has answered. Only join the
/// handle when the code under test is expected to connect.
pub(crate) fn serve_once(status_line: &'static str, body: Vec<u8>) -> (String, JoinHandle<String>) {
    serve_with(move |stream| {
        let _ = stream.write_all(&response_header(status_line, body.len()));
        let _ = stream.write_all(&body);
    })
}

/// Serves a 200 response whose body stalls halfway: the first `split_at`
/// bytes go out, then `flag` is raised, and the rest follows shortly after.
/// Models a Ctrl-C arriving in the middle of a download.
pub(crate) fn serve_interrupted_download(
    body: Vec<u8>,
    split_at: usize,
    flag: Arc<AtomicBool>,
) -> (String, JoinHandle<String>) {
    serve_with(move |stream| {
        let _ = stream.write_all(&response_header("200 OK", body.len()));
        let _ = stream.write_all(&body[..split_at]);
        let _ = stream.flush();
        flag.store(true, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(200));
        let _ = stream.write_all(&body[split_at..]);
    })
}

fn response_header(status_line: &str, len: usize) -> Vec<u8> {
    format!(
        "HTTP/1.1 {}\r\nContent-Type: application/zip\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status_line, len
    )
    .into_bytes()
}

fn serve_with<F>(respond: F) -> (String, JoinHandle<String>)
where
    F: FnOnce(&mut TcpStream) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server");
    let addr = listener.local_addr().expect("test server addr");
    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap_or(0);
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        respond(&mut stream);
        let _ = stream.flush();
        String::from_utf8_lossy(&request).into_owned()
    });
    (format!("http://{}/dist", addr), handle)
}

/// Builds a zip in memory. Names ending in `/` become directory entries.
pub(crate) fn zip_bytes(entries: &[(&str, &[u8], u32)]) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    for (name, data, mode) in entries {
        let options = FileOptions::default().unix_permissions(*mode);
        if name.ends_with('/') {
            writer.add_directory(*name, options).expect("add dir");
        } else {
            writer.start_file(*name, options).expect("start file");
            writer.write_all(data).expect("write entry");
        }
    }
    writer.finish().expect("finish zip").into_inner()
}

/// A Gradle-shaped distribution whose launcher records its first argument in
/// `wrapper-arg.txt` (in its working directory) and exits with `exit_code`.
pub(crate) fn fake_distribution(exit_code: i32) -> Vec<u8> {
    let script = format!(
        "#!/bin/sh\nprintf '%s' \"$1\" > wrapper-arg.txt\ntouch gradlew gradlew.bat\nexit {}\n",
        exit_code
    );
    zip_bytes(&[
        ("gradle-8.13/", b"", 0o755),
        ("gradle-8.13/bin/", b"", 0o755),
        // Stored without the exec bit so the delegate step has to add it.
        ("gradle-8.13/bin/gradle", script.as_bytes(), 0o644),
        ("gradle-8.13/bin/gradle.bat", b"@echo off\r\n", 0o644),
        ("gradle-8.13/lib/gradle-launcher-8.13.jar", b"PK", 0o644),
    ])
}

/// Like [`fake_distribution`], but the launcher touches `launcher-started`
/// and then sleeps, leaving a window to interrupt it.
pub(crate) fn slow_distribution() -> Vec<u8> {
    zip_bytes(&[(
        "gradle-8.13/bin/gradle",
        b"#!/bin/sh\ntouch launcher-started\nsleep 1\nexit 0\n",
        0o755,
    )])
}
