//! Host platform families and the launcher each one uses.

use std::path::{Path, PathBuf};

/// Platform family, resolved once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    /// Launches through a `.bat` script.
    Windows,
    /// Everything else: a POSIX shell launcher that needs the exec bit.
    Unix,
}

/// Launcher location relative to the unpacked distribution root, per platform.
/// `{tool}` is replaced with the tool name.
const LAUNCHERS: &[(HostPlatform, &[&str])] = &[
    (HostPlatform::Windows, &["bin", "{tool}.bat"]),
    (HostPlatform::Unix, &["bin", "{tool}"]),
];

impl HostPlatform {
    pub fn current() -> Self {
        if cfg!(windows) {
            HostPlatform::Windows
        } else {
            HostPlatform::Unix
        }
    }

    /// Whether the launcher must be chmod'ed before it can be run.
    pub fn needs_exec_bit(self) -> bool {
        matches!(self, HostPlatform::Unix)
    }

    pub fn launcher_path(self, unpacked_root: &Path, tool: &str) -> PathBuf {
        let components = LAUNCHERS
            .iter()
            .find(|(platform, _)| *platform == self)
            .map(|(_, components)| *components)
            .unwrap_or(&[]);
        components
            .iter()
            .fold(unpacked_root.to_path_buf(), |path, component| {
                path.join(component.replace("{tool}", tool))
            })
    }
}
