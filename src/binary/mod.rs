//! Locating the summarize binary and checking what is installed.
//!
//! # Discovery order
//!
//! 1. `which summarize` (`where` on Windows)
//! 2. Well-known install directories ([`FALLBACK_PATHS`])
//! 3. The bare command name, left for the OS launcher to resolve via PATH
//!
//! The bare name is special: it is never checked for executability up front,
//! since only the launcher knows what it resolves to.

mod cache;
mod version;

pub use cache::{Cached, ProbeCache};
pub use version::{detect_version, extract_version, is_older, CliVersion};

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Command name of the summarize CLI.
pub const BINARY_NAME: &str = "summarize";

/// Install locations probed when PATH lookup finds nothing.
pub const FALLBACK_PATHS: &[&str] = &["/usr/local/bin/summarize", "/opt/homebrew/bin/summarize"];

/// Whether `path` is the bare command name (resolved through PATH at spawn).
pub fn is_bare_command(path: &Path) -> bool {
    path == Path::new(BINARY_NAME)
}

/// Whether `path` is a regular file the current user may execute.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// Whether `path` is a regular file (Windows has no execute bit).
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Look up a command on PATH with the platform lookup tool.
///
/// Returns the first path printed by the tool, if any.
pub fn which(command: &str) -> Option<PathBuf> {
    #[cfg(windows)]
    let lookup_cmd = "where";
    #[cfg(not(windows))]
    let lookup_cmd = "which";

    let output = Command::new(lookup_cmd)
        .arg(command)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .map(PathBuf::from)
}

/// Pick the first usable candidate, falling back to the bare command name.
///
/// Split out from [`find_binary`] so the selection rule can be tested
/// without touching the real filesystem layout.
pub fn select_binary<I>(candidates: I) -> PathBuf
where
    I: IntoIterator<Item = PathBuf>,
{
    candidates
        .into_iter()
        .find(|p| !p.as_os_str().is_empty() && is_executable(p))
        .unwrap_or_else(|| PathBuf::from(BINARY_NAME))
}

/// Resolve the summarize binary using the discovery order above.
pub fn find_binary() -> PathBuf {
    let candidates = which(BINARY_NAME)
        .into_iter()
        .chain(FALLBACK_PATHS.iter().map(PathBuf::from));
    let found = select_binary(candidates);
    tracing::debug!("resolved summarize binary: {}", found.display());
    found
}
