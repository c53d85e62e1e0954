//! Installed CLI version detection and comparison.

use once_cell::sync::Lazy;
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::process::{Command, Stdio};
use std::str::FromStr;

static SEMVER_CORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\.(\d+)\.(\d+)").expect("valid version regex"));

/// `MAJOR.MINOR.PATCH`, compared numerically per component.
///
/// Pre-release and build suffixes are dropped when parsing, so
/// `0.10.0-beta.1` compares equal to `0.10.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CliVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl CliVersion {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl Ord for CliVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch).cmp(&(other.major, other.minor, other.patch))
    }
}

impl PartialOrd for CliVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CliVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for CliVersion {
    type Err = String;

    /// Parse the first `\d+.\d+.\d+` found anywhere in `s`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = SEMVER_CORE
            .captures(s)
            .ok_or_else(|| format!("no version number in '{}'", s.trim()))?;
        let part = |i: usize| {
            caps[i]
                .parse::<u64>()
                .map_err(|e| format!("invalid version component '{}': {}", &caps[i], e))
        };
        Ok(Self::new(part(1)?, part(2)?, part(3)?))
    }
}

/// Extract the first version-shaped substring from `--version` output.
///
/// Returns `None` for empty output or when nothing matches.
pub fn extract_version(output: &str) -> Option<String> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return None;
    }
    SEMVER_CORE
        .find(trimmed)
        .map(|m| m.as_str().to_string())
}

/// Run `command --version` and extract the version it reports.
///
/// `command` carries the binary and the environment of a real run, so the
/// version comes from the same setup. Any failure (spawn error, no match)
/// yields `None`.
pub fn detect_version(mut command: Command) -> Option<String> {
    let output = match command
        .arg("--version")
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
    {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(
                "version probe for {} failed: {}",
                command.get_program().to_string_lossy(),
                e
            );
            return None;
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    let version = extract_version(&stdout);
    tracing::debug!("detected summarize version: {:?}", version);
    version
}

/// Whether `installed` is strictly older than `required`.
///
/// Unparseable versions never count as too old.
pub fn is_older(installed: &str, required: &str) -> bool {
    match (installed.parse::<CliVersion>(), required.parse::<CliVersion>()) {
        (Ok(installed), Ok(required)) => installed < required,
        _ => false,
    }
}
