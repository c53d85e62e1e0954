//! Configuration management for sumr
//!
//! [`Config`] is a plain value: construct one per [`crate::Client`] for
//! isolation, or use the process-wide default through [`configuration`],
//! [`configure`] and [`reset_configuration`].

mod global;
mod io;
mod types;

pub use global::{configuration, configure, reset_configuration};
pub(crate) use global::resolved_configuration;
pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::binary::{self, Cached};

impl Config {
    /// Get the config file path (~/.config/sumr/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/sumr)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path, or defaults if it is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// Path of the summarize binary to launch.
    ///
    /// An explicit `binary_path` wins; otherwise the result of discovery is
    /// cached until [`Config::invalidate_binary_path`].
    pub fn resolved_binary_path(&self) -> PathBuf {
        if let Some(path) = &self.binary_path {
            return path.clone();
        }
        self.resolved_binary.get_or_resolve(binary::find_binary)
    }

    /// Set an explicit binary path. Cached probes are dropped.
    pub fn set_binary_path(&mut self, path: impl Into<PathBuf>) {
        self.binary_path = Some(path.into());
        self.invalidate_binary_path();
        self.invalidate_cli_version();
    }

    /// Forget the discovered binary path.
    pub fn invalidate_binary_path(&self) {
        self.resolved_binary.invalidate();
    }

    /// Installed CLI version, detected on first use via `--version`.
    ///
    /// `None` when detection fails or prints no version number.
    pub fn cli_version(&self) -> Option<String> {
        self.detected_version
            .get_or_resolve(|| binary::detect_version(self.command(&self.resolved_binary_path())))
    }

    /// Seed (or clear) the cached version without running the binary.
    pub fn set_cli_version(&self, version: Option<String>) {
        self.detected_version.set(version);
    }

    /// Whether the version has been probed yet.
    pub fn cli_version_cached(&self) -> bool {
        matches!(self.detected_version.peek(), Cached::Resolved(_))
    }

    /// Forget the detected version.
    pub fn invalidate_cli_version(&self) {
        self.detected_version.invalidate();
    }

    /// Command for `program` with the configured environment applied.
    pub(crate) fn command(&self, program: &Path) -> Command {
        let mut cmd = Command::new(program);
        if !self.inherit_env {
            cmd.env_clear();
        }
        cmd.envs(&self.env);
        cmd
    }

    /// Add an environment variable for the subprocess
    pub fn set_env(&mut self, key: impl Into<String>, value: impl ToString) {
        self.env.insert(key.into(), value.to_string());
    }
}
