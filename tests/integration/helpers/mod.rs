//! Fake summarize binaries for integration tests
//!
//! Each [`FakeSummarize`] is a `/bin/sh` script in its own temp directory.
//! It records every argument (one per line) to `args`, then runs the body
//! given by the test. `--version` is answered before anything is recorded
//! and each answer is counted in `version_runs`.
//! Scripts only use shell builtins so they still work with a cleared
//! environment.

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use sumr::{Client, Config, MINIMUM_CLI_VERSION};

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Quote `s` for a single-quoted shell word.
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

pub struct FakeSummarize {
    dir: TempDir,
    path: PathBuf,
}

impl FakeSummarize {
    /// Script reporting `version` and then running `body`.
    pub fn with_version(version: &str, body: &str) -> Self {
        Self::script(&shell_quote(&format!("summarize {}", version)), body)
    }

    /// Script reporting the version held in environment variable `var`.
    pub fn with_env_version(var: &str, body: &str) -> Self {
        Self::script(&format!("\"summarize ${{{}}}\"", var), body)
    }

    /// `version_word` is echoed as-is, so it must already be a shell word.
    fn script(version_word: &str, body: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("summarize");
        let script = format!(
            "#!/bin/sh\n\
             DIR={dir}\n\
             if [ \"$1\" = \"--version\" ]; then\n  echo x >> \"$DIR/version_runs\"\n  echo {version}\n  exit 0\nfi\n\
             for a in \"$@\"; do printf '%s\\n' \"$a\" >> \"$DIR/args\"; done\n\
             {body}\n",
            dir = shell_quote(&dir.path().to_string_lossy()),
            version = version_word,
            body = body,
        );
        fs::write(&path, script).expect("Failed to write fake summarize");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod fake summarize");
        Self { dir, path }
    }

    /// Script that runs `body` and reports the minimum supported version.
    pub fn new(body: &str) -> Self {
        Self::with_version(MINIMUM_CLI_VERSION, body)
    }

    /// Script printing `json` on stdout and exiting 0.
    pub fn json(json: &str) -> Self {
        Self::new(&format!("printf '%s\\n' {}", shell_quote(json)))
    }

    /// Script printing a JSON fixture on stdout and exiting 0.
    pub fn fixture(name: &str) -> Self {
        Self::json(&load_fixture(name))
    }

    /// Script writing `stderr` and exiting with `code`.
    pub fn failing(code: i32, stderr: &str) -> Self {
        Self::new(&format!(
            "printf '%s\\n' {} >&2\nexit {}",
            shell_quote(stderr),
            code
        ))
    }

    /// Script printing each of `lines` and exiting 0.
    pub fn lines(lines: &[&str]) -> Self {
        let body: Vec<String> = lines
            .iter()
            .map(|l| format!("printf '%s\\n' {}", shell_quote(l)))
            .collect();
        Self::new(&body.join("\n"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Arguments of the last run, or empty if it never ran.
    pub fn recorded_args(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("args"))
            .map(|s| s.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    /// How many times `--version` was answered.
    pub fn version_runs(&self) -> usize {
        fs::read_to_string(self.dir.path().join("version_runs"))
            .map(|s| s.lines().count())
            .unwrap_or(0)
    }

    pub fn was_run(&self) -> bool {
        self.dir.path().join("args").exists()
    }

    /// Read a file the script wrote into its directory.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name))
            .unwrap_or_else(|_| panic!("Fake summarize did not write {}", name))
    }

    /// Config pointing at this script.
    pub fn config(&self) -> Config {
        let mut config = Config::default();
        config.set_binary_path(&self.path);
        config
    }

    pub fn client(&self) -> Client {
        Client::new(self.config())
    }

    /// Write a config file for the `sumr` binary pointing at this script.
    pub fn write_config_file(&self) -> PathBuf {
        let path = self.dir.path().join("config.toml");
        self.config().save_to(&path).expect("Failed to write config");
        path
    }
}
