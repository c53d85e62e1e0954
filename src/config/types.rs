//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::binary::ProbeCache;
use crate::options::{Length, Options};

/// Client configuration.
///
/// Every field is optional in the TOML file:
///
/// ```toml
/// binary_path = "/opt/homebrew/bin/summarize"
/// default_model = "openai/gpt-5-mini"
/// default_length = "medium"
/// timeout = "3m"
/// retries = 2
///
/// [env]
/// OPENAI_API_KEY = "sk-..."
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Explicit path to the summarize binary (None = discover)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary_path: Option<PathBuf>,
    /// Model passed as `--model` unless the call sets one ("auto" = let the CLI pick)
    #[serde(default = "default_model")]
    pub default_model: String,
    /// CLI backend passed as `--cli`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_cli: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_length: Option<Length>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_language: Option<String>,
    /// Forwarded as `--timeout`; the CLI enforces it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    /// Forwarded as `--retries`; the CLI retries, this client never does
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retries: Option<u32>,
    /// Pass the ambient environment through to the subprocess
    #[serde(default = "default_inherit_env")]
    pub inherit_env: bool,
    /// Disable the minimum version gate
    #[serde(default)]
    pub skip_version_check: bool,
    /// Extra environment variables for the subprocess
    #[serde(default)]
    pub env: BTreeMap<String, String>,

    #[serde(skip)]
    pub(crate) resolved_binary: ProbeCache<PathBuf>,
    #[serde(skip)]
    pub(crate) detected_version: ProbeCache<Option<String>>,
}

pub const AUTO_MODEL: &str = "auto";

pub fn default_model() -> String {
    AUTO_MODEL.to_string()
}

pub fn default_inherit_env() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            binary_path: None,
            default_model: default_model(),
            default_cli: None,
            default_length: None,
            default_language: None,
            timeout: None,
            retries: None,
            env: BTreeMap::new(),
            inherit_env: default_inherit_env(),
            skip_version_check: false,
            resolved_binary: ProbeCache::new(),
            detected_version: ProbeCache::new(),
        }
    }
}

impl Config {
    /// Per-call defaults derived from this configuration.
    ///
    /// Only configured values appear; `default_model = "auto"` seeds nothing.
    pub fn default_options(&self) -> Options {
        let model = Some(self.default_model.as_str())
            .filter(|m| !m.is_empty() && *m != AUTO_MODEL)
            .map(str::to_string);

        Options {
            model,
            cli: self.default_cli.clone(),
            length: self.default_length,
            language: self.default_language.clone(),
            timeout: self.timeout.clone(),
            retries: self.retries,
            ..Options::default()
        }
    }

    /// Validate configuration values.
    ///
    /// Returns `Ok(())` if all values are acceptable, or a message describing
    /// the first invalid value found.
    pub fn validate(&self) -> Result<(), String> {
        if self.default_model.trim().is_empty() {
            return Err("default_model must not be empty (use \"auto\")".to_string());
        }
        if let Some(path) = &self.binary_path {
            if path.as_os_str().is_empty() {
                return Err("binary_path must not be empty".to_string());
            }
        }
        if let Some(r) = self.retries {
            if r > 10 {
                return Err(format!("retries {} exceeds maximum (10)", r));
            }
        }
        for key in self.env.keys() {
            if key.is_empty() || key.contains('=') || key.contains('\0') {
                return Err(format!("invalid environment variable name '{}'", key));
            }
        }
        Ok(())
    }
}
