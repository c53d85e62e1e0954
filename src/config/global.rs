//! Process-wide default configuration.
//!
//! A convenience for applications that configure once at startup. Clients
//! built with [`crate::Client::default`] snapshot this value after resolving
//! its binary path and version in place; clients built with
//! [`crate::Client::new`] never look at it.

use once_cell::sync::Lazy;
use std::sync::{PoisonError, RwLock};

use super::types::Config;

static GLOBAL: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

/// Snapshot of the process-wide configuration.
pub fn configuration() -> Config {
    GLOBAL
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Snapshot taken after the binary path and version are cached in the
/// process-wide store.
pub(crate) fn resolved_configuration() -> Config {
    let config = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
    config.resolved_binary_path();
    if !config.skip_version_check {
        config.cli_version();
    }
    config.clone()
}

/// Mutate the process-wide configuration in place.
///
/// A change to `env` or `inherit_env` drops the cached version, since the
/// version is detected under that environment.
///
/// ```
/// sumr::configure(|c| {
///     c.default_language = Some("de".to_string());
///     c.set_env("OPENAI_API_KEY", "sk-test");
/// });
/// assert_eq!(sumr::configuration().default_language.as_deref(), Some("de"));
/// # sumr::reset_configuration();
/// ```
pub fn configure<F>(f: F)
where
    F: FnOnce(&mut Config),
{
    let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    let inherit_env = guard.inherit_env;
    let env = guard.env.clone();
    f(&mut guard);
    if guard.inherit_env != inherit_env || guard.env != env {
        guard.invalidate_cli_version();
    }
}

/// Restore the process-wide configuration to defaults.
pub fn reset_configuration() {
    *GLOBAL.write().unwrap_or_else(PoisonError::into_inner) = Config::default();
}
