//! Config subcommands handler

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};

use sumr::Config;

use super::load_config;

/// Show current configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    print!("{}", render(&config)?);
    Ok(())
}

/// Print the path the configuration is read from.
#[cfg(not(tarpaulin_include))]
pub fn handle_path(config_path: Option<&Path>) -> Result<()> {
    println!("{}", target_path(config_path)?.display());
    Ok(())
}

/// Write a default configuration file.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = target_path(config_path)?;
    init_at(&path, force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn target_path(config_path: Option<&Path>) -> Result<PathBuf> {
    match config_path {
        Some(p) => Ok(p.to_path_buf()),
        None => Config::config_path(),
    }
}

fn render(config: &Config) -> Result<String> {
    Ok(toml::to_string_pretty(config)?)
}

fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }
    Config::default().save_to(path)
}
