//! Doctor command handler

use anyhow::Result;
use std::path::Path;

use sumr::{Client, MINIMUM_CLI_VERSION};

use super::client;

/// Report on the summarize installation and run the precondition checks.
#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: Option<&Path>) -> Result<()> {
    let client = client(config_path)?;
    print!("{}", report(&client));

    client.check_binary()?;
    client.check_version()?;
    println!("OK");
    Ok(())
}

fn report(client: &Client) -> String {
    let config = client.config();
    let binary = config.resolved_binary_path();
    let source = if config.binary_path.is_some() {
        "configured"
    } else {
        "discovered"
    };
    let version = if client.check_binary().is_ok() {
        config.cli_version()
    } else {
        None
    };

    let mut out = String::new();
    out.push_str(&format!("Binary:   {} ({})\n", binary.display(), source));
    out.push_str(&format!(
        "Version:  {}\n",
        version.as_deref().unwrap_or("unknown")
    ));
    out.push_str(&format!("Minimum:  {}\n", MINIMUM_CLI_VERSION));
    if config.skip_version_check {
        out.push_str("Version check disabled in config\n");
    }
    out
}
