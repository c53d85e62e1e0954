//! Command handlers for the sumr CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod completions;
pub mod config;
pub mod doctor;
pub mod extract;
pub mod summarize;
pub mod text;

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;

use sumr::{Client, Config, SummaryResult};

/// Load the configuration from `path`, or the default location.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => Config::load_from(p),
        None => Config::load(),
    }
}

/// Client over the loaded configuration.
pub fn client(config_path: Option<&Path>) -> Result<Client> {
    Ok(Client::new(load_config(config_path)?))
}

/// Print a buffered result: the raw JSON document, or `text` when present.
pub fn print_result(result: &SummaryResult, text: Option<&str>, json: bool) -> Result<()> {
    match text {
        Some(text) if !json => println!("{}", text.trim_end()),
        _ => println!(
            "{}",
            serde_json::to_string_pretty(result).context("Failed to serialize result")?
        ),
    }
    Ok(())
}

/// Copy streamed lines to `out` as they arrive.
///
/// A closed reader ends the copy early; the rest of `lines` is dropped,
/// which stops the summarize child.
pub fn write_stream<I, W>(lines: I, out: &mut W) -> Result<()>
where
    I: IntoIterator<Item = sumr::Result<String>>,
    W: Write,
{
    for line in lines {
        let line = line?;
        match out.write_all(line.as_bytes()).and_then(|()| out.flush()) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                tracing::debug!("stdout closed, stopping stream");
                return Ok(());
            }
            Err(e) => return Err(e).context("Failed to write to stdout"),
        }
    }
    Ok(())
}
