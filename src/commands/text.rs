//! Text command handler

use anyhow::{bail, Context, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use sumr::Options;

use super::{client, print_result, write_stream};

/// Summarize text read from a file or stdin.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config_path: Option<&Path>,
    file: Option<&Path>,
    options: &Options,
    stream: bool,
    json: bool,
) -> Result<()> {
    let text = read_text(file)?;
    if text.trim().is_empty() {
        bail!("No text to summarize");
    }

    let client = client(config_path)?;

    if stream {
        return write_stream(client.stream_text(&text, options)?, &mut io::stdout().lock());
    }

    let result = client.from_text(&text, options)?;
    print_result(&result, result.summary(), json)
}

/// Read the whole input: a file, or stdin for `None` and `-`.
fn read_text(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}
