//! Summarize command handler

use anyhow::Result;
use std::io;
use std::path::Path;

use sumr::Options;

use super::{client, print_result, write_stream};

/// Summarize a URL or file, buffered or streaming.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    config_path: Option<&Path>,
    input: &str,
    options: &Options,
    stream: bool,
    json: bool,
) -> Result<()> {
    let client = client(config_path)?;

    if stream {
        return write_stream(client.stream(input, options)?, &mut io::stdout().lock());
    }

    let result = client.call(input, options)?;
    print_result(&result, result.summary(), json)
}
