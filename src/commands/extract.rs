//! Extract command handler

use anyhow::Result;
use std::path::Path;

use sumr::Options;

use super::{client, print_result};

/// Extract content without summarization and print it.
#[cfg(not(tarpaulin_include))]
pub fn handle(config_path: Option<&Path>, input: &str, options: &Options, json: bool) -> Result<()> {
    let client = client(config_path)?;
    let result = client.extract(input, options)?;
    print_result(&result, result.content(), json)
}
