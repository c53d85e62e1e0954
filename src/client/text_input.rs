//! Scoped temporary file standing in for raw text input.

use std::io::Write;
use std::path::Path;
use tempfile::TempPath;

use crate::error::{Result, SummarizeError};

/// Text written to a uniquely named `summarize-input*.txt` file.
///
/// The file is closed once written and removed when this value drops, on
/// success and failure paths alike.
#[derive(Debug)]
pub(crate) struct TextInput {
    path: TempPath,
}

impl TextInput {
    pub(crate) fn create(text: &str) -> Result<Self> {
        let mut file = tempfile::Builder::new()
            .prefix("summarize-input")
            .suffix(".txt")
            .tempfile()
            .map_err(SummarizeError::TempFile)?;
        file.write_all(text.as_bytes())
            .map_err(SummarizeError::TempFile)?;
        file.flush().map_err(SummarizeError::TempFile)?;

        let path = file.into_temp_path();
        tracing::debug!("wrote {} bytes of text input to {:?}", text.len(), &*path);
        Ok(Self { path })
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// The path as passed on the command line.
    pub(crate) fn arg(&self) -> String {
        self.path().to_string_lossy().into_owned()
    }
}
