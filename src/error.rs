//! Error taxonomy for summarize invocations.
//!
//! Every failure a caller can see from [`crate::Client`] is a
//! [`SummarizeError`]. The variants fall into three groups:
//!
//! - Preconditions (checked before anything is spawned): binary not found,
//!   installed CLI too old.
//! - Process outcomes: interrupted / terminated / killed by a signal, or a
//!   plain non-zero exit carrying the exit code and stderr.
//! - Output and I/O: stdout that is not JSON, spawn failures, temp file errors.
//!
//! Nothing here is retried internally. The `retries` option is forwarded to
//! the summarize CLI, which owns retry behavior.

use std::path::PathBuf;
use thiserror::Error;

/// Oldest summarize CLI release this client knows how to drive.
pub const MINIMUM_CLI_VERSION: &str = "0.10.0";

/// How to install or upgrade the summarize CLI.
pub const INSTALL_HINT: &str = "npm i -g @steipete/summarize";

/// Maximum number of characters of raw stdout kept in parse errors.
pub const OUTPUT_PREVIEW_CHARS: usize = 500;

/// Result type for summarize operations.
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Errors from driving the summarize CLI.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("summarize binary not found at '{}'. Install via: {}", path.display(), INSTALL_HINT)]
    BinaryNotFound { path: PathBuf },

    #[error(
        "summarize CLI {installed} is too old (requires >= {required}). Update via: {}",
        INSTALL_HINT
    )]
    VersionMismatch { installed: String, required: String },

    #[error("Interrupted (SIGINT)")]
    Interrupted,

    #[error("Terminated (SIGTERM)")]
    Terminated,

    #[error("summarize was killed by signal {0}")]
    Signaled(i32),

    #[error("summarize exited with code {code}: {stderr}")]
    CommandFailed { code: i32, stderr: String },

    #[error("Failed to parse JSON output: {message}\nOutput: {output_preview}")]
    OutputParse {
        message: String,
        output_preview: String,
    },

    #[error("Failed to launch '{}': {source}", binary.display())]
    Spawn {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to prepare text input file: {0}")]
    TempFile(#[source] std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SummarizeError {
    /// Build an output parse error, keeping only a bounded preview of stdout.
    pub fn output_parse(err: &serde_json::Error, stdout: &str) -> Self {
        SummarizeError::OutputParse {
            message: err.to_string(),
            output_preview: preview(stdout, OUTPUT_PREVIEW_CHARS),
        }
    }

    /// Whether the process was stopped by a signal rather than failing on
    /// its own. Callers typically should not retry these.
    pub fn is_cancellation(&self) -> bool {
        matches!(
            self,
            SummarizeError::Interrupted | SummarizeError::Terminated | SummarizeError::Signaled(_)
        )
    }

    /// Exit code reported by the summarize process, if the error came from one.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            SummarizeError::Interrupted => Some(130),
            SummarizeError::Terminated => Some(143),
            SummarizeError::CommandFailed { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the error was raised before any process was spawned.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            SummarizeError::BinaryNotFound { .. } | SummarizeError::VersionMismatch { .. }
        )
    }
}

/// First `max_chars` characters of `text`, never splitting a code point.
fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}
