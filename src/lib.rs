//! sumr - Rust client for the summarize CLI
//!
//! Summarize URLs, files or raw text by driving the external `summarize`
//! binary as a subprocess, without knowing its invocation syntax.
//!
//! ```no_run
//! use sumr::{Client, Config, Options, VideoMode};
//!
//! let mut config = Config::default();
//! config.default_language = Some("en".to_string());
//! let client = Client::new(config);
//!
//! // Buffered: parsed JSON result
//! let result = client.call("https://example.com/talk", &Options::new().video_mode(VideoMode::Transcript))?;
//! println!("{} ({} tokens)", result.summary().unwrap_or_default(), result.total_tokens());
//!
//! // Streaming: lines as they are produced
//! client.call_streaming("https://example.com", &Options::new(), |chunk| print!("{}", chunk))?;
//! # Ok::<(), sumr::SummarizeError>(())
//! ```

pub mod binary;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod options;
pub mod result;

pub use binary::CliVersion;
pub use client::{Client, Mode, SummaryStream};
pub use config::{configuration, configure, reset_configuration, Config};
pub use error::{Result, SummarizeError, INSTALL_HINT, MINIMUM_CLI_VERSION};
pub use options::{Format, Length, LengthPreset, MarkdownMode, MetricsMode, Options, VideoMode};
pub use result::{SummaryResult, TokenUsage};

/// Summarize a URL or file path using the process-wide configuration.
pub fn call(input: &str, options: &Options) -> Result<SummaryResult> {
    Client::default().call(input, options)
}

/// Streaming [`call`]: each output line goes to `on_chunk` as it arrives.
pub fn call_streaming<F>(input: &str, options: &Options, on_chunk: F) -> Result<String>
where
    F: FnMut(&str),
{
    Client::default().call_streaming(input, options, on_chunk)
}

/// Summarize raw text using the process-wide configuration.
pub fn from_text(text: &str, options: &Options) -> Result<SummaryResult> {
    Client::default().from_text(text, options)
}

/// Streaming [`from_text`].
pub fn from_text_streaming<F>(text: &str, options: &Options, on_chunk: F) -> Result<String>
where
    F: FnMut(&str),
{
    Client::default().from_text_streaming(text, options, on_chunk)
}

/// Extract content without summarization using the process-wide configuration.
pub fn extract(input: &str, options: &Options) -> Result<SummaryResult> {
    Client::default().extract(input, options)
}
