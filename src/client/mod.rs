//! Invocation client for the summarize CLI.
//!
//! [`Client`] turns typed calls into process invocations:
//!
//! 1. merge call-site [`Options`] over the configured defaults
//! 2. build the argument vector for the requested [`Mode`]
//! 3. check that the binary exists and is recent enough
//! 4. run it buffered (JSON → [`SummaryResult`]) or streaming (lines)
//! 5. classify the exit status into [`SummarizeError`]
//!
//! Each call is one blocking subprocess run. The client imposes no deadline
//! of its own; `timeout` is forwarded to the CLI.

mod args;
mod exec;
mod stream;
mod text_input;

pub use args::{build_args, Mode};
pub use exec::classify_exit;
pub use stream::SummaryStream;

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::binary::{self, is_bare_command, is_executable};
use crate::config::{resolved_configuration, Config};
use crate::error::{Result, SummarizeError, MINIMUM_CLI_VERSION};
use crate::options::Options;
use crate::result::SummaryResult;
use text_input::TextInput;

/// Drives the summarize CLI with a fixed configuration.
#[derive(Debug, Clone)]
pub struct Client {
    config: Config,
}

impl Default for Client {
    /// A client over a snapshot of the process-wide configuration.
    ///
    /// The binary path and version are resolved in the process-wide store
    /// first, so each default client reuses the same lookups.
    fn default() -> Self {
        Self::new(resolved_configuration())
    }
}

impl Client {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Summarize a URL or file path and parse the JSON result.
    ///
    /// ```no_run
    /// use sumr::{Client, LengthPreset, Options};
    ///
    /// let client = Client::default();
    /// let result = client.call(
    ///     "https://example.com",
    ///     &Options::new().length(LengthPreset::Short),
    /// )?;
    /// println!("{}", result.summary().unwrap_or_default());
    /// # Ok::<(), sumr::SummarizeError>(())
    /// ```
    pub fn call(&self, input: &str, options: &Options) -> Result<SummaryResult> {
        self.run_json(input, Mode::Summarize, options)
    }

    /// Extract content without LLM summarization.
    pub fn extract(&self, input: &str, options: &Options) -> Result<SummaryResult> {
        self.run_json(input, Mode::Extract, options)
    }

    /// Summarize raw text by way of a temporary file.
    ///
    /// The file is deleted before this returns, whatever the outcome.
    pub fn from_text(&self, text: &str, options: &Options) -> Result<SummaryResult> {
        let input = TextInput::create(text)?;
        self.call(&input.arg(), options)
    }

    /// Summarize a URL or file path, passing each output line to `on_chunk`
    /// as it is produced. Returns the full output.
    ///
    /// Lines delivered to `on_chunk` do not imply success: a failing exit is
    /// reported after all of its output has been delivered.
    pub fn call_streaming<F>(&self, input: &str, options: &Options, on_chunk: F) -> Result<String>
    where
        F: FnMut(&str),
    {
        self.stream(input, options)?.collect_with(on_chunk)
    }

    /// Streaming variant of [`Client::from_text`].
    pub fn from_text_streaming<F>(&self, text: &str, options: &Options, on_chunk: F) -> Result<String>
    where
        F: FnMut(&str),
    {
        self.stream_text(text, options)?.collect_with(on_chunk)
    }

    /// Start a streaming run and return its output as an iterator of lines.
    pub fn stream(&self, input: &str, options: &Options) -> Result<SummaryStream> {
        let (program, args) = self.prepare(input, Mode::Stream, options)?;
        SummaryStream::spawn(self.command(&program, &args), &program)
    }

    /// Start a streaming run over raw text. The temp file lives as long as
    /// the returned stream.
    pub fn stream_text(&self, text: &str, options: &Options) -> Result<SummaryStream> {
        let input = TextInput::create(text)?;
        let stream = self.stream(&input.arg(), options)?;
        Ok(stream.with_text_input(input))
    }

    /// Call-site options merged over configured defaults.
    pub fn merged_options(&self, options: &Options) -> Options {
        options.clone().merged_over(&self.config.default_options())
    }

    /// Full argument vector for a run, binary path first. Nothing is spawned.
    pub fn command_line(&self, input: &str, mode: Mode, options: &Options) -> Vec<String> {
        let program = self.config.resolved_binary_path();
        let mut argv = vec![program.to_string_lossy().into_owned()];
        argv.extend(build_args(input, mode, &self.merged_options(options)));
        argv
    }

    /// Ensure the configured binary can be launched.
    ///
    /// The bare command name is accepted as-is and left to PATH lookup at
    /// spawn time; any other path must be an executable file.
    pub fn check_binary(&self) -> Result<PathBuf> {
        let path = self.config.resolved_binary_path();
        if is_bare_command(&path) || is_executable(&path) {
            Ok(path)
        } else {
            Err(SummarizeError::BinaryNotFound { path })
        }
    }

    /// Ensure the installed CLI meets [`MINIMUM_CLI_VERSION`].
    ///
    /// Skipped when disabled in config or when no version can be detected.
    pub fn check_version(&self) -> Result<()> {
        if self.config.skip_version_check {
            return Ok(());
        }

        let Some(installed) = self.config.cli_version() else {
            tracing::debug!("summarize version unknown, skipping version check");
            return Ok(());
        };

        if binary::is_older(&installed, MINIMUM_CLI_VERSION) {
            return Err(SummarizeError::VersionMismatch {
                installed,
                required: MINIMUM_CLI_VERSION.to_string(),
            });
        }
        Ok(())
    }

    fn run_json(&self, input: &str, mode: Mode, options: &Options) -> Result<SummaryResult> {
        let (program, args) = self.prepare(input, mode, options)?;
        let stdout = exec::run_buffered(self.command(&program, &args), &program)?;

        serde_json::from_str(&stdout)
            .map(SummaryResult::new)
            .map_err(|e| SummarizeError::output_parse(&e, &stdout))
    }

    /// Validate preconditions and build the arguments for one run.
    fn prepare(&self, input: &str, mode: Mode, options: &Options) -> Result<(PathBuf, Vec<String>)> {
        let program = self.check_binary()?;
        self.check_version()?;

        let args = build_args(input, mode, &self.merged_options(options));
        tracing::debug!("running {} {:?}", program.display(), args);
        Ok((program, args))
    }

    fn command(&self, program: &Path, args: &[String]) -> Command {
        let mut cmd = self.config.command(program);
        cmd.args(args);
        cmd
    }
}
