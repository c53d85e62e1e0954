//! CLI definitions for sumr
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be exercised by tests without spawning the binary.

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell as CompletionShell;
use std::path::PathBuf;

use crate::options::{Format, Length, MarkdownMode, Options, VideoMode};

/// Build clap styles for help output.
///
/// - Green: headers, usage, command names
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "sumr")]
#[command(about = "Summarize URLs, files and text through the summarize CLI")]
#[command(
    long_about = "sumr - a front-end for the summarize CLI.

Builds the right invocation for the installed `summarize` binary, checks that
it is present and recent enough, and prints the result.

QUICK START:
    sumr summarize https://example.com          Summarize a web page
    sumr summarize talk.mp4 --length short      Short summary of a local file
    sumr extract https://example.com --format md
    cat notes.txt | sumr text                   Summarize text from stdin
    sumr doctor                                 Check the summarize install

Configuration is read from ~/.config/sumr/config.toml (see `sumr config path`)."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize a URL or file
    #[command(long_about = "Summarize a URL or local file.

By default the finished summary is printed once summarize exits. With
--stream, output is printed line by line as it is produced. With --json the
full JSON document is printed instead of just the summary.

EXAMPLES:
    sumr summarize https://example.com
    sumr summarize https://youtu.be/xyz --video-mode transcript
    sumr summarize report.pdf --model openai/gpt-5-mini --length 1500
    sumr summarize https://example.com --stream
    sumr summarize https://example.com -- --some-new-flag")]
    Summarize {
        /// URL or file path
        #[arg(help = "URL or file path to summarize")]
        input: String,
        #[command(flatten)]
        options: OptionArgs,
        /// Print output as it is produced
        #[arg(long, conflicts_with = "json")]
        stream: bool,
        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },

    /// Extract content without summarizing
    #[command(long_about = "Extract the content of a URL or file without LLM summarization.

EXAMPLES:
    sumr extract https://example.com
    sumr extract https://example.com --format md
    sumr extract https://example.com --json")]
    Extract {
        /// URL or file path
        #[arg(help = "URL or file path to extract")]
        input: String,
        #[command(flatten)]
        options: OptionArgs,
        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },

    /// Summarize text from a file or stdin
    #[command(long_about = "Summarize raw text.

Reads FILE, or stdin when FILE is omitted or '-'. The text is handed to
summarize through a temporary file that is removed afterwards.

EXAMPLES:
    sumr text notes.txt
    pbpaste | sumr text --length short
    sumr text - --stream < meeting.txt")]
    Text {
        /// Text file, or '-' for stdin
        #[arg(help = "Text file to read ('-' or omitted for stdin)")]
        file: Option<PathBuf>,
        #[command(flatten)]
        options: OptionArgs,
        /// Print output as it is produced
        #[arg(long, conflicts_with = "json")]
        stream: bool,
        /// Print the raw JSON result
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Check the summarize installation
    #[command(long_about = "Report the summarize binary that will be used, its version,
the minimum supported version and whether invocations would pass the
precondition checks.

EXAMPLE:
    sumr doctor")]
    Doctor,

    /// Generate shell completions
    #[command(long_about = "Generate a shell completion script and print it to stdout.

EXAMPLES:
    sumr completions bash > ~/.local/share/bash-completion/completions/sumr
    sumr completions zsh > ~/.zfunc/_sumr")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the configuration file path
    Path,
    /// Write a default configuration file
    #[command(long_about = "Write a configuration file with default values.

Refuses to overwrite an existing file unless --force is given.

EXAMPLE:
    sumr config init")]
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Summarize options exposed as command-line flags.
#[derive(Args, Debug, Default, Clone)]
pub struct OptionArgs {
    /// LLM model (e.g. openai/gpt-5-mini)
    #[arg(long)]
    pub model: Option<String>,
    /// CLI provider for the model
    #[arg(long)]
    pub cli: Option<String>,
    /// short, medium, long, xl, xxl or a character count
    #[arg(long)]
    pub length: Option<Length>,
    /// Output language
    #[arg(long = "lang")]
    pub language: Option<String>,
    /// Timeout passed to summarize (e.g. 2m)
    #[arg(long)]
    pub timeout: Option<String>,
    /// Retries passed to summarize
    #[arg(long)]
    pub retries: Option<u32>,
    /// Custom prompt
    #[arg(long)]
    pub prompt: Option<String>,
    /// Read the prompt from a file
    #[arg(long, value_name = "FILE")]
    pub prompt_file: Option<PathBuf>,
    /// Output format (text or md)
    #[arg(long)]
    pub format: Option<Format>,
    /// Video handling (auto, transcript, understand)
    #[arg(long)]
    pub video_mode: Option<VideoMode>,
    /// Markdown conversion (off, auto, llm, readability)
    #[arg(long)]
    pub markdown_mode: Option<MarkdownMode>,
    /// Cap on LLM output tokens
    #[arg(long)]
    pub max_output_tokens: Option<u64>,
    /// Cap on extracted characters
    #[arg(long)]
    pub max_extract_characters: Option<u64>,
    /// Summarize even short content
    #[arg(long)]
    pub force_summary: bool,
    /// Include timestamps
    #[arg(long)]
    pub timestamps: bool,
    /// Bypass the summarize cache
    #[arg(long)]
    pub no_cache: bool,
    /// Extract slides from video
    #[arg(long)]
    pub slides: bool,
    /// Extra arguments passed to summarize unchanged (after --)
    #[arg(last = true)]
    pub extra: Vec<String>,
}

impl OptionArgs {
    pub fn to_options(&self) -> Options {
        Options {
            model: self.model.clone(),
            cli: self.cli.clone(),
            length: self.length,
            language: self.language.clone(),
            timeout: self.timeout.clone(),
            retries: self.retries,
            prompt: self.prompt.clone(),
            prompt_file: self.prompt_file.clone(),
            format: self.format,
            video_mode: self.video_mode,
            markdown_mode: self.markdown_mode,
            max_output_tokens: self.max_output_tokens,
            max_extract_characters: self.max_extract_characters,
            force_summary: self.force_summary,
            timestamps: self.timestamps,
            no_cache: self.no_cache,
            slides: self.slides,
            extra_args: self.extra.clone(),
            ..Options::default()
        }
    }
}
