//! Argument vector construction.

use crate::options::Options;

/// How a run is executed and what it asks the CLI for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Buffered JSON run producing a summary.
    Summarize,
    /// Buffered JSON run with `--extract` (no LLM summary).
    Extract,
    /// Raw text streamed line by line.
    Stream,
}

impl Mode {
    /// Whether the run produces a JSON document on stdout.
    pub fn is_json(&self) -> bool {
        !matches!(self, Mode::Stream)
    }
}

/// Build the arguments that follow the binary path.
///
/// Buffered: `<input> --json --stream off [--extract] --metrics on <options>`.
/// Streaming: `<input> --stream on <options>`. Metrics are only requested
/// on the JSON path, where they can be read back.
pub fn build_args(input: &str, mode: Mode, options: &Options) -> Vec<String> {
    let mut args = vec![input.to_string()];

    match mode {
        Mode::Summarize | Mode::Extract => {
            args.push("--json".to_string());
            args.push("--stream".to_string());
            args.push("off".to_string());
            if mode == Mode::Extract {
                args.push("--extract".to_string());
            }
            args.push("--metrics".to_string());
            args.push("on".to_string());
        }
        Mode::Stream => {
            args.push("--stream".to_string());
            args.push("on".to_string());
        }
    }

    args.extend(options.to_args());
    args
}
