//! Per-call options and their command-line encoding.
//!
//! [`Options`] is a closed set of typed fields, one per flag the summarize
//! CLI understands. [`Options::to_args`] turns it into argv tokens:
//!
//! - valued options render as `--flag value`, in declaration order
//! - boolean options render as a bare `--flag` when `true`, after all valued
//!   options, also in declaration order
//! - unset values render nothing
//!
//! The emission order is stable so callers can assert on exact argument
//! vectors. Flags this crate does not know about yet can be passed through
//! [`Options::extra_args`], which is appended verbatim at the end.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Generates a lowercase string enum with `Display` and `FromStr`.
macro_rules! flag_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            /// All accepted values, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The value as passed on the command line.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let lower = s.trim().to_ascii_lowercase();
                match lower.as_str() {
                    $($text => Ok($name::$variant),)+
                    _ => Err(format!(
                        "invalid {} '{}'. Valid: {}",
                        stringify!($name),
                        s,
                        [$($text),+].join(", ")
                    )),
                }
            }
        }
    };
}

flag_enum! {
    /// Named summary length presets.
    LengthPreset {
        Short => "short",
        Medium => "medium",
        Long => "long",
        Xl => "xl",
        Xxl => "xxl",
        S => "s",
        M => "m",
        L => "l",
    }
}

flag_enum! {
    /// How video inputs are processed.
    VideoMode {
        Auto => "auto",
        Transcript => "transcript",
        Understand => "understand",
    }
}

flag_enum! {
    /// Output format for extracted content.
    Format {
        Text => "text",
        Md => "md",
    }
}

flag_enum! {
    /// HTML to Markdown conversion strategy.
    MarkdownMode {
        Off => "off",
        Auto => "auto",
        Llm => "llm",
        Readability => "readability",
    }
}

flag_enum! {
    /// Metrics reporting level.
    MetricsMode {
        Off => "off",
        On => "on",
        Detailed => "detailed",
    }
}

/// Summary length: a named preset or a target character count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Length {
    Preset(LengthPreset),
    Chars(u64),
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Length::Preset(p) => write!(f, "{}", p),
            Length::Chars(n) => write!(f, "{}", n),
        }
    }
}

impl FromStr for Length {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.trim().parse::<u64>() {
            return Ok(Length::Chars(n));
        }
        s.parse::<LengthPreset>().map(Length::Preset)
    }
}

impl From<LengthPreset> for Length {
    fn from(p: LengthPreset) -> Self {
        Length::Preset(p)
    }
}

impl From<u64> for Length {
    fn from(n: u64) -> Self {
        Length::Chars(n)
    }
}

/// Options for a single summarize invocation.
///
/// All fields default to unset. Use the builder methods or struct update
/// syntax:
///
/// ```
/// use sumr::{LengthPreset, Options};
///
/// let opts = Options::new().model("openai/gpt-5-mini").length(LengthPreset::Short);
/// assert_eq!(
///     opts.to_args(),
///     vec!["--model", "openai/gpt-5-mini", "--length", "short"]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    pub model: Option<String>,
    pub cli: Option<String>,
    pub length: Option<Length>,
    pub language: Option<String>,
    pub timeout: Option<String>,
    pub retries: Option<u32>,
    pub prompt: Option<String>,
    pub prompt_file: Option<PathBuf>,
    pub format: Option<Format>,
    pub video_mode: Option<VideoMode>,
    pub markdown_mode: Option<MarkdownMode>,
    pub max_output_tokens: Option<u64>,
    pub max_extract_characters: Option<u64>,
    pub youtube: Option<String>,
    pub transcriber: Option<String>,
    pub firecrawl: Option<String>,
    pub preprocess: Option<String>,
    pub theme: Option<String>,
    pub metrics: Option<MetricsMode>,
    pub slides_dir: Option<PathBuf>,
    pub slides_max: Option<u32>,

    pub force_summary: bool,
    pub timestamps: bool,
    pub no_cache: bool,
    pub no_media_cache: bool,
    pub verbose: bool,
    pub no_color: bool,
    pub plain: bool,
    pub slides: bool,
    pub slides_debug: bool,
    pub slides_ocr: bool,
    pub debug: bool,

    /// Raw tokens appended after every declared flag.
    pub extra_args: Vec<String>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn cli(mut self, cli: impl Into<String>) -> Self {
        self.cli = Some(cli.into());
        self
    }

    pub fn length(mut self, length: impl Into<Length>) -> Self {
        self.length = Some(length.into());
        self
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn timeout(mut self, timeout: impl Into<String>) -> Self {
        self.timeout = Some(timeout.into());
        self
    }

    pub fn retries(mut self, retries: u32) -> Self {
        self.retries = Some(retries);
        self
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }

    pub fn video_mode(mut self, mode: VideoMode) -> Self {
        self.video_mode = Some(mode);
        self
    }

    pub fn markdown_mode(mut self, mode: MarkdownMode) -> Self {
        self.markdown_mode = Some(mode);
        self
    }

    pub fn force_summary(mut self, on: bool) -> Self {
        self.force_summary = on;
        self
    }

    pub fn no_cache(mut self, on: bool) -> Self {
        self.no_cache = on;
        self
    }

    pub fn slides(mut self, on: bool) -> Self {
        self.slides = on;
        self
    }

    /// Append a raw flag (and optional value) for options not modelled here.
    pub fn extra_arg(mut self, arg: impl Into<String>) -> Self {
        self.extra_args.push(arg.into());
        self
    }

    /// Valued options in emission order: `(flag, value)`.
    fn valued(&self) -> [(&'static str, Option<String>); 21] {
        fn s<T: ToString>(v: &Option<T>) -> Option<String> {
            v.as_ref().map(ToString::to_string)
        }
        fn p(v: &Option<PathBuf>) -> Option<String> {
            v.as_ref().map(|p| p.to_string_lossy().into_owned())
        }

        [
            ("--model", s(&self.model)),
            ("--cli", s(&self.cli)),
            ("--length", s(&self.length)),
            ("--lang", s(&self.language)),
            ("--timeout", s(&self.timeout)),
            ("--retries", s(&self.retries)),
            ("--prompt", s(&self.prompt)),
            ("--prompt-file", p(&self.prompt_file)),
            ("--format", s(&self.format)),
            ("--video-mode", s(&self.video_mode)),
            ("--markdown-mode", s(&self.markdown_mode)),
            ("--max-output-tokens", s(&self.max_output_tokens)),
            ("--max-extract-characters", s(&self.max_extract_characters)),
            ("--youtube", s(&self.youtube)),
            ("--transcriber", s(&self.transcriber)),
            ("--firecrawl", s(&self.firecrawl)),
            ("--preprocess", s(&self.preprocess)),
            ("--theme", s(&self.theme)),
            ("--metrics", s(&self.metrics)),
            ("--slides-dir", p(&self.slides_dir)),
            ("--slides-max", s(&self.slides_max)),
        ]
    }

    /// Boolean options in emission order: `(flag, enabled)`.
    fn booleans(&self) -> [(&'static str, bool); 11] {
        [
            ("--force-summary", self.force_summary),
            ("--timestamps", self.timestamps),
            ("--no-cache", self.no_cache),
            ("--no-media-cache", self.no_media_cache),
            ("--verbose", self.verbose),
            ("--no-color", self.no_color),
            ("--plain", self.plain),
            ("--slides", self.slides),
            ("--slides-debug", self.slides_debug),
            ("--slides-ocr", self.slides_ocr),
            ("--debug", self.debug),
        ]
    }

    /// Encode these options as command-line tokens.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        for (flag, value) in self.valued() {
            if let Some(value) = value {
                args.push(flag.to_string());
                args.push(value);
            }
        }

        for (flag, enabled) in self.booleans() {
            if enabled {
                args.push(flag.to_string());
            }
        }

        args.extend(self.extra_args.iter().cloned());
        args
    }

    /// Fill every unset field from `defaults`; fields already set here win.
    ///
    /// Boolean flags are OR-ed, and `extra_args` from `defaults` come first.
    pub fn merged_over(mut self, defaults: &Options) -> Options {
        macro_rules! fill {
            ($($field:ident),+) => {
                $(
                    if self.$field.is_none() {
                        self.$field = defaults.$field.clone();
                    }
                )+
            };
        }
        macro_rules! or {
            ($($field:ident),+) => {
                $( self.$field = self.$field || defaults.$field; )+
            };
        }

        fill!(
            model,
            cli,
            length,
            language,
            timeout,
            retries,
            prompt,
            prompt_file,
            format,
            video_mode,
            markdown_mode,
            max_output_tokens,
            max_extract_characters,
            youtube,
            transcriber,
            firecrawl,
            preprocess,
            theme,
            metrics,
            slides_dir,
            slides_max
        );
        or!(
            force_summary,
            timestamps,
            no_cache,
            no_media_cache,
            verbose,
            no_color,
            plain,
            slides,
            slides_debug,
            slides_ocr,
            debug
        );

        if !defaults.extra_args.is_empty() {
            let mut extra = defaults.extra_args.clone();
            extra.append(&mut self.extra_args);
            self.extra_args = extra;
        }
        self
    }
}
