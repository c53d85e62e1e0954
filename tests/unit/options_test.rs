//! Unit tests for option encoding

use sumr::{Format, Length, LengthPreset, MarkdownMode, MetricsMode, Options, VideoMode};

// ============================================
// Flag encoding
// ============================================

#[test]
fn every_valued_flag_in_declaration_order() {
    let opts = Options {
        model: Some("m".into()),
        cli: Some("claude".into()),
        length: Some(Length::Chars(900)),
        language: Some("fr".into()),
        timeout: Some("90s".into()),
        retries: Some(1),
        prompt: Some("p".into()),
        prompt_file: Some("prompt.txt".into()),
        format: Some(Format::Md),
        video_mode: Some(VideoMode::Understand),
        markdown_mode: Some(MarkdownMode::Readability),
        max_output_tokens: Some(512),
        max_extract_characters: Some(8000),
        youtube: Some("web".into()),
        transcriber: Some("whisper".into()),
        firecrawl: Some("off".into()),
        preprocess: Some("auto".into()),
        theme: Some("dark".into()),
        metrics: Some(MetricsMode::Detailed),
        slides_dir: Some("slides".into()),
        slides_max: Some(6),
        ..Options::default()
    };
    assert_eq!(
        opts.to_args(),
        vec![
            "--model",
            "m",
            "--cli",
            "claude",
            "--length",
            "900",
            "--lang",
            "fr",
            "--timeout",
            "90s",
            "--retries",
            "1",
            "--prompt",
            "p",
            "--prompt-file",
            "prompt.txt",
            "--format",
            "md",
            "--video-mode",
            "understand",
            "--markdown-mode",
            "readability",
            "--max-output-tokens",
            "512",
            "--max-extract-characters",
            "8000",
            "--youtube",
            "web",
            "--transcriber",
            "whisper",
            "--firecrawl",
            "off",
            "--preprocess",
            "auto",
            "--theme",
            "dark",
            "--metrics",
            "detailed",
            "--slides-dir",
            "slides",
            "--slides-max",
            "6",
        ]
    );
}

#[test]
fn every_boolean_flag_in_declaration_order() {
    let opts = Options {
        force_summary: true,
        timestamps: true,
        no_cache: true,
        no_media_cache: true,
        verbose: true,
        no_color: true,
        plain: true,
        slides: true,
        slides_debug: true,
        slides_ocr: true,
        debug: true,
        ..Options::default()
    };
    assert_eq!(
        opts.to_args(),
        vec![
            "--force-summary",
            "--timestamps",
            "--no-cache",
            "--no-media-cache",
            "--verbose",
            "--no-color",
            "--plain",
            "--slides",
            "--slides-debug",
            "--slides-ocr",
            "--debug",
        ]
    );
}

#[test]
fn false_booleans_render_nothing() {
    let opts = Options::new().force_summary(false).no_cache(false);
    assert!(opts.to_args().is_empty());
}

#[test]
fn builder_mixes_valued_and_boolean() {
    let opts = Options::new()
        .no_cache(true)
        .length(LengthPreset::Xl)
        .video_mode(VideoMode::Transcript);
    assert_eq!(
        opts.to_args(),
        vec![
            "--length",
            "xl",
            "--video-mode",
            "transcript",
            "--no-cache"
        ]
    );
}

// ============================================
// Value parsing
// ============================================

#[test]
fn enum_values_parse_case_insensitively() {
    assert_eq!("MD".parse::<Format>().unwrap(), Format::Md);
    assert_eq!("Auto".parse::<VideoMode>().unwrap(), VideoMode::Auto);
    assert_eq!("LLM".parse::<MarkdownMode>().unwrap(), MarkdownMode::Llm);
}

#[test]
fn unknown_length_is_rejected() {
    let err = "huge".parse::<Length>().unwrap_err();
    assert!(err.contains("huge"));
    assert!(err.contains("xxl"));
}

// ============================================
// Serde
// ============================================

#[test]
fn options_deserialize_from_partial_toml() {
    let opts: Options = toml::from_str(
        r#"
model = "openai/gpt-5-mini"
length = "short"
no_cache = true
"#,
    )
    .unwrap();
    assert_eq!(
        opts,
        Options::new()
            .model("openai/gpt-5-mini")
            .length(LengthPreset::Short)
            .no_cache(true)
    );
}

#[test]
fn merged_over_fills_only_unset_fields() {
    let defaults = Options::new().model("default").language("en").timeout("2m");
    let merged = Options::new()
        .model("call-site")
        .merged_over(&defaults);
    assert_eq!(merged.model.as_deref(), Some("call-site"));
    assert_eq!(merged.language.as_deref(), Some("en"));
    assert_eq!(merged.timeout.as_deref(), Some("2m"));
}
