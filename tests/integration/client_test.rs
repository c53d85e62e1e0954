//! Buffered invocation against fake summarize binaries

use super::helpers::FakeSummarize;
use sumr::{Client, Config, LengthPreset, Options, SummarizeError, VideoMode};

// ============================================
// Argument vectors
// ============================================

#[test]
fn call_passes_input_and_json_flags() {
    let fake = FakeSummarize::fixture("summary_response.json");
    fake.client()
        .call(
            "https://example.com",
            &Options::new().length(LengthPreset::Short),
        )
        .unwrap();
    assert_eq!(
        fake.recorded_args(),
        vec![
            "https://example.com",
            "--json",
            "--stream",
            "off",
            "--metrics",
            "on",
            "--length",
            "short"
        ]
    );
}

#[test]
fn extract_adds_extract_flag() {
    let fake = FakeSummarize::fixture("extract_response.json");
    let result = fake
        .client()
        .extract("https://example.com", &Options::new())
        .unwrap();
    assert!(result.is_extract_only());
    assert_eq!(
        fake.recorded_args(),
        vec![
            "https://example.com",
            "--json",
            "--stream",
            "off",
            "--extract",
            "--metrics",
            "on"
        ]
    );
}

#[test]
fn config_defaults_are_applied_under_call_options() {
    let fake = FakeSummarize::fixture("summary_response.json");
    let mut config = fake.config();
    config.default_model = "anthropic/claude-sonnet-4-5".to_string();
    config.default_language = Some("en".to_string());

    Client::new(config)
        .call(
            "video.mp4",
            &Options::new()
                .language("de")
                .video_mode(VideoMode::Transcript),
        )
        .unwrap();

    assert_eq!(
        &fake.recorded_args()[6..],
        &[
            "--model",
            "anthropic/claude-sonnet-4-5",
            "--lang",
            "de",
            "--video-mode",
            "transcript"
        ]
    );
}

#[test]
fn arguments_are_not_shell_interpreted() {
    let fake = FakeSummarize::fixture("summary_response.json");
    let input = "file with spaces; $(rm -rf nothing).txt";
    fake.client().call(input, &Options::new()).unwrap();
    assert_eq!(fake.recorded_args()[0], input);
}

#[test]
fn command_line_matches_what_is_run() {
    let fake = FakeSummarize::fixture("summary_response.json");
    let client = fake.client();
    let opts = Options::new().model("openai/gpt-5-mini").no_cache(true);

    let argv = client.command_line("https://example.com", sumr::Mode::Summarize, &opts);
    client.call("https://example.com", &opts).unwrap();

    assert_eq!(argv[0], fake.path().to_string_lossy());
    assert_eq!(&argv[1..], fake.recorded_args().as_slice());
}

// ============================================
// Results
// ============================================

#[test]
fn call_returns_parsed_result() {
    let fake = FakeSummarize::fixture("summary_response.json");
    let result = fake
        .client()
        .call("https://example.com", &Options::new())
        .unwrap();
    assert!(result.summary().unwrap().starts_with("## Key Points"));
    assert_eq!(result.total_tokens(), 1550);
}

#[test]
fn invalid_json_is_a_parse_error_with_preview() {
    let fake = FakeSummarize::json("not json at all");
    match fake.client().call("https://example.com", &Options::new()) {
        Err(SummarizeError::OutputParse { output_preview, .. }) => {
            assert!(output_preview.starts_with("not json at all"));
        }
        other => panic!("Expected OutputParse, got {other:?}"),
    }
}

#[test]
fn parse_error_preview_is_capped() {
    let fake = FakeSummarize::json(&"é".repeat(800));
    match fake.client().call("https://example.com", &Options::new()) {
        Err(SummarizeError::OutputParse { output_preview, .. }) => {
            assert_eq!(output_preview.chars().count(), 500);
        }
        other => panic!("Expected OutputParse, got {other:?}"),
    }
}

// ============================================
// Exit classification
// ============================================

#[test]
fn exit_130_is_interrupted() {
    let fake = FakeSummarize::failing(130, "");
    let err = fake
        .client()
        .call("https://example.com", &Options::new())
        .unwrap_err();
    assert!(matches!(err, SummarizeError::Interrupted));
    assert!(err.is_cancellation());
}

#[test]
fn exit_143_is_terminated() {
    let fake = FakeSummarize::failing(143, "");
    let err = fake
        .client()
        .call("https://example.com", &Options::new())
        .unwrap_err();
    assert!(matches!(err, SummarizeError::Terminated));
}

#[test]
fn other_exit_codes_carry_trimmed_stderr() {
    let fake = FakeSummarize::failing(2, "  Error: unsupported URL  ");
    match fake.client().call("https://example.com", &Options::new()) {
        Err(SummarizeError::CommandFailed { code, stderr }) => {
            assert_eq!(code, 2);
            assert_eq!(stderr, "Error: unsupported URL");
        }
        other => panic!("Expected CommandFailed, got {other:?}"),
    }
}

#[test]
fn command_failed_message_names_code_and_stderr() {
    let fake = FakeSummarize::failing(1, "rate limited");
    let err = fake
        .client()
        .call("https://example.com", &Options::new())
        .unwrap_err();
    assert_eq!(err.to_string(), "summarize exited with code 1: rate limited");
}

#[test]
fn child_killed_by_signal_is_classified() {
    let fake = FakeSummarize::new("kill -TERM $$");
    let err = fake
        .client()
        .call("https://example.com", &Options::new())
        .unwrap_err();
    assert!(matches!(err, SummarizeError::Terminated));
}

// ============================================
// Preconditions
// ============================================

#[test]
fn missing_binary_is_reported_before_spawn() {
    let mut config = Config::default();
    config.set_binary_path("/nonexistent/dir/summarize");
    match Client::new(config).call("https://example.com", &Options::new()) {
        Err(SummarizeError::BinaryNotFound { path }) => {
            assert_eq!(path.to_string_lossy(), "/nonexistent/dir/summarize");
        }
        other => panic!("Expected BinaryNotFound, got {other:?}"),
    }
}

#[test]
fn non_executable_file_is_not_a_binary() {
    use std::os::unix::fs::PermissionsExt;

    let fake = FakeSummarize::fixture("summary_response.json");
    std::fs::set_permissions(fake.path(), std::fs::Permissions::from_mode(0o644)).unwrap();
    let err = fake
        .client()
        .call("https://example.com", &Options::new())
        .unwrap_err();
    assert!(matches!(err, SummarizeError::BinaryNotFound { .. }));
    assert!(err.to_string().contains("npm i -g @steipete/summarize"));
}

#[test]
fn old_cli_version_is_rejected_without_running() {
    let fake = FakeSummarize::with_version("0.1.0", "exit 0");
    match fake.client().call("https://example.com", &Options::new()) {
        Err(SummarizeError::VersionMismatch {
            installed,
            required,
        }) => {
            assert_eq!(installed, "0.1.0");
            assert_eq!(required, sumr::MINIMUM_CLI_VERSION);
        }
        other => panic!("Expected VersionMismatch, got {other:?}"),
    }
    assert!(!fake.was_run());
}

#[test]
fn version_check_can_be_disabled() {
    let fake = FakeSummarize::with_version("0.1.0", "printf '{}'");
    let mut config = fake.config();
    config.skip_version_check = true;
    let result = Client::new(config)
        .call("https://example.com", &Options::new())
        .unwrap();
    assert_eq!(result.summary(), None);
}

#[test]
fn version_is_detected_once_per_config() {
    let fake = FakeSummarize::fixture("summary_response.json");
    let client = fake.client();
    assert!(!client.config().cli_version_cached());
    client.call("a", &Options::new()).unwrap();
    assert!(client.config().cli_version_cached());
    assert_eq!(
        client.config().cli_version().as_deref(),
        Some(sumr::MINIMUM_CLI_VERSION)
    );
}

#[test]
fn default_clients_share_detected_version() {
    let fake = FakeSummarize::fixture("summary_response.json");
    let path = fake.path().to_path_buf();
    sumr::configure(|c| c.set_binary_path(path));

    for _ in 0..3 {
        sumr::call("a", &Options::new()).unwrap();
    }
    let cached = sumr::configuration().cli_version_cached();
    sumr::reset_configuration();

    assert_eq!(fake.version_runs(), 1);
    assert!(cached);
}

// ============================================
// Environment
// ============================================

#[test]
fn configured_env_reaches_the_process() {
    let fake = FakeSummarize::new(
        "printf '%s' \"$SUMR_TEST_KEY\" > \"$DIR/env\"\nprintf '{}'",
    );
    let mut config = fake.config();
    config.set_env("SUMR_TEST_KEY", "sk-test");
    Client::new(config).call("a", &Options::new()).unwrap();
    assert_eq!(fake.read("env"), "sk-test");
}

const AMBIENT_VAR: &str = "SUMR_TEST_AMBIENT";

#[test]
fn ambient_env_is_inherited_by_default() {
    std::env::set_var(AMBIENT_VAR, "ambient");
    let fake = FakeSummarize::new(
        "printf '%s' \"${SUMR_TEST_AMBIENT:-unset}\" > \"$DIR/env\"\nprintf '{}'",
    );
    fake.client().call("a", &Options::new()).unwrap();
    assert_eq!(fake.read("env"), "ambient");
}

#[test]
fn ambient_env_is_dropped_when_not_inherited() {
    let fake = FakeSummarize::new(
        "printf '%s|%s' \"${SUMR_TEST_AMBIENT:-unset}\" \"$SUMR_TEST_KEY\" > \"$DIR/env\"\nprintf '{}'",
    );
    std::env::set_var(AMBIENT_VAR, "ambient");
    let mut config = fake.config();
    config.inherit_env = false;
    config.skip_version_check = true;
    config.set_env("SUMR_TEST_KEY", "only-this");
    Client::new(config).call("a", &Options::new()).unwrap();
    assert_eq!(fake.read("env"), "unset|only-this");
}

#[test]
fn version_is_detected_with_configured_env() {
    let fake = FakeSummarize::with_env_version("SUMR_TEST_REPORTED_VERSION", "printf '{}'");
    let mut config = fake.config();
    config.inherit_env = false;
    config.set_env("SUMR_TEST_REPORTED_VERSION", "0.1.0");
    let client = Client::new(config);

    assert_eq!(client.config().cli_version().as_deref(), Some("0.1.0"));
    assert!(matches!(
        client.call("a", &Options::new()),
        Err(SummarizeError::VersionMismatch { .. })
    ));
}

#[test]
fn version_detection_drops_ambient_env_when_not_inherited() {
    std::env::set_var("SUMR_TEST_AMBIENT_VERSION", "0.1.0");
    let fake = FakeSummarize::with_env_version("SUMR_TEST_AMBIENT_VERSION", "printf '{}'");

    let mut isolated = fake.config();
    isolated.inherit_env = false;
    assert_eq!(isolated.cli_version(), None);

    assert_eq!(fake.config().cli_version().as_deref(), Some("0.1.0"));
}
