//! Raw text input through temporary files

use std::path::PathBuf;

use super::helpers::FakeSummarize;
use sumr::{Options, SummarizeError};

/// Body copying the input file aside before answering.
fn copying_body(tail: &str) -> String {
    format!("while IFS= read -r line || [ -n \"$line\" ]; do printf '%s\\n' \"$line\"; done < \"$1\" > \"$DIR/input\"\n{}", tail)
}

fn input_path(fake: &FakeSummarize) -> PathBuf {
    PathBuf::from(&fake.recorded_args()[0])
}

#[test]
fn from_text_passes_a_txt_file_with_the_text() {
    let fake = FakeSummarize::new(&copying_body("printf '{\"summary\":\"ok\"}'"));
    let result = fake
        .client()
        .from_text("Meeting notes\nSecond line", &Options::new())
        .unwrap();

    assert_eq!(result.summary(), Some("ok"));
    assert_eq!(fake.read("input"), "Meeting notes\nSecond line\n");

    let path = input_path(&fake);
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("summarize-input"));
    assert!(name.ends_with(".txt"));
    assert_eq!(&fake.recorded_args()[1..3], &["--json", "--stream"]);
}

#[test]
fn temp_file_is_removed_after_success() {
    let fake = FakeSummarize::json("{}");
    fake.client().from_text("some text", &Options::new()).unwrap();
    assert!(!input_path(&fake).exists());
}

#[test]
fn temp_file_is_removed_after_failure() {
    let fake = FakeSummarize::failing(1, "boom");
    let err = fake
        .client()
        .from_text("some text", &Options::new())
        .unwrap_err();
    assert!(matches!(err, SummarizeError::CommandFailed { .. }));
    assert!(!input_path(&fake).exists());
}

#[test]
fn temp_file_is_removed_after_parse_error() {
    let fake = FakeSummarize::json("garbage");
    let err = fake
        .client()
        .from_text("some text", &Options::new())
        .unwrap_err();
    assert!(matches!(err, SummarizeError::OutputParse { .. }));
    assert!(!input_path(&fake).exists());
}

#[test]
fn streaming_text_keeps_file_until_stream_ends() {
    let fake = FakeSummarize::new(&copying_body("printf 'chunk\\n'"));
    let mut chunks = Vec::new();
    fake.client()
        .from_text_streaming("streamed text", &Options::new(), |c| {
            chunks.push(c.to_string())
        })
        .unwrap();

    assert_eq!(chunks, vec!["chunk\n"]);
    assert_eq!(fake.read("input"), "streamed text\n");
    assert_eq!(&fake.recorded_args()[1..], &["--stream", "on"]);
    assert!(!input_path(&fake).exists());
}

#[test]
fn dropped_text_stream_removes_file() {
    let fake = FakeSummarize::lines(&["one", "two"]);
    let mut stream = fake
        .client()
        .stream_text("text", &Options::new())
        .unwrap();
    assert_eq!(stream.next().unwrap().unwrap(), "one\n");
    drop(stream);
    assert!(!input_path(&fake).exists());
}
