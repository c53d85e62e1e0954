//! Structured view over the summarize CLI's `--json` output.
//!
//! [`SummaryResult`] keeps the parsed document as-is and exposes named,
//! null-safe accessors. A missing path, or a value of the wrong type, reads
//! as `None` (or zero for token counters).

use serde::Serialize;
use serde_json::Value;
use std::str::FromStr;

/// Token counters summed over every LLM call in a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    pub total_tokens: u64,
}

/// Parsed result of a buffered summarize run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SummaryResult {
    raw: Value,
}

impl SummaryResult {
    pub fn new(raw: Value) -> Self {
        Self { raw }
    }

    /// The full JSON document.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    pub fn into_inner(self) -> Value {
        self.raw
    }

    /// Walk nested object keys; non-objects along the way yield `None`.
    fn dig(&self, path: &[&str]) -> Option<&Value> {
        path.iter()
            .try_fold(&self.raw, |value, key| value.as_object()?.get(*key))
            .filter(|v| !v.is_null())
    }

    fn dig_str(&self, path: &[&str]) -> Option<&str> {
        self.dig(path).and_then(Value::as_str)
    }

    pub fn summary(&self) -> Option<&str> {
        self.dig_str(&["summary"])
    }

    pub fn prompt(&self) -> Option<&str> {
        self.dig_str(&["prompt"])
    }

    pub fn title(&self) -> Option<&str> {
        self.dig_str(&["extracted", "title"])
    }

    pub fn description(&self) -> Option<&str> {
        self.dig_str(&["extracted", "description"])
    }

    pub fn site_name(&self) -> Option<&str> {
        self.dig_str(&["extracted", "siteName"])
    }

    /// Extracted page or file content.
    pub fn content(&self) -> Option<&str> {
        self.dig_str(&["extracted", "content"])
    }

    pub fn content_length(&self) -> Option<u64> {
        self.dig(&["extracted", "contentLength"])
            .and_then(Value::as_u64)
    }

    pub fn media_type(&self) -> Option<&str> {
        self.dig_str(&["extracted", "mediaType"])
    }

    /// Which extractor produced the content (e.g. "readability").
    pub fn source(&self) -> Option<&str> {
        self.dig_str(&["extracted", "source"])
    }

    pub fn model(&self) -> Option<&str> {
        self.dig_str(&["llm", "model"])
    }

    pub fn provider(&self) -> Option<&str> {
        self.dig_str(&["llm", "provider"])
    }

    pub fn metrics(&self) -> Option<&Value> {
        self.dig(&["metrics"])
    }

    /// Per-call LLM metrics; empty when absent.
    pub fn llm_metrics(&self) -> &[Value] {
        self.dig(&["metrics", "llm"])
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn input_kind(&self) -> Option<&str> {
        self.dig_str(&["input", "kind"])
    }

    pub fn slides(&self) -> Option<&Value> {
        self.dig(&["slides"])
    }

    fn sum_metric(&self, key: &str) -> u64 {
        self.llm_metrics()
            .iter()
            .map(|m| m.get(key).and_then(Value::as_u64).unwrap_or(0))
            .sum()
    }

    pub fn total_tokens(&self) -> u64 {
        self.sum_metric("totalTokens")
    }

    pub fn prompt_tokens(&self) -> u64 {
        self.sum_metric("promptTokens")
    }

    pub fn completion_tokens(&self) -> u64 {
        self.sum_metric("completionTokens")
    }

    pub fn token_usage(&self) -> TokenUsage {
        TokenUsage {
            prompt_tokens: self.prompt_tokens(),
            completion_tokens: self.completion_tokens(),
            total_tokens: self.total_tokens(),
        }
    }

    /// A summary was produced.
    pub fn is_success(&self) -> bool {
        self.dig(&["summary"]).is_some()
    }

    /// No summary, but extracted content is present (`--extract` runs).
    pub fn is_extract_only(&self) -> bool {
        !self.is_success() && self.dig(&["extracted", "content"]).is_some()
    }
}

impl From<Value> for SummaryResult {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}

impl FromStr for SummaryResult {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map(Self::new)
    }
}
