//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use sumr::SummaryResult;

/// Get the path to the fixtures directory
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Load a fixture file's contents
pub fn load_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|_| panic!("Failed to load fixture: {}", name))
}

/// Parse a JSON fixture into a result
pub fn result_fixture(name: &str) -> SummaryResult {
    load_fixture(name)
        .parse()
        .unwrap_or_else(|e| panic!("Invalid fixture {}: {}", name, e))
}
