#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary directory holding an LCOV file with `content`,
/// returning the dir handle and the file path.
/// The caller must hold onto `TempDir` to keep the temp directory alive.
pub fn setup_lcov(content: &[u8]) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let lcov_path = dir.path().join("lcov.info");
    std::fs::write(&lcov_path, content).unwrap();
    (dir, lcov_path)
}

/// LCOV data with ten lines, eight of them executed, and no branches.
pub fn eighty_percent_lines() -> Vec<u8> {
    let mut lcov = String::from("TN:\nSF:/src/app.js\n");
    for line in 1..=10 {
        let hits = if line <= 8 { 3 } else { 0 };
        lcov.push_str(&format!("DA:{line},{hits}\n"));
    }
    lcov.push_str("LF:10\nLH:8\nend_of_record\n");
    lcov.into_bytes()
}
