//! Command handler for the `generate_lcov_badge` binary.
//!
//! The handler returns its output as a `String`, making it easy to test
//! without capturing stdout.

use std::fmt::Write;

use anyhow::{Context, Result};

use crate::generate::{generate, GenerateOptions, GenerationSummary};

/// Printed when fewer than four positional arguments are supplied.
pub const USAGE: &str = "Usage: generate_lcov_badge <lcov_file> <badges_directory> <coverage_badge_filename> <branch_coverage_badge_filename>";

pub fn cmd_generate(opts: &GenerateOptions, json: bool) -> Result<String> {
    let summary = generate(opts)
        .with_context(|| format!("Failed to generate badges from {}", opts.lcov_file.display()))?;

    if json {
        let mut out = serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?;
        out.push('\n');
        Ok(out)
    } else {
        Ok(format_text(&summary))
    }
}

fn format_text(summary: &GenerationSummary) -> String {
    let mut out = String::new();
    writeln!(
        out,
        "Generated line coverage badge at: {}",
        summary.line.path.display()
    )
    .unwrap();
    writeln!(
        out,
        "Generated branch coverage badge at: {}",
        summary.branch.path.display()
    )
    .unwrap();
    out
}
