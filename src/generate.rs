//! The badge pipeline: parse → rate → classify/format/render → write.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use crate::badge::{render_kind, BadgeKind};
use crate::error::Result;
use crate::format::format_coverage;
use crate::lcov;
use crate::model::CoverageTotals;
use crate::output::{ensure_directory, write_badge};
use crate::threshold::Thresholds;

/// Everything needed for one run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub lcov_file: PathBuf,
    pub badges_dir: PathBuf,
    pub coverage_filename: PathBuf,
    pub branch_filename: PathBuf,
    pub thresholds: Thresholds,
}

/// One written badge.
#[derive(Debug, Clone, Serialize)]
pub struct BadgeReport {
    pub label: &'static str,
    pub covered: u64,
    pub total: u64,
    pub percentage: f64,
    pub display: String,
    pub color: String,
    pub path: PathBuf,
}

/// Outcome of a run, ready to be printed or serialized.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationSummary {
    pub input: PathBuf,
    pub totals: CoverageTotals,
    pub line: BadgeReport,
    pub branch: BadgeReport,
}

/// A rendered badge that has not been written yet.
struct RenderedBadge {
    report: BadgeReport,
    svg: String,
}

fn build_badge(
    kind: BadgeKind,
    (covered, total): (u64, u64),
    ratio: f64,
    thresholds: &Thresholds,
    path: PathBuf,
) -> RenderedBadge {
    let formatted = format_coverage(ratio);
    let color = thresholds.color_for(formatted.percentage).to_string();
    let svg = render_kind(kind, &formatted.display, &color);
    RenderedBadge {
        report: BadgeReport {
            label: kind.label(),
            covered,
            total,
            percentage: formatted.percentage,
            display: formatted.display,
            color,
            path,
        },
        svg,
    }
}

fn write(badge: RenderedBadge) -> Result<BadgeReport> {
    write_badge(&badge.report.path, &badge.svg)?;
    info!(
        label = badge.report.label,
        coverage = %badge.report.display,
        color = %badge.report.color,
        path = %badge.report.path.display(),
        "wrote badge"
    );
    Ok(badge.report)
}

/// Render both badges for `totals` and write them under `badges_dir`.
pub fn write_badges(
    totals: &CoverageTotals,
    badges_dir: &Path,
    coverage_filename: &Path,
    branch_filename: &Path,
    thresholds: &Thresholds,
) -> Result<(BadgeReport, BadgeReport)> {
    let line = build_badge(
        BadgeKind::Coverage,
        (totals.covered_lines, totals.total_lines),
        totals.line_rate(),
        thresholds,
        badges_dir.join(coverage_filename),
    );
    let branch = build_badge(
        BadgeKind::Branches,
        (totals.covered_branches, totals.total_branches),
        totals.branch_rate(),
        thresholds,
        badges_dir.join(branch_filename),
    );

    ensure_directory(badges_dir)?;
    Ok((write(line)?, write(branch)?))
}

/// Run the whole pipeline. The input is parsed before anything is created
/// on disk, so an unreadable input leaves no output behind.
pub fn generate(opts: &GenerateOptions) -> Result<GenerationSummary> {
    let totals = lcov::parse_file(&opts.lcov_file)?;
    let (line, branch) = write_badges(
        &totals,
        &opts.badges_dir,
        &opts.coverage_filename,
        &opts.branch_filename,
        &opts.thresholds,
    )?;
    Ok(GenerationSummary {
        input: opts.lcov_file.clone(),
        totals,
        line,
        branch,
    })
}
