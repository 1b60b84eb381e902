//! Coverage counts accumulated from a single LCOV file, and the ratios
//! derived from them.

use serde::Serialize;

/// Compute a coverage rate, returning 1.0 when the total is zero.
///
/// Nothing to cover counts as fully covered.
#[must_use]
pub fn rate(covered: u64, total: u64) -> f64 {
    if total == 0 {
        1.0
    } else {
        covered as f64 / total as f64
    }
}

/// Line and branch totals for one run. `covered_*` never exceeds `total_*`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CoverageTotals {
    pub total_lines: u64,
    pub covered_lines: u64,
    pub total_branches: u64,
    pub covered_branches: u64,
}

impl CoverageTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one `DA:` entry; `executed` when its count is positive.
    pub fn record_line(&mut self, executed: bool) {
        self.total_lines += 1;
        if executed {
            self.covered_lines += 1;
        }
    }

    /// Record one `BRDA:` entry; `taken` when its count is positive.
    pub fn record_branch(&mut self, taken: bool) {
        self.total_branches += 1;
        if taken {
            self.covered_branches += 1;
        }
    }

    #[must_use]
    pub fn line_rate(&self) -> f64 {
        rate(self.covered_lines, self.total_lines)
    }

    #[must_use]
    pub fn branch_rate(&self) -> f64 {
        rate(self.covered_branches, self.total_branches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_zero_total_is_full_coverage() {
        assert_eq!(rate(0, 0), 1.0);
        // The covered count is irrelevant when there is nothing to cover.
        assert_eq!(rate(7, 0), 1.0);
    }

    #[test]
    fn test_rate_fraction() {
        assert_eq!(rate(8, 10), 0.8);
        assert_eq!(rate(0, 4), 0.0);
        assert_eq!(rate(4, 4), 1.0);
    }

    #[test]
    fn test_record_line() {
        let mut totals = CoverageTotals::new();
        totals.record_line(true);
        totals.record_line(false);
        totals.record_line(false);
        assert_eq!(totals.total_lines, 3);
        assert_eq!(totals.covered_lines, 1);
    }

    #[test]
    fn test_record_branch() {
        let mut totals = CoverageTotals::new();
        totals.record_branch(true);
        totals.record_branch(false);
        totals.record_branch(false);
        assert_eq!(totals.total_branches, 3);
        assert_eq!(totals.covered_branches, 1);
        assert!((totals.branch_rate() - 1.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_totals_rates() {
        let totals = CoverageTotals::new();
        assert_eq!(totals.line_rate(), 1.0);
        assert_eq!(totals.branch_rate(), 1.0);
    }
}
