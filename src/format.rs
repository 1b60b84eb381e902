//! Percentage formatting for badge text.

/// A coverage ratio rendered for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedCoverage {
    /// Badge text, e.g. `"87%"` or `"87.50%"`.
    pub display: String,
    /// Percentage truncated to two decimals, in `[0, 100]`.
    pub percentage: f64,
}

/// Convert a ratio in `[0, 1]` into a percentage truncated (never rounded)
/// to two decimal places. Whole numbers drop the decimals.
#[must_use]
pub fn format_coverage(ratio: f64) -> FormattedCoverage {
    let percentage = (ratio * 100.0 * 100.0).floor() / 100.0;
    let display = if percentage.fract() == 0.0 {
        format!("{}%", percentage as i64)
    } else {
        format!("{percentage:.2}%")
    };
    FormattedCoverage {
        display,
        percentage,
    }
}
