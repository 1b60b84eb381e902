//! Mapping from a coverage percentage to a badge color.

use tracing::warn;

use crate::error::{BadgeError, Result};

/// Default cutoffs, best bucket first.
pub const DEFAULT_CUTOFFS: [f64; 5] = [100.0, 90.0, 80.0, 70.0, 60.0];

/// Default colors, best to worst: bright green, green, olive, yellow,
/// orange, red. The last one is the catch-all below every cutoff.
pub const DEFAULT_COLORS: [&str; 6] = ["#4c1", "#97ca00", "#a4a61d", "#dfb317", "#fe7d37", "#e05d44"];

/// Compute the color index for `percentage`.
///
/// The number of usable buckets is `min(num_colors, cutoffs.len() + 1)`.
/// The first cutoff that `percentage` meets (`>=`) selects its bucket;
/// otherwise the last usable bucket is returned. `cutoffs` must already be
/// in descending order; they are not sorted here.
#[must_use]
pub fn classify(percentage: f64, cutoffs: &[f64], num_colors: usize) -> usize {
    let buckets = num_colors.min(cutoffs.len() + 1);
    let last = buckets.saturating_sub(1);
    cutoffs[..last]
        .iter()
        .position(|&cutoff| percentage >= cutoff)
        .unwrap_or(last)
}

/// Cutoffs paired positionally with colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    cutoffs: Vec<f64>,
    colors: Vec<String>,
}

impl Thresholds {
    /// Build a threshold table. Fails when `colors` is empty or a cutoff is
    /// not a finite number.
    pub fn new(cutoffs: Vec<f64>, colors: Vec<String>) -> Result<Self> {
        if colors.is_empty() {
            return Err(BadgeError::InvalidThresholds(
                "at least one color is required".to_string(),
            ));
        }
        if let Some(bad) = cutoffs.iter().find(|c| !c.is_finite()) {
            return Err(BadgeError::InvalidThresholds(format!(
                "cutoff {bad} is not a finite number"
            )));
        }
        if cutoffs.windows(2).any(|w| w[0] < w[1]) {
            warn!(?cutoffs, "cutoffs are not in descending order; buckets may be skipped");
        }
        Ok(Self { cutoffs, colors })
    }

    /// The color for a percentage in `[0, 100]`.
    #[must_use]
    pub fn color_for(&self, percentage: f64) -> &str {
        let idx = classify(percentage, &self.cutoffs, self.colors.len());
        &self.colors[idx]
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            cutoffs: DEFAULT_CUTOFFS.to_vec(),
            colors: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect(),
        }
    }
}
