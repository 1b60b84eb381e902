//! SVG badge rendering.
//!
//! Badges use a fixed 104x20 two-segment layout: a grey label segment and
//! a value segment filled with the classification color. Text coordinates
//! are in the template's `scale(.1)` space.

/// Which coverage figure a badge reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Coverage,
    Branches,
}

impl BadgeKind {
    /// Text of the label segment.
    pub fn label(&self) -> &'static str {
        match self {
            BadgeKind::Coverage => "coverage",
            BadgeKind::Branches => "branches",
        }
    }
}

/// Width of the value text, stepped by the display string's length.
#[must_use]
pub fn text_length(display: &str) -> u32 {
    match display.chars().count() {
        n if n >= 6 => 380,
        5 => 330,
        4 => 250,
        _ => 170,
    }
}

/// Render a badge. Inputs are embedded verbatim; callers only pass
/// tool-generated text, so nothing is escaped.
#[must_use]
pub fn render(display: &str, color: &str, label: &str) -> String {
    let text_length = text_length(display);
    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="104"
height="20" role="img" aria-label="{label}: {display}">
  <linearGradient id="s" x2="0" y2="100%">
    <stop offset="0" stop-color="#bbb" stop-opacity=".1"/>
    <stop offset="1" stop-opacity=".1"/>
  </linearGradient>
  <clipPath id="r">
    <rect width="104" height="20" rx="3" fill="#fff"/>
  </clipPath>
  <g clip-path="url(#r)">
    <rect width="61" height="20" fill="#555"/>
    <rect x="61" width="43" height="20" fill="{color}"/>
    <rect width="104" height="20" fill="url(#s)"/>
  </g>
  <g fill="#fff" text-anchor="middle"
    font-family="Verdana,Geneva,DejaVu Sans,sans-serif"
    text-rendering="geometricPrecision" font-size="110">
    <text aria-hidden="true" x="315" y="150" fill="#010101"
      fill-opacity=".3" transform="scale(.1)" textLength="510">{label}</text>
    <text x="315" y="140" transform="scale(.1)" fill="#fff"
      textLength="510">{label}</text>
    <text aria-hidden="true" x="815" y="150"
      fill="#010101" fill-opacity=".3" transform="scale(.1)"
      textLength="{text_length}">{display}</text>
    <text x="815" y="140"
      transform="scale(.1)" fill="#fff" textLength="{text_length}">{display}</text>
  </g>
</svg>"##
    )
}

/// Render a badge of the given kind.
#[must_use]
pub fn render_kind(kind: BadgeKind, display: &str, color: &str) -> String {
    render(display, color, kind.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_length_steps() {
        assert_eq!(text_length("0%"), 170);
        assert_eq!(text_length("87%"), 170);
        assert_eq!(text_length("100%"), 250);
        assert_eq!(text_length("1.50%"), 330);
        assert_eq!(text_length("87.50%"), 380);
        assert_eq!(text_length("100.00%"), 380);
    }

    #[test]
    fn test_render_substitutes_values() {
        let svg = render("87.50%", "#a4a61d", "coverage");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"aria-label="coverage: 87.50%""#));
        assert!(svg.contains(r##"<rect x="61" width="43" height="20" fill="#a4a61d"/>"##));
        assert_eq!(svg.matches(r#"textLength="380">87.50%</text>"#).count(), 2);
        assert_eq!(svg.matches(r#"textLength="510">coverage</text>"#).count(), 2);
    }

    #[test]
    fn test_render_fixed_dimensions() {
        let svg = render("5%", "#e05d44", "branches");
        assert!(svg.contains(r#"width="104""#));
        assert!(svg.contains(r#"height="20""#));
        assert!(svg.contains(r#"textLength="170">5%</text>"#));
    }

    #[test]
    fn test_render_does_not_escape() {
        let svg = render("a&b", "red", "<x>");
        assert!(svg.contains(">a&b</text>"));
        assert!(svg.contains("><x></text>"));
    }

    #[test]
    fn test_render_kind_labels() {
        assert!(render_kind(BadgeKind::Coverage, "90%", "#97ca00").contains(">coverage</text>"));
        assert!(render_kind(BadgeKind::Branches, "90%", "#97ca00").contains(">branches</text>"));
    }
}
