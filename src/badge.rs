//! SVG badge rendering.
//!
//! A badge has two segments: a fixed grey segment naming the metric and a
//! colored segment showing the percentage. The layout is fixed, so the same
//! label, tier and kind always render to the same bytes.

use quick_xml::escape::escape;

/// Badge color bands, best first. Only 100% gets the first band; the next
/// four are ten points wide and everything under 60% falls in the last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ColorTier {
    BrightGreen,
    Green,
    YellowGreen,
    Yellow,
    Orange,
    Red,
}

impl ColorTier {
    pub const ALL: [ColorTier; 6] = [
        ColorTier::BrightGreen,
        ColorTier::Green,
        ColorTier::YellowGreen,
        ColorTier::Yellow,
        ColorTier::Orange,
        ColorTier::Red,
    ];

    /// Tier for an unclamped band index; out-of-range indices saturate.
    pub fn from_index(index: f64) -> Self {
        let last = Self::ALL.len() - 1;
        Self::ALL[(index.clamp(0.0, last as f64) as usize).min(last)]
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn hex(&self) -> &'static str {
        match self {
            ColorTier::BrightGreen => "#4c1",
            ColorTier::Green => "#97ca00",
            ColorTier::YellowGreen => "#a4a61d",
            ColorTier::Yellow => "#dfb317",
            ColorTier::Orange => "#fe7d37",
            ColorTier::Red => "#e05d44",
        }
    }
}

/// Which metric a badge shows; also the text of its left segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeKind {
    Coverage,
    Branches,
}

impl BadgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeKind::Coverage => "coverage",
            BadgeKind::Branches => "branches",
        }
    }
}

impl std::fmt::Display for BadgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to render one badge.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeSpec {
    pub label: String,
    pub tier: ColorTier,
    pub kind: BadgeKind,
}

impl BadgeSpec {
    pub fn new(ratio: f64, kind: BadgeKind) -> Self {
        let (label, tier) = color_and_label(ratio);
        Self { label, tier, kind }
    }

    #[must_use]
    pub fn render(&self) -> String {
        render(&self.label, self.tier, self.kind.as_str())
    }
}

/// Format a coverage ratio as a percentage label and pick its color.
///
/// The percentage is truncated to one decimal place, never rounded, so a
/// ratio just under a threshold never displays as the threshold itself.
pub fn color_and_label(ratio: f64) -> (String, ColorTier) {
    let percent = (1000.0 * ratio).trunc() / 10.0;
    let tier = ColorTier::from_index(((100.0 - percent) / 10.0).ceil());
    let label = if percent.fract() == 0.0 {
        format!("{}%", percent as i64)
    } else {
        format!("{percent:.1}%")
    };
    (label, tier)
}

/// Render the badge SVG.
#[must_use]
pub fn render(label: &str, tier: ColorTier, kind: &str) -> String {
    let text_length = match label.chars().count() {
        n if n >= 4 => "330",
        3 => "250",
        _ => "170",
    };
    let label = escape(label);
    let kind = escape(kind);
    let color = tier.hex();
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"104\" \
height=\"20\" role=\"img\" aria-label=\"{kind}: {label}\">\
<linearGradient id=\"s\" x2=\"0\" y2=\"100%\">\
<stop offset=\"0\" stop-color=\"#bbb\" stop-opacity=\".1\"/>\
<stop offset=\"1\" stop-opacity=\".1\"/></linearGradient><clipPath id=\"r\">\
<rect width=\"104\" height=\"20\" rx=\"3\" fill=\"#fff\"/></clipPath>\
<g clip-path=\"url(#r)\"><rect width=\"61\" height=\"20\" fill=\"#555\"/>\
<rect x=\"61\" width=\"43\" height=\"20\" fill=\"{color}\"/>\
<rect width=\"104\" height=\"20\" fill=\"url(#s)\"/></g>\
<g fill=\"#fff\" text-anchor=\"middle\" \
font-family=\"Verdana,Geneva,DejaVu Sans,sans-serif\" \
text-rendering=\"geometricPrecision\" font-size=\"110\">\
<text aria-hidden=\"true\" x=\"315\" y=\"150\" fill=\"#010101\" \
fill-opacity=\".3\" transform=\"scale(.1)\" textLength=\"510\">{kind}</text>\
<text x=\"315\" y=\"140\" transform=\"scale(.1)\" fill=\"#fff\" \
textLength=\"510\">{kind}</text>\
<text aria-hidden=\"true\" x=\"815\" y=\"150\" \
fill=\"#010101\" fill-opacity=\".3\" transform=\"scale(.1)\" \
textLength=\"{text_length}\">{label}</text><text x=\"815\" y=\"140\" \
transform=\"scale(.1)\" fill=\"#fff\" textLength=\"{text_length}\">{label}</text>\
</g></svg>"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_coverage() {
        assert_eq!(
            color_and_label(1.0),
            ("100%".to_string(), ColorTier::BrightGreen)
        );
    }

    #[test]
    fn test_truncates_instead_of_rounding() {
        let (label, tier) = color_and_label(0.8999);
        assert_eq!(label, "89.9%");
        assert_eq!(tier, ColorTier::YellowGreen);

        let (label, tier_90) = color_and_label(0.90);
        assert_eq!(label, "90%");
        assert_eq!(tier_90, ColorTier::Green);
        assert!(tier > tier_90);

        assert_eq!(color_and_label(0.69999).0, "69.9%");
    }

    #[test]
    fn test_one_decimal_label() {
        assert_eq!(color_and_label(0.835).0, "83.5%");
        assert_eq!(color_and_label(0.8).0, "80%");
        assert_eq!(color_and_label(0.05).0, "5%");
    }

    #[test]
    fn test_tier_bands() {
        assert_eq!(color_and_label(0.95).1, ColorTier::Green);
        assert_eq!(color_and_label(0.8).1, ColorTier::YellowGreen);
        assert_eq!(color_and_label(0.75).1, ColorTier::Yellow);
        assert_eq!(color_and_label(0.6).1, ColorTier::Orange);
        assert_eq!(color_and_label(0.55).1, ColorTier::Red);
    }

    #[test]
    fn test_tier_saturates() {
        assert_eq!(color_and_label(0.0).1, ColorTier::Red);
        assert_eq!(color_and_label(-0.5).1, ColorTier::Red);
        assert_eq!(color_and_label(1.5).1, ColorTier::BrightGreen);
        assert_eq!(ColorTier::from_index(17.0), ColorTier::Red);
        assert_eq!(ColorTier::from_index(-3.0), ColorTier::BrightGreen);
    }

    #[test]
    fn test_palette_order() {
        let hexes: Vec<_> = ColorTier::ALL.iter().map(ColorTier::hex).collect();
        assert_eq!(
            hexes,
            ["#4c1", "#97ca00", "#a4a61d", "#dfb317", "#fe7d37", "#e05d44"]
        );
        for (i, tier) in ColorTier::ALL.iter().enumerate() {
            assert_eq!(tier.index(), i);
        }
    }

    #[test]
    fn test_text_length_by_label_width() {
        assert!(render("100%", ColorTier::BrightGreen, "coverage").contains("textLength=\"330\""));
        assert!(render("80%", ColorTier::YellowGreen, "coverage").contains("textLength=\"250\""));
        assert!(render("5%", ColorTier::Red, "coverage").contains("textLength=\"170\""));
    }

    #[test]
    fn test_render_embeds_kind_label_and_color() {
        let svg = BadgeSpec::new(0.8, BadgeKind::Branches).render();
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</g></svg>"));
        assert!(svg.contains("aria-label=\"branches: 80%\""));
        assert!(svg.contains("fill=\"#a4a61d\""));
        assert_eq!(svg.matches(">branches</text>").count(), 2);
        assert_eq!(svg.matches(">80%</text>").count(), 2);
    }

    #[test]
    fn test_render_is_deterministic() {
        let spec = BadgeSpec::new(0.42, BadgeKind::Coverage);
        assert_eq!(spec.render(), spec.render());
    }
}
