//! SVG styling primitives: colors, palettes and text anchoring.

use std::fmt;

/// Color specification.
///
/// Theme colors render as `var(--color-*, fallback)`, so a standalone SVG file
/// shows the fallback while an embedding page can restyle it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartColor {
    /// Direct hex color (e.g., "#3182bd")
    Hex(String),
    /// Theme color by name (e.g., "text" → "var(--color-text, #1e293b)")
    CssVar(String),
}

/// Fallback values for theme colors.
const THEME: &[(&str, &str)] = &[
    ("text", "#1e293b"),
    ("text-muted", "#64748b"),
    ("border", "#cbd5e1"),
    ("background", "#ffffff"),
    ("chart-primary", "#3182bd"),
    ("chart-secondary", "#31a354"),
];

/// Viridis color map, sampled at eleven evenly spaced stops.
const VIRIDIS: [(u8, u8, u8); 11] = [
    (0x44, 0x01, 0x54),
    (0x48, 0x28, 0x78),
    (0x3e, 0x4a, 0x89),
    (0x31, 0x68, 0x8e),
    (0x26, 0x82, 0x8e),
    (0x1f, 0x9e, 0x89),
    (0x35, 0xb7, 0x79),
    (0x6d, 0xcd, 0x59),
    (0xb4, 0xde, 0x2c),
    (0xe0, 0xe3, 0x18),
    (0xfd, 0xe7, 0x25),
];

/// Qualitative palette for categories that have no natural order.
const CATEGORICAL: [&str; 20] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf", "#aec7e8", "#ffbb78", "#98df8a", "#ff9896", "#c5b0d5", "#c49c94",
    "#f7b6d2", "#c7c7c7", "#dbdb8d", "#9edae5",
];

impl ChartColor {
    /// Create a theme color reference.
    #[must_use]
    pub fn css_var(name: &str) -> Self {
        Self::CssVar(name.to_string())
    }

    /// Create a hex color.
    #[must_use]
    pub fn hex(color: &str) -> Self {
        Self::Hex(color.to_string())
    }

    /// Sample the viridis map at `t` in `[0, 1]` (clamped).
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn viridis(t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let scaled = t * (VIRIDIS.len() - 1) as f64;
        let lower = scaled.floor() as usize;
        let upper = (lower + 1).min(VIRIDIS.len() - 1);
        let frac = scaled - lower as f64;

        let mix = |a: u8, b: u8| -> u8 {
            (f64::from(b) - f64::from(a))
                .mul_add(frac, f64::from(a))
                .round() as u8
        };
        let (r0, g0, b0) = VIRIDIS[lower];
        let (r1, g1, b1) = VIRIDIS[upper];
        Self::Hex(format!(
            "#{:02x}{:02x}{:02x}",
            mix(r0, r1),
            mix(g0, g1),
            mix(b0, b1)
        ))
    }

    /// `count` colors spread over the viridis range `[from, to]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn viridis_range(count: usize, from: f64, to: f64) -> Vec<Self> {
        match count {
            0 => Vec::new(),
            1 => vec![Self::viridis(from)],
            _ => (0..count)
                .map(|i| Self::viridis((to - from).mul_add(i as f64 / (count - 1) as f64, from)))
                .collect(),
        }
    }

    /// Qualitative palette entry; wraps around after twenty colors.
    #[must_use]
    pub fn categorical(index: usize) -> Self {
        Self::hex(CATEGORICAL[index % CATEGORICAL.len()])
    }

    /// Convert to CSS value string.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Hex(h) => h.clone(),
            Self::CssVar(name) => THEME
                .iter()
                .find(|(theme_name, _)| theme_name == name)
                .map_or_else(
                    || format!("var(--color-{name})"),
                    |(_, fallback)| format!("var(--color-{name}, {fallback})"),
                ),
        }
    }
}

/// Text anchor position for labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

impl fmt::Display for TextAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::Middle => write!(f, "middle"),
            Self::End => write!(f, "end"),
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
