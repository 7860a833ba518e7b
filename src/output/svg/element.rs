//! Primitive SVG elements: axes, bars, lines, labels and legends.

use std::fmt::Write;

use super::format::html_escape;
use super::style::{ChartColor, TextAnchor};

/// Base trait for SVG elements.
pub trait SvgElement {
    /// Render the element to an SVG string.
    fn render(&self) -> String;
}

/// Vertical value axis drawn upward from `(x, y)`, ticks on the left.
#[derive(Debug, Clone)]
pub struct Axis {
    pub x: f64,
    pub y: f64,
    pub length: f64,
    /// Tick positions as fractions of `length`, with their labels.
    pub labels: Vec<(f64, String)>,
    pub color: ChartColor,
    pub tick_length: f64,
    pub font_size: f64,
}

impl Axis {
    #[must_use]
    pub fn vertical(x: f64, y: f64, length: f64) -> Self {
        Self {
            x,
            y,
            length,
            labels: Vec::new(),
            color: ChartColor::css_var("text-muted"),
            tick_length: 5.0,
            font_size: 10.0,
        }
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<(f64, String)>) -> Self {
        self.labels = labels;
        self
    }
}

impl SvgElement for Axis {
    fn render(&self) -> String {
        let mut output = String::new();
        let color = self.color.to_css();
        let top = self.y - self.length;

        let _ = writeln!(
            output,
            r#"<line x1="{x}" y1="{}" x2="{x}" y2="{top}" stroke="{color}" stroke-width="1"/>"#,
            self.y,
            x = self.x
        );

        let tick_end = self.x - self.tick_length;
        let label_x = tick_end - 4.0;
        for (pos, label) in &self.labels {
            let tick_y = pos.mul_add(-self.length, self.y);
            let _ = writeln!(
                output,
                r#"<line x1="{}" y1="{tick_y}" x2="{tick_end}" y2="{tick_y}" stroke="{color}" stroke-width="1"/>"#,
                self.x
            );
            let _ = writeln!(
                output,
                r#"<text x="{label_x}" y="{}" text-anchor="{}" fill="{color}" font-size="{}">{}</text>"#,
                tick_y + self.font_size / 3.0,
                TextAnchor::End,
                self.font_size,
                html_escape(label)
            );
        }

        output
    }
}

/// A single bar in a bar chart.
#[derive(Debug, Clone)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: ChartColor,
    pub label: String,
    pub value: f64,
}

impl SvgElement for Bar {
    fn render(&self) -> String {
        let color = self.color.to_css();
        let escaped_label = html_escape(&self.label);
        // Accessibility: title element for screen readers and hover tooltip
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{color}" rx="2">
    <title>{escaped_label}: {}</title>
</rect>"#,
            self.x, self.y, self.width, self.height, self.value
        )
    }
}

/// A polyline, optionally ending in an arrow head.
#[derive(Debug, Clone)]
pub struct Line {
    pub points: Vec<(f64, f64)>,
    pub color: ChartColor,
    pub stroke_width: f64,
    pub dashed: bool,
    /// Length of the arrow head drawn at the last point; 0 for none.
    pub arrow_size: f64,
}

impl Line {
    #[must_use]
    pub const fn new(points: Vec<(f64, f64)>, color: ChartColor) -> Self {
        Self {
            points,
            color,
            stroke_width: 2.0,
            dashed: false,
            arrow_size: 0.0,
        }
    }

    #[must_use]
    pub const fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = width;
        self
    }

    #[must_use]
    pub const fn with_arrow(mut self, size: f64) -> Self {
        self.arrow_size = size;
        self
    }

    #[must_use]
    pub const fn with_dashes(mut self, dashed: bool) -> Self {
        self.dashed = dashed;
        self
    }

    /// Triangle at the last point, pointing along the last segment.
    fn arrow_head(&self) -> Option<String> {
        if self.arrow_size <= 0.0 || self.points.len() < 2 {
            return None;
        }
        let (tip_x, tip_y) = self.points[self.points.len() - 1];
        let (from_x, from_y) = self.points[self.points.len() - 2];
        let (dx, dy) = (tip_x - from_x, tip_y - from_y);
        let length = dx.hypot(dy);
        if length == 0.0 {
            return None;
        }
        let (ux, uy) = (dx / length, dy / length);
        let base_x = ux.mul_add(-self.arrow_size, tip_x);
        let base_y = uy.mul_add(-self.arrow_size, tip_y);
        let half = self.arrow_size / 2.0;
        let (left_x, left_y) = (uy.mul_add(half, base_x), ux.mul_add(-half, base_y));
        let (right_x, right_y) = (uy.mul_add(-half, base_x), ux.mul_add(half, base_y));
        Some(format!(
            r#"<polygon points="{tip_x},{tip_y} {left_x},{left_y} {right_x},{right_y}" fill="{}"/>"#,
            self.color.to_css()
        ))
    }
}

impl SvgElement for Line {
    fn render(&self) -> String {
        if self.points.is_empty() {
            return String::new();
        }

        let color = self.color.to_css();

        let mut path = String::new();
        for (i, (x, y)) in self.points.iter().enumerate() {
            if i == 0 {
                let _ = write!(path, "M{x},{y}");
            } else {
                let _ = write!(path, " L{x},{y}");
            }
        }

        let dash = if self.dashed {
            r#" stroke-dasharray="4,4""#
        } else {
            ""
        };

        let mut output = String::new();
        let _ = writeln!(
            output,
            r#"<path d="{path}" fill="none" stroke="{color}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"{dash}/>"#,
            self.stroke_width
        );
        if let Some(head) = self.arrow_head() {
            let _ = writeln!(output, "{head}");
        }

        output
    }
}

/// A text label.
#[derive(Debug, Clone)]
pub struct Label {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub anchor: TextAnchor,
    pub color: ChartColor,
    pub bold: bool,
    pub italic: bool,
    /// Rotation in degrees around the anchor point.
    pub rotate: f64,
}

impl Label {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            font_size: 12.0,
            anchor: TextAnchor::Start,
            color: ChartColor::css_var("text"),
            bold: false,
            italic: false,
            rotate: 0.0,
        }
    }

    #[must_use]
    pub const fn with_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    #[must_use]
    pub const fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotate = degrees;
        self
    }
}

impl SvgElement for Label {
    fn render(&self) -> String {
        let mut attrs = String::new();
        if self.bold {
            attrs.push_str(r#" font-weight="bold""#);
        }
        if self.italic {
            attrs.push_str(r#" font-style="italic""#);
        }
        if self.rotate != 0.0 {
            let _ = write!(
                attrs,
                r#" transform="rotate({} {} {})""#,
                self.rotate, self.x, self.y
            );
        }
        format!(
            r#"<text x="{}" y="{}" text-anchor="{}" fill="{}" font-size="{}"{attrs}>{}</text>"#,
            self.x,
            self.y,
            self.anchor,
            self.color.to_css(),
            self.font_size,
            html_escape(&self.text)
        )
    }
}

/// Color swatches with captions, stacked vertically.
#[derive(Debug, Clone)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
    pub entries: Vec<(String, ChartColor)>,
    pub font_size: f64,
}

impl Legend {
    #[must_use]
    pub const fn new(x: f64, y: f64, entries: Vec<(String, ChartColor)>) -> Self {
        Self {
            x,
            y,
            entries,
            font_size: 11.0,
        }
    }

    /// Vertical distance between entries.
    #[must_use]
    pub fn row_height(&self) -> f64 {
        self.font_size + 7.0
    }
}

impl SvgElement for Legend {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let mut output = String::new();
        let swatch = self.font_size;
        let text_color = ChartColor::css_var("text").to_css();
        for (i, (caption, color)) in self.entries.iter().enumerate() {
            let y = self.row_height().mul_add(i as f64, self.y);
            let _ = writeln!(
                output,
                r#"<rect x="{}" y="{y}" width="{swatch}" height="{swatch}" fill="{}" rx="2"/>"#,
                self.x,
                color.to_css()
            );
            let _ = writeln!(
                output,
                r#"<text x="{}" y="{}" fill="{text_color}" font-size="{}" dominant-baseline="middle">{}</text>"#,
                self.x + swatch + 6.0,
                y + swatch / 2.0,
                self.font_size,
                html_escape(caption)
            );
        }
        output
    }
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod tests;
