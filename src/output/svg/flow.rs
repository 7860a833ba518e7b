//! Flow diagram primitives: labelled boxes and the connectors between them.

use std::fmt::Write;

use super::element::{Line, SvgElement};
use super::format::html_escape;
use super::style::ChartColor;

/// Rounded box with centered multi-line text.
#[derive(Debug, Clone)]
pub struct FlowBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub lines: Vec<String>,
    pub color: ChartColor,
    pub font_size: f64,
    /// Render the first line in bold as a box heading.
    pub bold_first_line: bool,
}

impl FlowBox {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            lines: Vec::new(),
            color: ChartColor::css_var("chart-primary"),
            font_size: 12.0,
            bold_first_line: false,
        }
    }

    #[must_use]
    pub fn with_lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines = lines.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    #[must_use]
    pub const fn with_heading(mut self) -> Self {
        self.bold_first_line = true;
        self
    }

    #[must_use]
    pub fn top_center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y)
    }

    #[must_use]
    pub fn bottom_center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height)
    }

    #[must_use]
    pub fn left_middle(&self) -> (f64, f64) {
        (self.x, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn right_middle(&self) -> (f64, f64) {
        (self.x + self.width, self.y + self.height / 2.0)
    }
}

impl SvgElement for FlowBox {
    #[allow(clippy::cast_precision_loss)]
    fn render(&self) -> String {
        let mut output = String::new();
        let stroke = self.color.to_css();
        let background = ChartColor::css_var("background").to_css();
        let _ = writeln!(
            output,
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="6" fill="{background}" stroke="{stroke}" stroke-width="2"/>"#,
            self.x, self.y, self.width, self.height
        );

        // Text block is vertically centered on the box
        let line_height = self.font_size + 4.0;
        let block = line_height * self.lines.len().saturating_sub(1) as f64;
        let first_y = self.y + self.height / 2.0 - block / 2.0;
        let center_x = self.x + self.width / 2.0;
        let text_color = ChartColor::css_var("text").to_css();

        for (i, line) in self.lines.iter().enumerate() {
            let weight = if i == 0 && self.bold_first_line {
                r#" font-weight="bold""#
            } else {
                ""
            };
            let _ = writeln!(
                output,
                r#"<text x="{center_x}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="{text_color}" font-size="{}"{weight}>{}</text>"#,
                line_height.mul_add(i as f64, first_y),
                self.font_size,
                html_escape(line)
            );
        }

        output
    }
}

/// Straight arrow between two anchor points.
#[must_use]
pub fn connector(from: (f64, f64), to: (f64, f64), color: ChartColor, stroke_width: f64) -> Line {
    Line::new(vec![from, to], color)
        .with_stroke_width(stroke_width)
        .with_arrow(stroke_width.mul_add(2.0, 6.0))
}

#[cfg(test)]
#[path = "flow_tests.rs"]
mod tests;
