//! SVG document framing and the composition builder for custom layouts.

use std::fmt::Write;

use super::element::SvgElement;
use super::format::html_escape;
use super::style::ChartColor;

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Write the root `<svg>` tag, accessible title and page background.
///
/// Callers close the document with `</svg>`.
pub(super) fn open_document(output: &mut String, width: f64, height: f64, title: &str) {
    let _ = writeln!(
        output,
        r#"<svg viewBox="0 0 {width} {height}" width="{width}" height="{height}" xmlns="http://www.w3.org/2000/svg" role="img" font-family="{FONT_FAMILY}">"#
    );
    if !title.is_empty() {
        let _ = writeln!(output, r"    <title>{}</title>", html_escape(title));
    }
    let _ = writeln!(
        output,
        r#"    <rect width="100%" height="100%" fill="{}"/>"#,
        ChartColor::css_var("background").to_css()
    );
}

/// Visible heading: a bold first line and optional muted second line.
pub(super) fn write_heading(output: &mut String, width: f64, title: &str, subtitle: &str) {
    let text_color = ChartColor::css_var("text").to_css();
    let _ = writeln!(
        output,
        r#"    <text x="{}" y="24" text-anchor="middle" fill="{text_color}" font-size="15" font-weight="bold">{}</text>"#,
        width / 2.0,
        html_escape(title)
    );
    if !subtitle.is_empty() {
        let muted = ChartColor::css_var("text-muted").to_css();
        let _ = writeln!(
            output,
            r#"    <text x="{}" y="42" text-anchor="middle" fill="{muted}" font-size="11" font-style="italic">{}</text>"#,
            width / 2.0,
            html_escape(subtitle)
        );
    }
}

/// Centered placeholder for charts without data.
pub(super) fn write_empty_state(output: &mut String, width: f64, height: f64) {
    let text_color = ChartColor::css_var("text-muted").to_css();
    let _ = writeln!(
        output,
        r#"    <text x="{}" y="{}" text-anchor="middle" fill="{text_color}" font-size="14">No data available</text>"#,
        width / 2.0,
        height / 2.0
    );
}

/// Builder for custom SVG compositions.
#[derive(Debug, Default)]
pub struct SvgBuilder {
    width: f64,
    height: f64,
    title: String,
    elements: Vec<String>,
}

impl SvgBuilder {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            title: String::new(),
            elements: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn push_element<E: SvgElement>(mut self, element: &E) -> Self {
        self.elements.push(element.render());
        self
    }

    #[must_use]
    pub fn build(self) -> String {
        let mut output = String::new();
        open_document(&mut output, self.width, self.height, &self.title);

        for element in self.elements {
            for line in element.lines() {
                let _ = writeln!(output, "    {line}");
            }
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
