//! Pie chart with a percentage legend.

use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt::Write;

use super::builder::{open_document, write_empty_state, write_heading};
use super::chart::push_element;
use super::data::DataPoint;
use super::element::{Legend, SvgElement};
use super::format::{format_decimal, html_escape};
use super::style::ChartColor;

/// Slices smaller than this share of the whole get no inline label.
const MIN_LABELLED_SHARE: f64 = 0.04;

#[derive(Debug)]
pub struct PieChart {
    pub title: String,
    pub subtitle: String,
    pub data: Vec<DataPoint>,
    pub width: f64,
    pub height: f64,
    pub legend_width: f64,
    pub show_percentages: bool,
}

impl Default for PieChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            data: Vec::new(),
            width: 600.0,
            height: 400.0,
            legend_width: 240.0,
            show_percentages: true,
        }
    }
}

impl PieChart {
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        Self {
            title: title.into(),
            data,
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    #[must_use]
    pub const fn with_legend_width(mut self, width: f64) -> Self {
        self.legend_width = width;
        self
    }

    fn color(&self, index: usize) -> ChartColor {
        self.data[index]
            .color
            .clone()
            .unwrap_or_else(|| ChartColor::categorical(index))
    }

    /// Sum of the positive values; non-positive values get no slice.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.data
            .iter()
            .map(|d| d.value)
            .filter(|v| v.is_finite() && *v > 0.0)
            .sum()
    }

    fn render_slices(&self, output: &mut String, center: (f64, f64), radius: f64, total: f64) {
        let (cx, cy) = center;
        let mut start = -FRAC_PI_2;

        for (i, point) in self.data.iter().enumerate() {
            if !(point.value.is_finite() && point.value > 0.0) {
                continue;
            }
            let share = point.value / total;
            let end = share.mul_add(TAU, start);
            let color = self.color(i).to_css();
            let title = format!(
                "{}: {} ({}%)",
                html_escape(&point.label),
                point.value,
                format_decimal(share * 100.0)
            );

            if share >= 1.0 {
                let _ = writeln!(
                    output,
                    r#"    <circle cx="{cx}" cy="{cy}" r="{radius}" fill="{color}" stroke="white" stroke-width="1"><title>{title}</title></circle>"#
                );
            } else {
                let (x0, y0) = (radius.mul_add(start.cos(), cx), radius.mul_add(start.sin(), cy));
                let (x1, y1) = (radius.mul_add(end.cos(), cx), radius.mul_add(end.sin(), cy));
                let large_arc = u8::from(share > 0.5);
                let _ = writeln!(
                    output,
                    r#"    <path d="M{cx},{cy} L{x0:.2},{y0:.2} A{radius},{radius} 0 {large_arc} 1 {x1:.2},{y1:.2} Z" fill="{color}" stroke="white" stroke-width="1"><title>{title}</title></path>"#
                );
            }

            if self.show_percentages && share >= MIN_LABELLED_SHARE {
                let middle = (start + end) / 2.0;
                let label_radius = radius * 0.68;
                let _ = writeln!(
                    output,
                    r#"    <text x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="middle" fill="white" font-size="10" font-weight="bold">{}%</text>"#,
                    label_radius.mul_add(middle.cos(), cx),
                    label_radius.mul_add(middle.sin(), cy),
                    format_decimal(share * 100.0)
                );
            }

            start = end;
        }
    }
}

impl SvgElement for PieChart {
    fn render(&self) -> String {
        let mut output = String::new();
        open_document(&mut output, self.width, self.height, &self.title);
        let top = if self.title.is_empty() {
            10.0
        } else {
            write_heading(&mut output, self.width, &self.title, &self.subtitle);
            56.0
        };

        let total = self.total();
        if total <= 0.0 {
            write_empty_state(&mut output, self.width, self.height);
            output.push_str("</svg>");
            return output;
        }

        let pie_area = self.width - self.legend_width;
        let radius = (pie_area / 2.0 - 20.0)
            .min((self.height - top - 20.0) / 2.0)
            .max(10.0);
        let center = (pie_area / 2.0, top + (self.height - top) / 2.0);
        self.render_slices(&mut output, center, radius, total);

        let entries = self
            .data
            .iter()
            .enumerate()
            .filter(|(_, d)| d.value.is_finite() && d.value > 0.0)
            .map(|(i, d)| {
                let caption = format!("{} ({}%)", d.label, format_decimal(d.value / total * 100.0));
                (caption, self.color(i))
            })
            .collect();
        let legend = Legend::new(pie_area, top + 4.0, entries);
        push_element(&mut output, &legend);

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "pie_tests.rs"]
mod tests;
