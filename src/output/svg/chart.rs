//! Composite chart types: vertical and horizontal bar charts.

use std::fmt::Write;

use super::builder::{open_document, write_empty_state, write_heading};
use super::data::DataPoint;
use super::element::{Axis, Bar, Label, Legend, SvgElement};
use super::format::{format_decimal, format_thousands, html_escape};
use super::style::{ChartColor, TextAnchor};

/// Linear value axis rounded out to "nice" tick steps.
///
/// The range always includes zero so bars grow from a visible baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ValueScale {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ValueScale {
    pub fn new(values: impl IntoIterator<Item = f64>, target_ticks: u32) -> Self {
        let (mut low, mut high) = (0.0_f64, 0.0_f64);
        for value in values.into_iter().filter(|v| v.is_finite()) {
            low = low.min(value);
            high = high.max(value);
        }
        if high - low <= 0.0 {
            high = 1.0;
        }
        let step = nice_step(high - low, target_ticks.max(1));
        Self {
            min: (low / step).floor() * step,
            max: (high / step).ceil() * step,
            step,
        }
    }

    /// Position of `value` within the range, 0 at `min` and 1 at `max`.
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / (self.max - self.min)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn ticks(&self) -> Vec<f64> {
        let count = ((self.max - self.min) / self.step).round() as u32;
        (0..=count)
            .map(|i| self.step.mul_add(f64::from(i), self.min))
            .collect()
    }

    /// Vertical axis with tick labels plus dashed grid lines across the plot.
    pub fn render_vertical(
        &self,
        output: &mut String,
        left: f64,
        right: f64,
        bottom: f64,
        height: f64,
    ) {
        let grid_color = ChartColor::css_var("border").to_css();
        let mut labels = Vec::new();
        for tick in self.ticks() {
            let fraction = self.fraction(tick);
            let y = fraction.mul_add(-height, bottom);
            let _ = writeln!(
                output,
                r#"    <line x1="{left}" y1="{y}" x2="{right}" y2="{y}" stroke="{grid_color}" stroke-width="1" stroke-dasharray="4,4" opacity="0.6"/>"#
            );
            labels.push((fraction, format_tick(tick)));
        }
        let axis = Axis::vertical(left, bottom, height).with_labels(labels);
        for line in axis.render().lines() {
            let _ = writeln!(output, "    {line}");
        }
    }
}

/// Tick step of 1, 2 or 5 times a power of ten.
fn nice_step(range: f64, target_ticks: u32) -> f64 {
    let raw = range / f64::from(target_ticks);
    let magnitude = 10_f64.powf(raw.log10().floor());
    let residual = raw / magnitude;
    let factor = if residual > 5.0 {
        10.0
    } else if residual > 2.0 {
        5.0
    } else if residual > 1.0 {
        2.0
    } else {
        1.0
    };
    factor * magnitude
}

#[allow(clippy::cast_possible_truncation)]
pub(super) fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 {
        format_thousands(value as i64)
    } else {
        format_decimal(value)
    }
}

/// Category label under a bar or group; rotated labels hang from their end.
pub(super) fn category_label(x: f64, y: f64, text: &str, rotation: f64) -> Label {
    let color = ChartColor::css_var("text");
    if rotation == 0.0 {
        Label::new(x, y, text)
            .with_size(10.0)
            .with_anchor(TextAnchor::Middle)
            .with_color(color)
    } else {
        Label::new(x, y, text)
            .with_size(10.0)
            .with_anchor(TextAnchor::End)
            .with_color(color)
            .with_rotation(rotation)
    }
}

/// Axis caption rotated along the left edge.
pub(super) fn y_axis_caption(x: f64, center_y: f64, text: &str) -> Label {
    Label::new(x, center_y, text)
        .with_size(11.0)
        .with_anchor(TextAnchor::Middle)
        .with_color(ChartColor::css_var("text-muted"))
        .with_rotation(-90.0)
}

/// Write each line of an element's markup, indented one level.
pub(super) fn push_element<E: SvgElement>(output: &mut String, element: &E) {
    for line in element.render().lines() {
        let _ = writeln!(output, "    {line}");
    }
}

/// Vertical bar chart with automatic scaling.
#[derive(Debug)]
pub struct BarChart {
    pub title: String,
    pub subtitle: String,
    pub data: Vec<DataPoint>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    /// Space under the plot reserved for category labels.
    pub label_space: f64,
    /// Rotation of category labels in degrees; 0 keeps them horizontal.
    pub label_rotation: f64,
    pub bar_color: ChartColor,
    pub show_values: bool,
    pub y_label: Option<String>,
    pub legend: Vec<(String, ChartColor)>,
}

impl Default for BarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            data: Vec::new(),
            width: 400.0,
            height: 200.0,
            padding: 40.0,
            label_space: 24.0,
            label_rotation: 0.0,
            bar_color: ChartColor::css_var("chart-primary"),
            show_values: true,
            y_label: None,
            legend: Vec::new(),
        }
    }
}

impl BarChart {
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
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.bar_color = color;
        self
    }

    /// Rotate category labels and reserve `space` below the plot for them.
    #[must_use]
    pub const fn with_rotated_labels(mut self, degrees: f64, space: f64) -> Self {
        self.label_rotation = degrees;
        self.label_space = space;
        self
    }

    #[must_use]
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_legend(mut self, entries: Vec<(String, ChartColor)>) -> Self {
        self.legend = entries;
        self
    }

    fn plot_top(&self) -> f64 {
        if self.title.is_empty() {
            self.padding / 2.0
        } else {
            self.padding + 20.0
        }
    }

    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    fn render_bars(&self, output: &mut String, scale: &ValueScale, plot: (f64, f64, f64, f64)) {
        let (left, top, chart_width, chart_height) = plot;
        let bottom = top + chart_height;
        let zero_y = scale.fraction(0.0).mul_add(-chart_height, bottom);

        let bar_count = self.data.len();
        let gap_ratio = 0.2;
        let total_gap = chart_width * gap_ratio;
        let bar_width = (chart_width - total_gap) / bar_count as f64;
        let gap = total_gap / (bar_count + 1) as f64;
        let base_offset = left + gap;

        for (i, point) in self.data.iter().enumerate() {
            let x = (bar_width + gap).mul_add(i as f64, base_offset);
            let value_y = scale.fraction(point.value).mul_add(-chart_height, bottom);
            let color = point
                .color
                .clone()
                .unwrap_or_else(|| self.bar_color.clone());

            let bar_element = Bar {
                x,
                y: value_y.min(zero_y),
                width: bar_width,
                height: (zero_y - value_y).abs(),
                color,
                label: point.label.clone(),
                value: point.value,
            };
            push_element(output, &bar_element);

            // Value label beyond the end of the bar
            if self.show_values {
                let text = point
                    .annotation
                    .clone()
                    .unwrap_or_else(|| format_tick(point.value));
                let label_y = if point.value < 0.0 {
                    value_y + 12.0
                } else {
                    value_y - 4.0
                };
                let label = Label::new(x + bar_width / 2.0, label_y, text)
                    .with_size(10.0)
                    .with_anchor(TextAnchor::Middle);
                push_element(output, &label);
            }

            let label = category_label(
                x + bar_width / 2.0,
                bottom + 14.0,
                &point.label,
                self.label_rotation,
            );
            push_element(output, &label);
        }

        // Zero baseline drawn over the bars
        let axis_color = ChartColor::css_var("text-muted").to_css();
        let _ = writeln!(
            output,
            r#"    <line x1="{left}" y1="{zero_y}" x2="{}" y2="{zero_y}" stroke="{axis_color}" stroke-width="1"/>"#,
            left + chart_width
        );
    }
}

impl SvgElement for BarChart {
    fn render(&self) -> String {
        let mut output = String::new();
        open_document(&mut output, self.width, self.height, &self.title);
        if !self.title.is_empty() {
            write_heading(&mut output, self.width, &self.title, &self.subtitle);
        }

        if self.data.is_empty() {
            write_empty_state(&mut output, self.width, self.height);
            output.push_str("</svg>");
            return output;
        }

        let left = self.padding * 1.5;
        let top = self.plot_top();
        let chart_width = self.width - left - self.padding / 2.0;
        let chart_height = self.height - top - self.label_space;
        let scale = ValueScale::new(self.data.iter().map(|d| d.value), 5);

        scale.render_vertical(
            &mut output,
            left,
            left + chart_width,
            top + chart_height,
            chart_height,
        );
        self.render_bars(&mut output, &scale, (left, top, chart_width, chart_height));

        if let Some(y_label) = &self.y_label {
            push_element(&mut output, &y_axis_caption(14.0, top + chart_height / 2.0, y_label));
        }
        if !self.legend.is_empty() {
            let legend = Legend::new(self.width - 170.0, top, self.legend.clone());
            push_element(&mut output, &legend);
        }

        output.push_str("</svg>");
        output
    }
}

/// Horizontal bar chart, one row per category, first point on top.
#[derive(Debug)]
pub struct HorizontalBarChart {
    pub title: String,
    pub subtitle: String,
    pub data: Vec<DataPoint>,
    pub width: f64,
    pub height: f64,
    pub padding_left: f64,
    pub padding_right: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
    pub bar_height: f64,
    pub bar_gap: f64,
    pub bar_color: ChartColor,
    pub show_values: bool,
    pub x_label: Option<String>,
}

impl Default for HorizontalBarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            data: Vec::new(),
            width: 400.0,
            // Fits one bar: padding_top + bar_height + bar_gap + padding_bottom
            height: 62.0,
            padding_left: 100.0,
            padding_right: 60.0,
            padding_top: 20.0,
            padding_bottom: 10.0,
            bar_height: 24.0,
            bar_gap: 8.0,
            bar_color: ChartColor::css_var("chart-primary"),
            show_values: true,
            x_label: None,
        }
    }
}

impl HorizontalBarChart {
    #[must_use]
    pub fn new(title: impl Into<String>, data: Vec<DataPoint>) -> Self {
        let mut chart = Self {
            title: title.into(),
            data,
            ..Self::default()
        };
        chart.height = chart.fitted_height();
        chart
    }

    /// Height that fits every row between the paddings.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Acceptable for chart sizing
    pub fn fitted_height(&self) -> f64 {
        let rows = self.data.len().max(1);
        (self.bar_height + self.bar_gap)
            .mul_add(rows as f64, self.padding_top + self.padding_bottom)
    }

    #[must_use]
    pub const fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.bar_color = color;
        self
    }

    /// Widen the label column and margins; height is refitted.
    #[must_use]
    pub fn with_margins(mut self, left: f64, right: f64, top: f64, bottom: f64) -> Self {
        self.padding_left = left;
        self.padding_right = right;
        self.padding_top = top;
        self.padding_bottom = bottom;
        self.height = self.fitted_height();
        self
    }

    #[must_use]
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }
}

impl SvgElement for HorizontalBarChart {
    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    fn render(&self) -> String {
        let mut output = String::new();
        open_document(&mut output, self.width, self.height, &self.title);
        if !self.title.is_empty() && self.padding_top >= 40.0 {
            write_heading(&mut output, self.width, &self.title, &self.subtitle);
        }

        if self.data.is_empty() {
            write_empty_state(&mut output, self.width, self.height);
            output.push_str("</svg>");
            return output;
        }

        let chart_width = self.width - self.padding_left - self.padding_right;

        // Bars scale against the largest value
        let max_value = self
            .data
            .iter()
            .map(|d| d.value)
            .fold(0.0_f64, f64::max)
            .max(1.0);

        for (i, point) in self.data.iter().enumerate() {
            let y = (self.bar_height + self.bar_gap).mul_add(i as f64, self.padding_top);
            let bar_width = (point.value.max(0.0) / max_value) * chart_width;

            let color = point
                .color
                .clone()
                .unwrap_or_else(|| self.bar_color.clone());

            let bar_element = Bar {
                x: self.padding_left,
                y,
                width: bar_width,
                height: self.bar_height,
                color,
                label: point.label.clone(),
                value: point.value,
            };

            let _ = writeln!(output, "    {}", bar_element.render());

            // Label on left
            let label_color = ChartColor::css_var("text").to_css();
            let escaped_label = html_escape(&point.label);
            let _ = writeln!(
                output,
                r#"    <text x="{}" y="{}" text-anchor="end" fill="{label_color}" font-size="12" dominant-baseline="middle">{escaped_label}</text>"#,
                self.padding_left - 8.0,
                y + self.bar_height / 2.0
            );

            // Value on right
            if self.show_values {
                let value_color = ChartColor::css_var("text-muted").to_css();
                let formatted = point
                    .annotation
                    .as_deref()
                    .map_or_else(|| format_tick(point.value), html_escape);
                let _ = writeln!(
                    output,
                    r#"    <text x="{}" y="{}" text-anchor="start" fill="{value_color}" font-size="11" dominant-baseline="middle">{formatted}</text>"#,
                    self.padding_left + bar_width + 6.0,
                    y + self.bar_height / 2.0
                );
            }
        }

        if let Some(x_label) = &self.x_label {
            let caption = Label::new(
                self.padding_left + chart_width / 2.0,
                self.height - self.padding_bottom / 3.0,
                x_label.as_str(),
            )
            .with_size(11.0)
            .with_anchor(TextAnchor::Middle)
            .with_color(ChartColor::css_var("text-muted"));
            push_element(&mut output, &caption);
        }

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "chart_tests.rs"]
mod tests;
