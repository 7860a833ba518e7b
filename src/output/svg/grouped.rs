//! Grouped bar chart: one cluster of side-by-side bars per category.

use std::fmt::Write;

use super::builder::{open_document, write_empty_state, write_heading};
use super::chart::{ValueScale, category_label, format_tick, push_element, y_axis_caption};
use super::data::Series;
use super::element::{Bar, Label, Legend, SvgElement};
use super::style::{ChartColor, TextAnchor};

#[derive(Debug)]
pub struct GroupedBarChart {
    pub title: String,
    pub subtitle: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    /// Optional text above each category group (e.g. growth labels).
    pub group_annotations: Vec<Option<String>>,
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub label_space: f64,
    pub label_rotation: f64,
    pub show_values: bool,
    pub y_label: Option<String>,
}

impl Default for GroupedBarChart {
    fn default() -> Self {
        Self {
            title: String::new(),
            subtitle: String::new(),
            categories: Vec::new(),
            series: Vec::new(),
            group_annotations: Vec::new(),
            width: 600.0,
            height: 320.0,
            padding: 40.0,
            label_space: 24.0,
            label_rotation: 0.0,
            show_values: false,
            y_label: None,
        }
    }
}

impl GroupedBarChart {
    #[must_use]
    pub fn new(title: impl Into<String>, categories: Vec<String>, series: Vec<Series>) -> Self {
        Self {
            title: title.into(),
            categories,
            series,
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
    pub fn with_group_annotations(mut self, annotations: Vec<Option<String>>) -> Self {
        self.group_annotations = annotations;
        self
    }

    #[must_use]
    pub const fn with_values(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    fn value(&self, series: usize, category: usize) -> f64 {
        self.series[series]
            .values
            .get(category)
            .copied()
            .unwrap_or(0.0)
    }

    #[allow(clippy::cast_precision_loss)] // Acceptable for chart rendering
    fn render_groups(&self, output: &mut String, scale: &ValueScale, plot: (f64, f64, f64, f64)) {
        let (left, top, chart_width, chart_height) = plot;
        let bottom = top + chart_height;
        let zero_y = scale.fraction(0.0).mul_add(-chart_height, bottom);

        let group_width = chart_width / self.categories.len() as f64;
        let inner_width = group_width * 0.8;
        let bar_width = inner_width / self.series.len() as f64;

        for (c, category) in self.categories.iter().enumerate() {
            let group_x = group_width.mul_add(c as f64, left) + (group_width - inner_width) / 2.0;
            let mut group_top = zero_y;

            for (s, series) in self.series.iter().enumerate() {
                let value = self.value(s, c);
                let x = bar_width.mul_add(s as f64, group_x);
                let value_y = scale.fraction(value).mul_add(-chart_height, bottom);
                group_top = group_top.min(value_y);

                let bar = Bar {
                    x,
                    y: value_y.min(zero_y),
                    width: bar_width,
                    height: (zero_y - value_y).abs(),
                    color: series.color.clone(),
                    label: format!("{category} ({})", series.name),
                    value,
                };
                push_element(output, &bar);

                if self.show_values {
                    let label = Label::new(x + bar_width / 2.0, value_y - 4.0, format_tick(value))
                        .with_size(9.0)
                        .with_anchor(TextAnchor::Middle);
                    push_element(output, &label);
                }
            }

            let center = group_x + inner_width / 2.0;
            if let Some(Some(annotation)) = self.group_annotations.get(c) {
                let offset = if self.show_values { 18.0 } else { 6.0 };
                let label = Label::new(center, group_top - offset, annotation.as_str())
                    .with_size(11.0)
                    .with_anchor(TextAnchor::Middle)
                    .bold();
                push_element(output, &label);
            }

            let label = category_label(center, bottom + 14.0, category, self.label_rotation);
            push_element(output, &label);
        }

        let axis_color = ChartColor::css_var("text-muted").to_css();
        let _ = writeln!(
            output,
            r#"    <line x1="{left}" y1="{zero_y}" x2="{}" y2="{zero_y}" stroke="{axis_color}" stroke-width="1"/>"#,
            left + chart_width
        );
    }
}

impl SvgElement for GroupedBarChart {
    fn render(&self) -> String {
        let mut output = String::new();
        open_document(&mut output, self.width, self.height, &self.title);
        if !self.title.is_empty() {
            write_heading(&mut output, self.width, &self.title, &self.subtitle);
        }

        if self.categories.is_empty() || self.series.is_empty() {
            write_empty_state(&mut output, self.width, self.height);
            output.push_str("</svg>");
            return output;
        }

        let left = self.padding * 1.5;
        let top = if self.title.is_empty() {
            self.padding / 2.0
        } else {
            self.padding + 20.0
        };
        let chart_width = self.width - left - self.padding / 2.0;
        let chart_height = self.height - top - self.label_space;
        let scale = ValueScale::new(self.series.iter().flat_map(|s| s.values.iter().copied()), 5);

        scale.render_vertical(
            &mut output,
            left,
            left + chart_width,
            top + chart_height,
            chart_height,
        );
        self.render_groups(&mut output, &scale, (left, top, chart_width, chart_height));

        if let Some(y_label) = &self.y_label {
            push_element(&mut output, &y_axis_caption(14.0, top + chart_height / 2.0, y_label));
        }
        let entries = self
            .series
            .iter()
            .map(|s| (s.name.clone(), s.color.clone()))
            .collect();
        let legend = Legend::new(self.width - self.padding * 3.0, top, entries);
        push_element(&mut output, &legend);

        output.push_str("</svg>");
        output
    }
}

#[cfg(test)]
#[path = "grouped_tests.rs"]
mod tests;
