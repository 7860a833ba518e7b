//! Chart data model.

use super::style::ChartColor;

/// A single data point for charts.
#[derive(Debug, Clone)]
pub struct DataPoint {
    /// Label for this data point (shown on axis or tooltip)
    pub label: String,
    /// Numeric value
    pub value: f64,
    /// Optional color override
    pub color: Option<ChartColor>,
    /// Text shown next to the bar instead of the raw value
    pub annotation: Option<String>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            color: None,
            annotation: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: ChartColor) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }
}

/// One named series of a grouped bar chart, with a value per category.
#[derive(Debug, Clone)]
pub struct Series {
    pub name: String,
    pub color: ChartColor,
    pub values: Vec<f64>,
}

impl Series {
    #[must_use]
    pub fn new(name: impl Into<String>, color: ChartColor, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            color,
            values,
        }
    }
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
