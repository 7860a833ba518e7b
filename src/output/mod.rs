mod json;
mod markdown;
mod ranking;
mod summary;
pub mod svg;
mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use ranking::{RankBy, RankingFormatter};
pub use summary::{SummaryRow, SummaryTable, SummaryTableFormatter};
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::stats::ValidationReport;

/// Trait for rendering a validation report in one output format.
pub trait ReportFormatter {
    /// Format the report into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, report: &ValidationReport) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Build the report formatter for `format`.
#[must_use]
pub fn report_formatter(
    format: OutputFormat,
    color: ColorMode,
    verbose: u8,
) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::with_verbose(color, verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
    }
}

/// Measured value for display: integers plain, fractions to two decimals.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn format_measure(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value:.2}")
    }
}

/// Signed difference for display, e.g. `+0.04` or `-2`.
pub(crate) fn format_delta(delta: f64) -> String {
    if delta >= 0.0 {
        format!("+{}", format_measure(delta))
    } else {
        format_measure(delta)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
