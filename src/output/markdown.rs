use std::fmt::Write;

use crate::error::Result;
use crate::stats::{CheckOutcome, ValidationReport};

use super::{ReportFormatter, format_delta, format_measure};

/// Markdown validation report, suited for PR comments and manuscript notes.
pub struct MarkdownFormatter {
    show_passed: bool,
}

impl MarkdownFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self { show_passed: false }
    }

    #[must_use]
    pub const fn with_passed(mut self, show: bool) -> Self {
        self.show_passed = show;
        self
    }

    fn write_table<'a>(
        output: &mut String,
        heading: &str,
        outcomes: impl Iterator<Item = &'a CheckOutcome>,
    ) {
        let mut rows = outcomes.peekable();
        if rows.peek().is_none() {
            return;
        }

        let _ = writeln!(output, "### {heading}\n");
        output.push_str("| Invariant | Cluster | Expected | Found | Delta |\n");
        output.push_str("|-----------|---------|---------:|------:|------:|\n");
        for outcome in rows {
            let cluster = outcome
                .record
                .as_deref()
                .map_or_else(|| "(corpus)".to_string(), escape_cell);
            let expected = outcome
                .expected
                .map_or_else(|| "undefined".to_string(), format_measure);
            let delta = outcome.delta().map_or_else(|| "-".to_string(), format_delta);
            let _ = writeln!(
                output,
                "| `{}` | {cluster} | {expected} | {} | {delta} |",
                outcome.invariant,
                format_measure(outcome.actual)
            );
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Escape characters with meaning inside a Markdown table cell.
pub(crate) fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let mut output = String::new();
        let advisories = report.advisories().count();

        output.push_str("## Corpus Validation Report\n\n");
        output.push_str("| Checks | Passed | Failed | Advisory |\n");
        output.push_str("|-------:|-------:|-------:|---------:|\n");
        let _ = writeln!(
            output,
            "| {} | {} | {} | {advisories} |\n",
            report.outcomes().len(),
            report.passed_count(),
            report.violation_count()
        );

        if report.is_consistent() {
            output.push_str("✅ **Corpus is consistent.**\n\n");
        } else {
            output.push_str("❌ **Corpus is inconsistent.**\n\n");
        }

        Self::write_table(&mut output, "Violations", report.violations());
        Self::write_table(&mut output, "Advisories", report.advisories());
        if self.show_passed {
            Self::write_table(
                &mut output,
                "Passed",
                report.outcomes().iter().filter(|o| o.passed),
            );
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
