use std::fmt::Write;

use crate::error::Result;
use crate::stats::{CheckOutcome, Invariant, ValidationReport};

use super::{ReportFormatter, format_delta, format_measure};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    #[must_use]
    pub fn use_colors(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Human-readable validation report.
///
/// Violations and advisories are always listed; passing checks only with `-v`.
pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.use_colors(),
            verbose,
        }
    }

    const fn status(outcome: &CheckOutcome) -> (&'static str, &'static str, &'static str) {
        if outcome.passed {
            ("✓", "PASSED", ansi::GREEN)
        } else if outcome.invariant.is_advisory() {
            ("⚠", "ADVISORY", ansi::YELLOW)
        } else {
            ("✗", "FAILED", ansi::RED)
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_outcome(&self, outcome: &CheckOutcome, output: &mut String) {
        let (icon, status, color) = Self::status(outcome);
        let subject = outcome
            .record
            .as_deref()
            .map_or_else(String::new, |name| format!(" [{name}]"));
        let _ = writeln!(
            output,
            "{icon} {}: {}{subject}",
            self.colorize(status, color),
            outcome.invariant
        );

        let actual = format_measure(outcome.actual);
        match (outcome.expected, outcome.delta()) {
            (Some(baseline), _) if outcome.invariant == Invariant::MonotonicGrowth => {
                let _ = writeln!(
                    output,
                    "   Baseline year: {}, comparison year: {actual}",
                    format_measure(baseline)
                );
            }
            (Some(expected), Some(delta)) => {
                let _ = writeln!(
                    output,
                    "   Expected: {}, found: {actual} (delta {})",
                    format_measure(expected),
                    format_delta(delta)
                );
            }
            _ => {
                let _ = writeln!(output, "   Expected: undefined (zero divisor), found: {actual}");
            }
        }
    }

    fn format_summary(&self, report: &ValidationReport) -> String {
        let advisories = report.advisories().count();
        let passed = self.colorize(&report.passed_count().to_string(), ansi::GREEN);
        let failed = self.colorize(&report.violation_count().to_string(), ansi::RED);
        let advisory = self.colorize(&advisories.to_string(), ansi::YELLOW);

        let mut summary = format!(
            "Summary: {} checks, {passed} passed, {failed} failed, {advisory} advisory",
            report.outcomes().len()
        );
        let verdict = if report.is_consistent() {
            self.colorize("Corpus is consistent", ansi::GREEN)
        } else {
            self.colorize("Corpus is INCONSISTENT", ansi::RED)
        };
        let _ = write!(summary, "\n{}", self.colorize(&verdict, ansi::BOLD));
        summary
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let mut output = String::new();

        for outcome in report.violations() {
            self.format_outcome(outcome, &mut output);
            output.push('\n');
        }

        for outcome in report.advisories() {
            self.format_outcome(outcome, &mut output);
            output.push('\n');
        }

        // Passing checks only in verbose mode
        if self.verbose >= 1 {
            for outcome in report.outcomes().iter().filter(|o| o.passed) {
                self.format_outcome(outcome, &mut output);
                output.push('\n');
            }
        }

        let _ = writeln!(output, "{}", self.format_summary(report));
        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
