use serde::Serialize;

use crate::error::Result;
use crate::stats::{CheckOutcome, ValidationReport};

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    outcomes: Vec<JsonOutcome<'a>>,
}

#[derive(Serialize)]
struct Summary {
    checks: usize,
    passed: usize,
    failed: usize,
    advisory: usize,
    consistent: bool,
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    invariant: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<&'a str>,
    status: &'static str,
    expected: Option<f64>,
    actual: f64,
    delta: Option<f64>,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                checks: report.outcomes().len(),
                passed: report.passed_count(),
                failed: report.violation_count(),
                advisory: report.advisories().count(),
                consistent: report.is_consistent(),
            },
            outcomes: report.outcomes().iter().map(convert_outcome).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_outcome(outcome: &CheckOutcome) -> JsonOutcome<'_> {
    JsonOutcome {
        invariant: outcome.invariant.name(),
        record: outcome.record.as_deref(),
        status: if outcome.passed {
            "passed"
        } else if outcome.invariant.is_advisory() {
            "advisory"
        } else {
            "failed"
        },
        expected: outcome.expected,
        actual: outcome.actual,
        delta: outcome.delta(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
