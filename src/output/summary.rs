//! Cluster summary table (Table 1 of the review manuscript).

use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::stats::{ClusterRecord, ReviewCorpus, StudyPeriod, year_totals};

use super::OutputFormat;
use super::markdown::escape_cell;
use super::svg::{format_decimal, format_growth, format_thousands};

#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub name: String,
    pub count: u32,
    pub percent: f64,
    pub count_year_start: u32,
    pub count_year_end: u32,
    pub growth_percent: f64,
}

impl From<&ClusterRecord> for SummaryRow {
    fn from(record: &ClusterRecord) -> Self {
        Self {
            name: record.name.clone(),
            count: record.count,
            percent: record.percent,
            count_year_start: record.count_year_start,
            count_year_end: record.count_year_end,
            growth_percent: record.growth_percent,
        }
    }
}

/// One row per cluster in corpus order, plus the TOTAL line.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryTable {
    pub period: StudyPeriod,
    pub rows: Vec<SummaryRow>,
    /// Declared corpus size; the TOTAL row shows this, not the column sum.
    pub total_documents: u64,
    pub total_year_start: u64,
    pub total_year_end: u64,
}

impl SummaryTable {
    #[must_use]
    pub fn new(corpus: &ReviewCorpus, total_documents: u64) -> Self {
        let years = year_totals(corpus);
        Self {
            period: corpus.period(),
            rows: corpus.iter().map(SummaryRow::from).collect(),
            total_documents,
            total_year_start: years.start,
            total_year_end: years.end,
        }
    }

    fn headers(&self) -> [String; 6] {
        [
            "Cluster".to_string(),
            "N".to_string(),
            "%".to_string(),
            self.period.start.to_string(),
            self.period.end.to_string(),
            "Growth".to_string(),
        ]
    }

    /// Display cells for every row, TOTAL last.
    #[allow(clippy::cast_possible_wrap)]
    fn cells(&self) -> Vec<[String; 6]> {
        let mut cells: Vec<[String; 6]> = self
            .rows
            .iter()
            .map(|row| {
                [
                    row.name.clone(),
                    format_thousands(i64::from(row.count)),
                    format!("{}%", format_decimal(row.percent)),
                    format_thousands(i64::from(row.count_year_start)),
                    format_thousands(i64::from(row.count_year_end)),
                    format_growth(row.growth_percent),
                ]
            })
            .collect();
        cells.push([
            "TOTAL".to_string(),
            format_thousands(self.total_documents as i64),
            "100%".to_string(),
            format_thousands(self.total_year_start as i64),
            format_thousands(self.total_year_end as i64),
            "—".to_string(),
        ]);
        cells
    }
}

/// Renders a [`SummaryTable`] as Markdown, aligned text or JSON.
pub struct SummaryTableFormatter {
    format: OutputFormat,
}

impl SummaryTableFormatter {
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn format(&self, table: &SummaryTable) -> Result<String> {
        match self.format {
            OutputFormat::Text => Ok(Self::format_text(table)),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(table)?),
            OutputFormat::Markdown => Ok(Self::format_markdown(table)),
        }
    }

    fn format_markdown(table: &SummaryTable) -> String {
        let mut output = String::new();
        let _ = writeln!(output, "| {} |", table.headers().join(" | "));
        output.push_str("|---------|---:|---:|---:|---:|---:|\n");

        let cells = table.cells();
        let last = cells.len() - 1;
        for (i, row) in cells.iter().enumerate() {
            let rendered: Vec<String> = if i == last {
                row.iter().map(|cell| format!("**{cell}**")).collect()
            } else {
                let mut escaped = row.clone();
                escaped[0] = escape_cell(&row[0]);
                escaped.to_vec()
            };
            let _ = writeln!(output, "| {} |", rendered.join(" | "));
        }
        output
    }

    fn format_text(table: &SummaryTable) -> String {
        let headers = table.headers();
        let cells = table.cells();

        let mut widths = headers.clone().map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let mut output = String::new();
        write_text_row(&mut output, &headers, &widths);
        let rule: usize = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
        let _ = writeln!(output, "{}", "-".repeat(rule));
        let last = cells.len() - 1;
        for (i, row) in cells.iter().enumerate() {
            if i == last {
                let _ = writeln!(output, "{}", "-".repeat(rule));
            }
            write_text_row(&mut output, row, &widths);
        }
        output
    }
}

/// Name column left-aligned, numbers right-aligned.
fn write_text_row(output: &mut String, row: &[String; 6], widths: &[usize; 6]) {
    let mut line = String::new();
    for (i, (cell, width)) in row.iter().zip(widths).enumerate() {
        let pad = width.saturating_sub(cell.chars().count());
        if i > 0 {
            line.push_str("  ");
        }
        if i == 0 {
            line.push_str(cell);
            line.push_str(&" ".repeat(pad));
        } else {
            line.push_str(&" ".repeat(pad));
            line.push_str(cell);
        }
    }
    let _ = writeln!(output, "{}", line.trim_end());
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
