use std::fmt::Write;

use crate::error::Result;
use crate::output::svg::format_thousands;
use crate::output::{OutputFormat, SummaryTable, SummaryTableFormatter};
use crate::stats::ReviewDataset;

/// Table 1 as a standalone Markdown document.
///
/// # Errors
/// Propagates formatter errors.
pub fn summary_markdown(dataset: &ReviewDataset) -> Result<String> {
    let period = dataset.corpus.period();
    let table = SummaryTable::new(&dataset.corpus, dataset.total_documents);

    let mut output = String::from("# Table 1. Documents per thematic cluster\n\n");
    let _ = writeln!(
        output,
        "_N = {} documents, growth from {} to {}_\n",
        format_thousands(i64::try_from(dataset.total_documents).unwrap_or(i64::MAX)),
        period.start,
        period.end
    );
    output.push_str(&SummaryTableFormatter::new(OutputFormat::Markdown).format(&table)?);
    Ok(output)
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
