use crate::cli::{Cli, TableArgs};
use crate::output::{SummaryTable, SummaryTableFormatter};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::{load_config, load_dataset, write_output};

#[must_use]
pub fn run_table(args: &TableArgs, cli: &Cli) -> i32 {
    match run_table_impl(args, cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Print the cluster summary table.
///
/// # Errors
/// Returns an error if configuration or dataset loading fails, or the table
/// cannot be written.
pub fn run_table_impl(args: &TableArgs, cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let dataset = load_dataset(cli, &config)?;
    let table = SummaryTable::new(&dataset.corpus, dataset.total_documents);
    let output = SummaryTableFormatter::new(args.format).format(&table)?;
    write_output(args.output.as_deref(), &output, cli.quiet)
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
