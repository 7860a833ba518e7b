use crate::cli::{Cli, ValidateArgs};
use crate::output::report_formatter;
use crate::stats::Tolerances;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED, Result};

use super::context::{color_choice_to_mode, load_config, load_dataset, write_output};

#[must_use]
pub fn run_validate(args: &ValidateArgs, cli: &Cli) -> i32 {
    match run_validate_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validate the dataset and print the report.
///
/// Returns `EXIT_VALIDATION_FAILED` when any non-advisory check fails.
///
/// # Errors
/// Returns an error if configuration or dataset loading fails, a tolerance
/// is invalid, or the report cannot be written.
pub fn run_validate_impl(args: &ValidateArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(cli)?;
    apply_tolerance_overrides(&mut config.validation, args);
    config.validation.check()?;

    let dataset = load_dataset(cli, &config)?;
    let report = dataset.validate(&config.validation);
    tracing::info!(
        checks = report.outcomes().len(),
        failed = report.violation_count(),
        "validation finished"
    );

    let formatter = report_formatter(args.format, color_choice_to_mode(cli.color), cli.verbose);
    let output = formatter.format(&report)?;
    write_output(args.output.as_deref(), &output, cli.quiet)?;

    if report.is_consistent() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VALIDATION_FAILED)
    }
}

pub(crate) fn apply_tolerance_overrides(tolerances: &mut Tolerances, args: &ValidateArgs) {
    if let Some(value) = args.percent_tolerance {
        tolerances.percent_tolerance = value;
    }
    if let Some(value) = args.growth_tolerance {
        tolerances.growth_tolerance = value;
    }
    if let Some(value) = args.percent_sum_tolerance {
        tolerances.percent_sum_tolerance = value;
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
