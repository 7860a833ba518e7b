use indexmap::IndexSet;

use crate::cli::{Cli, FiguresArgs};
use crate::config::{FiguresConfig, validate_config_semantics};
use crate::figures::write_figures;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VALIDATION_FAILED, Result};

use super::context::{load_config, load_dataset};

#[must_use]
pub fn run_figures(args: &FiguresArgs, cli: &Cli) -> i32 {
    match run_figures_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validate the dataset, then write the enabled figures.
///
/// An inconsistent corpus is not rendered unless `--force` is given.
///
/// # Errors
/// Returns an error if configuration or dataset loading fails, or a figure
/// cannot be written.
pub fn run_figures_impl(args: &FiguresArgs, cli: &Cli) -> Result<i32> {
    let mut config = load_config(cli)?;
    apply_figure_overrides(&mut config.figures, args);
    validate_config_semantics(&config)?;

    let dataset = load_dataset(cli, &config)?;
    if let Err(e) = dataset.validate(&config.validation).into_result() {
        if !args.force {
            eprintln!("Error: {e}");
            eprintln!("Run `review-figures validate` for details, or pass --force to render anyway.");
            return Ok(EXIT_VALIDATION_FAILED);
        }
        tracing::warn!("{e}; rendering anyway (--force)");
    }

    let written = write_figures(&dataset, &config.figures, &config.figures.output_dir)?;
    if !cli.quiet {
        for path in &written {
            println!("Wrote {}", path.display());
        }
    }
    Ok(EXIT_SUCCESS)
}

pub(crate) fn apply_figure_overrides(settings: &mut FiguresConfig, args: &FiguresArgs) {
    if let Some(out_dir) = &args.out_dir {
        settings.output_dir.clone_from(out_dir);
    }
    if let Some(top) = args.top {
        settings.top_growth = top;
    }
    // Repeated names on the command line select a figure once
    if !args.only.is_empty() {
        let only: IndexSet<_> = args.only.iter().copied().collect();
        settings.enabled = only.into_iter().collect();
    }
}

#[cfg(test)]
#[path = "figures_tests.rs"]
mod tests;
