use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result, ReviewError};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes a commented default configuration file.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(ReviewError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template()).map_err(|source| {
        ReviewError::FileWrite {
            path: output_path.clone(),
            source,
        }
    })?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# review-figures configuration file
version = "1"

[validation]
# Allowed percentage-point error between stated and recomputed percent (default: 0.5)
percent_tolerance = 0.5

# Allowed percentage-point error between stated and recomputed growth (default: 5.0)
growth_tolerance = 5.0

# Allowed distance of the summed percent column from 100 (default: 1.0)
percent_sum_tolerance = 1.0

[figures]
# Directory figures are written into (default: "figures")
output_dir = "figures"

# Clusters shown in the top-growth figure (default: 3)
top_growth = 3

# Width of bar and pie charts in SVG units (default: 900)
width = 900

# Figures to render, in order
enabled = [
    "distribution",
    "temporal_evolution",
    "growth_rate",
    "top_growth",
    "corpus_share",
    "prisma_flow",
    "summary_table",
]

[dataset]
# TOML dataset file, relative to this file. The built-in reference dataset
# is used when unset.
# path = "review-data.toml"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
