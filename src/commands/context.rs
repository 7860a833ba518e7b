//! Shared setup for every subcommand: configuration, dataset and output.

use std::fs;
use std::path::Path;

use crate::cli::{Cli, ColorChoice};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::output::ColorMode;
use crate::stats::ReviewDataset;

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Load configuration as selected by the global flags.
///
/// `--no-config` wins over `--config`; without either, the default search
/// order of [`FileConfigLoader`] applies.
pub(crate) fn load_config(cli: &Cli) -> crate::Result<Config> {
    load_config_with(&FileConfigLoader::new(), cli.config.as_deref(), cli.no_config)
}

pub(crate) fn load_config_with<L: ConfigLoader>(
    loader: &L,
    config_path: Option<&Path>,
    no_config: bool,
) -> crate::Result<Config> {
    if no_config {
        tracing::debug!("configuration disabled by --no-config");
        return Ok(Config::default());
    }
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Dataset from `--dataset`, then `[dataset] path`, then the reference data.
pub(crate) fn load_dataset(cli: &Cli, config: &Config) -> crate::Result<ReviewDataset> {
    let path = cli.dataset.as_deref().or(config.dataset.path.as_deref());
    let dataset = ReviewDataset::load_or_reference(path)?;
    tracing::info!(
        source = %path.map_or_else(|| "reference".to_string(), |p| p.display().to_string()),
        clusters = dataset.corpus.len(),
        total = dataset.total_documents,
        "dataset ready"
    );
    Ok(dataset)
}

/// Write `content` to `output_path`, or print it unless `quiet`.
pub(crate) fn write_output(
    output_path: Option<&Path>,
    content: &str,
    quiet: bool,
) -> crate::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content).map_err(|source| crate::ReviewError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
