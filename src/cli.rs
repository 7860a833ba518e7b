use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::LOCAL_CONFIG_NAME;
use crate::figures::FigureKind;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Ordering key for the rank command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RankKey {
    /// Growth between the baseline and comparison years (default)
    #[default]
    Growth,
    /// Total document count
    Count,
}

#[derive(Parser, Debug)]
#[command(name = "review-figures")]
#[command(
    author,
    version,
    about = "Consistency checks and publication figures for scoping-review cluster statistics"
)]
#[command(long_about = "Validates the cluster table of a scoping review \
    (counts, percentages, growth rates, PRISMA screening counts) and renders \
    the manuscript figures as SVG.\n\n\
    Exit codes:\n  \
    0 - Success (corpus consistent)\n  \
    1 - Validation failed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Path to configuration file (skips the default search)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset file (TOML); overrides `[dataset] path`. Defaults to the reference dataset
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check the cluster table for internal consistency
    Validate(ValidateArgs),

    /// Render the manuscript figures
    Figures(FiguresArgs),

    /// Print the cluster summary table
    Table(TableArgs),

    /// List clusters by growth or size
    Rank(RankArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Allowed percentage-point error on `percent` (overrides config)
    #[arg(long)]
    pub percent_tolerance: Option<f64>,

    /// Allowed percentage-point error on `growth_percent` (overrides config)
    #[arg(long)]
    pub growth_tolerance: Option<f64>,

    /// Allowed distance of the percent column sum from 100 (overrides config)
    #[arg(long)]
    pub percent_sum_tolerance: Option<f64>,
}

#[derive(Parser, Debug)]
pub struct FiguresArgs {
    /// Directory to write figures into (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Only render these figures (comma-separated, e.g. `growth_rate,prisma_flow`)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<FigureKind>,

    /// Number of clusters in the top-growth figure (overrides config)
    #[arg(long)]
    pub top: Option<usize>,

    /// Render even if the corpus fails validation
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct TableArgs {
    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "markdown")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct RankArgs {
    /// Ordering key
    #[arg(long, value_enum, default_value = "growth")]
    pub by: RankKey,

    /// Show only the first N clusters
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for the configuration file
    #[arg(short, long, default_value = LOCAL_CONFIG_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
