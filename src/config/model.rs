use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::figures::FigureKind;
use crate::stats::Tolerances;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config schema version. Omitted means current.
    #[serde(default)]
    pub version: Option<String>,

    /// Tolerances for `validate` [validation].
    #[serde(default)]
    pub validation: Tolerances,

    /// Figure rendering settings [figures].
    #[serde(default)]
    pub figures: FiguresConfig,

    /// Input dataset [dataset].
    #[serde(default)]
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FiguresConfig {
    /// Directory figures are written into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// How many of the fastest-growing clusters the top-growth figure shows.
    #[serde(default = "default_top_growth")]
    pub top_growth: usize,

    /// Width of the SVG viewBox for bar charts.
    #[serde(default = "default_width")]
    pub width: f64,

    /// Figures to generate, in order.
    #[serde(default = "default_enabled")]
    pub enabled: Vec<FigureKind>,
}

impl Default for FiguresConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            top_growth: default_top_growth(),
            width: default_width(),
            enabled: default_enabled(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// TOML dataset file; the reference dataset is used when unset.
    /// Relative paths resolve against the config file's directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("figures")
}

const fn default_top_growth() -> usize {
    3
}

const fn default_width() -> f64 {
    900.0
}

fn default_enabled() -> Vec<FigureKind> {
    FigureKind::ALL.to_vec()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
