//! Manuscript figures rendered from a [`ReviewDataset`].
//!
//! Each renderer is a pure function of the dataset and the `[figures]`
//! settings; [`write_figures`] is the only part that touches the filesystem.

mod charts;
mod prisma;
mod table;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::FiguresConfig;
use crate::error::{Result, ReviewError};
use crate::stats::ReviewDataset;

pub use charts::{corpus_share, distribution, growth_rate, temporal_evolution, top_growth};
pub use prisma::flow_diagram;
pub use table::summary_markdown;

/// One generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigureKind {
    Distribution,
    TemporalEvolution,
    GrowthRate,
    TopGrowth,
    CorpusShare,
    PrismaFlow,
    SummaryTable,
}

impl FigureKind {
    /// Every figure, in manuscript order.
    pub const ALL: [Self; 7] = [
        Self::Distribution,
        Self::TemporalEvolution,
        Self::GrowthRate,
        Self::TopGrowth,
        Self::CorpusShare,
        Self::PrismaFlow,
        Self::SummaryTable,
    ];

    /// Name used in config files and on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Distribution => "distribution",
            Self::TemporalEvolution => "temporal_evolution",
            Self::GrowthRate => "growth_rate",
            Self::TopGrowth => "top_growth",
            Self::CorpusShare => "corpus_share",
            Self::PrismaFlow => "prisma_flow",
            Self::SummaryTable => "summary_table",
        }
    }

    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Distribution => "fig1_cluster_distribution.svg",
            Self::TemporalEvolution => "fig2_temporal_evolution.svg",
            Self::GrowthRate => "fig3_growth_rate.svg",
            Self::TopGrowth => "fig4_top_growth.svg",
            Self::CorpusShare => "fig5_corpus_share.svg",
            Self::PrismaFlow => "prisma_flow.svg",
            Self::SummaryTable => "table1_summary.md",
        }
    }
}

impl fmt::Display for FigureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FigureKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.name()).collect();
                format!("Unknown figure: {s} (expected one of: {})", known.join(", "))
            })
    }
}

/// Render one figure.
///
/// Returns `Ok(None)` when the dataset lacks the input the figure needs
/// (the PRISMA diagram without screening counts).
///
/// # Errors
/// Returns an error if table serialization fails.
pub fn render(
    kind: FigureKind,
    dataset: &ReviewDataset,
    settings: &FiguresConfig,
) -> Result<Option<String>> {
    let content = match kind {
        FigureKind::Distribution => distribution(dataset, settings),
        FigureKind::TemporalEvolution => temporal_evolution(dataset, settings),
        FigureKind::GrowthRate => growth_rate(dataset, settings),
        FigureKind::TopGrowth => top_growth(dataset, settings),
        FigureKind::CorpusShare => corpus_share(dataset, settings),
        FigureKind::PrismaFlow => match &dataset.prisma {
            Some(flow) => flow_diagram(flow, &dataset.corpus),
            None => return Ok(None),
        },
        FigureKind::SummaryTable => summary_markdown(dataset)?,
    };
    Ok(Some(content))
}

/// Write every enabled figure into `out_dir`, creating it if needed.
///
/// Figures are written in `settings.enabled` order; a kind listed twice is
/// written once. Returns the paths written.
///
/// # Errors
/// Returns `FileWrite` if the directory or a file cannot be written.
pub fn write_figures(
    dataset: &ReviewDataset,
    settings: &FiguresConfig,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir).map_err(|source| ReviewError::FileWrite {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    let mut seen = IndexSet::new();
    for &kind in &settings.enabled {
        if !seen.insert(kind) {
            continue;
        }

        let Some(content) = render(kind, dataset, settings)? else {
            warn!(figure = %kind, "dataset has no PRISMA counts, skipping figure");
            continue;
        };

        let path = out_dir.join(kind.file_name());
        fs::write(&path, content).map_err(|source| ReviewError::FileWrite {
            path: path.clone(),
            source,
        })?;
        info!(figure = %kind, path = %path.display(), "wrote figure");
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
