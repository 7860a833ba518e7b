//! Ranked cluster listings.

use std::fmt::Write;

use serde::Serialize;

use crate::error::Result;
use crate::stats::{ClusterRecord, GrowthBand, ReviewCorpus, rank_by_count, rank_by_growth};

use super::OutputFormat;
use super::markdown::escape_cell;
use super::svg::{format_decimal, format_growth, format_thousands};

/// Ordering key for a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RankBy {
    #[default]
    Growth,
    Count,
}

impl RankBy {
    /// Records in ranking order, optionally truncated to `limit`.
    #[must_use]
    pub fn rank(self, corpus: &ReviewCorpus, limit: Option<usize>) -> Vec<&ClusterRecord> {
        let mut ranked = match self {
            Self::Growth => rank_by_growth(corpus),
            Self::Count => rank_by_count(corpus),
        };
        if let Some(limit) = limit {
            ranked.truncate(limit);
        }
        ranked
    }

    const fn title(self) -> &'static str {
        match self {
            Self::Growth => "Clusters ranked by growth",
            Self::Count => "Clusters ranked by document count",
        }
    }
}

#[derive(Serialize)]
struct RankedEntry<'a> {
    rank: usize,
    name: &'a str,
    count: u32,
    percent: f64,
    count_year_start: u32,
    count_year_end: u32,
    growth_percent: f64,
    band: &'static str,
}

impl<'a> RankedEntry<'a> {
    fn new(rank: usize, record: &'a ClusterRecord) -> Self {
        Self {
            rank,
            name: &record.name,
            count: record.count,
            percent: record.percent,
            count_year_start: record.count_year_start,
            count_year_end: record.count_year_end,
            growth_percent: record.growth_percent,
            band: GrowthBand::classify(record.growth_percent).label(),
        }
    }
}

pub struct RankingFormatter {
    format: OutputFormat,
}

impl RankingFormatter {
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// # Errors
    /// Returns an error if JSON serialization fails.
    pub fn format(&self, by: RankBy, ranked: &[&ClusterRecord]) -> Result<String> {
        let entries: Vec<RankedEntry<'_>> = ranked
            .iter()
            .enumerate()
            .map(|(i, record)| RankedEntry::new(i + 1, record))
            .collect();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&entries)?),
            OutputFormat::Markdown => Ok(Self::format_markdown(by, &entries)),
            OutputFormat::Text => Ok(Self::format_text(by, &entries)),
        }
    }

    fn format_markdown(by: RankBy, entries: &[RankedEntry<'_>]) -> String {
        let mut output = format!("## {}\n\n", by.title());
        output.push_str("| # | Cluster | N | % | Growth | Band |\n");
        output.push_str("|--:|---------|--:|--:|-------:|------|\n");
        for entry in entries {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {}% | {} | {} |",
                entry.rank,
                escape_cell(entry.name),
                format_thousands(i64::from(entry.count)),
                format_decimal(entry.percent),
                format_growth(entry.growth_percent),
                entry.band
            );
        }
        output
    }

    fn format_text(by: RankBy, entries: &[RankedEntry<'_>]) -> String {
        let name_width = entries
            .iter()
            .map(|e| e.name.chars().count())
            .max()
            .unwrap_or(0);

        let mut output = format!("{}:\n", by.title());
        for entry in entries {
            let pad = name_width - entry.name.chars().count();
            let _ = writeln!(
                output,
                "{:>3}. {}{}  {:>6}  {:>6}  {:>6} → {:<6} {}",
                entry.rank,
                entry.name,
                " ".repeat(pad),
                format_thousands(i64::from(entry.count)),
                format!("{}%", format_decimal(entry.percent)),
                entry.count_year_start,
                entry.count_year_end,
                format_growth(entry.growth_percent)
            );
        }
        output
    }
}

#[cfg(test)]
#[path = "ranking_tests.rs"]
mod tests;
