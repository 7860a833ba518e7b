//! Derived metrics and rankings over a [`ReviewCorpus`].
//!
//! Everything here is a pure function of its inputs. Ratios with a zero
//! denominator fail with [`ReviewError::DivisionByZero`] naming the record.

use std::fmt;

use crate::error::{Divisor, Result, ReviewError};

use super::model::{ClusterRecord, ReviewCorpus};

/// Sum of `count` over all records.
#[must_use]
pub fn total(corpus: &ReviewCorpus) -> u64 {
    corpus.iter().map(|r| u64::from(r.count)).sum()
}

/// `100 × count / total` for one record.
///
/// # Errors
/// Returns `DivisionByZero` if `total` is 0.
#[allow(clippy::cast_precision_loss)] // corpus totals are far below 2^52
pub fn derived_percent(record: &ClusterRecord, total: u64) -> Result<f64> {
    if total == 0 {
        return Err(ReviewError::DivisionByZero {
            record: record.name.clone(),
            divisor: Divisor::CorpusTotal,
        });
    }
    Ok(100.0 * f64::from(record.count) / total as f64)
}

/// `100 × (end − start) / start` for one record.
///
/// # Errors
/// Returns `DivisionByZero` if the baseline-year count is 0.
pub fn derived_growth(record: &ClusterRecord) -> Result<f64> {
    if record.count_year_start == 0 {
        return Err(ReviewError::DivisionByZero {
            record: record.name.clone(),
            divisor: Divisor::BaselineCount,
        });
    }
    let start = f64::from(record.count_year_start);
    let end = f64::from(record.count_year_end);
    Ok(100.0 * (end - start) / start)
}

/// Records ordered by `growth_percent`, highest first.
///
/// The sort is stable: equal growth keeps table order.
#[must_use]
pub fn rank_by_growth(corpus: &ReviewCorpus) -> Vec<&ClusterRecord> {
    let mut ranked: Vec<_> = corpus.iter().collect();
    ranked.sort_by(|a, b| b.growth_percent.total_cmp(&a.growth_percent));
    ranked
}

/// Records ordered by `count`, largest first. Stable like [`rank_by_growth`].
#[must_use]
pub fn rank_by_count(corpus: &ReviewCorpus) -> Vec<&ClusterRecord> {
    let mut ranked: Vec<_> = corpus.iter().collect();
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// The `n` fastest-growing clusters.
#[must_use]
pub fn top_by_growth(corpus: &ReviewCorpus, n: usize) -> Vec<&ClusterRecord> {
    let mut ranked = rank_by_growth(corpus);
    ranked.truncate(n);
    ranked
}

/// Corpus-wide document counts for the baseline and comparison years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearTotals {
    pub start: u64,
    pub end: u64,
}

#[must_use]
pub fn year_totals(corpus: &ReviewCorpus) -> YearTotals {
    corpus.iter().fold(YearTotals { start: 0, end: 0 }, |acc, r| YearTotals {
        start: acc.start + u64::from(r.count_year_start),
        end: acc.end + u64::from(r.count_year_end),
    })
}

/// Growth bucket used to highlight emerging clusters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GrowthBand {
    /// Below 100 %.
    Moderate,
    /// 100 % up to (excluding) 200 %.
    High,
    /// 200 % and above.
    Explosive,
}

impl GrowthBand {
    pub const ALL: [Self; 3] = [Self::Explosive, Self::High, Self::Moderate];

    #[must_use]
    pub fn classify(growth_percent: f64) -> Self {
        if growth_percent >= 200.0 {
            Self::Explosive
        } else if growth_percent >= 100.0 {
            Self::High
        } else {
            Self::Moderate
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Explosive => "Growth ≥200%",
            Self::High => "Growth ≥100%",
            Self::Moderate => "Growth <100%",
        }
    }
}

impl fmt::Display for GrowthBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
#[path = "derive_tests.rs"]
mod tests;
