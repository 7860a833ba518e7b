//! Consistency checks for a [`ReviewCorpus`].
//!
//! Validation never aborts: every check yields a [`CheckOutcome`] and all of
//! them are collected into one [`ValidationReport`], so a single run shows
//! every violation together with the record and the numeric delta.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ReviewError};

use super::derive::{derived_growth, derived_percent, total};
use super::model::{ClusterRecord, ReviewCorpus};

/// Accepted slack between stated and recomputed derived fields.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Tolerances {
    /// Maximum `|recomputed − stated|` for `percent`, in percentage points.
    pub percent_tolerance: f64,
    /// Maximum `|recomputed − stated|` for `growth_percent`, in percentage points.
    pub growth_tolerance: f64,
    /// Maximum distance of the summed `percent` column from 100.
    pub percent_sum_tolerance: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            percent_tolerance: 0.5,
            growth_tolerance: 5.0,
            percent_sum_tolerance: 1.0,
        }
    }
}

impl Tolerances {
    /// Reject tolerances that would make every comparison meaningless.
    ///
    /// # Errors
    /// Returns a `Config` error naming the first negative or non-finite value.
    pub fn check(&self) -> Result<()> {
        let fields = [
            ("percent_tolerance", self.percent_tolerance),
            ("growth_tolerance", self.growth_tolerance),
            ("percent_sum_tolerance", self.percent_sum_tolerance),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ReviewError::Config(format!(
                    "{name} must be a finite, non-negative number (got {value})"
                )));
            }
        }
        Ok(())
    }
}

/// The property a [`CheckOutcome`] was evaluated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Invariant {
    /// Sum of cluster counts equals the declared total.
    TotalMatches,
    /// Stated percent matches `100 × count / total`.
    PercentConsistent,
    /// Stated growth matches `100 × (end − start) / start`.
    GrowthConsistent,
    /// Real-valued fields are not negative.
    NonNegative,
    /// Comparison-year count exceeds baseline-year count.
    MonotonicGrowth,
    /// Percent column sums to roughly 100.
    PercentSum,
    /// Cluster name occurs once in the table.
    UniqueName,
    /// PRISMA: screened = identified − duplicates.
    PrismaScreened,
    /// PRISMA: assessed = screened − excluded without abstract.
    PrismaAssessed,
    /// PRISMA: included = assessed − full-text exclusions.
    PrismaIncluded,
    /// PRISMA: included studies equal the corpus total.
    PrismaMatchesCorpus,
}

impl Invariant {
    /// Advisory checks describe the current dataset, not a structural rule.
    /// Their failures are reported but never make a corpus inconsistent.
    #[must_use]
    pub const fn is_advisory(self) -> bool {
        matches!(self, Self::MonotonicGrowth)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::TotalMatches => "total_matches",
            Self::PercentConsistent => "percent_consistent",
            Self::GrowthConsistent => "growth_consistent",
            Self::NonNegative => "non_negative",
            Self::MonotonicGrowth => "monotonic_growth",
            Self::PercentSum => "percent_sum",
            Self::UniqueName => "unique_name",
            Self::PrismaScreened => "prisma_screened",
            Self::PrismaAssessed => "prisma_assessed",
            Self::PrismaIncluded => "prisma_included",
            Self::PrismaMatchesCorpus => "prisma_matches_corpus",
        }
    }
}

impl fmt::Display for Invariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of evaluating one invariant, optionally for one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    pub invariant: Invariant,
    /// Cluster name, or `None` for corpus-wide checks.
    pub record: Option<String>,
    /// Recomputed or required value; `None` when it is undefined (zero divisor).
    pub expected: Option<f64>,
    /// Value found in the table.
    pub actual: f64,
    pub passed: bool,
}

impl CheckOutcome {
    #[must_use]
    pub fn corpus(invariant: Invariant, expected: Option<f64>, actual: f64, passed: bool) -> Self {
        Self {
            invariant,
            record: None,
            expected,
            actual,
            passed,
        }
    }

    #[must_use]
    pub fn record(
        invariant: Invariant,
        record: &ClusterRecord,
        expected: Option<f64>,
        actual: f64,
        passed: bool,
    ) -> Self {
        Self {
            invariant,
            record: Some(record.name.clone()),
            expected,
            actual,
            passed,
        }
    }

    /// `actual − expected`, when an expected value exists.
    #[must_use]
    pub fn delta(&self) -> Option<f64> {
        self.expected.map(|e| self.actual - e)
    }

    /// Failed and not advisory.
    #[must_use]
    pub const fn is_violation(&self) -> bool {
        !self.passed && !self.invariant.is_advisory()
    }
}

/// Every check outcome for one corpus snapshot, in evaluation order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationReport {
    outcomes: Vec<CheckOutcome>,
}

impl ValidationReport {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: CheckOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn extend(&mut self, outcomes: impl IntoIterator<Item = CheckOutcome>) {
        self.outcomes.extend(outcomes);
    }

    #[must_use]
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    /// Failed, non-advisory outcomes.
    pub fn violations(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| o.is_violation())
    }

    /// Failed advisory outcomes.
    pub fn advisories(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes
            .iter()
            .filter(|o| !o.passed && o.invariant.is_advisory())
    }

    /// Outcomes for one invariant.
    pub fn for_invariant(&self, invariant: Invariant) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes
            .iter()
            .filter(move |o| o.invariant == invariant)
    }

    #[must_use]
    pub fn violation_count(&self) -> usize {
        self.violations().count()
    }

    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.violations().next().is_none()
    }

    /// Convert into an error when any violation is present.
    ///
    /// # Errors
    /// Returns `InconsistentCorpus` with the number of violations.
    pub fn into_result(self) -> Result<Self> {
        match self.violation_count() {
            0 => Ok(self),
            failures => Err(ReviewError::InconsistentCorpus { failures }),
        }
    }
}

/// Check every corpus invariant against `total_documents`.
#[must_use]
#[allow(clippy::cast_precision_loss)] // counts are far below 2^52
pub fn validate(
    corpus: &ReviewCorpus,
    total_documents: u64,
    tolerances: &Tolerances,
) -> ValidationReport {
    let mut report = ValidationReport::new();

    let counted = total(corpus);
    report.push(CheckOutcome::corpus(
        Invariant::TotalMatches,
        Some(total_documents as f64),
        counted as f64,
        counted == total_documents,
    ));

    let percent_sum: f64 = corpus.iter().map(|r| r.percent).sum();
    report.push(CheckOutcome::corpus(
        Invariant::PercentSum,
        Some(100.0),
        percent_sum,
        (percent_sum - 100.0).abs() <= tolerances.percent_sum_tolerance,
    ));

    let mut name_counts: IndexMap<&str, usize> = IndexMap::new();
    for record in corpus {
        *name_counts.entry(record.name.as_str()).or_default() += 1;
    }

    for record in corpus {
        report.extend(check_record(record, total_documents, tolerances));

        let occurrences = name_counts.get(record.name.as_str()).copied().unwrap_or(0);
        report.push(CheckOutcome::record(
            Invariant::UniqueName,
            record,
            Some(1.0),
            occurrences as f64,
            occurrences == 1,
        ));
    }

    report
}

fn check_record(
    record: &ClusterRecord,
    total_documents: u64,
    tolerances: &Tolerances,
) -> [CheckOutcome; 4] {
    let non_negative = CheckOutcome::record(
        Invariant::NonNegative,
        record,
        Some(0.0),
        record.percent,
        record.percent >= 0.0,
    );

    // Zero divisors are flagged here; the derive functions surface them as errors.
    let percent = match derived_percent(record, total_documents) {
        Ok(expected) => CheckOutcome::record(
            Invariant::PercentConsistent,
            record,
            Some(expected),
            record.percent,
            (expected - record.percent).abs() <= tolerances.percent_tolerance,
        ),
        Err(_) => CheckOutcome::record(
            Invariant::PercentConsistent,
            record,
            None,
            record.percent,
            false,
        ),
    };

    let growth = match derived_growth(record) {
        Ok(expected) => CheckOutcome::record(
            Invariant::GrowthConsistent,
            record,
            Some(expected),
            record.growth_percent,
            (expected - record.growth_percent).abs() <= tolerances.growth_tolerance,
        ),
        Err(_) => CheckOutcome::record(
            Invariant::GrowthConsistent,
            record,
            None,
            record.growth_percent,
            false,
        ),
    };

    let monotonic = CheckOutcome::record(
        Invariant::MonotonicGrowth,
        record,
        Some(f64::from(record.count_year_start)),
        f64::from(record.count_year_end),
        record.count_year_end > record.count_year_start,
    );

    [non_negative, percent, growth, monotonic]
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
