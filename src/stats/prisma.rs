//! PRISMA-ScR screening counts and their arithmetic checks.

use serde::{Deserialize, Serialize};

use super::validation::{CheckOutcome, Invariant};

/// Record counts at each stage of the screening flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrismaFlow {
    /// Bibliographic database the records were identified from.
    #[serde(default = "default_source")]
    pub source: String,
    pub identified: u64,
    #[serde(default)]
    pub duplicates_removed: u64,
    pub screened: u64,
    #[serde(default)]
    pub excluded_no_abstract: u64,
    pub assessed: u64,
    #[serde(default)]
    pub excluded_non_english: u64,
    #[serde(default)]
    pub excluded_non_research: u64,
    pub included: u64,
}

fn default_source() -> String {
    "Scopus".to_string()
}

impl PrismaFlow {
    /// Check each stage against the previous one, and the final stage
    /// against the clustered corpus.
    #[must_use]
    pub fn checks(&self, total_documents: u64) -> Vec<CheckOutcome> {
        let screened = self.identified.saturating_sub(self.duplicates_removed);
        let assessed = self.screened.saturating_sub(self.excluded_no_abstract);
        let included = self
            .assessed
            .saturating_sub(self.excluded_non_english)
            .saturating_sub(self.excluded_non_research);

        vec![
            stage(Invariant::PrismaScreened, screened, self.screened),
            stage(Invariant::PrismaAssessed, assessed, self.assessed),
            stage(Invariant::PrismaIncluded, included, self.included),
            stage(Invariant::PrismaMatchesCorpus, total_documents, self.included),
        ]
    }
}

#[allow(clippy::cast_precision_loss)]
fn stage(invariant: Invariant, expected: u64, actual: u64) -> CheckOutcome {
    CheckOutcome::corpus(
        invariant,
        Some(expected as f64),
        actual as f64,
        expected == actual,
    )
}

#[cfg(test)]
#[path = "prisma_tests.rs"]
mod tests;
