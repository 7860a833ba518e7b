use serde::{Deserialize, Serialize};

/// One thematic cluster of the review corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterRecord {
    /// Short label, unique within a corpus.
    pub name: String,
    /// Documents assigned to this cluster.
    pub count: u32,
    /// Share of the corpus in percentage points, rounded to one decimal.
    pub percent: f64,
    /// Documents published in the baseline year.
    pub count_year_start: u32,
    /// Documents published in the comparison year.
    pub count_year_end: u32,
    /// Percentage change between the two year counts, rounded to an integer.
    pub growth_percent: f64,
}

impl ClusterRecord {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        count: u32,
        percent: f64,
        count_year_start: u32,
        count_year_end: u32,
        growth_percent: f64,
    ) -> Self {
        Self {
            name: name.into(),
            count,
            percent,
            count_year_start,
            count_year_end,
            growth_percent,
        }
    }
}

/// Baseline and comparison years of the per-year counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPeriod {
    pub start: u16,
    pub end: u16,
}

impl Default for StudyPeriod {
    fn default() -> Self {
        Self {
            start: 2023,
            end: 2025,
        }
    }
}

/// Ordered, immutable snapshot of cluster records.
///
/// Table order is significant: rankings break ties by it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewCorpus {
    records: Vec<ClusterRecord>,
    period: StudyPeriod,
}

impl ReviewCorpus {
    #[must_use]
    pub const fn new(period: StudyPeriod, records: Vec<ClusterRecord>) -> Self {
        Self { records, period }
    }

    #[must_use]
    pub fn records(&self) -> &[ClusterRecord] {
        &self.records
    }

    #[must_use]
    pub const fn period(&self) -> StudyPeriod {
        self.period
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by its cluster name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ClusterRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ClusterRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ReviewCorpus {
    type Item = &'a ClusterRecord;
    type IntoIter = std::slice::Iter<'a, ClusterRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
