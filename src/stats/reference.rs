//! Audited reference dataset: AI in clinical research scoping review, 2023-2025.
//!
//! Counts come from Table 1 of the review manuscript; the screening counts
//! come from its PRISMA-ScR flow.

use super::model::{ClusterRecord, ReviewCorpus, StudyPeriod};
use super::prisma::PrismaFlow;

/// Declared number of documents with valid text for clustering.
pub const REFERENCE_TOTAL_DOCUMENTS: u64 = 8395;

// name, N, %, baseline-year, comparison-year, growth %
const CLUSTERS: [(&str, u32, f64, u32, u32, f64); 15] = [
    ("General ML/DL", 1332, 15.9, 322, 543, 69.0),
    ("AI in Clinical Care", 903, 10.8, 207, 418, 102.0),
    ("ML Classification Systems", 698, 8.3, 150, 276, 84.0),
    ("Clinical Studies (Retrospective)", 691, 8.2, 105, 341, 225.0),
    ("Healthcare Security & Federated", 644, 7.7, 129, 301, 133.0),
    ("Cardiovascular Risk", 549, 6.5, 112, 255, 128.0),
    ("EHR Analytics", 481, 5.7, 102, 207, 103.0),
    ("NLP & LLMs", 458, 5.5, 70, 238, 240.0),
    ("Cancer Genomics", 457, 5.4, 107, 198, 85.0),
    ("MRI Imaging", 447, 5.3, 99, 187, 89.0),
    ("Deep Neural Networks", 439, 5.2, 83, 192, 131.0),
    ("Medical Image Segmentation", 424, 5.1, 115, 180, 57.0),
    ("CT Radiomics", 381, 4.5, 56, 184, 229.0),
    ("Drug Discovery", 278, 3.3, 61, 115, 89.0),
    ("Breast Cancer Imaging", 213, 2.5, 51, 89, 75.0),
];

#[must_use]
pub fn reference_corpus() -> ReviewCorpus {
    let records = CLUSTERS
        .iter()
        .map(|&(name, count, percent, start, end, growth)| {
            ClusterRecord::new(name, count, percent, start, end, growth)
        })
        .collect();
    ReviewCorpus::new(StudyPeriod::default(), records)
}

#[must_use]
pub fn reference_prisma() -> PrismaFlow {
    PrismaFlow {
        source: "Scopus".to_string(),
        identified: 8522,
        duplicates_removed: 0,
        screened: 8522,
        excluded_no_abstract: 127,
        assessed: 8395,
        excluded_non_english: 0,
        excluded_non_research: 0,
        included: 8395,
    }
}

#[cfg(test)]
#[path = "reference_tests.rs"]
mod tests;
