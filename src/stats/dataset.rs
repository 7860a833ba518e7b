use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ReviewError};

use super::model::{ClusterRecord, ReviewCorpus, StudyPeriod};
use super::prisma::PrismaFlow;
use super::reference::{REFERENCE_TOTAL_DOCUMENTS, reference_corpus, reference_prisma};
use super::validation::{Tolerances, ValidationReport, validate};

/// A corpus together with its declared total and optional screening flow.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewDataset {
    pub corpus: ReviewCorpus,
    pub total_documents: u64,
    pub prisma: Option<PrismaFlow>,
}

/// On-disk layout of a dataset file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    total_documents: u64,
    #[serde(default)]
    period: StudyPeriod,
    clusters: Vec<ClusterRecord>,
    #[serde(default)]
    prisma: Option<PrismaFlow>,
}

impl ReviewDataset {
    /// The audited manuscript dataset.
    #[must_use]
    pub fn reference() -> Self {
        Self {
            corpus: reference_corpus(),
            total_documents: REFERENCE_TOTAL_DOCUMENTS,
            prisma: Some(reference_prisma()),
        }
    }

    /// Parse a dataset from TOML text.
    ///
    /// # Errors
    /// Returns an error if the TOML is malformed, a field has the wrong type,
    /// or the cluster list is empty.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: DatasetFile = toml::from_str(content)?;
        if file.clusters.is_empty() {
            return Err(ReviewError::Config(
                "dataset must contain at least one [[clusters]] entry".to_string(),
            ));
        }
        Ok(Self {
            corpus: ReviewCorpus::new(file.period, file.clusters),
            total_documents: file.total_documents,
            prisma: file.prisma,
        })
    }

    /// Read and parse a dataset file.
    ///
    /// # Errors
    /// Returns `FileAccess` if the file cannot be read, or any error from
    /// [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ReviewError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_toml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            clusters = dataset.corpus.len(),
            "loaded dataset"
        );
        Ok(dataset)
    }

    /// Load `path` if given, otherwise fall back to the reference dataset.
    ///
    /// # Errors
    /// Propagates errors from [`Self::load`].
    pub fn load_or_reference(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("using reference dataset");
                Ok(Self::reference())
            }
        }
    }

    /// Corpus invariants followed by the screening-flow checks, if any.
    #[must_use]
    pub fn validate(&self, tolerances: &Tolerances) -> ValidationReport {
        let mut report = validate(&self.corpus, self.total_documents, tolerances);
        if let Some(prisma) = &self.prisma {
            report.extend(prisma.checks(self.total_documents));
        }
        report
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
