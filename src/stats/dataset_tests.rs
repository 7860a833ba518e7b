use std::io::Write;

use super::*;
use crate::stats::validation::Invariant;

const SMALL_DATASET: &str = r#"
total_documents = 100

[period]
start = 2020
end = 2022

[[clusters]]
name = "Alpha"
count = 60
percent = 60.0
count_year_start = 10
count_year_end = 20
growth_percent = 100

[[clusters]]
name = "Beta"
count = 40
percent = 40.0
count_year_start = 8
count_year_end = 10
growth_percent = 25
"#;

#[test]
fn reference_dataset_validates_cleanly() {
    let dataset = ReviewDataset::reference();
    let report = dataset.validate(&Tolerances::default());
    assert!(report.is_consistent());
    assert_eq!(report.for_invariant(Invariant::PrismaIncluded).count(), 1);
}

#[test]
fn parses_toml_dataset() {
    let dataset = ReviewDataset::from_toml_str(SMALL_DATASET).unwrap();
    assert_eq!(dataset.total_documents, 100);
    assert_eq!(dataset.corpus.len(), 2);
    assert_eq!(dataset.corpus.period().start, 2020);
    assert!(dataset.prisma.is_none());
    assert!(dataset.validate(&Tolerances::default()).is_consistent());
}

#[test]
fn period_defaults_when_omitted() {
    let content = SMALL_DATASET.replace("[period]\nstart = 2020\nend = 2022\n", "");
    let dataset = ReviewDataset::from_toml_str(&content).unwrap();
    assert_eq!(dataset.corpus.period(), StudyPeriod::default());
}

#[test]
fn rejects_empty_cluster_list() {
    let err = ReviewDataset::from_toml_str("total_documents = 0\nclusters = []\n").unwrap_err();
    assert!(matches!(err, ReviewError::Config(_)));
}

#[test]
fn rejects_unknown_fields() {
    let content = format!("mystery = 1\n{SMALL_DATASET}");
    let err = ReviewDataset::from_toml_str(&content).unwrap_err();
    assert!(matches!(err, ReviewError::TomlParse(_)));
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SMALL_DATASET.as_bytes()).unwrap();
    let dataset = ReviewDataset::load(file.path()).unwrap();
    assert_eq!(dataset.corpus.records()[1].name, "Beta");
}

#[test]
fn load_missing_file_reports_path() {
    let err = ReviewDataset::load(Path::new("/nonexistent/dataset.toml")).unwrap_err();
    assert!(matches!(err, ReviewError::FileAccess { .. }));
    assert!(err.to_string().contains("dataset.toml"));
}

#[test]
fn load_or_reference_falls_back() {
    let dataset = ReviewDataset::load_or_reference(None).unwrap();
    assert_eq!(dataset, ReviewDataset::reference());
}
