#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the review-figures binary.
#[macro_export]
macro_rules! review_figures {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("review-figures"))
    };
}

/// Two clusters whose stated fields agree with their counts.
pub const CONSISTENT_DATASET: &str = r#"
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

[prisma]
source = "PubMed"
identified = 120
duplicates_removed = 5
screened = 115
excluded_no_abstract = 15
assessed = 100
included = 100
"#;

/// Beta's growth is stated as 50 % although 8 → 10 is 25 %.
pub const INCONSISTENT_DATASET: &str = r#"
total_documents = 100

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
growth_percent = 50
"#;

/// Temporary working directory for one test.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content, returning its path.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates `.review-figures.toml` in the fixture directory.
    pub fn create_config(&self, content: &str) -> PathBuf {
        self.create_file(".review-figures.toml", content)
    }

    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}
