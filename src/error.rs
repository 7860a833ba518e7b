use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// The quantity that was zero when a ratio was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divisor {
    /// Total document count of the corpus.
    CorpusTotal,
    /// A record's baseline-year document count.
    BaselineCount,
}

impl fmt::Display for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorpusTotal => write!(f, "corpus total"),
            Self::BaselineCount => write!(f, "baseline-year count"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ReviewError {
    #[error("Division by zero for cluster '{record}': {divisor} is 0")]
    DivisionByZero { record: String, divisor: Divisor },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Corpus failed validation with {failures} violation(s)")]
    InconsistentCorpus { failures: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReviewError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
