use std::path::{Path, PathBuf};

use crate::error::{Result, ReviewError};

use super::Config;
use super::model::CONFIG_VERSION;
use super::validation::validate_config_semantics;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".review-figures.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Validate config version. Returns an error if version is unsupported.
fn validate_config_version(config: &Config) -> Result<()> {
    match &config.version {
        None => Ok(()),
        Some(v) if v == CONFIG_VERSION => Ok(()),
        Some(v) => Err(ReviewError::Config(format!(
            "Unsupported config version '{v}'. Only version '{CONFIG_VERSION}' is supported."
        ))),
    }
}

/// Trait for filesystem operations (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Platform-specific configuration directory for review-figures.
    ///
    /// - Windows: `%APPDATA%\review-figures`
    /// - macOS: `~/Library/Application Support/review-figures`
    /// - Linux: `~/.config/review-figures` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "review-figures")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.review-figures.toml` in current directory
/// 2. `config.toml` in the platform-specific user config directory
/// 3. `Config::default()` if no config found
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn parse_config(content: &str) -> Result<Config> {
        let config: Config = toml::from_str(content)?;
        validate_config_version(&config)?;
        validate_config_semantics(&config)?;
        Ok(config)
    }

    fn read_config(&self, path: &Path) -> Result<Config> {
        let content = self
            .fs
            .read_to_string(path)
            .map_err(|source| ReviewError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;
        let mut config = Self::parse_config(&content)?;
        resolve_dataset_path(&mut config, path);
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }
}

/// Make a relative `[dataset] path` relative to the config file's directory.
fn resolve_dataset_path(config: &mut Config, config_path: &Path) {
    let Some(dataset) = config.dataset.path.as_mut() else {
        return;
    };
    if dataset.is_relative()
        && let Some(parent) = config_path.parent()
    {
        let joined = parent.join(&*dataset);
        *dataset = joined;
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        if let Some(local_path) = self.local_config_path()
            && self.fs.exists(&local_path)
        {
            return self.read_config(&local_path);
        }

        if let Some(user_path) = self.user_config_path()
            && self.fs.exists(&user_path)
        {
            return self.read_config(&user_path);
        }

        tracing::debug!("no configuration file found, using defaults");
        Ok(Config::default())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        self.read_config(path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
