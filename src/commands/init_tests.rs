use tempfile::TempDir;

use super::{generate_config_template, run_init, run_init_impl};
use crate::cli::InitArgs;
use crate::config::{Config, validate_config_semantics};
use crate::figures::FigureKind;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS};

#[test]
fn template_is_valid_config() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert!(validate_config_semantics(&config).is_ok());
}

#[test]
fn template_matches_defaults() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    let defaults = Config::default();
    assert_eq!(config.validation, defaults.validation);
    assert_eq!(config.figures, defaults.figures);
    assert_eq!(config.figures.enabled, FigureKind::ALL);
    assert_eq!(config.version.as_deref(), Some("1"));
}

#[test]
fn run_init_creates_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".review-figures.toml");
    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    run_init_impl(&args).unwrap();

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[validation]"));
    assert!(content.contains("[figures]"));
}

#[test]
fn run_init_fails_if_file_exists_without_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".review-figures.toml");
    std::fs::write(&config_path, "existing content").unwrap();
    let args = InitArgs {
        output: config_path.clone(),
        force: false,
    };

    let err = run_init_impl(&args).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
    assert_eq!(std::fs::read_to_string(&config_path).unwrap(), "existing content");
}

#[test]
fn run_init_overwrites_with_force() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join(".review-figures.toml");
    std::fs::write(&config_path, "existing content").unwrap();
    let args = InitArgs {
        output: config_path.clone(),
        force: true,
    };

    assert_eq!(run_init(&args), EXIT_SUCCESS);
    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("version = \"1\""));
}

#[test]
fn run_init_reports_unwritable_path() {
    let temp_dir = TempDir::new().unwrap();
    let args = InitArgs {
        output: temp_dir.path().join("missing").join("config.toml"),
        force: false,
    };
    assert!(matches!(
        run_init_impl(&args),
        Err(crate::ReviewError::FileWrite { .. })
    ));
}
