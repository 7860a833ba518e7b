use clap::Parser;
use tempfile::TempDir;

use super::*;
use crate::cli::Commands;

fn run(args: &[&str]) -> Result<()> {
    let mut argv = vec!["review-figures", "--no-config"];
    argv.extend_from_slice(args);
    let cli = Cli::parse_from(argv);
    match &cli.command {
        Commands::Table(table_args) => run_table_impl(table_args, &cli),
        _ => panic!("Expected Table command"),
    }
}

#[test]
fn markdown_table_written_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("table.md");

    run(&["table", "--output", output.to_str().unwrap()]).unwrap();

    let content = std::fs::read_to_string(output).unwrap();
    assert!(content.starts_with("| Cluster | N | % | 2023 | 2025 | Growth |"));
    assert!(content.contains("| **TOTAL** | **8,395** |"));
}

#[test]
fn json_table_written_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("table.json");

    run(&["table", "--format", "json", "-o", output.to_str().unwrap()]).unwrap();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(output).unwrap()).unwrap();
    assert_eq!(json["rows"].as_array().map(Vec::len), Some(15));
}

#[test]
fn missing_dataset_fails() {
    assert!(run(&["--dataset", "/nonexistent/data.toml", "table"]).is_err());
}
