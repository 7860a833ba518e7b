//! Integration tests for the `figures` command.

mod common;

use common::{CONSISTENT_DATASET, INCONSISTENT_DATASET, TestFixture};
use predicates::prelude::*;

const ALL_FILES: [&str; 7] = [
    "fig1_cluster_distribution.svg",
    "fig2_temporal_evolution.svg",
    "fig3_growth_rate.svg",
    "fig4_top_growth.svg",
    "fig5_corpus_share.svg",
    "prisma_flow.svg",
    "table1_summary.md",
];

#[test]
fn writes_all_figures_to_default_directory() {
    let fixture = TestFixture::new();

    review_figures!()
        .current_dir(fixture.path())
        .args(["--no-config", "figures"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote "));

    for file in ALL_FILES {
        assert!(fixture.path().join("figures").join(file).exists(), "missing {file}");
    }
    let prisma = fixture.read("figures/prisma_flow.svg");
    assert!(prisma.contains("(n = 8,522)"));
    assert!(prisma.contains("NLP &amp; LLMs (+240%)"));
}

#[test]
fn output_dir_from_config() {
    let fixture = TestFixture::new();
    fixture.create_config("[figures]\noutput_dir = \"manuscript\"\nenabled = [\"corpus_share\"]\n");

    review_figures!()
        .current_dir(fixture.path())
        .arg("figures")
        .assert()
        .success();

    assert!(fixture.path().join("manuscript/fig5_corpus_share.svg").exists());
    assert!(!fixture.path().join("manuscript/fig1_cluster_distribution.svg").exists());
}

#[test]
fn only_and_out_dir_flags() {
    let fixture = TestFixture::new();

    review_figures!()
        .current_dir(fixture.path())
        .args(["--no-config", "figures", "--out-dir", "out", "--only", "growth-rate,summary_table"])
        .assert()
        .success();

    assert!(fixture.path().join("out/fig3_growth_rate.svg").exists());
    assert!(fixture.path().join("out/table1_summary.md").exists());
    assert!(!fixture.path().join("out/prisma_flow.svg").exists());
}

#[test]
fn repeated_only_name_is_not_a_config_error() {
    let fixture = TestFixture::new();

    review_figures!()
        .current_dir(fixture.path())
        .args(["--no-config", "figures", "--out-dir", "out", "--only", "growth_rate,growth_rate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("fig3_growth_rate.svg").count(1));
}

#[test]
fn custom_dataset_drives_figures() {
    let fixture = TestFixture::new();
    let dataset = fixture.create_file("data.toml", CONSISTENT_DATASET);

    review_figures!()
        .current_dir(fixture.path())
        .args(["--no-config", "--dataset"])
        .arg(&dataset)
        .args(["figures", "--out-dir", "out"])
        .assert()
        .success();

    assert!(fixture.read("out/fig2_temporal_evolution.svg").contains("Publications in 2020 vs 2022"));
    assert!(fixture.read("out/prisma_flow.svg").contains("from PubMed"));
    assert!(fixture.read("out/table1_summary.md").contains("| Alpha | 60 | 60% | 10 | 20 | +100% |"));
}

#[test]
fn inconsistent_corpus_is_refused_without_force() {
    let fixture = TestFixture::new();
    let dataset = fixture.create_file("data.toml", INCONSISTENT_DATASET);

    review_figures!()
        .current_dir(fixture.path())
        .args(["--no-config", "--dataset"])
        .arg(&dataset)
        .args(["figures", "--out-dir", "out"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    assert!(!fixture.path().join("out").exists());
}

#[test]
fn force_renders_and_warns_about_missing_prisma() {
    let fixture = TestFixture::new();
    let dataset = fixture.create_file("data.toml", INCONSISTENT_DATASET);

    review_figures!()
        .current_dir(fixture.path())
        .args(["--no-config", "--dataset"])
        .arg(&dataset)
        .args(["figures", "--out-dir", "out", "--force"])
        .assert()
        .success()
        .stderr(predicate::str::contains("skipping figure"));

    assert!(fixture.path().join("out/fig1_cluster_distribution.svg").exists());
    assert!(!fixture.path().join("out/prisma_flow.svg").exists());
}

#[test]
fn quiet_suppresses_written_paths() {
    let fixture = TestFixture::new();

    review_figures!()
        .current_dir(fixture.path())
        .args(["--no-config", "-q", "figures", "--only", "top_growth"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
