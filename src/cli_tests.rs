use std::path::PathBuf;

use super::*;

#[test]
fn cli_validate_defaults() {
    let cli = Cli::parse_from(["review-figures", "validate"]);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert_eq!(cli.color, ColorChoice::Auto);
    assert!(cli.dataset.is_none());
    match cli.command {
        Commands::Validate(args) => {
            assert_eq!(args.format, OutputFormat::Text);
            assert!(args.output.is_none());
            assert!(args.percent_tolerance.is_none());
            assert!(args.growth_tolerance.is_none());
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn cli_validate_with_tolerances_and_format() {
    let cli = Cli::parse_from([
        "review-figures",
        "validate",
        "--format",
        "json",
        "--percent-tolerance",
        "0.1",
        "--growth-tolerance",
        "2.5",
        "--percent-sum-tolerance",
        "0",
    ]);
    match cli.command {
        Commands::Validate(args) => {
            assert_eq!(args.format, OutputFormat::Json);
            assert_eq!(args.percent_tolerance, Some(0.1));
            assert_eq!(args.growth_tolerance, Some(2.5));
            assert_eq!(args.percent_sum_tolerance, Some(0.0));
        }
        _ => panic!("Expected Validate command"),
    }
}

#[test]
fn cli_rejects_unknown_format() {
    let result = Cli::try_parse_from(["review-figures", "validate", "--format", "sarif"]);
    assert!(result.is_err());
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "review-figures",
        "table",
        "-vv",
        "--color",
        "never",
        "--no-config",
        "--dataset",
        "data/review.toml",
    ]);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.color, ColorChoice::Never);
    assert!(cli.no_config);
    assert_eq!(cli.dataset, Some(PathBuf::from("data/review.toml")));
}

#[test]
fn cli_figures_with_selection() {
    let cli = Cli::parse_from([
        "review-figures",
        "figures",
        "--out-dir",
        "out",
        "--only",
        "growth_rate,prisma-flow",
        "--top",
        "5",
        "--force",
    ]);
    match cli.command {
        Commands::Figures(args) => {
            assert_eq!(args.out_dir, Some(PathBuf::from("out")));
            assert_eq!(args.only, vec![FigureKind::GrowthRate, FigureKind::PrismaFlow]);
            assert_eq!(args.top, Some(5));
            assert!(args.force);
        }
        _ => panic!("Expected Figures command"),
    }
}

#[test]
fn cli_figures_rejects_unknown_figure() {
    let result = Cli::try_parse_from(["review-figures", "figures", "--only", "elbow"]);
    assert!(result.is_err());
}

#[test]
fn cli_table_defaults_to_markdown() {
    let cli = Cli::parse_from(["review-figures", "table"]);
    match cli.command {
        Commands::Table(args) => assert_eq!(args.format, OutputFormat::Markdown),
        _ => panic!("Expected Table command"),
    }
}

#[test]
fn cli_rank_options() {
    let cli = Cli::parse_from(["review-figures", "rank", "--by", "count", "-n", "3"]);
    match cli.command {
        Commands::Rank(args) => {
            assert_eq!(args.by, RankKey::Count);
            assert_eq!(args.limit, Some(3));
            assert_eq!(args.format, OutputFormat::Text);
        }
        _ => panic!("Expected Rank command"),
    }
}

#[test]
fn cli_rank_defaults_to_growth() {
    let cli = Cli::parse_from(["review-figures", "rank"]);
    match cli.command {
        Commands::Rank(args) => {
            assert_eq!(args.by, RankKey::Growth);
            assert!(args.limit.is_none());
        }
        _ => panic!("Expected Rank command"),
    }
}

#[test]
fn cli_init_defaults() {
    let cli = Cli::parse_from(["review-figures", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".review-figures.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_init_with_force() {
    let cli = Cli::parse_from(["review-figures", "init", "--force", "-o", "custom.toml"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from("custom.toml"));
            assert!(args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_verify_command() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
