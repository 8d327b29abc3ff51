use std::path::PathBuf;
use clap::Parser;
use checkrun_analyzer::config::constants::{DEFAULT_COMMIT_COUNT, DEFAULT_ORG};
use checkrun_analyzer::enums::commands::Commands;
use checkrun_analyzer::errors::AnalyzerError;
use checkrun_analyzer::structs::cli::Cli;
use checkrun_analyzer::workers::command_runner::CommandRunner;

#[test]
fn defaults_apply_when_flags_are_omitted() {
    let cli = Cli::try_parse_from(["checkrun-analyzer", "annotations"]).unwrap();
    let target = cli.command.target();

    assert_eq!(target.org, DEFAULT_ORG);
    assert_eq!(target.commits, DEFAULT_COMMIT_COUNT);
    assert!(target.repo.is_none());
    assert!(!target.links_only);
    assert!(cli.command.wants_annotations());
    assert!(!cli.command.wants_timing());
}

#[test]
fn analyze_accepts_all_target_flags() {
    let cli = Cli::try_parse_from([
        "checkrun-analyzer", "analyze",
        "--org", "acme",
        "-r", "widgets",
        "--commits", "3",
        "--commit", "deadbeef",
        "-v",
        "--csv", "issues.csv",
        "--links-only",
        "--refresh",
    ])
    .unwrap();

    assert!(matches!(cli.command, Commands::Analyze { .. }));
    let target = cli.command.target();
    assert_eq!(target.org, "acme");
    assert_eq!(target.repo.as_deref(), Some("widgets"));
    assert_eq!(target.commits, 3);
    assert_eq!(target.commit.as_deref(), Some("deadbeef"));
    assert!(target.verbose && target.links_only && target.refresh);
    assert_eq!(target.csv, Some(PathBuf::from("issues.csv")));
}

#[test]
fn commit_count_must_be_numeric() {
    assert!(Cli::try_parse_from(["checkrun-analyzer", "timing", "--commits", "many"]).is_err());
}

#[test]
fn verbose_only_raises_this_crate() {
    let quiet = Cli::try_parse_from(["checkrun-analyzer", "timing"]).unwrap();
    let verbose = Cli::try_parse_from(["checkrun-analyzer", "timing", "-v"]).unwrap();

    assert_eq!(quiet.command.target().log_filter(), "info");
    assert_eq!(verbose.command.target().log_filter(), "info,checkrun_analyzer=debug");
}

#[tokio::test]
async fn missing_config_file_is_returned_to_the_caller() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    let cli = Cli::try_parse_from([
        "checkrun-analyzer", "annotations",
        "--repo", "sentry",
        "--config", missing.to_str().unwrap(),
    ])
    .unwrap();

    let err = CommandRunner::new().run_command(cli.command).await.unwrap_err();
    assert!(matches!(err, AnalyzerError::ConfigurationFileError { .. }));
}
