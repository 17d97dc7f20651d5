//! Command-line parsing and command execution

use super::fixtures::sample_repo;
use clap::Parser;
use nixme::cli::{Args, Command};
use nixme::config::{load_config_with_env_prefix, CliArgs};
use nixme::models::config::{OutputFormat, ReportView};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_cli_args_parsing() {
    let args = Args::parse_from([
        "nixme",
        "--path",
        "/etc/nix-config",
        "--host",
        "studio",
        "--view",
        "packages",
        "--output",
        "json",
        "--exclude",
        "result/**",
        "--max-depth",
        "3",
        "--mark-cycles",
        "--no-colors",
        "--verbose",
    ]);

    assert_eq!(args.path, Some(PathBuf::from("/etc/nix-config")));
    assert_eq!(args.host.as_deref(), Some("studio"));
    assert_eq!(args.exclude, vec!["result/**".to_string()]);
    assert_eq!(args.max_depth, Some(3));
    assert!(args.mark_cycles);
    assert!(args.no_colors);
    assert!(args.verbose);
    assert!(!args.quiet);
}

#[test]
fn test_cli_flags_override_config_file() {
    let repo = sample_repo();
    let config_dir = tempdir().unwrap();
    let config_path = config_dir.path().join("nixme.toml");
    fs::write(
        &config_path,
        format!(
            "project_root = '{}'\nview = \"tree\"\noutput_format = \"csv\"\nhostname = \"nobody\"\n",
            repo.path().display()
        ),
    )
    .unwrap();

    let args = Args::parse_from([
        "nixme",
        "--config",
        config_path.to_str().unwrap(),
        "--host",
        "studio",
    ]);
    let settings = load_config_with_env_prefix(CliArgs::from_args(&args), "NIXME_CLI_TEST_UNSET").unwrap();

    assert_eq!(settings.project_root, repo.path());
    assert_eq!(settings.hostname.as_deref(), Some("studio"));
    assert_eq!(settings.view, ReportView::Tree);
    assert_eq!(settings.output_format, OutputFormat::Csv);
}

#[test]
fn test_inspect_command_writes_report() {
    let repo = sample_repo();
    let out_dir = tempdir().unwrap();
    let output_file = out_dir.path().join("order.json");

    let args = Args::parse_from([
        "nixme",
        "--path",
        repo.path().to_str().unwrap(),
        "--host",
        "work-mac",
        "--view",
        "order",
        "--output",
        "json",
        "--output-file",
        output_file.to_str().unwrap(),
        "--no-progress",
        "--quiet",
    ]);

    assert_eq!(Command::from_args(args).run(), 0);

    let order: Vec<String> = serde_json::from_str(&fs::read_to_string(&output_file).unwrap()).unwrap();
    assert_eq!(
        order,
        vec![
            "hosts/shared/default.nix",
            "hosts/macbook/default.nix",
            "hosts/work-mac/default.nix",
        ]
    );
}

#[test]
fn test_missing_output_directory_fails() {
    let repo = sample_repo();
    let args = Args::parse_from([
        "nixme",
        "--path",
        repo.path().to_str().unwrap(),
        "--host",
        "studio",
        "--output-file",
        "/no/such/dir/report.txt",
        "--no-progress",
    ]);

    assert_eq!(Command::from_args(args).run(), 2);
}

#[test]
fn test_invalid_exclude_pattern_fails() {
    let repo = sample_repo();
    let args = Args::parse_from([
        "nixme",
        "--path",
        repo.path().to_str().unwrap(),
        "--exclude",
        "[",
        "--no-progress",
    ]);

    assert_ne!(Command::from_args(args).run(), 0);
}
