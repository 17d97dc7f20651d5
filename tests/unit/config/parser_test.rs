use indoc::indoc;
use nixme::{
    config::parser::{create_default_config, parse_config_content, parse_config_file, validate_partial_settings},
    error::{ErrorSeverity, InspectError, Result},
    models::{
        config::{OutputFormat, PartialSettings, ReportView},
        package::{ItemShape, PackageKind},
    },
};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_parse_layout_and_package_tables() -> Result<()> {
    let content = indoc! {r#"
        project_root = "/etc/nix-darwin"
        view = "packages"
        output_format = "csv"

        [layout]
        hosts_dir = "machines"
        shared_host = "common"

        [[package_patterns]]
        kind = "cask"
        pattern = '(?s)\bmasApps\s*=\s*\[(.*?)\]\s*;'
    "#};

    let settings = parse_config_content(content, "virtual.toml")?;

    assert_eq!(settings.project_root, Some(PathBuf::from("/etc/nix-darwin")));
    assert_eq!(settings.view, Some(ReportView::Packages));
    assert_eq!(settings.output_format, Some(OutputFormat::Csv));

    let layout = settings.layout.unwrap();
    assert_eq!(layout.hosts_dir, "machines");
    assert_eq!(layout.shared_host, "common");
    assert_eq!(layout.manifest_file, "flake.nix");

    let patterns = settings.package_patterns.unwrap();
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].kind, PackageKind::Cask);
    assert_eq!(patterns[0].items, ItemShape::Quoted);

    Ok(())
}

#[test]
fn test_unknown_view_is_parse_error() {
    let result = parse_config_content("view = \"graph\"", "bad.toml");
    assert!(matches!(result, Err(InspectError::ConfigParse { .. })));
}

#[test]
fn test_missing_file_is_critical() {
    let err = parse_config_file("/no/such/nixme.toml").unwrap_err();
    assert!(matches!(err, InspectError::ConfigNotFound { .. }));
    assert_eq!(err.severity(), ErrorSeverity::Critical);
    assert!(err.suggestion().is_some());
}

#[test]
fn test_validate_rejects_blank_values() {
    let blank_host = PartialSettings {
        hostname: Some("   ".to_string()),
        ..Default::default()
    };
    assert!(validate_partial_settings(&blank_host, "x.toml").is_err());

    let empty_pattern = PartialSettings {
        exclude_patterns: Some(vec![String::new()]),
        ..Default::default()
    };
    assert!(validate_partial_settings(&empty_pattern, "x.toml").is_err());

    assert!(validate_partial_settings(&PartialSettings::default(), "x.toml").is_ok());
}

#[test]
fn test_default_config_creates_parent_dirs() -> Result<()> {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("nixme").join("config.toml");

    create_default_config(&path)?;

    let settings = parse_config_file(&path)?;
    assert!(settings.project_root.is_none());
    assert!(settings.package_patterns.is_none());

    Ok(())
}
