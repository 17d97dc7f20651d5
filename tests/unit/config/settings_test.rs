use nixme::{
    config::SettingsValidator,
    error::{InspectError, Result},
    models::config::{OutputFormat, PartialSettings, ReportView, Settings},
};
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_layered_partials() -> Result<()> {
    let dir = tempdir().unwrap();

    let mut settings = PartialSettings {
        project_root: Some(PathBuf::from("/from/file")),
        view: Some(ReportView::Tree),
        output_format: Some(OutputFormat::Text),
        ..Default::default()
    };
    settings.merge_from(PartialSettings {
        project_root: Some(dir.path().to_path_buf()),
        output_format: Some(OutputFormat::Json),
        ..Default::default()
    });

    let settings = settings.to_settings();
    SettingsValidator::validate(&settings)?;

    assert_eq!(settings.project_root, dir.path());
    assert_eq!(settings.view, ReportView::Tree);
    assert_eq!(settings.output_format, OutputFormat::Json);
    assert!(!settings.mark_cycles);

    Ok(())
}

#[test]
fn test_default_settings() {
    let settings = Settings::default();

    assert_eq!(settings.project_root, PathBuf::from("."));
    assert!(settings.hostname.is_none());
    assert_eq!(settings.view, ReportView::All);
    assert_eq!(settings.output_format, OutputFormat::Text);
    assert!(settings.exclude_patterns.is_empty());
    assert!(settings.max_depth.is_none());
    assert!(settings.show_progress);
}

#[test]
fn test_hostname_with_separator_rejected() {
    let dir = tempdir().unwrap();
    let settings = Settings {
        project_root: dir.path().to_path_buf(),
        hostname: Some("hosts/shared".to_string()),
        ..Default::default()
    };

    assert!(matches!(
        SettingsValidator::validate(&settings),
        Err(InspectError::Config { .. })
    ));
}

#[test]
fn test_output_in_existing_directory() {
    let dir = tempdir().unwrap();
    let settings = Settings {
        project_root: dir.path().to_path_buf(),
        output_file: Some(dir.path().join("report.json")),
        ..Default::default()
    };

    assert!(SettingsValidator::validate(&settings).is_ok());
}
