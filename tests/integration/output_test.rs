//! Formatters applied to real inspection reports

use super::fixtures::sample_repo;
use nixme::models::config::{OutputFormat, ReportView, Settings};
use nixme::output::{create_formatter, Formatter};
use nixme::{Inspector, InspectionReport};

fn report() -> InspectionReport {
    let dir = sample_repo();
    let settings = Settings {
        project_root: dir.path().to_path_buf(),
        hostname: Some("work-mac".to_string()),
        mark_cycles: true,
        show_progress: false,
        ..Default::default()
    };
    Inspector::new(settings).unwrap().inspect().unwrap()
}

#[test]
fn test_json_report_round_trips() {
    let report = report();
    let json = create_formatter(OutputFormat::Json, false, false, false)
        .format(&report, ReportView::All)
        .unwrap();

    let parsed: InspectionReport = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.hostname, "work-mac");
    assert_eq!(parsed.module_order, report.module_order);
    assert_eq!(parsed.import_tree, report.import_tree);
    assert_eq!(parsed.dependencies, report.dependencies);
}

#[test]
fn test_json_tree_records_pruned_cycles() {
    let report = report();
    let json = create_formatter(OutputFormat::Json, false, false, false)
        .format(&report, ReportView::Tree)
        .unwrap();

    let tree: serde_json::Value = serde_json::from_str(&json).unwrap();
    let apps = &tree["children"][0]["children"][0];
    assert_eq!(apps["file"], "modules/apps.nix");
    assert_eq!(apps["pruned_cycles"][0], "modules/common.nix");
}

#[test]
fn test_text_tree_marks_cycles() {
    let report = report();
    let text = create_formatter(OutputFormat::Text, false, false, false)
        .format(&report, ReportView::Tree)
        .unwrap();

    assert!(text.starts_with("Import tree\nhosts/shared/default.nix\n"));
    assert!(text.contains("├─ modules/common.nix  [2 system packages]"));
    assert!(text.contains("modules/common.nix (cycle)"));
    assert!(text.contains("└─ hosts/work-mac/default.nix"));
}

#[test]
fn test_csv_exports() {
    let report = report();
    let csv = create_formatter(OutputFormat::Csv, false, false, false);

    let deps = csv.format(&report, ReportView::Deps).unwrap();
    assert_eq!(deps.lines().count(), report.dependencies.len() + 1);
    assert!(deps.lines().nth(1).unwrap().starts_with("result/generated.nix,3,"));

    let packages = csv.format(&report, ReportView::Packages).unwrap();
    assert!(packages.contains("cask,raycast"));
    assert!(packages.contains("system_package,ripgrep"));
}

#[test]
fn test_quiet_summary_line() {
    let report = report();
    let line = create_formatter(OutputFormat::Text, false, false, true)
        .format(&report, ReportView::All)
        .unwrap();

    assert_eq!(line.lines().count(), 1);
    assert!(line.starts_with("Host: work-mac, roots: 3, files: 11"));
}
