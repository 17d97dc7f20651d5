use nixme::models::package::{ItemShape, PackageKind, PackagePatternConfig};
use nixme::parsers::PackagePatternTable;
use nixme::{extract_packages, sanitize, InspectError};
use pretty_assertions::assert_eq;

#[test]
fn test_builtin_rows() {
    let packages = extract_packages(
        r#"{
          homebrew.brews = [ "git" ];
          homebrew.casks = [ "firefox" ];
          environment.systemPackages = with pkgs; [ vim pkgs.jq ];
        }"#,
    );

    assert_eq!(packages.formulas, vec!["git"]);
    assert_eq!(packages.casks, vec!["firefox"]);
    assert!(packages.system_packages.contains(&"vim".to_string()));
    assert_eq!(packages.len(), packages.formulas.len() + packages.casks.len() + packages.system_packages.len());
}

#[test]
fn test_extra_row_extends_table() {
    let extra = PackagePatternConfig {
        kind: PackageKind::Cask,
        pattern: r"(?s)\bmasApps\s*=\s*\[(.*?)\]\s*;".to_string(),
        items: ItemShape::Quoted,
    };
    let table = PackagePatternTable::with_extra(&[extra]).unwrap();
    assert_eq!(table.len(), PackagePatternTable::builtin().len() + 1);

    let packages = table.extract(&sanitize(r#"homebrew.masApps = [ "Xcode" ];"#));
    assert_eq!(packages.casks, vec!["Xcode"]);
}

#[test]
fn test_row_without_capture_group_rejected() {
    let extra = PackagePatternConfig {
        kind: PackageKind::Formula,
        pattern: r"brews\s*=".to_string(),
        items: ItemShape::Quoted,
    };
    let result = PackagePatternTable::with_extra(&[extra]);
    assert!(matches!(result, Err(InspectError::Config { .. })));
}

#[test]
fn test_invalid_regex_rejected() {
    let extra = PackagePatternConfig {
        kind: PackageKind::Formula,
        pattern: "([".to_string(),
        items: ItemShape::Identifier,
    };
    let result = PackagePatternTable::with_extra(&[extra]);
    assert!(matches!(result, Err(InspectError::PackagePattern { .. })));
}

#[test]
fn test_no_declarations() {
    assert!(extract_packages("{ networking.hostName = \"mac\"; }").is_empty());
}

#[test]
fn test_prose_string_between_formulas() {
    let packages = extract_packages(r#"brews = [ "git" "foo bar" "curl" ];"#);
    assert_eq!(packages.formulas, vec!["git", "curl"]);
}
