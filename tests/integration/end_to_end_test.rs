//! End-to-end inspection passes over a sample repository

use super::fixtures::{sample_repo, write_files};
use nixme::models::config::Settings;
use nixme::models::file_tree::FileKind;
use nixme::Inspector;
use pretty_assertions::assert_eq;
use std::path::Path;

fn settings(root: &Path, hostname: &str) -> Settings {
    Settings {
        project_root: root.to_path_buf(),
        hostname: Some(hostname.to_string()),
        show_progress: false,
        use_colors: false,
        ..Default::default()
    }
}

#[test]
fn test_module_order_for_named_host() {
    let dir = sample_repo();
    let report = Inspector::new(settings(dir.path(), "work-mac")).unwrap().inspect().unwrap();

    assert_eq!(
        report.module_order,
        vec![
            "hosts/shared/default.nix",
            "hosts/macbook/default.nix",
            "hosts/work-mac/default.nix",
        ]
    );
}

#[test]
fn test_composite_tree_for_named_host() {
    let dir = sample_repo();
    let report = Inspector::new(settings(dir.path(), "work-mac")).unwrap().inspect().unwrap();
    let tree = report.import_tree.expect("shared root exists");

    assert_eq!(tree.file, "hosts/shared/default.nix");
    assert_eq!(tree.depth, 0);

    let children: Vec<&str> = tree.children.iter().map(|c| c.file.as_str()).collect();
    assert_eq!(
        children,
        vec![
            "modules/common.nix",
            "modules/homebrew/default.nix",
            "hosts/macbook/default.nix",
            "hosts/work-mac/default.nix",
        ]
    );

    // Later roots start one level below the first root
    assert!(tree.children[2..].iter().all(|root| root.depth == 1));

    assert_eq!(tree.occurrences("modules/apps.nix"), 2);
    assert_eq!(tree.occurrences("modules/common.nix"), 2);
    assert_eq!(tree.node_count(), 8);
    assert_eq!(tree.max_depth(), 3);
    assert_eq!(report.summary.tree_nodes, 8);

    let homebrew = tree.find("modules/homebrew/default.nix").unwrap();
    let packages = homebrew.packages.as_ref().unwrap();
    assert_eq!(packages.formulas, vec!["jq", "wget"]);
    assert_eq!(packages.casks, vec!["zed"]);
}

#[test]
fn test_fallback_host_skips_reserved_dirs() {
    let dir = sample_repo();
    let report = Inspector::new(settings(dir.path(), "nobody")).unwrap().inspect().unwrap();

    assert_eq!(
        report.module_order,
        vec!["hosts/shared/default.nix", "hosts/desktop/default.nix"]
    );
}

#[test]
fn test_flat_index_and_exclusions() {
    let dir = sample_repo();
    let report = Inspector::new(settings(dir.path(), "studio")).unwrap().inspect().unwrap();

    assert_eq!(report.dependencies.len(), 11);
    assert_eq!(report.dependencies[0].file, "result/generated.nix");
    assert_eq!(report.dependencies[1].file, "hosts/shared/default.nix");
    assert!(report.dependencies.iter().all(|entry| !entry.file.starts_with(".git")));

    let counts: Vec<usize> = report.dependencies.iter().map(|e| e.import_count()).collect();
    assert!(counts.windows(2).all(|pair| pair[0] >= pair[1]));

    let excluded = Settings {
        exclude_patterns: vec!["result/**".to_string()],
        ..settings(dir.path(), "studio")
    };
    let report = Inspector::new(excluded).unwrap().inspect().unwrap();
    assert_eq!(report.dependencies.len(), 10);
    assert_eq!(report.dependencies[0].file, "hosts/shared/default.nix");
}

#[test]
fn test_repository_packages_sorted() {
    let dir = sample_repo();
    let report = Inspector::new(settings(dir.path(), "studio")).unwrap().inspect().unwrap();

    assert_eq!(report.packages.formulas, vec!["git", "jq", "wget"]);
    assert_eq!(report.packages.casks, vec!["raycast", "zed"]);
    assert_eq!(report.packages.system_packages, vec!["git", "ripgrep"]);
}

#[test]
fn test_file_browser() {
    let dir = sample_repo();
    let report = Inspector::new(settings(dir.path(), "studio")).unwrap().inspect().unwrap();
    let tree = &report.file_tree;

    let top: Vec<&str> = tree.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(top, vec!["flake.nix", "hosts", "modules", "home-configurations"]);
    assert_eq!(tree.children[0].kind, FileKind::File);
    assert_eq!(tree.children[1].kind, FileKind::Directory);
}

#[test]
fn test_root_discovered_from_subdirectory() {
    let dir = sample_repo();
    let nested = dir.path().join("modules").join("homebrew");
    let inspector = Inspector::new(settings(&nested, "studio")).unwrap();

    assert_eq!(inspector.project_root(), dir.path().canonicalize().unwrap());
    assert_eq!(inspector.inspect().unwrap().module_order.len(), 2);
}

#[test]
fn test_refresh_sees_new_files() {
    let dir = sample_repo();
    let inspector = Inspector::new(settings(dir.path(), "studio")).unwrap();
    let before = inspector.inspect().unwrap();

    write_files(
        dir.path(),
        &[("hosts/studio/default.nix", "{ imports = [ ../../modules/apps.nix ]; }")],
    );
    let after = inspector.inspect().unwrap();

    assert_eq!(before.module_order.len(), 2);
    assert_eq!(
        after.module_order,
        vec![
            "hosts/shared/default.nix",
            "hosts/desktop/default.nix",
            "hosts/studio/default.nix",
        ]
    );
    assert_eq!(after.dependencies.len(), before.dependencies.len() + 1);
}

#[test]
fn test_missing_project_path() {
    let result = Inspector::new(settings(Path::new("/no/such/repository"), "studio"));
    assert!(matches!(result, Err(nixme::InspectError::InvalidPath { .. })));
}
