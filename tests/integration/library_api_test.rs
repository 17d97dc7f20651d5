//! Crate-root functions and the analyzer's guarantees

use super::fixtures::{repo, sample_repo, write_files};
use nixme::{
    build_composite_import_tree, build_flat_index, extract_packages, resolve_import, resolve_module_order,
};
use pretty_assertions::assert_eq;
use std::path::{Path, PathBuf};

#[test]
fn test_self_import_terminates() {
    let dir = repo(&[
        ("flake.nix", "{ }"),
        ("hosts/shared/default.nix", "{ imports = [ ./default.nix ./. ]; }"),
    ]);

    let tree = build_composite_import_tree(dir.path(), "any").unwrap();
    assert_eq!(tree.file, "hosts/shared/default.nix");
    assert!(tree.children.is_empty());
}

#[test]
fn test_two_file_cycle_terminates() {
    let dir = repo(&[
        ("hosts/shared/default.nix", "{ imports = [ ../../a.nix ]; }"),
        ("a.nix", "{ imports = [ ./b.nix ]; }"),
        ("b.nix", "{ imports = [ ./a.nix ]; }"),
    ]);

    let tree = build_composite_import_tree(dir.path(), "any").unwrap();
    let nodes = tree.iter();
    let files: Vec<&str> = nodes.iter().map(|node| node.file.as_str()).collect();
    assert_eq!(files, vec!["hosts/shared/default.nix", "a.nix", "b.nix"]);
    assert_eq!(tree.max_depth(), 2);
}

#[test]
fn test_file_reached_twice_is_expanded_twice() {
    let dir = repo(&[
        ("hosts/shared/default.nix", "{ imports = [ ../../x.nix ../../y.nix ]; }"),
        ("x.nix", "{ imports = [ ./common.nix ]; }"),
        ("y.nix", "{ imports = [ ./common.nix ]; }"),
        ("common.nix", "{ imports = [ ./leaf.nix ]; }"),
        ("leaf.nix", "{ }"),
    ]);

    let tree = build_composite_import_tree(dir.path(), "any").unwrap();
    assert_eq!(tree.occurrences("common.nix"), 2);
    assert_eq!(tree.occurrences("leaf.nix"), 2);
}

#[test]
fn test_missing_import_is_skipped() {
    let dir = repo(&[
        ("hosts/shared/default.nix", "{ imports = [ ../../missing.nix ../../present.nix ]; }"),
        ("present.nix", "{ }"),
    ]);

    let tree = build_composite_import_tree(dir.path(), "any").unwrap();
    let children: Vec<&str> = tree.children.iter().map(|c| c.file.as_str()).collect();
    assert_eq!(children, vec!["present.nix"]);
}

#[test]
fn test_dot_relative_root_gives_relative_paths() {
    let dir = tempfile::Builder::new().prefix("nixme-relative-").tempdir_in(".").unwrap();
    write_files(
        dir.path(),
        &[
            ("flake.nix", "{ }"),
            ("hosts/shared/default.nix", "{ imports = [ ./a.nix ]; }"),
            ("hosts/shared/a.nix", "{ }"),
        ],
    );
    let root = Path::new(".").join(dir.path().file_name().unwrap());

    let tree = build_composite_import_tree(&root, "any").unwrap();
    assert_eq!(tree.file, "hosts/shared/default.nix");
    assert_eq!(tree.children[0].file, "hosts/shared/a.nix");

    assert_eq!(resolve_module_order(&root, "any"), vec!["hosts/shared/default.nix"]);

    let mut indexed: Vec<String> = build_flat_index(&root).into_iter().map(|entry| entry.file).collect();
    indexed.sort();
    assert_eq!(indexed, vec!["flake.nix", "hosts/shared/a.nix", "hosts/shared/default.nix"]);
}

#[test]
fn test_no_roots_means_no_tree() {
    let dir = repo(&[("flake.nix", "{ }")]);
    assert!(build_composite_import_tree(dir.path(), "any").is_none());
    assert!(resolve_module_order(dir.path(), "any").is_empty());
}

#[test]
fn test_shared_only_module_order() {
    let dir = repo(&[("hosts/shared/default.nix", "{ }")]);
    assert_eq!(resolve_module_order(dir.path(), "laptop"), vec!["hosts/shared/default.nix"]);
}

#[test]
fn test_machine_type_module_order() {
    let dir = sample_repo();
    assert_eq!(
        resolve_module_order(dir.path(), "studio"),
        vec!["hosts/shared/default.nix", "hosts/desktop/default.nix"]
    );
}

#[test]
fn test_hostname_cannot_escape() {
    let dir = sample_repo();
    let order = resolve_module_order(dir.path(), "../modules");
    assert_eq!(order, vec!["hosts/shared/default.nix", "hosts/desktop/default.nix"]);
}

#[test]
fn test_flat_index_is_complete_and_sorted() {
    let dir = sample_repo();
    let index = build_flat_index(dir.path());

    assert_eq!(index.len(), 11);
    assert!(index.iter().any(|entry| entry.file == "hosts/profiles/default.nix" && entry.imports.is_empty()));
    assert!(index.windows(2).all(|pair| pair[0].import_count() >= pair[1].import_count()));

    // Equal counts keep walk order
    let ones: Vec<&str> = index
        .iter()
        .filter(|entry| entry.import_count() == 1)
        .map(|entry| entry.file.as_str())
        .collect();
    assert_eq!(
        ones,
        vec![
            "hosts/desktop/default.nix",
            "hosts/macbook/default.nix",
            "modules/apps.nix",
            "modules/common.nix",
        ]
    );
}

#[test]
fn test_flat_index_of_missing_root() {
    assert!(build_flat_index(Path::new("/no/such/repository")).is_empty());
}

#[test]
fn test_extract_formulas() {
    let packages = extract_packages(r#"{ homebrew.brews = [ "git" "curl" ]; }"#);
    assert_eq!(packages.formulas, vec!["git", "curl"]);
    assert!(packages.casks.is_empty());
}

#[test]
fn test_extract_ignores_commented_packages() {
    let source = indoc::indoc! {r#"
        {
          # homebrew.casks = [ "old" ];
          homebrew.casks = [ "zed" /* "slack" */ ];
          environment.systemPackages = with pkgs; [ git nodejs_20 ];
        }
    "#};

    let packages = extract_packages(source);
    assert_eq!(packages.casks, vec!["zed"]);
    assert_eq!(packages.system_packages, vec!["git", "nodejs_20"]);
}

#[test]
fn test_resolve_import_directory_entry() {
    let dir = repo(&[("modules/darwin/default.nix", "{ }")]);
    let importing = dir.path().join("hosts/shared/default.nix");

    assert_eq!(
        resolve_import(&importing, "../../modules/darwin"),
        dir.path().join("modules/darwin/default.nix")
    );
    assert_eq!(
        resolve_import(&importing, "./extra.nix"),
        dir.path().join("hosts/shared/extra.nix")
    );
    assert_eq!(
        resolve_import(Path::new("/repo/a/b.nix"), "../c/./d.nix"),
        PathBuf::from("/repo/c/d.nix")
    );
}
