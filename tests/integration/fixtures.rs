//! Sample configuration repositories shared by the integration tests

use indoc::indoc;
use std::fs;
use std::path::Path;
use tempfile::{tempdir, TempDir};

pub const FLAKE: &str = indoc! {r#"
    {
      description = "personal machines";

      outputs = { self, nixpkgs, darwin, ... }: {
        # machineType = "ignored-comment";
        hosts = {
          "work-mac" = { machineType = "macbook"; user = "me"; };
          studio = { machineType = "desktop"; };
        };
      };
    }
"#};

pub const SHARED: &str = indoc! {r#"
    { config, pkgs, ... }:
    {
      imports = [
        ../../modules/common.nix
        ../../modules/homebrew
      ];
    }
"#};

pub const COMMON: &str = indoc! {r#"
    { pkgs, ... }:
    {
      imports = [ ./apps.nix ];
      environment.systemPackages = with pkgs; [
        git
        ripgrep
      ];
    }
"#};

pub const APPS: &str = indoc! {r#"
    { ... }:
    {
      # imports = [ ./never.nix ];
      imports = [ ./common.nix ];
      homebrew.brews = [ "git" ];
    }
"#};

pub const HOMEBREW: &str = indoc! {r#"
    {
      homebrew = {
        enable = true;
        brews = [ "jq" "wget" ];
        casks = [ "zed" ];
      };
    }
"#};

/// Write `files` below a fresh temporary directory
pub fn repo(files: &[(&str, &str)]) -> TempDir {
    let dir = tempdir().unwrap();
    write_files(dir.path(), files);
    dir
}

pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full = root.join(path);
        fs::create_dir_all(full.parent().unwrap()).unwrap();
        fs::write(full, content).unwrap();
    }
}

/// A repository with shared, per-machine-type and per-host roots
pub fn sample_repo() -> TempDir {
    repo(&[
        ("flake.nix", FLAKE),
        ("hosts/shared/default.nix", SHARED),
        (
            "hosts/macbook/default.nix",
            "{ imports = [ ../../modules/apps.nix ]; homebrew.casks = [ \"raycast\" ]; }",
        ),
        ("hosts/desktop/default.nix", "{ imports = [ ../../modules/apps.nix ]; }"),
        ("hosts/profiles/default.nix", "{ }"),
        ("hosts/work-mac/default.nix", "{ networking.hostName = \"work-mac\"; }"),
        ("modules/common.nix", COMMON),
        ("modules/apps.nix", APPS),
        ("modules/homebrew/default.nix", HOMEBREW),
        ("home-configurations/me.nix", "{ pkgs, ... }: { home.stateVersion = \"24.05\"; }"),
        ("result/generated.nix", "{ imports = [ ./a.nix ./b.nix ./c.nix ]; }"),
        (".git/hooks.nix", "{ imports = [ ./x.nix ]; }"),
        ("README.md", "# my machines"),
    ])
}
