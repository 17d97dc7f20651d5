use indoc::indoc;
use nixme::parsers::machine_type_for;

const FLAKE: &str = indoc! {r#"
    {
      outputs = { self, darwin, ... }:
        let
          mkHost = name: attrs: darwin.lib.darwinSystem attrs;
        in {
          # "old-mac" = { machineType = "macbook"; };
          hosts = {
            "Work-Mac" = { machineType = "macbook"; user = "me"; };
            studio = {
              user = "me";
              profile = { theme = "dark"; };
              machineType = "desktop";
            };
            tiny = "no-block";
          };
        };
    }
"#};

#[test]
fn test_quoted_and_bare_hosts() {
    assert_eq!(machine_type_for(FLAKE, "work-mac", "machineType").as_deref(), Some("macbook"));
    assert_eq!(machine_type_for(FLAKE, "studio", "machineType").as_deref(), Some("desktop"));
}

#[test]
fn test_commented_host_ignored() {
    assert_eq!(machine_type_for(FLAKE, "old-mac", "machineType"), None);
}

#[test]
fn test_binding_without_block() {
    assert_eq!(machine_type_for(FLAKE, "tiny", "machineType"), None);
}

#[test]
fn test_unknown_host_or_field() {
    assert_eq!(machine_type_for(FLAKE, "laptop", "machineType"), None);
    assert_eq!(machine_type_for(FLAKE, "studio", "role"), None);
    assert_eq!(machine_type_for(FLAKE, "", "machineType"), None);
}
