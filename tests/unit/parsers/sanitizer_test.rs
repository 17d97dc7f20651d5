use indoc::indoc;
use nixme::{extract_imports, sanitize};
use pretty_assertions::assert_eq;

const DARWIN_MODULE: &str = indoc! {r#"
    { config, pkgs, lib, ... }:
    let
      # helper = import ./helpers.nix;
      greeting = "run import ./greeting.nix on login";
    in
    {
      imports = [
        ./fonts.nix /* ./legacy.nix */
        ../shared
      ];

      system.activationScripts.postActivation.text = ''
        cat > /tmp/setup.sh <<'SCRIPT'
        imports = [ ./from-script.nix ];
        SCRIPT
        echo "imports = [ ./echoed.nix ];"
      '';

      homebrew.brews = [ "git" ]; # "disabled"
    }
"#};

#[test]
fn test_only_real_imports_survive() {
    let clean = sanitize(DARWIN_MODULE);
    assert_eq!(extract_imports(&clean), vec!["./fonts.nix", "../shared"]);
}

#[test]
fn test_line_structure_preserved() {
    let clean = sanitize(DARWIN_MODULE);
    assert_eq!(clean.split('\n').count(), DARWIN_MODULE.split('\n').count());
    let imports_line = DARWIN_MODULE.lines().position(|l| l.contains("imports = [")).unwrap();
    assert!(clean.lines().nth(imports_line).unwrap().contains("imports = ["));
}

#[test]
fn test_sanitize_is_idempotent() {
    let once = sanitize(DARWIN_MODULE);
    assert_eq!(sanitize(&once), once);
}

#[test]
fn test_package_names_kept() {
    let clean = sanitize(DARWIN_MODULE);
    assert!(clean.contains(r#"homebrew.brews = [ "git" ];"#));
    assert!(!clean.contains("disabled"));
    assert!(!clean.contains("greeting.nix"));
}

#[test]
fn test_empty_and_plain_input() {
    assert_eq!(sanitize(""), "");
    assert_eq!(sanitize("{ }"), "{ }");
}

#[test]
fn test_heredoc_marker_in_comment_keeps_rest_of_file() {
    let source = "{\n  # tip: write files with cat <<EOF in scripts\n  imports = [ ./a.nix ];\n}\n";
    assert_eq!(extract_imports(&sanitize(source)), vec!["./a.nix"]);
}
