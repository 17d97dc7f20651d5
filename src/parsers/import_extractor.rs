//! Relative-path import discovery

use regex::Regex;
use std::sync::OnceLock;

fn imports_block() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)\bimports\s*=\s*\[(.*?)\]\s*;").expect("imports pattern is valid"))
}

fn path_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\.\.?/[^\s\]\)\};,]+").expect("path pattern is valid"))
}

fn direct_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"\bimport\s+["']?(\.\.?/[^\s;"')\]]+)"#).expect("import pattern is valid")
    })
}

fn angle_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<(\.\.?/[^>\s]+)>").expect("angle pattern is valid"))
}

fn clean_token(token: &str) -> &str {
    token.trim_matches(|c: char| matches!(c, '"' | '\'' | ';' | ',' | ')' | ']' | '}'))
}

/// Ordered, duplicate-free relative imports declared by sanitized text.
///
/// Recognises `imports = [ … ];` lists, `import ./path` expressions and
/// `<./path>` references. Only `./` and `../` paths are returned; channel
/// lookups such as `<nixpkgs>` and attribute imports are ignored. The input
/// is expected to have gone through [`sanitize`](super::sanitize).
pub fn extract_imports(sanitized: &str) -> Vec<String> {
    let mut imports: Vec<String> = Vec::new();
    let mut push = |raw: &str| {
        let token = clean_token(raw);
        if !token.is_empty() && !imports.iter().any(|seen| seen == token) {
            imports.push(token.to_string());
        }
    };

    for block in imports_block().captures_iter(sanitized) {
        for line in block[1].lines() {
            if line.trim_start().starts_with('#') {
                continue;
            }
            for token in path_token().find_iter(line) {
                push(token.as_str());
            }
        }
    }

    for line in sanitized.lines().filter(|l| !l.trim_start().starts_with('#')) {
        for caps in direct_import().captures_iter(line) {
            push(&caps[1]);
        }
        for caps in angle_import().captures_iter(line) {
            push(&caps[1]);
        }
    }

    imports
}
