//! Lexical masking of comments and string literals
//!
//! Import and package discovery is regex-based, so anything that merely
//! looks like configuration inside prose, comments or embedded scripts has
//! to be removed first. Line structure is preserved: every construct that
//! spans several lines leaves the same number of newlines behind.

use regex::Regex;
use std::sync::OnceLock;

fn heredoc_start() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?:^|[^"\w])<<-?\s*['"]?([A-Za-z_][A-Za-z0-9_]*)['"]?"#)
            .expect("heredoc pattern is valid")
    })
}

/// Remove comments and prose strings from configuration source.
///
/// In order: shell heredoc blocks become blank lines; `''…''` strings
/// become `""`; block comments, full-line `#` comments and trailing `#`
/// comments disappear; double-quoted strings containing whitespace become
/// `""`. Quoted strings without whitespace (package names, paths, flake
/// references) are kept verbatim. Unterminated constructs run to the end
/// of the input.
///
/// Best-effort only: it is a lexer approximation, not a parser.
pub fn sanitize(source: &str) -> String {
    let without_heredocs = blank_heredocs(source);
    let masked = mask_literals(&without_heredocs);

    masked
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace every heredoc, marker line through terminator line, with blank lines
fn blank_heredocs(source: &str) -> String {
    let mut lines = Vec::new();
    let mut terminator: Option<String> = None;

    for line in source.split('\n') {
        match terminator.as_deref() {
            Some(marker) => {
                if line.trim() == marker {
                    terminator = None;
                }
                lines.push("");
            }
            None => match heredoc_start().captures(&heredoc_scan_text(line)) {
                Some(caps) => {
                    terminator = Some(caps[1].to_string());
                    lines.push("");
                }
                None => lines.push(line),
            },
        }
    }

    lines.join("\n")
}

/// The part of `line` where a heredoc marker counts.
///
/// Text after a `#` comment marker is dropped and double-quoted string
/// bodies are blanked, so a `<<WORD` in prose never opens a heredoc. A
/// quoted marker such as `<<"EOF"` is kept.
fn heredoc_scan_text(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut in_string = false;
    let mut blank = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_string => {
                in_string = false;
                out.push(c);
            }
            '"' => {
                let before = out.trim_end();
                blank = !(before.ends_with("<<") || before.ends_with("<<-"));
                in_string = true;
                out.push(c);
            }
            '\\' if in_string && blank => {
                chars.next();
                out.push_str("  ");
            }
            '#' if !in_string => break,
            _ if in_string && blank => out.push(' '),
            _ => out.push(c),
        }
    }

    out
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '_' | '\'' | '-')
}

/// Single pass over the text masking strings and comments
fn mask_literals(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next = chars.get(i + 1).copied();

        match c {
            '#' => {
                // Line comment, full-line or trailing
                while i < chars.len() && chars[i] != '\n' {
                    i += 1;
                }
                prev = None;
            }
            '/' if next == Some('*') => {
                i += 2;
                while i < chars.len() && !(chars[i] == '*' && chars.get(i + 1) == Some(&'/')) {
                    if chars[i] == '\n' {
                        out.push('\n');
                    }
                    i += 1;
                }
                i = (i + 2).min(chars.len());
                out.push(' ');
                prev = Some(' ');
            }
            '\'' if next == Some('\'') && !prev.is_some_and(is_identifier_char) => {
                i += 2;
                let mut newlines = 0;
                while i < chars.len() {
                    if chars[i] == '\'' && chars.get(i + 1) == Some(&'\'') {
                        match chars.get(i + 2) {
                            // ''' ''$ ''\ are escapes inside the string
                            Some('\'') | Some('$') | Some('\\') => {
                                i += 3;
                                continue;
                            }
                            _ => {
                                i += 2;
                                break;
                            }
                        }
                    }
                    if chars[i] == '\n' {
                        newlines += 1;
                    }
                    i += 1;
                }
                out.push_str("\"\"");
                out.push_str(&"\n".repeat(newlines));
                prev = Some('"');
            }
            '"' => {
                let start = i;
                i += 1;
                let mut body = String::new();
                while i < chars.len() && chars[i] != '"' {
                    if chars[i] == '\\' && i + 1 < chars.len() {
                        body.push(chars[i]);
                        i += 1;
                    }
                    body.push(chars[i]);
                    i += 1;
                }
                i = (i + 1).min(chars.len());

                if body.chars().any(char::is_whitespace) {
                    out.push_str("\"\"");
                    out.push_str(&"\n".repeat(body.matches('\n').count()));
                } else {
                    out.extend(&chars[start..i]);
                }
                prev = Some('"');
            }
            _ => {
                out.push(c);
                prev = Some(c);
                i += 1;
            }
        }
    }

    out
}
