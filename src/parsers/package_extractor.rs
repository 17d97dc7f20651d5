//! Table-driven discovery of declared packages

use crate::error::{InspectError, Result};
use crate::models::package::{ItemShape, PackageKind, PackagePatternConfig, PackageSet};
use regex::Regex;
use std::sync::OnceLock;

const RESERVED_IDENTIFIERS: [&str; 2] = ["with", "pkgs"];

fn quoted_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#""([^"]*)""#).expect("quoted item pattern is valid"))
}

fn identifier_item() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[A-Za-z_][\w'-]*(?:\.[A-Za-z_][\w'-]*)*").expect("identifier pattern is valid")
    })
}

/// One row of the package table
#[derive(Debug, Clone)]
pub struct PackagePattern {
    pub kind: PackageKind,
    pub regex: Regex,
    pub items: ItemShape,
}

impl PackagePattern {
    /// Compile a row; the pattern must capture the list body in group 1
    pub fn new(kind: PackageKind, pattern: &str, items: ItemShape) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| InspectError::PackagePattern {
            pattern: pattern.to_string(),
            source,
        })?;

        if regex.captures_len() < 2 {
            return Err(InspectError::config_error(format!(
                "package pattern '{}' needs a capture group for the list body",
                pattern
            )));
        }

        Ok(Self { kind, regex, items })
    }

    /// Names this row finds in sanitized text, in order of appearance
    fn names<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut names = Vec::new();
        for caps in self.regex.captures_iter(text) {
            let Some(body) = caps.get(1) else { continue };
            match self.items {
                ItemShape::Quoted => {
                    // Quotes pair up from the left; blanked prose strings leave `""`
                    names.extend(
                        quoted_item()
                            .captures_iter(body.as_str())
                            .filter_map(|c| c.get(1).map(|m| m.as_str()))
                            .filter(|name| !name.trim().is_empty()),
                    );
                }
                ItemShape::Identifier => {
                    names.extend(
                        identifier_item()
                            .find_iter(body.as_str())
                            .map(|m| m.as_str())
                            .filter(|name| !RESERVED_IDENTIFIERS.contains(name)),
                    );
                }
            }
        }
        names
    }
}

/// The ordered set of package declaration shapes
#[derive(Debug, Clone)]
pub struct PackagePatternTable {
    patterns: Vec<PackagePattern>,
}

impl PackagePatternTable {
    /// The built-in rows: Homebrew formulas and casks, Nix system packages
    pub fn builtin() -> &'static PackagePatternTable {
        static TABLE: OnceLock<PackagePatternTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            let rows = [
                (
                    PackageKind::Formula,
                    r"(?s)\b(?:brews|formulas)\s*=\s*\[(.*?)\]\s*;",
                    ItemShape::Quoted,
                ),
                (PackageKind::Cask, r"(?s)\bcasks\s*=\s*\[(.*?)\]\s*;", ItemShape::Quoted),
                (
                    PackageKind::SystemPackage,
                    r"(?s)\b(?:environment\.)?systemPackages\s*=\s*with\s+pkgs\s*;\s*\[(.*?)\]\s*;",
                    ItemShape::Identifier,
                ),
            ];

            let patterns = rows
                .into_iter()
                .filter_map(|(kind, pattern, items)| PackagePattern::new(kind, pattern, items).ok())
                .collect();
            PackagePatternTable { patterns }
        })
    }

    /// Built-in rows followed by rows supplied through configuration
    pub fn with_extra(extra: &[PackagePatternConfig]) -> Result<Self> {
        let mut patterns = Self::builtin().patterns.clone();
        for row in extra {
            patterns.push(PackagePattern::new(row.kind, &row.pattern, row.items)?);
        }
        Ok(Self { patterns })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Packages declared in sanitized text.
    ///
    /// A row that matches nothing contributes nothing; each kind keeps its
    /// first-seen order without duplicates.
    pub fn extract(&self, sanitized: &str) -> PackageSet {
        let mut set = PackageSet::new();
        for pattern in &self.patterns {
            for name in pattern.names(sanitized) {
                set.insert(pattern.kind, name);
            }
        }
        set
    }
}
