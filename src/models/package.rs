//! Declared software packages

use serde::{Deserialize, Serialize};

/// Which list a declared package belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageKind {
    /// Homebrew formulas (CLI tools)
    Formula,
    /// Homebrew casks (GUI apps)
    Cask,
    /// Nix system packages
    SystemPackage,
}

impl std::fmt::Display for PackageKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageKind::Formula => write!(f, "formula"),
            PackageKind::Cask => write!(f, "cask"),
            PackageKind::SystemPackage => write!(f, "system_package"),
        }
    }
}

/// Shape of the items inside a matched package list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemShape {
    /// Double-quoted names: `[ "git" "curl" ]`
    Quoted,
    /// Bare identifiers: `[ git curl ]`
    Identifier,
}

/// A package declaration shape supplied through configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackagePatternConfig {
    /// List the matched names are added to
    pub kind: PackageKind,
    /// Regular expression whose first capture group is the list body
    pub pattern: String,
    /// How to read names out of the list body
    #[serde(default = "default_item_shape")]
    pub items: ItemShape,
}

fn default_item_shape() -> ItemShape {
    ItemShape::Quoted
}

/// Packages declared by one file, or by a whole repository
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageSet {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub formulas: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub casks: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub system_packages: Vec<String>,
}

impl PackageSet {
    /// Create an empty package set
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether no package of any kind was found
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty() && self.casks.is_empty() && self.system_packages.is_empty()
    }

    /// Total number of names across all kinds
    pub fn len(&self) -> usize {
        self.formulas.len() + self.casks.len() + self.system_packages.len()
    }

    /// Names of one kind
    pub fn of_kind(&self, kind: PackageKind) -> &[String] {
        match kind {
            PackageKind::Formula => &self.formulas,
            PackageKind::Cask => &self.casks,
            PackageKind::SystemPackage => &self.system_packages,
        }
    }

    /// Add a name unless it is already listed for that kind
    pub fn insert(&mut self, kind: PackageKind, name: impl Into<String>) {
        let name = name.into();
        if name.is_empty() {
            return;
        }
        let list = match kind {
            PackageKind::Formula => &mut self.formulas,
            PackageKind::Cask => &mut self.casks,
            PackageKind::SystemPackage => &mut self.system_packages,
        };
        if !list.contains(&name) {
            list.push(name);
        }
    }

    /// Append every name of `other`, keeping first-seen order
    pub fn merge(&mut self, other: &PackageSet) {
        for kind in [PackageKind::Formula, PackageKind::Cask, PackageKind::SystemPackage] {
            for name in other.of_kind(kind) {
                self.insert(kind, name.clone());
            }
        }
    }

    /// Sort every list alphabetically
    pub fn sorted(mut self) -> Self {
        self.formulas.sort();
        self.casks.sort();
        self.system_packages.sort();
        self
    }
}
