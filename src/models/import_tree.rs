//! Import tree and dependency index data structures

use super::package::PackageSet;
use serde::{Deserialize, Serialize};

/// One file's position within a root-to-leaf expansion path.
///
/// The same file may show up several times in a tree when it is reached
/// through unrelated branches; it never shows up below itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTreeNode {
    /// Path relative to the project root
    pub file: String,

    /// Distance from the expansion root (root = 0)
    pub depth: usize,

    /// Resolved, non-cyclic imports in declaration order
    pub children: Vec<ImportTreeNode>,

    /// Packages declared in this file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub packages: Option<PackageSet>,

    /// Imports dropped by the cycle guard (only recorded on request)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pruned_cycles: Vec<String>,
}

impl ImportTreeNode {
    /// Create a leaf node
    pub fn new(file: impl Into<String>, depth: usize) -> Self {
        Self {
            file: file.into(),
            depth,
            children: Vec::new(),
            packages: None,
            pruned_cycles: Vec::new(),
        }
    }

    /// Attach packages, dropping an empty set
    pub fn with_packages(mut self, packages: PackageSet) -> Self {
        self.packages = if packages.is_empty() { None } else { Some(packages) };
        self
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(ImportTreeNode::node_count).sum::<usize>()
    }

    /// Deepest depth value found in this subtree
    pub fn max_depth(&self) -> usize {
        self.children
            .iter()
            .map(ImportTreeNode::max_depth)
            .max()
            .unwrap_or(self.depth)
    }

    /// Number of times `file` appears in this subtree
    pub fn occurrences(&self, file: &str) -> usize {
        let own = usize::from(self.file == file);
        own + self.children.iter().map(|c| c.occurrences(file)).sum::<usize>()
    }

    /// First node for `file` in depth-first order
    pub fn find(&self, file: &str) -> Option<&ImportTreeNode> {
        if self.file == file {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(file))
    }

    /// Nodes in depth-first pre-order
    pub fn iter(&self) -> Vec<&ImportTreeNode> {
        let mut nodes = vec![self];
        for child in &self.children {
            nodes.extend(child.iter());
        }
        nodes
    }

    /// Union of the packages of every node in this subtree
    pub fn all_packages(&self) -> PackageSet {
        let mut all = PackageSet::new();
        for node in self.iter() {
            if let Some(packages) = &node.packages {
                all.merge(packages);
            }
        }
        all
    }
}

/// Raw imports declared by one configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyIndexEntry {
    /// Path relative to the project root
    pub file: String,

    /// Import strings as written, in declaration order
    pub imports: Vec<String>,
}

impl DependencyIndexEntry {
    /// Number of declared imports
    pub fn import_count(&self) -> usize {
        self.imports.len()
    }
}
