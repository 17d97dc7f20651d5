//! Recursive import tree construction
//!
//! Expansion is depth-first and synchronous. Cycles are cut with a guard
//! holding the files on the current root-to-node path only, so a file
//! imported from two unrelated places is expanded under both.

use crate::models::config_file::ConfigFile;
use crate::models::import_tree::ImportTreeNode;
use crate::models::layout::{relative_display, ProjectLayout};
use crate::parsers::{extract_imports, sanitize, PackagePatternTable};
use crate::utils::path_resolver::{normalize_path, PathResolver};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Builds import trees for files of one project
#[derive(Debug, Clone)]
pub struct ImportTreeBuilder {
    project_root: PathBuf,
    resolver: PathResolver,
    packages: PackagePatternTable,
    max_depth: Option<usize>,
    mark_cycles: bool,
}

impl ImportTreeBuilder {
    /// Create a builder with the built-in package table and no depth cap.
    ///
    /// `project_root` is normalized the same way as every visited file, so
    /// node paths come out relative even for roots like `./repo`.
    pub fn new(project_root: &Path, layout: &ProjectLayout) -> Self {
        Self {
            project_root: normalize_path(project_root),
            resolver: PathResolver::for_layout(layout),
            packages: PackagePatternTable::builtin().clone(),
            max_depth: None,
            mark_cycles: false,
        }
    }

    /// Use a different package table
    pub fn with_package_table(mut self, packages: PackagePatternTable) -> Self {
        self.packages = packages;
        self
    }

    /// Stop expanding below `max_depth`
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Record imports dropped by the cycle guard on their importing node
    pub fn with_cycle_marks(mut self, mark_cycles: bool) -> Self {
        self.mark_cycles = mark_cycles;
        self
    }

    /// Expand `root` with an empty cycle guard
    pub fn build(&self, root: &Path) -> Option<ImportTreeNode> {
        self.build_at(root, 0)
    }

    /// Expand `root` with an empty cycle guard, numbering depths from `depth`
    pub fn build_at(&self, root: &Path, depth: usize) -> Option<ImportTreeNode> {
        self.build_node(&normalize_path(root), depth, &HashSet::new())
    }

    /// Node for `path`, or `None` when it is on the current path or not a file.
    ///
    /// `ancestors` holds the files between the expansion root and `path`.
    /// A file that exists but cannot be read becomes a leaf.
    pub fn build_node(
        &self,
        path: &Path,
        depth: usize,
        ancestors: &HashSet<PathBuf>,
    ) -> Option<ImportTreeNode> {
        if ancestors.contains(path) || !path.is_file() {
            return None;
        }

        let file = ConfigFile::read(&self.project_root, path);
        let sanitized = sanitize(&file.content);
        let mut node = ImportTreeNode::new(file.relative_path, depth)
            .with_packages(self.packages.extract(&sanitized));

        if self.max_depth.is_some_and(|max| depth >= max) {
            return Some(node);
        }

        let mut branch = ancestors.clone();
        branch.insert(path.to_path_buf());

        for raw in extract_imports(&sanitized) {
            let target = self.resolver.resolve(&raw, path);

            if branch.contains(&target) {
                let pruned = relative_display(&self.project_root, &target);
                debug!("pruned import cycle {} -> {}", node.file, pruned);
                if self.mark_cycles {
                    node.pruned_cycles.push(pruned);
                }
                continue;
            }

            if let Some(child) = self.build_node(&target, depth + 1, &branch) {
                node.children.push(child);
            }
        }

        Some(node)
    }
}
