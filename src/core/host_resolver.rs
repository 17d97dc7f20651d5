//! Host module-order resolution
//!
//! Works out which host root files apply to a machine, base first, and
//! stitches their import trees into one composite tree.

use super::import_tree::ImportTreeBuilder;
use crate::models::import_tree::ImportTreeNode;
use crate::models::layout::{relative_display, ProjectLayout};
use crate::parsers::machine_type_for;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves the ordered root files for a host
pub struct ModuleOrderResolver<'a> {
    project_root: &'a Path,
    layout: &'a ProjectLayout,
}

impl<'a> ModuleOrderResolver<'a> {
    pub fn new(project_root: &'a Path, layout: &'a ProjectLayout) -> Self {
        Self {
            project_root,
            layout,
        }
    }

    /// Absolute root files for `hostname`, in load order.
    ///
    /// 1. the shared host, when present;
    /// 2. the host's machine type as declared in the manifest;
    /// 3. a host directory named after the host itself;
    /// 4. when neither 2 nor 3 matched, the first host directory by name
    ///    that is neither reserved nor the shared host.
    pub fn resolve(&self, hostname: &str) -> Vec<PathBuf> {
        let mut roots = Vec::new();

        let shared = self.layout.host_root_file(self.project_root, &self.layout.shared_host);
        if shared.is_file() {
            roots.push(shared);
        }
        let base_count = roots.len();

        if let Some(machine_type) = self.machine_type(hostname) {
            self.push_host(&mut roots, &machine_type);
        }

        if is_plain_name(hostname) {
            self.push_host(&mut roots, hostname);
        }

        if roots.len() == base_count {
            if let Some(fallback) = self.fallback_host() {
                debug!("no host directory for {}, falling back to {}", hostname, fallback);
                self.push_host(&mut roots, &fallback);
            }
        }

        roots
    }

    /// Root files for `hostname`, relative to the project root
    pub fn resolve_relative(&self, hostname: &str) -> Vec<String> {
        self.resolve(hostname)
            .iter()
            .map(|path| relative_display(self.project_root, path))
            .collect()
    }

    fn machine_type(&self, hostname: &str) -> Option<String> {
        let manifest = fs::read_to_string(self.layout.manifest_path(self.project_root)).ok()?;
        let machine_type = machine_type_for(&manifest, hostname, &self.layout.machine_type_field)?;
        is_plain_name(&machine_type).then_some(machine_type)
    }

    fn push_host(&self, roots: &mut Vec<PathBuf>, name: &str) {
        let root = self.layout.host_root_file(self.project_root, name);
        if root.is_file() && !roots.contains(&root) {
            roots.push(root);
        }
    }

    /// First usable host directory in name order
    fn fallback_host(&self) -> Option<String> {
        let entries = fs::read_dir(self.layout.hosts_path(self.project_root)).ok()?;
        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .filter(|name| !name.starts_with('.'))
            .filter(|name| *name != self.layout.shared_host && !self.layout.is_reserved_host(name))
            .collect();
        names.sort();

        names
            .into_iter()
            .find(|name| self.layout.host_root_file(self.project_root, name).is_file())
    }
}

/// A single path segment that cannot climb out of the hosts directory
pub fn is_plain_name(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}

/// Combine the trees of several roots into one.
///
/// The first root that exists is expanded fully. Every later root gets
/// its own expansion, with a fresh cycle guard and depths starting at 1,
/// appended as an extra child of the first root's node.
pub fn build_composite_tree(builder: &ImportTreeBuilder, roots: &[PathBuf]) -> Option<ImportTreeNode> {
    let mut remaining = roots.iter();
    let mut tree = remaining.by_ref().find_map(|root| builder.build(root))?;

    for root in remaining {
        if let Some(subtree) = builder.build_at(root, 1) {
            tree.children.push(subtree);
        }
    }

    Some(tree)
}
