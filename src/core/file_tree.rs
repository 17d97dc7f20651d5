//! Configuration file browser

use crate::models::config_file::ConfigFile;
use crate::models::file_tree::FileTreeNode;
use crate::models::layout::{relative_display, ProjectLayout};
use crate::parsers::{extract_imports, sanitize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Builds the browsable tree of the repository's main configuration areas
pub struct FileBrowser<'a> {
    project_root: &'a Path,
    layout: &'a ProjectLayout,
}

impl<'a> FileBrowser<'a> {
    pub fn new(project_root: &'a Path, layout: &'a ProjectLayout) -> Self {
        Self {
            project_root,
            layout,
        }
    }

    /// Root node named after the project directory: the manifest first,
    /// then each of the hosts, modules and home-configuration directories
    /// that exist.
    pub fn build(&self) -> FileTreeNode {
        let name = self
            .project_root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| ".".to_string());
        let mut root = FileTreeNode::directory(name, "");

        let manifest = self.layout.manifest_path(self.project_root);
        if manifest.is_file() {
            root.children.push(self.file_node(&manifest));
        }

        for dir in self.layout.browse_dirs() {
            let path = self.project_root.join(dir);
            if path.is_dir() {
                root.children.push(self.dir_node(&path));
            }
        }

        root
    }

    fn file_node(&self, path: &Path) -> FileTreeNode {
        let file = ConfigFile::read(self.project_root, path);
        let imports = extract_imports(&sanitize(&file.content));
        let size = fs::metadata(path).map(|m| m.len()).unwrap_or_else(|_| file.size());
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        FileTreeNode::file(name, file.relative_path, imports.len(), size)
    }

    /// Directory listing sorted by name; hidden entries and non-configuration
    /// files are left out
    fn dir_node(&self, dir: &Path) -> FileTreeNode {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut node = FileTreeNode::directory(name, relative_display(self.project_root, dir));

        let mut entries: Vec<_> = match fs::read_dir(dir) {
            Ok(entries) => entries.filter_map(|entry| entry.ok()).collect(),
            Err(err) => {
                debug!("cannot list {}: {}", dir.display(), err);
                return node;
            }
        };
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            if entry.file_name().to_string_lossy().starts_with('.') {
                continue;
            }
            let path = entry.path();
            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                node.children.push(self.dir_node(&path));
            } else if file_type.is_file() && self.layout.is_config_file(&path) {
                node.children.push(self.file_node(&path));
            }
        }

        node
    }
}
