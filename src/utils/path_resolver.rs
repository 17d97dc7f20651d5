//! Import path resolution utilities

use crate::models::layout::ProjectLayout;
use std::path::{Component, Path, PathBuf};

/// Resolves relative import strings against the file declaring them
#[derive(Debug, Clone)]
pub struct PathResolver {
    entry_file: String,
}

impl PathResolver {
    /// Create a resolver loading `entry_file` for directory imports
    pub fn new(entry_file: impl Into<String>) -> Self {
        Self {
            entry_file: entry_file.into(),
        }
    }

    /// Create a resolver for a repository layout
    pub fn for_layout(layout: &ProjectLayout) -> Self {
        Self::new(layout.entry_file.clone())
    }

    /// Resolve `specifier` as written in `from`.
    ///
    /// The specifier is joined onto the directory of `from` and normalized
    /// lexically. An existing directory resolves to its entry file; any
    /// other candidate is returned whether or not it exists.
    pub fn resolve(&self, specifier: &str, from: &Path) -> PathBuf {
        let base = from.parent().unwrap_or(from);
        let candidate = normalize_path(&base.join(specifier));

        if candidate.is_dir() {
            candidate.join(&self.entry_file)
        } else {
            candidate
        }
    }
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::for_layout(&ProjectLayout::default())
    }
}

/// Resolve an import with the default layout's entry file
pub fn resolve_import(importing_file: &Path, raw: &str) -> PathBuf {
    PathResolver::default().resolve(raw, importing_file)
}

/// Collapse `.` and `..` components without touching the filesystem.
///
/// Symlinks are not followed, so `a/link/..` becomes `a`. A `..` that would
/// climb above the root or the start of a relative path is kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }

    normalized
}
