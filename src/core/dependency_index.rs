//! Whole-repository scan and flat dependency index

use crate::error::Result;
use crate::models::config_file::ConfigFile;
use crate::models::import_tree::DependencyIndexEntry;
use crate::models::layout::{relative_display, ProjectLayout};
use crate::models::package::PackageSet;
use crate::parsers::{extract_imports, sanitize, PackagePatternTable};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

/// Finds and reads every configuration file below a project root
pub struct RepositoryScanner {
    project_root: PathBuf,
    layout: ProjectLayout,
    exclude_patterns: Vec<Pattern>,
}

impl RepositoryScanner {
    /// Create a scanner; exclusion globs are matched against root-relative paths
    pub fn new(project_root: &Path, layout: &ProjectLayout, exclude_patterns: &[String]) -> Result<Self> {
        let exclude_patterns = exclude_patterns
            .iter()
            .map(|pattern| Pattern::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            project_root: project_root.to_path_buf(),
            layout: layout.clone(),
            exclude_patterns,
        })
    }

    /// Every configuration file, in walk order (sorted by name per directory).
    ///
    /// Hidden entries, skipped directory names and excluded paths are not
    /// visited. Symlinks are not followed; entries that cannot be read are
    /// logged and skipped.
    pub fn scan(&self) -> Vec<ConfigFile> {
        WalkDir::new(&self.project_root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_skipped(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(err) => {
                    debug!("skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && self.layout.is_config_file(entry.path()))
            .map(|entry| ConfigFile::read(&self.project_root, entry.path()))
            .collect()
    }

    /// Flat dependency index of the whole repository
    pub fn build_index(&self) -> Vec<DependencyIndexEntry> {
        index_files(&self.scan())
    }

    /// Check if a path matches any exclude pattern
    pub fn is_excluded(&self, path: &Path) -> bool {
        let relative = relative_display(&self.project_root, path);
        self.exclude_patterns.iter().any(|pattern| pattern.matches(&relative))
    }

    fn is_skipped(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        if name.starts_with('.') {
            return true;
        }
        if entry.file_type().is_dir() && self.layout.is_skipped_dir(&name) {
            return true;
        }
        self.is_excluded(entry.path())
    }
}

/// One entry per file, most imports first.
///
/// Files without imports are kept; the sort is stable, so files with equal
/// counts stay in walk order.
pub fn index_files(files: &[ConfigFile]) -> Vec<DependencyIndexEntry> {
    let mut entries: Vec<DependencyIndexEntry> = files
        .iter()
        .map(|file| DependencyIndexEntry {
            file: file.relative_path.clone(),
            imports: extract_imports(&sanitize(&file.content)),
        })
        .collect();

    entries.sort_by(|a, b| b.import_count().cmp(&a.import_count()));
    entries
}

/// Union of the packages declared across `files`, each kind sorted
pub fn summarize_packages(files: &[ConfigFile], table: &PackagePatternTable) -> PackageSet {
    let mut all = PackageSet::new();
    for file in files {
        all.merge(&table.extract(&sanitize(&file.content)));
    }
    all.sorted()
}
