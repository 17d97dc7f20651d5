//! A configuration file read for analysis

use super::layout::relative_display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Leaf unit of analysis: one file, read once per inspection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Absolute path of the file
    pub absolute_path: PathBuf,
    /// Path relative to the project root
    pub relative_path: String,
    /// Raw text content
    pub content: String,
}

impl ConfigFile {
    /// Read `path`, treating an unreadable file as empty.
    ///
    /// Read failures are expected (permissions, invalid UTF-8) and never
    /// abort a traversal, so they are only logged.
    pub fn read(root: &Path, path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                debug!("treating {} as empty: {}", path.display(), err);
                String::new()
            }
        };

        Self {
            absolute_path: path.to_path_buf(),
            relative_path: relative_display(root, path),
            content,
        }
    }

    /// Size of the content in bytes
    pub fn size(&self) -> u64 {
        self.content.len() as u64
    }
}
