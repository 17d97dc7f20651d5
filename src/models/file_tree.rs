//! Configuration file browser structures

use serde::{Deserialize, Serialize};

/// Kind of entry in the file browser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    File,
    Directory,
}

/// A file or directory of the configuration repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTreeNode {
    /// Entry name
    pub name: String,
    /// Path relative to the project root
    pub path: String,
    pub kind: FileKind,
    /// Number of imports declared by a configuration file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_count: Option<usize>,
    /// Size in bytes of a configuration file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<FileTreeNode>,
}

impl FileTreeNode {
    /// Create an empty directory node
    pub fn directory(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: FileKind::Directory,
            import_count: None,
            size: None,
            children: Vec::new(),
        }
    }

    /// Create a configuration file node
    pub fn file(name: impl Into<String>, path: impl Into<String>, import_count: usize, size: u64) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: FileKind::File,
            import_count: Some(import_count),
            size: Some(size),
            children: Vec::new(),
        }
    }

    /// Number of configuration files below this node
    pub fn file_count(&self) -> usize {
        match self.kind {
            FileKind::File => 1,
            FileKind::Directory => self.children.iter().map(FileTreeNode::file_count).sum(),
        }
    }
}
