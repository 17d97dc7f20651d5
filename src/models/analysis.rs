//! Inspection result structures

use super::file_tree::FileTreeNode;
use super::import_tree::{DependencyIndexEntry, ImportTreeNode};
use super::package::PackageSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Everything one inspection pass produced.
///
/// Built in full before it is handed out and never updated afterwards;
/// a refresh produces a new report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionReport {
    /// Discovered project root
    pub project_root: PathBuf,

    /// Host the module order was resolved for
    pub hostname: String,

    /// Root files in load order, base first
    pub module_order: Vec<String>,

    /// Composite import tree, absent when no root file exists
    pub import_tree: Option<ImportTreeNode>,

    /// Whole-repository import index, most imports first
    pub dependencies: Vec<DependencyIndexEntry>,

    /// Configuration file browser
    pub file_tree: FileTreeNode,

    /// Every declared package in the repository, sorted per kind
    pub packages: PackageSet,

    /// Headline numbers
    pub summary: InspectionSummary,

    /// When the pass finished
    pub generated_at: chrono::DateTime<chrono::Utc>,
}

/// Headline numbers of an inspection report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InspectionSummary {
    /// Configuration files found in the repository
    pub config_files: usize,
    /// Total import declarations across the repository
    pub total_imports: usize,
    /// Nodes in the composite import tree
    pub tree_nodes: usize,
    /// Deepest level of the composite import tree
    pub tree_depth: usize,
    /// File with the most imports, if any file imports anything
    pub most_imports_file: Option<String>,
    pub most_imports_count: usize,
    /// Time the pass took
    #[serde(with = "duration_millis")]
    pub scan_duration: Duration,
}

impl InspectionSummary {
    /// Compute the summary for the parts of a report
    pub fn from_parts(
        dependencies: &[DependencyIndexEntry],
        import_tree: Option<&ImportTreeNode>,
        scan_duration: Duration,
    ) -> Self {
        let most = dependencies
            .first()
            .filter(|entry| !entry.imports.is_empty());

        Self {
            config_files: dependencies.len(),
            total_imports: dependencies.iter().map(DependencyIndexEntry::import_count).sum(),
            tree_nodes: import_tree.map(ImportTreeNode::node_count).unwrap_or(0),
            tree_depth: import_tree.map(ImportTreeNode::max_depth).unwrap_or(0),
            most_imports_file: most.map(|entry| entry.file.clone()),
            most_imports_count: most.map(DependencyIndexEntry::import_count).unwrap_or(0),
            scan_duration,
        }
    }

    /// Format the scan duration in a human-readable way
    pub fn format_duration(&self) -> String {
        let millis = self.scan_duration.as_millis();
        if millis < 1000 {
            format!("{}ms", millis)
        } else {
            format!("{:.2}s", self.scan_duration.as_secs_f64())
        }
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
