//! Data models and structures for nixme

pub mod analysis;
pub mod config;
pub mod config_file;
pub mod file_tree;
pub mod import_tree;
pub mod layout;
pub mod package;

pub use analysis::{InspectionReport, InspectionSummary};
pub use config::{OutputFormat, ReportView, Settings};
pub use config_file::ConfigFile;
pub use file_tree::{FileKind, FileTreeNode};
pub use import_tree::{DependencyIndexEntry, ImportTreeNode};
pub use layout::ProjectLayout;
pub use package::{ItemShape, PackageKind, PackagePatternConfig, PackageSet};
