//! Core analysis: import trees, host module order and repository scans

pub mod dependency_index;
pub mod file_tree;
pub mod host_resolver;
pub mod import_tree;
pub mod inspector;

pub use dependency_index::{index_files, summarize_packages, RepositoryScanner};
pub use file_tree::FileBrowser;
pub use host_resolver::{build_composite_tree, ModuleOrderResolver};
pub use import_tree::ImportTreeBuilder;
pub use inspector::{detect_hostname, Inspector, UNKNOWN_HOST};
