//! nixme - a dependency inspector for Nix configuration repositories
//!
//! This library pulls import declarations out of configuration files,
//! resolves them into per-host import trees, indexes the whole repository
//! and collects the packages it declares.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

use std::path::Path;

// Re-export commonly used types
pub use crate::core::{detect_hostname, Inspector};
pub use error::{handle_error, try_with_recovery, ErrorSeverity, InspectError, Result, ResultExt};
pub use models::{
    analysis::{InspectionReport, InspectionSummary},
    config::Settings,
    import_tree::{DependencyIndexEntry, ImportTreeNode},
    layout::ProjectLayout,
    package::{PackageKind, PackageSet},
};
pub use parsers::{extract_imports, sanitize};
pub use utils::resolve_import;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Flat dependency index of every configuration file below `project_root`
pub fn build_flat_index(project_root: &Path) -> Vec<DependencyIndexEntry> {
    let layout = ProjectLayout::default();
    match core::RepositoryScanner::new(project_root, &layout, &[]) {
        Ok(scanner) => scanner.build_index(),
        Err(_) => Vec::new(),
    }
}

/// Host root files for `hostname`, relative to `project_root`, base first
pub fn resolve_module_order(project_root: &Path, hostname: &str) -> Vec<String> {
    let layout = ProjectLayout::default();
    let project_root = utils::normalize_path(project_root);
    core::ModuleOrderResolver::new(&project_root, &layout).resolve_relative(hostname)
}

/// Composite import tree of every root file applying to `hostname`
pub fn build_composite_import_tree(project_root: &Path, hostname: &str) -> Option<ImportTreeNode> {
    let layout = ProjectLayout::default();
    let project_root = utils::normalize_path(project_root);
    let roots = core::ModuleOrderResolver::new(&project_root, &layout).resolve(hostname);
    let builder = core::ImportTreeBuilder::new(&project_root, &layout);
    core::build_composite_tree(&builder, &roots)
}

/// Packages declared in raw configuration source
pub fn extract_packages(content: &str) -> PackageSet {
    parsers::PackagePatternTable::builtin().extract(&sanitize(content))
}
