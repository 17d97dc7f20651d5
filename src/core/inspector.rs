//! One full inspection pass over a configuration repository

use super::dependency_index::{index_files, summarize_packages, RepositoryScanner};
use super::file_tree::FileBrowser;
use super::host_resolver::{build_composite_tree, ModuleOrderResolver};
use super::import_tree::ImportTreeBuilder;
use crate::error::{InspectError, Result};
use crate::models::analysis::{InspectionReport, InspectionSummary};
use crate::models::config::Settings;
use crate::models::layout::{find_project_root, relative_display};
use crate::parsers::PackagePatternTable;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;
use tracing::{debug, info};

/// Fallback when the host name cannot be determined
pub const UNKNOWN_HOST: &str = "unknown";

/// Runs inspection passes for one repository and host.
///
/// Construction does all fallible setup (root discovery, glob and pattern
/// compilation); a pass itself never fails on repository content.
pub struct Inspector {
    settings: Settings,
    project_root: PathBuf,
    hostname: String,
    scanner: RepositoryScanner,
    tree_builder: ImportTreeBuilder,
    packages: PackagePatternTable,
}

impl Inspector {
    /// Create an inspector for the given settings
    pub fn new(settings: Settings) -> Result<Self> {
        if !settings.project_root.exists() {
            return Err(InspectError::invalid_path(&settings.project_root));
        }
        let start = settings
            .project_root
            .canonicalize()
            .map_err(|_| InspectError::invalid_path(&settings.project_root))?;
        let project_root = find_project_root(&start, &settings.layout);

        let hostname = settings
            .hostname
            .clone()
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(detect_hostname);

        let packages = PackagePatternTable::with_extra(&settings.package_patterns)?;
        let scanner = RepositoryScanner::new(&project_root, &settings.layout, &settings.exclude_patterns)?;
        let tree_builder = ImportTreeBuilder::new(&project_root, &settings.layout)
            .with_package_table(packages.clone())
            .with_max_depth(settings.max_depth)
            .with_cycle_marks(settings.mark_cycles);

        debug!("inspecting {} for host {}", project_root.display(), hostname);

        Ok(Self {
            settings,
            project_root,
            hostname,
            scanner,
            tree_builder,
            packages,
        })
    }

    /// Discovered project root
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Host the module order is resolved for
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Get the current settings
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Run a full pass
    pub fn inspect(&self) -> Result<InspectionReport> {
        self.inspect_with_progress(|_, _, _| {})
    }

    /// Run a full pass, reporting each step as `(step, total, message)`
    pub fn inspect_with_progress<F>(&self, progress_fn: F) -> Result<InspectionReport>
    where
        F: Fn(usize, usize, &str),
    {
        const STEPS: usize = 4;
        let start_time = Instant::now();
        let layout = &self.settings.layout;

        progress_fn(0, STEPS, &format!("Resolving modules for {}", self.hostname));
        let roots = ModuleOrderResolver::new(&self.project_root, layout).resolve(&self.hostname);
        let module_order: Vec<String> = roots
            .iter()
            .map(|root| relative_display(&self.project_root, root))
            .collect();

        progress_fn(1, STEPS, "Building import tree");
        let import_tree = build_composite_tree(&self.tree_builder, &roots);

        progress_fn(2, STEPS, &format!("Scanning {}", self.project_root.display()));
        let files = self.scanner.scan();
        let dependencies = index_files(&files);
        let packages = summarize_packages(&files, &self.packages);

        progress_fn(3, STEPS, "Reading configuration files");
        let file_tree = FileBrowser::new(&self.project_root, layout).build();

        let summary = InspectionSummary::from_parts(&dependencies, import_tree.as_ref(), start_time.elapsed());
        info!(
            "inspected {} files ({} imports) in {}",
            summary.config_files,
            summary.total_imports,
            summary.format_duration()
        );
        progress_fn(STEPS, STEPS, "Inspection complete");

        Ok(InspectionReport {
            project_root: self.project_root.clone(),
            hostname: self.hostname.clone(),
            module_order,
            import_tree,
            dependencies,
            file_tree,
            packages,
            summary,
            generated_at: chrono::Utc::now(),
        })
    }
}

/// Short host name of this machine, lowercased.
///
/// Asks `hostname -s`; falls back to [`UNKNOWN_HOST`] when that fails.
pub fn detect_hostname() -> String {
    let output = match Command::new("hostname").arg("-s").output() {
        Ok(output) if output.status.success() => output,
        Ok(_) | Err(_) => {
            debug!("hostname command unavailable");
            return UNKNOWN_HOST.to_string();
        }
    };

    let name = String::from_utf8_lossy(&output.stdout).trim().to_lowercase();
    if name.is_empty() {
        UNKNOWN_HOST.to_string()
    } else {
        name
    }
}
