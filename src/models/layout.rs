//! Conventional layout of a configuration repository

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Names the analyzer relies on to find things in the repository.
///
/// Every field can be overridden from the `[layout]` table of the
/// configuration file; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectLayout {
    /// Top-level manifest, used to detect the root and map hosts to machine types
    pub manifest_file: String,
    /// Extension identifying configuration files (without the dot)
    pub extension: String,
    /// File loaded when an import points at a directory
    pub entry_file: String,
    /// Directory holding one subdirectory per host or machine type
    pub hosts_dir: String,
    /// Directory holding reusable modules
    pub modules_dir: String,
    /// Directory holding per-user configurations
    pub home_dir: String,
    /// Host directory applied to every machine
    pub shared_host: String,
    /// Host subdirectories that never act as a machine type
    pub reserved_host_dirs: Vec<String>,
    /// Directory names skipped while scanning the whole repository
    pub skip_dirs: Vec<String>,
    /// Manifest field naming a host's machine type
    pub machine_type_field: String,
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self {
            manifest_file: "flake.nix".to_string(),
            extension: "nix".to_string(),
            entry_file: "default.nix".to_string(),
            hosts_dir: "hosts".to_string(),
            modules_dir: "modules".to_string(),
            home_dir: "home-configurations".to_string(),
            shared_host: "shared".to_string(),
            reserved_host_dirs: vec!["profiles".to_string()],
            skip_dirs: vec!["node_modules".to_string()],
            machine_type_field: "machineType".to_string(),
        }
    }
}

impl ProjectLayout {
    /// Whether `path` names a configuration file
    pub fn is_config_file(&self, path: &Path) -> bool {
        path.extension()
            .map(|ext| ext.to_string_lossy() == self.extension.as_str())
            .unwrap_or(false)
    }

    /// Path of the manifest under `root`
    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest_file)
    }

    /// Directory holding the host subdirectories under `root`
    pub fn hosts_path(&self, root: &Path) -> PathBuf {
        root.join(&self.hosts_dir)
    }

    /// Entry file of host directory `name` under `root`
    pub fn host_root_file(&self, root: &Path, name: &str) -> PathBuf {
        self.hosts_path(root).join(name).join(&self.entry_file)
    }

    /// Whether a host directory name is reserved
    pub fn is_reserved_host(&self, name: &str) -> bool {
        self.reserved_host_dirs.iter().any(|reserved| reserved == name)
    }

    /// Whether a directory name is skipped during repository scans
    pub fn is_skipped_dir(&self, name: &str) -> bool {
        self.skip_dirs.iter().any(|skipped| skipped == name)
    }

    /// Top-level directories shown in the configuration file browser
    pub fn browse_dirs(&self) -> [&str; 3] {
        [&self.hosts_dir, &self.modules_dir, &self.home_dir]
    }
}

/// Walk up from `start` to the first directory holding the manifest.
///
/// Falls back to `start` itself when no ancestor has one.
pub fn find_project_root(start: &Path, layout: &ProjectLayout) -> PathBuf {
    start
        .ancestors()
        .find(|dir| layout.manifest_path(dir).is_file())
        .unwrap_or(start)
        .to_path_buf()
}

/// Path of `path` relative to `root`, with `/` separators.
///
/// Paths outside `root` are returned whole.
pub fn relative_display(root: &Path, path: &Path) -> String {
    let Ok(relative) = path.strip_prefix(root) else {
        return path.to_string_lossy().into_owned();
    };
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
