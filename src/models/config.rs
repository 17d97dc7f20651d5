//! Configuration-related data structures

use super::layout::ProjectLayout;
use super::package::PackagePatternConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration settings for nixme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory to start project root discovery from
    pub project_root: PathBuf,

    /// Host to resolve the module order for (detected when absent)
    pub hostname: Option<String>,

    /// Conventional names of the repository layout
    pub layout: ProjectLayout,

    /// Glob patterns excluded from the flat dependency index
    pub exclude_patterns: Vec<String>,

    /// Maximum import tree depth to expand
    pub max_depth: Option<usize>,

    /// Whether to record imports pruned by the cycle guard
    pub mark_cycles: bool,

    /// Which part of the report to render
    pub view: ReportView,

    /// Output format (text, json, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Whether to suppress non-essential output
    pub quiet: bool,

    /// Whether to show detailed progress and debug information
    pub verbose: bool,

    /// Whether to use colors in text output
    pub use_colors: bool,

    /// Whether to show a spinner while inspecting
    pub show_progress: bool,

    /// Extra package declaration shapes on top of the built-in table
    pub package_patterns: Vec<PackagePatternConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            hostname: None,
            layout: ProjectLayout::default(),
            exclude_patterns: Vec::new(),
            max_depth: None,
            mark_cycles: false,
            view: ReportView::All,
            output_format: OutputFormat::Text,
            output_file: None,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
            package_patterns: Vec::new(),
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Part of an inspection report to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportView {
    /// Host module order
    Order,
    /// Composite import tree
    Tree,
    /// Flat dependency index
    Deps,
    /// Repository package summary
    Packages,
    /// Configuration file browser
    Files,
    /// Everything above
    All,
}

impl std::str::FromStr for ReportView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "order" => Ok(ReportView::Order),
            "tree" => Ok(ReportView::Tree),
            "deps" | "dependencies" => Ok(ReportView::Deps),
            "packages" => Ok(ReportView::Packages),
            "files" => Ok(ReportView::Files),
            "all" => Ok(ReportView::All),
            _ => Err(format!("Invalid view: {}", s)),
        }
    }
}

impl std::fmt::Display for ReportView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ReportView::Order => "order",
            ReportView::Tree => "tree",
            ReportView::Deps => "deps",
            ReportView::Packages => "packages",
            ReportView::Files => "files",
            ReportView::All => "all",
        };
        f.write_str(name)
    }
}

/// Partial settings for configuration merging
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PartialSettings {
    pub project_root: Option<PathBuf>,
    pub hostname: Option<String>,
    pub layout: Option<ProjectLayout>,
    pub exclude_patterns: Option<Vec<String>>,
    pub max_depth: Option<usize>,
    pub mark_cycles: Option<bool>,
    pub view: Option<ReportView>,
    pub output_format: Option<OutputFormat>,
    pub output_file: Option<PathBuf>,
    pub quiet: Option<bool>,
    pub verbose: Option<bool>,
    pub use_colors: Option<bool>,
    pub show_progress: Option<bool>,
    pub package_patterns: Option<Vec<PackagePatternConfig>>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        if other.project_root.is_some() {
            self.project_root = other.project_root;
        }
        if other.hostname.is_some() {
            self.hostname = other.hostname;
        }
        if other.layout.is_some() {
            self.layout = other.layout;
        }
        if other.exclude_patterns.is_some() {
            self.exclude_patterns = other.exclude_patterns;
        }
        if other.max_depth.is_some() {
            self.max_depth = other.max_depth;
        }
        if other.mark_cycles.is_some() {
            self.mark_cycles = other.mark_cycles;
        }
        if other.view.is_some() {
            self.view = other.view;
        }
        if other.output_format.is_some() {
            self.output_format = other.output_format;
        }
        if other.output_file.is_some() {
            self.output_file = other.output_file;
        }
        if other.quiet.is_some() {
            self.quiet = other.quiet;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.use_colors.is_some() {
            self.use_colors = other.use_colors;
        }
        if other.show_progress.is_some() {
            self.show_progress = other.show_progress;
        }
        if other.package_patterns.is_some() {
            self.package_patterns = other.package_patterns;
        }
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let defaults = Settings::default();

        Settings {
            project_root: self.project_root.clone().unwrap_or(defaults.project_root),
            hostname: self.hostname.clone().or(defaults.hostname),
            layout: self.layout.clone().unwrap_or(defaults.layout),
            exclude_patterns: self.exclude_patterns.clone().unwrap_or(defaults.exclude_patterns),
            max_depth: self.max_depth.or(defaults.max_depth),
            mark_cycles: self.mark_cycles.unwrap_or(defaults.mark_cycles),
            view: self.view.unwrap_or(defaults.view),
            output_format: self.output_format.unwrap_or(defaults.output_format),
            output_file: self.output_file.clone().or(defaults.output_file),
            quiet: self.quiet.unwrap_or(defaults.quiet),
            verbose: self.verbose.unwrap_or(defaults.verbose),
            use_colors: self.use_colors.unwrap_or(defaults.use_colors),
            show_progress: self.show_progress.unwrap_or(defaults.show_progress),
            package_patterns: self.package_patterns.clone().unwrap_or(defaults.package_patterns),
        }
    }
}
