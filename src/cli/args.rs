//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// nixme - dependency inspector for Nix configuration repositories
#[derive(Parser, Debug)]
#[command(name = "nixme")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Inspect imports, host module order and declared packages of a Nix configuration repository")]
#[command(long_about = "nixme reads a flake-based configuration repository (flake.nix, hosts/, modules/, \
home-configurations/) without evaluating it. It extracts import declarations, works out which root files \
apply to a host, expands them into an import tree annotated with declared packages, and indexes every \
configuration file by its number of imports.")]
#[command(after_help = "EXAMPLES:

Basic Usage:
    # Inspect the repository containing the current directory
    nixme

    # Inspect a specific repository for a specific host
    nixme --path ~/nix-config --host macbook

Views:
    # Show only the module order for the host
    nixme --view order

    # Show the import tree, recording imports skipped by the cycle guard
    nixme --view tree --mark-cycles

    # Show the dependency index, leaving out build results
    nixme --view deps --exclude 'result/**'

Output Options:
    # Export the whole report as JSON
    nixme --output json --output-file report.json

    # Export the declared packages as CSV
    nixme --view packages --output csv

Interactive Mode:
    # Browse packages, files, dependencies, the tree and the module order
    nixme --interactive

Configuration:
    # Use a specific configuration file
    nixme --config ./nixme.toml

    # Create a default configuration file
    nixme --init
")]
pub struct Args {
    /// Repository directory
    #[arg(short, long, value_name = "PATH", help = "Directory inside the configuration repository (the root is found by walking up to flake.nix)")]
    pub path: Option<PathBuf>,

    /// Host to inspect
    #[arg(long, value_name = "NAME", help = "Host to resolve the module order for (defaults to NIXME_HOST, then `hostname -s`)")]
    pub host: Option<String>,

    /// Report view
    #[arg(long, value_enum, value_name = "VIEW", help = "Part of the report to render (defaults to all)")]
    pub view: Option<View>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, help = "Output format for results: 'text' for human-readable output, 'json' for machine processing, 'csv' for spreadsheet analysis")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write output to (uses stdout if not specified, e.g., --output-file ./report.json)")]
    pub output_file: Option<PathBuf>,

    /// Exclude files matching these glob patterns
    #[arg(short, long, value_name = "PATTERN", help = "Glob patterns, relative to the repository root, left out of the dependency index (can be specified multiple times)")]
    pub exclude: Vec<String>,

    /// Maximum import tree depth
    #[arg(long, value_name = "DEPTH", help = "Stop expanding the import tree below this depth")]
    pub max_depth: Option<usize>,

    /// Record imports pruned by the cycle guard
    #[arg(long, help = "Show imports skipped because they would close a cycle")]
    pub mark_cycles: bool,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Path to configuration file (defaults to .nixme.toml in the current directory if not specified)")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful for terminals that don't support ANSI colors or for piping output)")]
    pub no_colors: bool,

    /// Disable the progress spinner
    #[arg(long, help = "Disable the progress spinner (useful for CI environments or when redirecting output)")]
    pub no_progress: bool,

    /// Suppress non-essential output
    #[arg(short, long, help = "Suppress non-essential output (text output of the full report becomes a one-line summary)")]
    pub quiet: bool,

    /// Show detailed progress and debug information
    #[arg(short, long, help = "Show detailed progress and debug information (package lists in the tree, debug logging)")]
    pub verbose: bool,

    /// Start the interactive inspector
    #[arg(short, long, conflicts_with = "init", help = "Start the interactive, menu-driven inspector")]
    pub interactive: bool,

    /// Initialize a default configuration file
    #[arg(long, help = "Create a default configuration file (.nixme.toml) in the current directory")]
    pub init: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

/// Report view options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum View {
    /// Host module order
    Order,
    /// Composite import tree
    Tree,
    /// Flat dependency index
    Deps,
    /// Declared packages
    Packages,
    /// Configuration file browser
    Files,
    /// Everything
    All,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}
