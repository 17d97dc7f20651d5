//! Utility functions shared by the analyzer

pub mod path_resolver;

pub use path_resolver::{normalize_path, resolve_import, PathResolver};
