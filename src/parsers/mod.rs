//! Lexical analysis of configuration sources
//!
//! Nothing here parses the configuration language. Sources are first
//! sanitized, then imports and packages are pulled out with regular
//! expressions. Every function is pure and never fails on odd input.

pub mod import_extractor;
pub mod manifest;
pub mod package_extractor;
pub mod sanitizer;

pub use import_extractor::extract_imports;
pub use manifest::machine_type_for;
pub use package_extractor::{PackagePattern, PackagePatternTable};
pub use sanitizer::sanitize;
