//! Error types and definitions for nixme
//!
//! The analyzer itself never fails: missing files, unreadable files and
//! unmatched patterns degrade to empty results. These errors only describe
//! failures at the boundaries (configuration, project path, output).

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails but overall process can continue
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for this severity
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorSeverity::Warning => 0,
            ErrorSeverity::Error => 1,
            ErrorSeverity::Critical => 2,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for nixme operations
#[derive(Debug, Error)]
pub enum InspectError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Permission denied errors
    #[error("Permission denied accessing {path}")]
    PermissionDenied { path: PathBuf },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: glob::PatternError,
    },

    /// Package pattern errors
    #[error("Invalid package pattern '{pattern}': {source}")]
    PackagePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Inspection pass errors
    #[error("Inspection error: {message}")]
    Inspection { message: String },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// CSV serialization error
    #[error("CSV serialization error: {source}")]
    CsvSerialize {
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },
}

impl InspectError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            InspectError::PermissionDenied { .. } => ErrorSeverity::Warning,

            InspectError::Config { .. }
            | InspectError::ConfigNotFound { .. }
            | InspectError::ConfigRead { .. }
            | InspectError::ConfigParse { .. }
            | InspectError::GlobPattern { .. }
            | InspectError::PackagePattern { .. }
            | InspectError::StdoutWrite { .. }
            | InspectError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            InspectError::PermissionDenied { path } => {
                format!("Cannot access '{}' due to permission denied. Check file permissions.", path.display())
            }
            InspectError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            InspectError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide an existing configuration repository.", path.display())
            }
            InspectError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create one with --init or use command line options.", path.display())
            }
            InspectError::PackagePattern { pattern, source } => {
                format!("Package pattern '{}' does not compile: {}. Fix or remove it from the configuration file.", pattern, source)
            }
            InspectError::OutputDirectoryNotFound { path } => {
                format!("Output directory '{}' does not exist. Please create the directory or specify a different output path.", path.display())
            }
            _ => self.to_string(),
        }
    }

    /// Suggestion shown after the error message, if one applies
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            InspectError::InvalidPath { .. } => Some("Run nixme from inside the repository or pass --path"),
            InspectError::ConfigNotFound { .. } => Some("Run `nixme --init` to create a default .nixme.toml"),
            InspectError::ConfigParse { .. } => Some("Check the TOML syntax of the configuration file"),
            InspectError::GlobPattern { .. } => Some("Check the --exclude patterns"),
            _ => None,
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        InspectError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        InspectError::Config {
            message: message.into(),
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(path: impl Into<PathBuf>) -> Self {
        InspectError::PermissionDenied { path: path.into() }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        InspectError::InvalidPath { path: path.into() }
    }

    /// Create an inspection error
    pub fn inspection_error(message: impl Into<String>) -> Self {
        InspectError::Inspection {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for InspectError {
    fn from(err: std::io::Error) -> Self {
        InspectError::io_error(err)
    }
}

impl From<glob::PatternError> for InspectError {
    fn from(err: glob::PatternError) -> Self {
        InspectError::GlobPattern { source: err }
    }
}

impl From<csv::Error> for InspectError {
    fn from(err: csv::Error) -> Self {
        InspectError::Csv { source: err }
    }
}

impl From<serde_json::Error> for InspectError {
    fn from(err: serde_json::Error) -> Self {
        InspectError::JsonSerialize { source: err }
    }
}

impl From<csv::IntoInnerError<csv::Writer<Vec<u8>>>> for InspectError {
    fn from(err: csv::IntoInnerError<csv::Writer<Vec<u8>>>) -> Self {
        InspectError::io_error(err.into_error())
    }
}

/// Result type alias for nixme operations
pub type Result<T> = std::result::Result<T, InspectError>;
