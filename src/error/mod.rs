//! Error handling for nixme
//!
//! Error types, result aliases, and error context utilities.

pub mod context;
pub mod types;

pub use context::{handle_error, try_with_recovery, ResultExt};
pub use types::{ErrorSeverity, InspectError, Result};
