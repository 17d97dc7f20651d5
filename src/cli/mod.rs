//! Command-line interface components

pub mod args;
pub mod commands;
pub mod interactive;

pub use args::Args;
pub use commands::Command;
pub use interactive::{dispatch, Key, Session, ViewState};
