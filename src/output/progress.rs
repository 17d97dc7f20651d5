//! Progress reporting functionality
//!
//! A spinner shown on stderr while an inspection pass runs.

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::time::Duration;

/// Progress reporter for inspection passes
pub struct ProgressReporter {
    verbose: bool,
    spinner: Option<ProgressBar>,
}

impl ProgressReporter {
    /// Create a new progress reporter; `enabled = false` makes every call a no-op
    pub fn new(enabled: bool, verbose: bool) -> Self {
        let spinner = enabled.then(|| {
            let spinner = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
            if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{pos}/{len}] {msg}") {
                spinner.set_style(style);
            }
            spinner.enable_steady_tick(Duration::from_millis(100));
            spinner
        });

        Self { verbose, spinner }
    }

    /// Update progress
    pub fn update(&self, current: usize, total: usize, message: &str) {
        if let Some(spinner) = &self.spinner {
            spinner.set_length(total as u64);
            spinner.set_position(current as u64);
            spinner.set_message(message.to_string());
        }

        if self.verbose {
            eprintln!("[{}/{}] {}", current, total, message);
        }
    }

    /// Finish the progress operation and clear the spinner
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }

    /// Whether a spinner is drawn
    pub fn is_enabled(&self) -> bool {
        self.spinner.is_some()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
