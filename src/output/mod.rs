//! Output formatting and writing functionality

pub mod formatters;
mod progress;
mod writers;

pub use self::progress::ProgressReporter;
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::error::Result;
use crate::models::analysis::InspectionReport;
use crate::models::config::{OutputFormat, ReportView};

/// Trait for different output formatters
pub trait Formatter {
    /// Format one view of an inspection report into a string
    fn format(&self, report: &InspectionReport, view: ReportView) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
    pub quiet: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            use_colors,
            verbose,
            quiet,
        }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, report: &InspectionReport, view: ReportView) -> Result<String> {
        // In quiet mode the full report shrinks to one line
        if self.quiet && view == ReportView::All {
            let summary = &report.summary;
            return Ok(format!(
                "Host: {}, roots: {}, files: {}, imports: {}, packages: {}\n",
                report.hostname,
                report.module_order.len(),
                summary.config_files,
                summary.total_imports,
                report.packages.len()
            ));
        }

        Ok(formatters::format_report_text(
            report,
            view,
            self.use_colors,
            self.verbose,
        ))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, report: &InspectionReport, view: ReportView) -> Result<String> {
        formatters::format_report_json(report, view)
    }
}

/// CSV formatter for spreadsheet analysis
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, report: &InspectionReport, view: ReportView) -> Result<String> {
        formatters::format_report_csv(report, view)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(
    format: OutputFormat,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose, quiet)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}
