//! Output formatting functions.

pub mod json;
pub mod pretty;

use crate::cli::OutputFormat;
use crate::commands::Report;

/// Format a report for output.
pub fn format_output(report: &Report, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => json::format_json(report),
        OutputFormat::Pretty => pretty::format_report(report),
    }
}
