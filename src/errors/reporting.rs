//! End-of-run warning reporting for batch commands.

use super::collection::Warning;
use super::summary::WarningSummary;
use colored::Colorize;

/// Render the warnings section shown after a batch run. Empty when there
/// is nothing to report.
pub fn format_warnings(warnings: &[Warning]) -> String {
    if warnings.is_empty() {
        return String::new();
    }

    let mut out = format!("\n{}\n", "Warnings:".yellow().bold());
    for warning in warnings {
        out.push_str(&format!("  {}\n", warning));
    }
    if warnings.len() > 1 {
        out.push_str(&WarningSummary::from_warnings(warnings).report());
    }
    out
}

/// Print the warnings section to stderr.
pub fn report_warnings(warnings: &[Warning]) {
    if !warnings.is_empty() {
        eprint!("{}", format_warnings(warnings));
    }
}
