//! Warning summary generation for batch operations.

use super::collection::{Warning, WarningKind};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Summary of warnings from one batch run.
#[derive(Debug)]
pub struct WarningSummary {
    pub total: usize,
    pub by_kind: BTreeMap<WarningKind, Vec<PathBuf>>,
}

impl WarningSummary {
    pub fn from_warnings(warnings: &[Warning]) -> Self {
        let mut by_kind: BTreeMap<WarningKind, Vec<PathBuf>> = BTreeMap::new();
        for warning in warnings {
            by_kind
                .entry(warning.kind)
                .or_default()
                .push(warning.path.clone());
        }

        Self {
            total: warnings.len(),
            by_kind,
        }
    }

    pub fn count(&self, kind: WarningKind) -> usize {
        self.by_kind.get(&kind).map_or(0, Vec::len)
    }

    pub fn report(&self) -> String {
        let mut report = String::new();

        report.push_str("\nWarning breakdown:\n");
        for (kind, paths) in &self.by_kind {
            report.push_str(&format!("  {}: {} file(s)\n", kind.as_str(), paths.len()));

            for path in paths.iter().take(3) {
                report.push_str(&format!("    - {}\n", path.display()));
            }

            if paths.len() > 3 {
                report.push_str(&format!("    ... and {} more\n", paths.len() - 3));
            }
        }

        report
    }
}
