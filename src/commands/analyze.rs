use super::{read_sources, relative_display};
use crate::config::ScanConfig;
use crate::errors::BatchOutcome;
use crate::io::{self, FileWalker};
use crate::output::PromptDocument;
use crate::patterns;
use anyhow::{Context, Result};
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub path: PathBuf,
    pub scan: ScanConfig,
    /// Prompt file name, relative to `path`
    pub prompts_file: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeReport {
    pub output_path: PathBuf,
    pub files_scanned: usize,
    pub files_flagged: usize,
}

/// Scan every source file for Python 2 idioms and write one conversion
/// prompt per flagged file.
pub fn handle_analyze(config: AnalyzeConfig) -> Result<BatchOutcome<AnalyzeReport>> {
    io::require_dir(&config.path)?;

    let mut warnings = Vec::new();
    let walker = FileWalker::from_config(config.path.clone(), &config.scan)?;
    let paths = walker.walk()?.drain_into(&mut warnings);
    let units = read_sources(&paths).drain_into(&mut warnings);

    let mut document = PromptDocument::new();
    for unit in &units {
        let idioms = patterns::scan(&unit.content);
        let display = relative_display(&config.path, &unit.path);
        if document.add_file(&display, &unit.content, &idioms) {
            log::debug!("{}: {} idiom(s)", display, idioms.len());
        }
    }

    let output_path = config.path.join(&config.prompts_file);
    io::write_file(&output_path, document.as_str())
        .with_context(|| format!("Failed to write prompts to {}", output_path.display()))?;

    log::info!(
        "Wrote {} prompt(s) for {} file(s) to {}",
        document.section_count(),
        units.len(),
        output_path.display()
    );

    Ok(BatchOutcome::new(
        AnalyzeReport {
            output_path,
            files_scanned: units.len(),
            files_flagged: document.section_count(),
        },
        warnings,
    ))
}
