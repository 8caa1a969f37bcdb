use super::{read_sources, relative_display};
use crate::config::ScanConfig;
use crate::errors::BatchOutcome;
use crate::extraction::{self, Extraction};
use crate::io::{self, FileWalker};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

pub struct FunctionsConfig {
    pub path: PathBuf,
    pub scan: ScanConfig,
}

/// Functions discovered in one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileFunctions {
    pub path: String,
    #[serde(flatten)]
    pub extraction: Extraction,
}

pub fn handle_functions(config: FunctionsConfig) -> Result<BatchOutcome<Vec<FileFunctions>>> {
    io::require_dir(&config.path)?;

    let mut warnings = Vec::new();
    let walker = FileWalker::from_config(config.path.clone(), &config.scan)?;
    let paths = walker.walk()?.drain_into(&mut warnings);
    let units = read_sources(&paths).drain_into(&mut warnings);

    let files: Vec<FileFunctions> = units
        .iter()
        .map(|unit| FileFunctions {
            path: relative_display(&config.path, &unit.path),
            extraction: extraction::extract_unit(unit).drain_into(&mut warnings),
        })
        .collect();

    Ok(BatchOutcome::new(files, warnings))
}

/// Plain-text listing: one header per file, one indented line per function.
pub fn format_listing(files: &[FileFunctions]) -> String {
    let mut out = String::new();
    for file in files {
        out.push_str(&format!(
            "{} ({}, {} function(s))\n",
            file.path,
            file.extraction.strategy,
            file.extraction.functions.len()
        ));
        for name in &file.extraction.functions {
            out.push_str(&format!("    {}\n", name));
        }
    }
    out
}
