//! CLI command implementations for legacylens operations.
//!
//! Available commands:
//! - **analyze**: Write Python 3 conversion prompts for files with Python 2 idioms
//! - **visualize**: Render the directory structure as a Mermaid diagram
//! - **gen-tests**: Scaffold `unittest` modules for discovered functions
//! - **functions**: List discovered functions per file
//! - **init**: Initialize a new legacylens configuration file
//!
//! Every tree command fails fast on an invalid root and otherwise returns a
//! [`BatchOutcome`] whose warnings the caller reports once at the end.

pub mod analyze;
pub mod functions;
pub mod init;
pub mod visualize;

pub use analyze::{handle_analyze, AnalyzeConfig, AnalyzeReport};
pub use functions::{format_listing, handle_functions, FileFunctions, FunctionsConfig};
pub use generate_tests::{handle_generate_tests, GenerateTestsConfig, GenerateTestsReport};
pub use init::{init_config, init_config_in};
pub use visualize::{handle_visualize, VisualizeConfig};

use crate::core::{Error, SourceUnit};
use crate::errors::{BatchOutcome, Warning};
use std::path::{Component, Path, PathBuf};

/// Read every path, skipping unreadable files with a warning.
pub(crate) fn read_sources(paths: &[PathBuf]) -> BatchOutcome<Vec<SourceUnit>> {
    let mut units = Vec::with_capacity(paths.len());
    let mut warnings = Vec::new();

    for path in paths {
        match SourceUnit::read(path) {
            Ok(unit) => units.push(unit),
            Err(Error::FileRead { source, .. }) => {
                log::debug!("Skipping {}: {}", path.display(), source);
                warnings.push(Warning::file_read(path, source));
            }
            Err(err) => warnings.push(Warning::file_read(path, err)),
        }
    }

    BatchOutcome::new(units, warnings)
}

/// `path` relative to `root`, `/`-separated, for display in generated output.
pub(crate) fn relative_display(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        path.display().to_string()
    } else {
        parts.join("/")
    }
}
