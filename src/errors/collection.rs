//! Warning collection for batch operations.
//!
//! Batch commands never stop at the first recoverable problem. Each step
//! returns its value together with every warning it produced, and the
//! command layer reports them once at the end of the run.

use std::fmt;
use std::path::{Path, PathBuf};

/// A result value paired with the non-fatal diagnostics collected while
/// producing it.
#[derive(Debug, Clone)]
pub struct BatchOutcome<T> {
    pub value: T,
    pub warnings: Vec<Warning>,
}

impl<T> BatchOutcome<T> {
    pub fn new(value: T, warnings: Vec<Warning>) -> Self {
        Self { value, warnings }
    }

    pub fn clean(value: T) -> Self {
        Self::new(value, Vec::new())
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> BatchOutcome<U> {
        BatchOutcome {
            value: f(self.value),
            warnings: self.warnings,
        }
    }

    /// Move this outcome's warnings into `sink` and return the bare value.
    pub fn drain_into(self, sink: &mut Vec<Warning>) -> T {
        sink.extend(self.warnings);
        self.value
    }
}

/// A recoverable problem tied to one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub path: PathBuf,
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    pub fn new(path: impl Into<PathBuf>, kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind,
            message: message.into(),
        }
    }

    pub fn structural_parse(path: &Path, cause: impl fmt::Display) -> Self {
        Self::new(
            path,
            WarningKind::StructuralParseFailure,
            format!(
                "AST parsing failed for {}. Falling back to pattern scan. Error: {}",
                path.display(),
                cause
            ),
        )
    }

    pub fn file_read(path: &Path, cause: impl fmt::Display) -> Self {
        Self::new(
            path,
            WarningKind::FileReadFailure,
            format!("Skipped {}: {}", path.display(), cause),
        )
    }

    pub fn directory_access(path: &Path, cause: impl fmt::Display) -> Self {
        Self::new(
            path,
            WarningKind::DirectoryAccessFailure,
            format!("Could not list {}: {}", path.display(), cause),
        )
    }

    pub fn output_collision(output: &Path, previous: &Path, current: &Path) -> Self {
        Self::new(
            output,
            WarningKind::OutputCollision,
            format!(
                "{} was generated for {} and then overwritten for {}",
                output.display(),
                previous.display(),
                current.display()
            ),
        )
    }

    pub fn unimportable_module(path: &Path) -> Self {
        Self::new(
            path,
            WarningKind::UnimportableModule,
            format!(
                "{} is not a valid Python module name; its scaffold import will not resolve",
                path.display()
            ),
        )
    }

    pub fn output_write(path: &Path, cause: impl fmt::Display) -> Self {
        Self::new(
            path,
            WarningKind::OutputWriteFailure,
            format!("Could not write {}: {}", path.display(), cause),
        )
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Kind of recoverable problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WarningKind {
    StructuralParseFailure,
    FileReadFailure,
    DirectoryAccessFailure,
    OutputCollision,
    OutputWriteFailure,
    UnimportableModule,
}

impl WarningKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StructuralParseFailure => "Parse fallback",
            Self::FileReadFailure => "File read",
            Self::DirectoryAccessFailure => "Directory access",
            Self::OutputCollision => "Output collision",
            Self::OutputWriteFailure => "Output write",
            Self::UnimportableModule => "Unimportable module",
        }
    }
}
