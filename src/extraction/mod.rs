//! Function-name extraction with structural parse and textual fallback.
//!
//! The two strategies form a closed set. [`extract`] always tries the
//! tree-sitter pass first and falls back to the line scanner when the
//! source does not parse cleanly; the returned [`Extraction`] carries a
//! [`Strategy`] tag so callers can warn about the lower-fidelity result.
//!
//! # Usage
//!
//! ```rust
//! use legacylens::extraction::{extract, Strategy};
//!
//! let result = extract("def greet(name):\n    return name\n");
//! assert_eq!(result.functions, vec!["greet"]);
//! assert_eq!(result.strategy, Strategy::Structural);
//!
//! let result = extract("def foo(:\n@decorator\ndef bar(\n");
//! assert_eq!(result.functions, vec!["foo", "bar"]);
//! assert_eq!(result.strategy, Strategy::Textual);
//! ```

pub mod structural;
pub mod textual;

pub use structural::StructuralExtractor;
pub use textual::{TextualExtractor, TextualMatch};

use crate::core::{Result, SourceUnit};
use crate::errors::{BatchOutcome, Warning};
use serde::Serialize;

/// Which extraction strategy produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Names collected from an error-free syntax tree
    Structural,
    /// Names matched line by line after the structural parse failed
    Textual,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Structural => "structural",
            Self::Textual => "textual",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One way of turning source text into function names.
pub trait FunctionExtractor {
    fn strategy(&self) -> Strategy;
    fn extract(&self, source: &str) -> Result<Vec<String>>;
}

/// Ordered function names plus the strategy that found them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    pub functions: Vec<String>,
    pub strategy: Strategy,
    /// Why the structural parse was abandoned, when it was
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

impl Extraction {
    pub fn used_fallback(&self) -> bool {
        self.strategy == Strategy::Textual
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}

/// Extract function names, never failing.
pub fn extract(source: &str) -> Extraction {
    match StructuralExtractor.extract(source) {
        Ok(functions) => Extraction {
            functions,
            strategy: Strategy::Structural,
            fallback_reason: None,
        },
        Err(err) => {
            log::debug!("Structural extraction failed ({}); scanning text", err);
            Extraction {
                functions: TextualExtractor.scan(source),
                strategy: Strategy::Textual,
                fallback_reason: Some(err.to_string()),
            }
        }
    }
}

/// Extract from a file's contents, recording a warning on fallback.
pub fn extract_unit(unit: &SourceUnit) -> BatchOutcome<Extraction> {
    let extraction = extract(&unit.content);
    let warnings = match &extraction.fallback_reason {
        Some(reason) => vec![Warning::structural_parse(&unit.path, reason)],
        None => Vec::new(),
    };
    BatchOutcome::new(extraction, warnings)
}
