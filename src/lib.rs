// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod diagram;
pub mod errors;
pub mod extraction;
pub mod io;
pub mod output;
pub mod patterns;
pub mod structure;

// Re-export commonly used types
pub use crate::core::{Error, Result, SourceUnit};

pub use crate::errors::{BatchOutcome, Warning, WarningKind};

pub use crate::extraction::{extract, Extraction, FunctionExtractor, Strategy};

pub use crate::structure::{build, DirectoryNode, Node};

pub use crate::diagram::{render, render_diagram, DiagramFormat, IdentifierAllocator};

pub use crate::patterns::LegacyIdiom;
