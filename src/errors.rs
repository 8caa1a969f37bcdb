//! Recoverable-error handling for batch runs.
//!
//! Fatal errors live in [`crate::core::errors`]. Everything here is about
//! problems that are recorded and reported at the end of a run:
//!
//! - [`collection`]: `BatchOutcome<T>` and the `Warning` record
//! - [`summary`]: grouping of warnings by kind
//! - [`reporting`]: the stderr report printed by the CLI
//!
//! # Example
//!
//! ```rust
//! use legacylens::errors::{BatchOutcome, Warning, WarningKind};
//! use std::path::Path;
//!
//! let outcome = BatchOutcome::new(
//!     vec!["main"],
//!     vec![Warning::file_read(Path::new("broken.py"), "invalid UTF-8")],
//! );
//! assert_eq!(outcome.warnings[0].kind, WarningKind::FileReadFailure);
//! ```

pub mod collection;
pub mod reporting;
pub mod summary;

pub use collection::{BatchOutcome, Warning, WarningKind};
pub use reporting::{format_warnings, report_warnings};
pub use summary::WarningSummary;
