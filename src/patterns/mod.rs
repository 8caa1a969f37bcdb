//! Legacy-language idiom detection.
//!
//! Identifies constructs that need attention when porting a codebase to a
//! newer language version. Currently Python 2 only.

pub mod python2;

pub use python2::{scan, LegacyIdiom};
