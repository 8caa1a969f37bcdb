//! Python 2 idiom detection by fixed substring checks.
//!
//! Deliberately shallow: each check is a plain `contains` over the whole
//! file, so comments and strings count too.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LegacyIdiom {
    PrintStatement,
    Xrange,
    IterItems,
    IntegerDivision,
}

impl LegacyIdiom {
    pub const ALL: [LegacyIdiom; 4] = [
        LegacyIdiom::PrintStatement,
        LegacyIdiom::Xrange,
        LegacyIdiom::IterItems,
        LegacyIdiom::IntegerDivision,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            Self::PrintStatement => {
                "This file uses Python 2 `print` statements instead of the `print()` function."
            }
            Self::Xrange => {
                "The file uses `xrange`, which was replaced by a more efficient `range` in Python 3."
            }
            Self::IterItems => {
                "The file uses `.iteritems()`, which was renamed to `.items()` in Python 3."
            }
            Self::IntegerDivision => "The file might be using Python 2's integer division (`/`).",
        }
    }

    fn is_present(&self, content: &str) -> bool {
        match self {
            Self::PrintStatement => content.contains("print "),
            Self::Xrange => content.contains("xrange"),
            Self::IterItems => content.contains(".iteritems()"),
            Self::IntegerDivision => {
                content.contains('/') && !content.contains("from __future__ import division")
            }
        }
    }
}

impl std::fmt::Display for LegacyIdiom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// Idioms present in `content`, in check order.
pub fn scan(content: &str) -> Vec<LegacyIdiom> {
    LegacyIdiom::ALL
        .iter()
        .copied()
        .filter(|idiom| idiom.is_present(content))
        .collect()
}
