//! `unittest` scaffolds with one placeholder test per extracted function.

use std::path::{Component, Path};

/// A generated test module ready to be written under the tests directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestScaffold {
    /// `test_<source file name>`
    pub file_name: String,
    pub content: String,
}

/// Output file name for a source file: `test_` plus its base name.
pub fn scaffold_file_name(relative: &Path) -> String {
    let name = relative
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("test_{}", name)
}

/// Module name without its extension.
pub fn module_name(relative: &Path) -> String {
    relative
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Title-case the way Python's `str.title()` does: a letter is upper-cased
/// when it follows a non-letter, lower-cased otherwise.
pub fn python_title(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_cased = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if previous_cased {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            previous_cased = true;
        } else {
            out.push(c);
            previous_cased = false;
        }
    }
    out
}

/// Whether `name` can appear in an `import` statement.
pub fn is_python_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// Whether every package segment and the module name of `relative` are
/// identifiers, so the generated import can resolve.
pub fn is_importable(relative: &Path) -> bool {
    let packages_ok = relative.parent().map_or(true, |parent| {
        parent.components().all(|c| match c {
            Component::Normal(part) => is_python_identifier(&part.to_string_lossy()),
            _ => true,
        })
    });
    packages_ok && is_python_identifier(&module_name(relative))
}

/// Test class name for a module: non-identifier characters become `_`,
/// then the result is title-cased behind a `Test` prefix.
pub fn class_name(module: &str) -> String {
    let sanitized: String = module
        .chars()
        .map(|c| if c == '_' || c.is_alphanumeric() { c } else { '_' })
        .collect();
    format!("Test{}", python_title(&sanitized))
}

/// Relative import of the module under test, one package level above the
/// tests directory.
///
/// `util.py` imports as `from .. import util`; `pkg/sub/util.py` as
/// `from ..pkg.sub import util`.
pub fn import_line(relative: &Path) -> String {
    let packages: Vec<String> = relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default();

    let module = module_name(relative);
    if packages.is_empty() {
        format!("from .. import {}", module)
    } else {
        format!("from ..{} import {}", packages.join("."), module)
    }
}

/// Scaffold for the file at `relative` (relative to the scanned root).
/// Returns `None` when there is nothing to test.
pub fn render_scaffold(relative: &Path, functions: &[String]) -> Option<TestScaffold> {
    if functions.is_empty() {
        return None;
    }

    let module = module_name(relative);
    let mut content = String::from("import unittest\n");
    content.push_str(&import_line(relative));
    content.push_str("\n\n");
    content.push_str(&format!(
        "class {}(unittest.TestCase):\n\n",
        class_name(&module)
    ));

    for function in functions {
        content.push_str(&format!("    def test_{}(self):\n", function));
        content.push_str("        # TODO: Add assertions here\n");
        content.push_str("        pass\n\n");
    }

    Some(TestScaffold {
        file_name: scaffold_file_name(relative),
        content,
    })
}
