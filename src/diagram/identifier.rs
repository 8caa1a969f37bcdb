//! Mermaid node identifiers derived from file paths.
//!
//! The base derivation replaces every character outside `[A-Za-z0-9_]`
//! with `_`. It is lossy: `a.b/c` and `a/b_c` both become `a_b_c`.
//! [`IdentifierAllocator`] removes that ambiguity for one rendered diagram
//! by appending `_2`, `_3`, ... to any identifier already handed out.

use std::collections::HashSet;

/// Words Mermaid treats as syntax when used as a bare node id.
pub const RESERVED_WORDS: &[&str] = &[
    "end",
    "graph",
    "subgraph",
    "flowchart",
    "direction",
    "style",
    "class",
    "classdef",
    "click",
    "linkstyle",
];

/// Replace path separators and punctuation with `_`.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Base identifier for `name` under an already sanitized prefix.
pub fn derive(sanitized_prefix: &str, name: &str) -> String {
    let id = format!("{}{}", sanitized_prefix, sanitize(name));
    if id.is_empty() || id.starts_with(|c: char| c.is_ascii_digit()) {
        format!("n_{}", id)
    } else {
        id
    }
}

/// Prefix handed to the children of directory `name`.
pub fn child_prefix(sanitized_prefix: &str, name: &str) -> String {
    format!("{}{}_", sanitized_prefix, sanitize(name))
}

/// Hands out identifiers that are unique within one render pass.
#[derive(Debug, Clone)]
pub struct IdentifierAllocator {
    used: HashSet<String>,
}

impl Default for IdentifierAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifierAllocator {
    /// Empty allocator. Mermaid keywords always count as taken.
    pub fn new() -> Self {
        Self {
            used: HashSet::new(),
        }
    }

    /// Mark `id` as taken without returning it.
    pub fn reserve(&mut self, id: &str) {
        self.used.insert(id.to_string());
    }

    pub fn is_taken(&self, id: &str) -> bool {
        self.used.contains(id) || RESERVED_WORDS.contains(&id.to_ascii_lowercase().as_str())
    }

    /// `base` if free, otherwise the first free `base_N` with N >= 2.
    pub fn allocate(&mut self, base: &str) -> String {
        let id = if self.is_taken(base) {
            (2usize..)
                .map(|n| format!("{}_{}", base, n))
                .find(|candidate| !self.is_taken(candidate))
                .unwrap_or_else(|| base.to_string())
        } else {
            base.to_string()
        };
        self.used.insert(id.clone());
        id
    }

    pub fn len(&self) -> usize {
        self.used.len()
    }

    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}
