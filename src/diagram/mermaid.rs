//! Recursive rendering of a [`DirectoryNode`] into Mermaid `subgraph` blocks.

use super::identifier::{self, IdentifierAllocator};
use crate::structure::{DirectoryNode, Node};

/// One level of indentation.
pub const INDENT: &str = "    ";

/// Renders nested directories as balanced `subgraph ... end` blocks and
/// files as labelled leaf nodes. Identifiers stay unique for the lifetime
/// of one renderer.
#[derive(Debug, Default)]
pub struct MermaidRenderer {
    ids: IdentifierAllocator,
}

impl MermaidRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renderer that will never hand out `reserved`.
    pub fn with_reserved(reserved: &[&str]) -> Self {
        let mut renderer = Self::new();
        for id in reserved {
            renderer.ids.reserve(id);
        }
        renderer
    }

    /// Render `node`'s entries at `level`, deriving identifiers under the
    /// sanitized `prefix`.
    pub fn render(&mut self, node: &DirectoryNode, prefix: &str, level: usize) -> String {
        let mut out = String::new();
        self.render_into(node, prefix, level, &mut out);
        out
    }

    fn render_into(&mut self, node: &DirectoryNode, prefix: &str, level: usize, out: &mut String) {
        let indent = INDENT.repeat(level);

        for (name, child) in node {
            let id = self.ids.allocate(&identifier::derive(prefix, name));
            let label = escape_label(name);

            match child {
                Node::File => {
                    out.push_str(&format!("{}{}[\"{}\"]\n", indent, id, label));
                }
                Node::Directory(dir) => {
                    out.push_str(&format!("{}subgraph {}[\"{}\"]\n", indent, id, label));
                    self.render_into(dir, &identifier::child_prefix(prefix, name), level + 1, out);
                    out.push_str(&format!("{}end\n", indent));
                }
            }
        }
    }
}

/// Render with a fresh identifier space.
pub fn render(node: &DirectoryNode, prefix: &str, level: usize) -> String {
    MermaidRenderer::new().render(node, prefix, level)
}

/// Quote-safe label text.
pub fn escape_label(name: &str) -> String {
    name.replace('"', "#quot;")
}
