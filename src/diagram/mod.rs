//! Directory-structure diagrams in Mermaid flowchart syntax.
//!
//! ```text
//! graph TD
//!     subgraph codebase["Codebase"]
//!         subgraph pkg["pkg"]
//!             pkg_mod_py["mod.py"]
//!         end
//!         main_py["main.py"]
//!     end
//! ```
//!
//! [`mermaid::MermaidRenderer`] renders the nested part; [`render_diagram`]
//! adds the `graph TD` header and the outer container exactly once.

pub mod document;
pub mod identifier;
pub mod mermaid;

pub use identifier::IdentifierAllocator;
pub use mermaid::{escape_label, render, MermaidRenderer, INDENT};

use crate::structure::DirectoryNode;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Identifier of the outer container.
pub const ROOT_ID: &str = "codebase";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagramFormat {
    /// Raw Mermaid source
    #[default]
    Mermaid,
    /// Mermaid source in a fenced Markdown block
    Markdown,
    /// Standalone HTML page rendering the diagram
    Html,
}

/// Complete Mermaid document for `tree`.
pub fn render_diagram(tree: &DirectoryNode, title: &str) -> String {
    let mut renderer = MermaidRenderer::with_reserved(&[ROOT_ID]);

    let mut out = String::from("graph TD\n");
    out.push_str(&format!(
        "{}subgraph {}[\"{}\"]\n",
        INDENT,
        ROOT_ID,
        escape_label(title)
    ));
    out.push_str(&renderer.render(tree, "", 2));
    out.push_str(&format!("{}end\n", INDENT));
    out
}

/// Render `tree` and wrap it for the requested output format.
pub fn render_document(tree: &DirectoryNode, title: &str, format: DiagramFormat) -> String {
    let diagram = render_diagram(tree, title);
    match format {
        DiagramFormat::Mermaid => diagram,
        DiagramFormat::Markdown => document::markdown(&diagram),
        DiagramFormat::Html => document::html(&diagram, title),
    }
}
