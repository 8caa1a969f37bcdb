//! Tree-sitter based function discovery for Python sources.

use super::{FunctionExtractor, Strategy};
use crate::core::{Error, Result};
use tree_sitter::{Language, Node, Parser, Tree};

const FUNCTION_DEFINITION: &str = "function_definition";

/// Collects `def` names from an error-free tree-sitter parse.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructuralExtractor;

impl FunctionExtractor for StructuralExtractor {
    fn strategy(&self) -> Strategy {
        Strategy::Structural
    }

    fn extract(&self, source: &str) -> Result<Vec<String>> {
        let tree = parse_python(source)?;
        Ok(collect_function_names(&tree, source))
    }
}

fn python_language() -> Language {
    tree_sitter_python::LANGUAGE.into()
}

/// Parse Python source, rejecting any tree that contains ERROR or MISSING
/// nodes. Tree-sitter always recovers, so a tree with errors is treated as
/// a failed parse.
pub fn parse_python(source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(&python_language())
        .map_err(|e| Error::StructuralParse(format!("Python grammar unavailable: {}", e)))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| Error::StructuralParse("parser produced no tree".to_string()))?;

    if let Some(node) = first_error(tree.root_node()) {
        return Err(Error::StructuralParse(describe_error(&node)));
    }

    Ok(tree)
}

/// First ERROR or MISSING node in document order.
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }
    if root.is_error() || root.is_missing() {
        return Some(root);
    }
    let mut cursor = root.walk();
    let children: Vec<Node<'_>> = root.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn describe_error(node: &Node<'_>) -> String {
    let pos = node.start_position();
    if node.is_missing() {
        format!(
            "missing '{}' at line {}, column {}",
            node.kind(),
            pos.row + 1,
            pos.column + 1
        )
    } else {
        format!("invalid syntax at line {}, column {}", pos.row + 1, pos.column + 1)
    }
}

/// Names of every `function_definition` in depth-first pre-order.
///
/// Walks with a cursor rather than recursion so deeply nested input cannot
/// exhaust the stack.
pub fn collect_function_names(tree: &Tree, source: &str) -> Vec<String> {
    let bytes = source.as_bytes();
    let mut names = Vec::new();
    let mut cursor = tree.walk();

    loop {
        let node = cursor.node();
        if node.kind() == FUNCTION_DEFINITION {
            if let Some(name) = node
                .child_by_field_name("name")
                .and_then(|n| n.utf8_text(bytes).ok())
            {
                names.push(name.to_string());
            }
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return names;
            }
        }
    }
}
