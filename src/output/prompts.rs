//! Markdown conversion prompts for files that still use Python 2 idioms.

use crate::patterns::LegacyIdiom;

pub const PROMPTS_HEADER: &str = "# Python 2 to Python 3 Conversion Prompts\n\n";

/// Accumulates one prompt section per flagged file.
#[derive(Debug, Clone)]
pub struct PromptDocument {
    body: String,
    sections: usize,
}

impl Default for PromptDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptDocument {
    pub fn new() -> Self {
        Self {
            body: PROMPTS_HEADER.to_string(),
            sections: 0,
        }
    }

    /// Append a section for `display_path`. Files without idioms are
    /// skipped; returns whether a section was added.
    pub fn add_file(&mut self, display_path: &str, content: &str, idioms: &[LegacyIdiom]) -> bool {
        if idioms.is_empty() {
            return false;
        }
        self.body
            .push_str(&create_markdown_prompt(display_path, content, idioms));
        self.sections += 1;
        true
    }

    pub fn section_count(&self) -> usize {
        self.sections
    }

    pub fn as_str(&self) -> &str {
        &self.body
    }

    pub fn into_string(self) -> String {
        self.body
    }
}

/// Prompt section asking for a Python 3 rewrite of one file.
pub fn create_markdown_prompt(display_path: &str, content: &str, idioms: &[LegacyIdiom]) -> String {
    let mut prompt = format!("### File: {}\n", display_path);
    prompt.push_str(
        "This Python file is written in Python 2 and needs to be converted to Python 3.\n\n",
    );

    if !idioms.is_empty() {
        prompt.push_str("**Key Python 2 features to address:**\n");
        for idiom in idioms {
            prompt.push_str(&format!("- {}\n", idiom.description()));
        }
        prompt.push('\n');
    }

    prompt.push_str(
        "Please provide the equivalent code for this file, refactored for Python 3 syntax and best practices. ",
    );
    prompt.push_str("The output should contain the full, converted code.\n\n");

    let fence = code_fence(content);
    prompt.push_str(&format!("{}python\n", fence));
    prompt.push_str(content);
    prompt.push_str(&format!("\n{}\n\n---\n\n", fence));

    prompt
}

/// A backtick fence longer than any backtick run inside `content`.
fn code_fence(content: &str) -> String {
    let longest = content
        .split(|c| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}
