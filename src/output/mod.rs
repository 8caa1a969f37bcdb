pub mod prompts;
pub mod scaffold;

pub use prompts::{create_markdown_prompt, PromptDocument, PROMPTS_HEADER};
pub use scaffold::{render_scaffold, TestScaffold};

use crate::io;
use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;

/// Write `content` to `output_file`, creating parent directories, or to
/// stdout when no file is given.
pub fn emit(content: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    io::ensure_dir(parent)?;
                }
            }
            io::write_file(path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            handle.write_all(content.as_bytes())?;
            handle.flush()?;
        }
    }
    Ok(())
}
