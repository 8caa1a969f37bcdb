use crate::config::ScanConfig;
use crate::diagram::{self, DiagramFormat};
use crate::errors::BatchOutcome;
use crate::io::{self, FileWalker};
use crate::structure;
use anyhow::Result;
use std::path::PathBuf;

pub struct VisualizeConfig {
    pub path: PathBuf,
    pub scan: ScanConfig,
    pub title: String,
    pub format: DiagramFormat,
}

/// Build the directory tree of matching files and render it.
///
/// Returns the rendered document; writing it is left to the caller.
pub fn handle_visualize(config: VisualizeConfig) -> Result<BatchOutcome<String>> {
    io::require_dir(&config.path)?;

    let walker = FileWalker::from_config(config.path.clone(), &config.scan)?;
    let outcome = structure::build_with(&walker, |path| walker.should_process(path))?;

    log::info!(
        "Rendering {} file(s) under {} as {:?}",
        outcome.value.file_count(),
        config.path.display(),
        config.format
    );

    Ok(outcome.map(|tree| diagram::render_document(&tree, &config.title, config.format)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_renders_only_matching_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("a")).unwrap();
        fs::write(dir.path().join("a").join("x.py"), "").unwrap();
        fs::write(dir.path().join("README.md"), "").unwrap();

        let outcome = handle_visualize(VisualizeConfig {
            path: dir.path().to_path_buf(),
            scan: ScanConfig::default(),
            title: "Codebase".to_string(),
            format: DiagramFormat::Mermaid,
        })
        .unwrap();

        let expected = concat!(
            "graph TD\n",
            "    subgraph codebase[\"Codebase\"]\n",
            "        subgraph a[\"a\"]\n",
            "            a_x_py[\"x.py\"]\n",
            "        end\n",
            "    end\n",
        );
        assert_eq!(outcome.value, expected);
    }
}
