//! Configuration loading for `.legacylens.toml`.

mod core;
mod loader;

pub use self::core::{DiagramConfig, LegacyLensConfig, OutputConfig, ScanConfig};
pub use loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

/// Default configuration file written by `legacylens init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# legacylens configuration

[scan]
# File extensions to process (without the dot)
extensions = ["py"]
# File names to skip wherever they appear
exclude_names = []
# Glob patterns matched against full paths
ignore_patterns = [
    "**/venv/**",
    "**/.venv/**",
    "**/__pycache__/**",
]
# Honor .gitignore and skip hidden files
respect_gitignore = false

[output]
prompts_file = "modernization_prompts.md"
tests_dir = "tests"

[diagram]
title = "Codebase"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_toml_parses() {
        let config = parse_and_validate_config(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(config.scan.extensions, vec!["py"]);
        assert_eq!(config.scan.ignore_patterns.len(), 3);
        assert_eq!(config.output, OutputConfig::default());
        assert_eq!(config.diagram, DiagramConfig::default());
    }
}
