use serde::{Deserialize, Serialize};

/// Root configuration structure, read from `.legacylens.toml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LegacyLensConfig {
    /// Which files the tree walk keeps
    #[serde(default)]
    pub scan: ScanConfig,

    /// Where generated artifacts are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Diagram rendering options
    #[serde(default)]
    pub diagram: DiagramConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// File extensions to process, without the leading dot
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Exact file names to skip wherever they appear
    #[serde(default)]
    pub exclude_names: Vec<String>,

    /// Glob patterns matched against the full path
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Honor .gitignore and hidden-file rules during the walk
    #[serde(default)]
    pub respect_gitignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude_names: Vec::new(),
            ignore_patterns: Vec::new(),
            respect_gitignore: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Prompt document file name, relative to the scan root
    #[serde(default = "default_prompts_file")]
    pub prompts_file: String,

    /// Scaffold directory, relative to the scan root
    #[serde(default = "default_tests_dir")]
    pub tests_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            prompts_file: default_prompts_file(),
            tests_dir: default_tests_dir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramConfig {
    /// Label of the outer container
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec!["py".to_string()]
}

fn default_prompts_file() -> String {
    "modernization_prompts.md".to_string()
}

fn default_tests_dir() -> String {
    "tests".to_string()
}

fn default_title() -> String {
    "Codebase".to_string()
}
