use crate::config::ScanConfig;
use crate::core::{Error, Result};
use crate::errors::{BatchOutcome, Warning};
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};

/// Enumerates source files under a root, filtering by extension,
/// excluded file names, excluded directories and glob ignore patterns.
///
/// Entries are visited in file-name order so repeated runs over the same
/// tree produce the same sequence.
pub struct FileWalker {
    root: PathBuf,
    extensions: Vec<String>,
    exclude_names: Vec<String>,
    exclude_dirs: Vec<PathBuf>,
    ignore_patterns: Vec<glob::Pattern>,
    respect_gitignore: bool,
}

impl FileWalker {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            extensions: vec!["py".to_string()],
            exclude_names: vec![],
            exclude_dirs: vec![],
            ignore_patterns: vec![],
            respect_gitignore: false,
        }
    }

    /// Walker configured from the `[scan]` section.
    pub fn from_config(root: PathBuf, scan: &ScanConfig) -> Result<Self> {
        Ok(Self::new(root)
            .with_extensions(scan.extensions.clone())
            .with_exclude_names(scan.exclude_names.clone())
            .with_ignore_patterns(&scan.ignore_patterns)?
            .respect_gitignore(scan.respect_gitignore))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_string())
            .collect();
        self
    }

    pub fn with_exclude_names(mut self, names: Vec<String>) -> Self {
        self.exclude_names = names;
        self
    }

    /// Skip a whole directory subtree. Relative paths are taken from the root.
    pub fn with_exclude_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        let dir = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.root.join(dir)
        };
        self.exclude_dirs.push(dir);
        self
    }

    pub fn with_ignore_patterns(mut self, patterns: &[String]) -> Result<Self> {
        self.ignore_patterns = patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<std::result::Result<_, _>>()?;
        Ok(self)
    }

    pub fn respect_gitignore(mut self, enabled: bool) -> Self {
        self.respect_gitignore = enabled;
        self
    }

    /// Walk with the configured extension and exclusion rules.
    pub fn walk(&self) -> Result<BatchOutcome<Vec<PathBuf>>> {
        self.walk_matching(|path| self.should_process(path))
    }

    /// Walk once and keep every regular file accepted by `predicate`.
    ///
    /// Fails only when the root is not a directory. Unreadable directories
    /// are skipped and reported as warnings.
    pub fn walk_matching<F>(&self, predicate: F) -> Result<BatchOutcome<Vec<PathBuf>>>
    where
        F: Fn(&Path) -> bool,
    {
        if !self.root.is_dir() {
            return Err(Error::invalid_root(&self.root));
        }

        let exclude_dirs = self.exclude_dirs.clone();
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(self.respect_gitignore)
            .hidden(self.respect_gitignore)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(move |entry| !exclude_dirs.iter().any(|d| entry.path() == d))
            .build();

        let mut files = Vec::new();
        let mut warnings = Vec::new();

        for result in walker {
            match result {
                Ok(entry) => {
                    let is_file = entry.file_type().is_some_and(|ft| ft.is_file());
                    if is_file && predicate(entry.path()) {
                        files.push(entry.path().to_path_buf());
                    }
                }
                Err(err) => warnings.push(walk_warning(&self.root, &err)),
            }
        }

        log::debug!(
            "Walked {}: {} file(s), {} warning(s)",
            self.root.display(),
            files.len(),
            warnings.len()
        );

        Ok(BatchOutcome::new(files, warnings))
    }

    pub fn should_process(&self, path: &Path) -> bool {
        let Some(ext) = path.extension() else {
            return false;
        };
        let ext = ext.to_string_lossy();
        if !self.extensions.iter().any(|e| *e == ext) {
            return false;
        }

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        if self.exclude_names.iter().any(|n| *n == name) {
            return false;
        }

        !self.ignore_patterns.iter().any(|p| p.matches_path(path))
    }
}

/// Warning for an entry the walk could not read. Falls back to `root`
/// when the error carries no path.
fn walk_warning(root: &Path, err: &ignore::Error) -> Warning {
    let path = error_path(err).unwrap_or(root);
    log::debug!("Skipping unreadable entry {}: {}", path.display(), err);
    Warning::directory_access(path, err)
}

/// Innermost path attached to a walk error, if any.
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.as_path()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child.as_path()),
        _ => None,
    }
}
