pub mod walker;

pub use walker::FileWalker;

use crate::core::{Error, Result};
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::file_read(path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

pub fn dir_exists(path: &Path) -> bool {
    path.exists() && path.is_dir()
}

/// Fail with `InvalidRoot` unless `root` is an existing directory.
pub fn require_dir(root: &Path) -> Result<()> {
    if dir_exists(root) {
        Ok(())
    } else {
        Err(Error::invalid_root(root))
    }
}
