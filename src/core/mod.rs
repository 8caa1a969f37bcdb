pub mod errors;

pub use errors::{Error, Result};

use std::path::{Path, PathBuf};

/// A source file read once for processing and dropped afterwards.
#[derive(Clone, Debug)]
pub struct SourceUnit {
    pub path: PathBuf,
    pub content: String,
}

impl SourceUnit {
    /// Read a file in full. The handle is closed before this returns.
    pub fn read(path: &Path) -> Result<Self> {
        let content = crate::io::read_file(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            content,
        })
    }

    /// File name without directories, lossily converted.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_source_unit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mod.py");
        std::fs::write(&path, "x = 1\n").unwrap();

        let unit = SourceUnit::read(&path).unwrap();
        assert_eq!(unit.content, "x = 1\n");
        assert_eq!(unit.file_name(), "mod.py");
    }

    #[test]
    fn test_read_invalid_utf8_is_file_read_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.py");
        std::fs::write(&path, [0x63, 0x61, 0x66, 0xe9, 0xff]).unwrap();

        let err = SourceUnit::read(&path).unwrap_err();
        assert!(matches!(err, Error::FileRead { .. }));
    }
}
