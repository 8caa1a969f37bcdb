use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::LegacyLensConfig;
use crate::core::{Error, Result};

pub const CONFIG_FILE_NAME: &str = ".legacylens.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse and validate config from a TOML string
pub fn parse_and_validate_config(contents: &str) -> Result<LegacyLensConfig> {
    let mut config = toml::from_str::<LegacyLensConfig>(contents)?;

    for pattern in &config.scan.ignore_patterns {
        glob::Pattern::new(pattern)?;
    }

    // Accept ".py" as well as "py"
    for ext in &mut config.scan.extensions {
        *ext = ext.trim_start_matches('.').to_string();
    }
    if config.scan.extensions.iter().any(|e| e.is_empty()) {
        return Err(Error::configuration("scan.extensions contains an empty entry"));
    }

    Ok(config)
}

/// Load an explicitly requested config file. Any failure is fatal.
pub fn load_config_from(path: &Path) -> Result<LegacyLensConfig> {
    let contents = read_config_file(path).map_err(|e| {
        Error::configuration(format!("cannot read {}: {}", path.display(), e))
    })?;
    let config = parse_and_validate_config(&contents)
        .map_err(|e| Error::configuration(format!("{}: {}", path.display(), e)))?;
    log::debug!("Loaded config from {}", path.display());
    Ok(config)
}

pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<LegacyLensConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!(
                "Ignoring invalid config {}: {}. Using defaults.",
                config_path.display(),
                e
            );
            None
        }
    }
}

pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // "not found" is the normal case while searching ancestors
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// `start` and its ancestors, nearest first, at most `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Find the nearest `.legacylens.toml` from `start` upward.
pub fn discover_config(start: &Path) -> LegacyLensConfig {
    directory_ancestors(start.to_path_buf(), MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            LegacyLensConfig::default()
        })
}

/// Resolve configuration for one invocation: an explicit path wins,
/// otherwise search from the current directory.
pub fn load_config(explicit: Option<&Path>) -> Result<LegacyLensConfig> {
    if let Some(path) = explicit {
        return load_config_from(path);
    }

    match std::env::current_dir() {
        Ok(dir) => Ok(discover_config(&dir)),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            Ok(LegacyLensConfig::default())
        }
    }
}
