//! Path resolution for the corpus root.
//!
//! Resolves relative and tilde-prefixed paths to absolute paths. Unlike tree paths elsewhere,
//! the corpus root is allowed not to exist: the loader falls back to embedded data.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::ConfigError;

/// Resolves a data root to an absolute path.
///
/// Handles three cases:
/// - Tilde paths (`~/corpus`), expanded to the home directory
/// - Relative paths (`./corpus`, `../shared`), joined onto `config_dir`
/// - Absolute paths, returned as-is
pub fn resolve_data_path(path: &str, config_dir: &Path) -> Result<PathBuf, ConfigError> {
    let expanded = expand_tilde(path)?;

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        Ok(config_dir.join(expanded))
    }
}

/// Expands a tilde prefix to the home directory.
fn expand_tilde(path: &str) -> Result<PathBuf, ConfigError> {
    if path == "~" {
        return home_dir();
    }

    if let Some(rest) = path.strip_prefix("~/") {
        let home = home_dir()?;
        return Ok(home.join(rest));
    }

    Ok(PathBuf::from(path))
}

/// Returns the home directory.
fn home_dir() -> Result<PathBuf, ConfigError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ConfigError::NoHomeDirectory)
}
