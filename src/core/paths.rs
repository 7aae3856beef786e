// src/core/paths.rs

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILENAME, CONFIG_PATH_ENV, WORKSPACE_ENV};
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PathError {
    #[error("Could not find system config directory.")]
    ConfigDirNotFound,
    #[error("Could not expand path '{input}': {message}")]
    Expansion { input: String, message: String },
}

/// Expands `~` and environment variables in a user-supplied path.
pub fn expand_path(input: &str) -> Result<PathBuf, PathError> {
    let expanded = shellexpand::full(input).map_err(|e| PathError::Expansion {
        input: input.to_string(),
        message: e.to_string(),
    })?;
    Ok(PathBuf::from(expanded.into_owned()))
}

/// Location of the settings file: `$SWAPBAR_CONFIG`, or
/// `<config dir>/swapbar/config.toml`. The file may not exist.
pub fn get_config_path() -> Result<PathBuf, PathError> {
    let custom = env::var(CONFIG_PATH_ENV).unwrap_or_default();
    if !custom.trim().is_empty() {
        return expand_path(custom.trim());
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME))
        .ok_or(PathError::ConfigDirNotFound)
}

/// Finds the workspace root the external tool runs in.
///
/// Priority: the explicit path, then `$SWAPBAR_WORKSPACE`, then the current
/// directory. Returns `None` when the chosen path cannot be expanded, does
/// not exist, or is not a directory. That is the "no workspace" state, not an
/// error.
pub fn resolve_workspace(explicit: Option<&str>) -> Option<PathBuf> {
    let from_env = env::var(WORKSPACE_ENV).ok().filter(|s| !s.trim().is_empty());

    let candidate = match explicit.map(str::to_string).or(from_env) {
        Some(raw) => match expand_path(raw.trim()) {
            Ok(path) => path,
            Err(e) => {
                log::debug!("{}", e);
                return None;
            }
        },
        None => env::current_dir().ok()?,
    };

    match dunce::canonicalize(&candidate) {
        Ok(path) if path.is_dir() => Some(path),
        Ok(path) => {
            log::debug!("Workspace '{}' is not a directory", path.display());
            None
        }
        Err(e) => {
            log::debug!("Workspace '{}' is unusable: {}", candidate.display(), e);
            None
        }
    }
}
