//! # Config Loader
//!
//! Reads the user's `config.toml`. A missing file means defaults; a file that
//! exists but cannot be read or parsed is an error naming the file.
use crate::{core::paths, models::Settings};
use std::{fs, io::ErrorKind, path::Path};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error(transparent)]
    Path(#[from] paths::PathError),
    #[error("Could not read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads settings from the default location (see [`paths::get_config_path`]).
pub fn load_settings() -> Result<Settings, ConfigError> {
    let path = paths::get_config_path()?;
    load_settings_from(&path)
}

/// Loads settings from `path`, falling back to defaults if it does not exist.
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path: path.display().to_string(),
                source: e,
            });
        }
    };

    let settings = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    log::debug!("Loaded config from {}: {:?}", path.display(), settings);
    Ok(settings)
}
