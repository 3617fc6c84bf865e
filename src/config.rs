//! Station configuration stored as a TOML file.
//!
//! Config lives in the user config directory:
//! - `$XDG_CONFIG_HOME/radio-api/config.toml` when `XDG_CONFIG_HOME` is set
//! - otherwise the OS-standard config directory (`dirs::config_dir()`),
//!   e.g. `~/.config/radio-api/config.toml` on Linux
//!
//! The file is the source of truth at all times: it is re-read on every
//! request, so edits take effect without a restart.
//!
//! ```toml
//! music_root = "/music"
//!
//! [[stations]]
//! id = "jazz"
//! name = "Jazz FM"
//! paths = ["jazz"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::model::Station;

/// Directory name under the user config directory.
pub const APP_DIR: &str = "radio-api";

/// Config file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

/// Station list configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Base directory that station paths are relative to
    #[serde(alias = "MusicRoot", alias = "musicroot")]
    pub music_root: PathBuf,

    /// Configured stations, in file order
    #[serde(default, alias = "Stations")]
    pub stations: Vec<Station>,
}

impl Config {
    /// Check invariants the TOML schema can't express.
    ///
    /// Empty ids are rejected. Duplicate ids are allowed (first one wins on
    /// lookup) but logged.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for (index, station) in self.stations.iter().enumerate() {
            if station.id.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "station #{} has an empty id",
                    index + 1
                )));
            }
            if !seen.insert(station.id.as_str()) {
                tracing::warn!(
                    station = %station.id,
                    "Duplicate station id in config, only the first entry is used"
                );
            }
        }
        Ok(())
    }
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    config_dir_from(std::env::var_os("XDG_CONFIG_HOME"))
}

/// Resolve the config directory from an `XDG_CONFIG_HOME` value.
fn config_dir_from(xdg_config_home: Option<OsString>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|d| d.join(APP_DIR))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join(CONFIG_FILE))
}

/// Load configuration from disk.
///
/// Unlike a settings file there is no usable default here: without the
/// station list the service can't do anything, so every failure is an error.
pub fn load(path: &Path) -> Result<Config, ConfigError> {
    let contents =
        std::fs::read_to_string(path).map_err(|e| ConfigError::Read(path.to_path_buf(), e))?;
    let config = parse(path, &contents)?;
    tracing::debug!(stations = config.stations.len(), "Loaded config from {:?}", path);
    Ok(config)
}

/// Load configuration on a blocking thread (for use in request handlers)
pub async fn load_async(path: PathBuf) -> Result<Config, ConfigError> {
    tokio::task::spawn_blocking(move || load(&path))
        .await
        .map_err(|e| ConfigError::TaskJoin(e.to_string()))?
}

/// Parse and validate config file contents.
pub fn parse(path: &Path, contents: &str) -> Result<Config, ConfigError> {
    let config: Config =
        toml::from_str(contents).map_err(|e| ConfigError::Parse(path.to_path_buf(), e))?;
    config.validate()?;
    Ok(config)
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    Parse(PathBuf, toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),

    #[error("Task join error: {0}")]
    TaskJoin(String),
}

// ============================================================================
// Tests
// ============================================================================
