//! Configuration for pathladder
//!
//! Looked up in order: an explicit path (`--config` / `PATHLADDER_CONFIG`),
//! `pathladder.toml` in the working directory, then
//! `~/.config/pathladder/config.toml`. Missing files fall back to defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PathladderError, Result};

pub use types::{Config, GraphConfig, LadderConfig, DEFAULT_DICTIONARY};

/// Project-local config file name
pub const CONFIG_FILE_NAME: &str = "pathladder.toml";

const CONFIG_DIR: &str = "pathladder";
const GLOBAL_CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PATHLADDER_CONFIG_DIR";

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathladderError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| PathladderError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| PathladderError::io_operation("write config", path.display(), e))?;
        Ok(())
    }

    /// Resolve configuration for a run.
    ///
    /// An explicit path must exist; discovered paths are optional.
    pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        Self::discover(cwd)
    }

    /// Find the nearest config file without failing when none exists
    pub fn discover(cwd: &Path) -> Result<Self> {
        let local = cwd.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load(&local);
        }

        if let Some(global) = global_config_path() {
            if global.is_file() {
                return Self::load(&global);
            }
        }

        tracing::debug!("config_defaults");
        Ok(Self::default())
    }
}

fn global_config_path() -> Option<PathBuf> {
    let dir = match std::env::var(CONFIG_DIR_ENV_VAR) {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => dirs::config_dir()?.join(CONFIG_DIR),
    };
    Some(dir.join(GLOBAL_CONFIG_FILE))
}
