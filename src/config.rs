use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};

const APP_NAME: &str = "test-hierarchy";
const CONFIG_FILE: &str = "config.json";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TEST_HIERARCHY_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Append `#id` to every line of rendered trees.
    pub show_ids: bool,
    /// Pretty-print JSON written by `fmt`.
    pub pretty: bool,
    /// Make `check` fail when any sibling group repeats an id.
    pub deny_duplicate_ids: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            show_ids: true,
            pretty: true,
            deny_duplicate_ids: false,
        }
    }
}

impl Config {
    /// Load configuration from `path`, or from the default location when `None`.
    /// Returns default config if the file doesn't exist or fails to parse.
    pub fn load(path: Option<&Path>) -> Self {
        let resolved = match path {
            Some(p) => Ok(p.to_path_buf()),
            None => get_config_path(),
        };

        match resolved.and_then(|p| Self::try_load_from(&p)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {:#}", e);
                Self::default()
            }
        }
    }

    pub fn try_load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).context("Failed to read config file")?;

        let config = serde_json::from_str(&content).context("Failed to parse config file")?;

        Ok(config)
    }

    /// Save the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }
}

/// Resolve the config path: `TEST_HIERARCHY_CONFIG` first, then the user's
/// config directory.
pub fn get_config_path() -> Result<PathBuf> {
    if let Ok(explicit) = std::env::var(CONFIG_ENV) {
        return Ok(PathBuf::from(explicit));
    }

    let mut path =
        config_dir().ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
    path.push(APP_NAME);
    path.push(CONFIG_FILE);
    Ok(path)
}
