use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Start sessions with the incomplete-only filter on.
    pub incomplete_only: bool,
    /// How long the event loop waits for a key before redrawing, in ms.
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            incomplete_only: false,
            tick_rate_ms: 250,
        }
    }
}

impl Config {
    /// Loads `<config_dir>/ticklist/config.toml`, or the override path when
    /// given. A missing file means defaults; a malformed one is an error.
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let path = match override_path {
            Some(p) => p.to_path_buf(),
            None => match default_path() {
                Some(p) => p,
                None => {
                    debug!("no config directory on this platform; using defaults");
                    return Ok(Config::default());
                }
            },
        };

        if !path.exists() {
            debug!(path = %path.display(), "no config file; using defaults");
            return Ok(Config::default());
        }

        let text = fs::read_to_string(&path)
            .with_context(|| format!("could not read config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("could not parse config file {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("ticklist").join("config.toml"))
}
