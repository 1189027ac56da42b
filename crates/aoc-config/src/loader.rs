//! Configuration loading from a TOML file with environment overrides.

use crate::schema::Config;
use aoc_common::{AocError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "AOC_BOT_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Environment variables that override individual settings.
pub const ENV_OVERRIDES: [&str; 4] = [
    "DISCORD_TOKEN",
    "ADVENT_OF_CODE_TOKEN",
    "ADVENT_OF_CODE_LEADERBOARD",
    "ADVENT_OF_CODE_INVITE",
];

/// Configuration loader.
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a new configuration loader.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a loader for the path named by [`CONFIG_PATH_ENV`].
    pub fn from_env() -> Self {
        Self::new(std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.into()))
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads configuration from file, falling back to defaults when the file
    /// does not exist, then applies environment overrides.
    ///
    /// The result is not validated.
    pub async fn load(&self) -> Result<Config> {
        let mut config = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                info!("Loading configuration from {}", self.path.display());
                parse_config(&contents)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    "Configuration file {} not found, using defaults",
                    self.path.display()
                );
                Config::default()
            }
            Err(e) => return Err(e.into()),
        };

        apply_overrides(&mut config, |key| std::env::var(key).ok());
        Ok(config)
    }
}

/// Parses configuration from TOML text.
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| AocError::config(format!("Invalid TOML: {e}")))
}

/// Applies environment-style overrides using `lookup` to resolve variables.
///
/// Empty values are ignored.
pub fn apply_overrides<F>(config: &mut Config, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    for key in ENV_OVERRIDES {
        let Some(value) = lookup(key).filter(|v| !v.is_empty()) else {
            continue;
        };
        debug!("Overriding configuration from {}", key);

        match key {
            "DISCORD_TOKEN" => config.discord.token = value,
            "ADVENT_OF_CODE_TOKEN" => config.advent_of_code.session_token = value,
            "ADVENT_OF_CODE_LEADERBOARD" => config.advent_of_code.leaderboard_id = value,
            "ADVENT_OF_CODE_INVITE" => config.advent_of_code.invite_code = value,
            _ => {}
        }
    }
}
