//! User settings file
//!
//! Stored as TOML at `<config dir>/arkbak/config.toml`. The location can be
//! overridden with `ARKBAK_CONFIG`. A missing file means defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the settings file location
pub const CONFIG_ENV: &str = "ARKBAK_CONFIG";

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub watch: WatchSettings,

    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchSettings {
    /// Save folder used when `--path` is not given (skips the prompt)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogSettings {
    /// Default log level (overridden by `--log-level` and `RUST_LOG`)
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if !LOG_LEVELS.contains(&self.log.level.to_ascii_lowercase().as_str()) {
            anyhow::bail!(
                "Invalid log.level '{}': expected one of {}",
                self.log.level,
                LOG_LEVELS.join(", ")
            );
        }
        Ok(())
    }
}

/// Settings file location
pub fn config_file_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    dirs::config_dir().map(|dir| dir.join("arkbak").join("config.toml"))
}

/// Load settings from the default location
pub fn load() -> Result<Settings> {
    match config_file_path() {
        Some(path) => load_from(&path),
        None => Ok(Settings::default()),
    }
}

/// Load settings from `path`, falling back to defaults if it does not exist
pub fn load_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file {}", path.display()))?;
    let settings: Settings = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse settings file {}", path.display()))?;

    settings
        .validate()
        .with_context(|| format!("Invalid settings in {}", path.display()))?;

    Ok(settings)
}

/// Example settings file
pub fn example_config() -> &'static str {
    r#"# arkbak settings

[watch]
# Folder containing TheIsland.ark and the .arkprofile files.
# When set, arkbak does not prompt for it.
# source_dir = "/home/me/.steam/steam/steamapps/common/ARK/ShooterGame/Saved/SavedArksLocal"

[log]
# trace, debug, info, warn or error (RUST_LOG overrides this)
level = "info"
"#
}
