use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::config_dirs::settings_file;
use super::SettingsError;

/// How widget instance ids are generated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IdStyle {
    #[default]
    Sequential,
    Random,
}

/// Persisted user settings. Every field has a default so partial files load.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Minimum spacing between notifications of one recheck phase.
    pub throttle_ms: u64,
    /// Event-loop poll interval; each tick runs one lifecycle pass.
    pub tick_ms: u64,
    /// Entries kept in the lifecycle demo's relay log.
    pub relay_capacity: usize,
    /// "dark" or "light".
    pub theme: String,
    pub id_style: IdStyle,
    /// Route path opened at startup ("" is home).
    pub start_route: String,
    /// Log destination while the terminal UI is running.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            throttle_ms: 2000,
            tick_ms: 250,
            relay_capacity: 200,
            theme: "dark".to_string(),
            id_style: IdStyle::Sequential,
            start_route: String::new(),
            log_file: None,
        }
    }
}

/// Write `settings` to the default location, creating the directory.
pub fn save_settings(settings: &Settings) -> Result<PathBuf, SettingsError> {
    let path = settings_file().ok_or(SettingsError::NoConfigDir)?;
    save_settings_to(&path, settings)?;
    Ok(path)
}

pub fn save_settings_to(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let text = toml::to_string_pretty(settings)?;
    fs::write(path, text)?;
    tracing::info!("settings written to {}", path.display());
    Ok(())
}
