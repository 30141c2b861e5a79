use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::config_dirs::settings_file;
use super::{Settings, SettingsError};

/// Load settings from the default location. A missing file (or no config
/// directory at all) yields defaults.
pub fn load_settings() -> Result<Settings, SettingsError> {
    match settings_file() {
        Some(path) => load_settings_from(&path),
        None => Ok(Settings::default()),
    }
}

/// Load settings from `path`. Missing file → defaults; malformed TOML is an
/// error.
pub fn load_settings_from(path: &Path) -> Result<Settings, SettingsError> {
    let text = match fs::read_to_string(path) {
        Ok(t) => t,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("no settings at {}, using defaults", path.display());
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };
    let settings: Settings = toml::from_str(&text).map_err(|e| SettingsError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    #[test]
    fn missing_file_gives_defaults() {
        let temp = assert_fs::TempDir::new().unwrap();
        let s = load_settings_from(&temp.path().join("absent.toml")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("settings.toml");
        f.write_str("throttle_ms = 750\nid_style = \"random\"\n").unwrap();
        let s = load_settings_from(f.path()).unwrap();
        assert_eq!(s.throttle_ms, 750);
        assert_eq!(s.id_style, super::super::IdStyle::Random);
        assert_eq!(s.tick_ms, Settings::default().tick_ms);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let temp = assert_fs::TempDir::new().unwrap();
        let f = temp.child("settings.toml");
        f.write_str("throttle_ms = \"soon\"").unwrap();
        let err = load_settings_from(f.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
