pub mod config_dirs;
pub mod keybinds;
pub mod read_settings;
pub mod write_settings;

use std::path::PathBuf;
use thiserror::Error;

// Re-export commonly used types/functions for convenience
pub use config_dirs::{project_config_dir, settings_file, user_cache_dir};
pub use read_settings::{load_settings, load_settings_from};
pub use write_settings::{save_settings, save_settings_to, IdStyle, Settings};

/// Errors from loading or saving settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings in `{path}`: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("no configuration directory available on this platform")]
    NoConfigDir,
}
