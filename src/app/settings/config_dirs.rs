use directories_next::ProjectDirs;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "settings.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "learnHub")
}

/// Per-user configuration directory, if the platform has one.
pub fn project_config_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.config_dir().to_path_buf())
}

/// Per-user cache directory; default home of the UI log file.
pub fn user_cache_dir() -> Option<PathBuf> {
    project_dirs().map(|d| d.cache_dir().to_path_buf())
}

pub fn settings_file() -> Option<PathBuf> {
    project_config_dir().map(|d| d.join(SETTINGS_FILE))
}
