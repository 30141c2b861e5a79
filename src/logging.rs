//! Global `tracing` subscriber setup.
//!
//! While the terminal UI owns stdout, log lines go to a file through a
//! non-blocking `tracing-appender` writer. Headless commands log to stderr so
//! stdout stays machine-readable. `RUST_LOG` overrides the default filter.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_log::LogTracer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

use crate::app::settings::user_cache_dir;

pub const DEFAULT_FILTER: &str = "learnHub=info";
pub const LOG_FILE_NAME: &str = "learnHub.log";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("could not prepare log directory `{path}`: {source}")]
    Dir { path: PathBuf, source: io::Error },

    #[error("a global subscriber is already installed")]
    AlreadySet(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("no cache directory available for the log file")]
    NoLogDir,
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Resolve the log file: an explicit path wins, otherwise the per-user
/// cache directory.
pub fn log_path(explicit: Option<&Path>) -> Result<PathBuf, LoggingError> {
    match explicit {
        Some(p) => Ok(p.to_path_buf()),
        None => user_cache_dir()
            .map(|d| d.join(LOG_FILE_NAME))
            .ok_or(LoggingError::NoLogDir),
    }
}

/// Install a subscriber writing to `path`. The returned guard flushes
/// buffered lines on drop and must live as long as the process logs.
pub fn init_file(path: &Path) -> Result<WorkerGuard, LoggingError> {
    let dir = path
        .parent()
        .filter(|d| !d.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::Dir {
        path: dir.to_path_buf(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| LOG_FILE_NAME.into());

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let _ = LogTracer::init();
    let subscriber = Registry::default()
        .with(env_filter())
        .with(fmt::layer().with_writer(writer).with_ansi(false).with_target(true));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}

/// Install a subscriber writing to stderr.
pub fn init_stderr() -> Result<(), LoggingError> {
    let _ = LogTracer::init();
    let subscriber = Registry::default()
        .with(env_filter())
        .with(fmt::layer().with_writer(io::stderr).with_target(true));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_log_path_wins() {
        let p = log_path(Some(Path::new("/tmp/x/hub.log"))).unwrap();
        assert_eq!(p, PathBuf::from("/tmp/x/hub.log"));
    }

    #[test]
    fn default_filter_targets_this_crate() {
        assert!(DEFAULT_FILTER.starts_with("learnHub"));
    }
}
