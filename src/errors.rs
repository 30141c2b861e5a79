use thiserror::Error;

use crate::app::settings::SettingsError;
use crate::lifecycle::LifecycleError;
use crate::logging::LoggingError;
use crate::runner::terminal::TerminalError;

/// Top-level error of the library surface. The binary reports these through
/// `anyhow`.
#[derive(Error, Debug)]
pub enum HubError {
    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Terminal(#[from] TerminalError),

    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    #[error(transparent)]
    Logging(#[from] LoggingError),
}
