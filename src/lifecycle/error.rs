use thiserror::Error;

use super::event::InstanceId;
use super::phase::Phase;

/// Transitions a tracker refuses to record. State is left untouched when
/// one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// The phase's prerequisite has not been observed, or a once-only phase
    /// was repeated.
    #[error("`{instance}`: cannot enter `{attempted}` from `{current}`")]
    OutOfOrder {
        instance: InstanceId,
        current: String,
        attempted: Phase,
    },

    /// Anything recorded after `destroying`.
    #[error("`{instance}`: `{attempted}` recorded after teardown")]
    AfterTeardown { instance: InstanceId, attempted: Phase },
}
