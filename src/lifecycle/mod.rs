//! Widget lifecycle tracking.
//!
//! A [`PhaseTracker`] records the phases one widget instance goes through,
//! counts the high-frequency recheck phases and forwards every transition to
//! an optional listener. [`HostRelay`] is that listener on the hosting side.
//! [`LifecycleGuest`] and [`LifecycleWrapper`] are the two demo widgets built
//! on top, the wrapper acting as the render host that invokes the guest's
//! phase callbacks.

pub mod clock;
pub mod error;
pub mod event;
pub mod guest;
pub mod ids;
pub mod phase;
pub mod relay;
pub mod sink;
pub mod tracker;
pub mod wrapper;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::LifecycleError;
pub use event::{InstanceId, LifecycleEvent};
pub use guest::{GuestInputs, GuestStatus, LifecycleGuest};
pub use ids::{IdSource, RandomIds, SequentialIds};
pub use phase::{Category, Phase};
pub use relay::{HostRelay, PumpStatus, RelayEntry, Source};
pub use sink::{LogLine, LogSink, MemorySink, TracingSink};
pub use tracker::{
    Collaborators, ElementHandle, ElementRole, PhaseTracker, Readiness, RecheckCounters,
    WidgetLifecycleState,
};
pub use wrapper::LifecycleWrapper;
