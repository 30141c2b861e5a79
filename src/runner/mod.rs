pub mod event_loop_main;
pub mod handlers;
pub mod terminal;
pub mod trace;

pub use event_loop_main::run_app;
pub use trace::{run_trace, TraceOptions, TraceSummary};
