//! Learning hub: a terminal walkthrough of widget concepts built around an
//! instrumented lifecycle core.
//!
//! [`lifecycle`] is the reusable part: phase tracking with ordering rules,
//! throttled recheck notifications, element readiness and a host relay.
//! [`app`], [`ui`] and [`runner`] wrap it in a `ratatui` application.

pub mod app;
pub mod cli;
pub mod errors;
pub mod input;
pub mod lifecycle;
pub mod logging;
pub mod runner;
pub mod samples;
pub mod ui;

pub use crate::app::{App, InputTarget, Mode, Route};
pub use crate::errors::HubError;
