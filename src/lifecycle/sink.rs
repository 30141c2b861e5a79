use std::cell::RefCell;
use tracing::Level;

use super::event::InstanceId;
use super::phase::Phase;

/// Diagnostic output for lifecycle trackers. Injected so the core never
/// writes to a process-wide destination on its own.
pub trait LogSink {
    fn log(&self, level: Level, instance: &InstanceId, phase: Phase, message: &str);
}

/// Forwards to `tracing` with the instance and phase as structured fields.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn log(&self, level: Level, instance: &InstanceId, phase: Phase, message: &str) {
        let id = instance.as_str();
        let phase = phase.label();
        match level {
            Level::ERROR => tracing::error!(instance = id, phase, "{}", message),
            Level::WARN => tracing::warn!(instance = id, phase, "{}", message),
            Level::INFO => tracing::info!(instance = id, phase, "{}", message),
            Level::DEBUG => tracing::debug!(instance = id, phase, "{}", message),
            Level::TRACE => tracing::trace!(instance = id, phase, "{}", message),
        }
    }
}

/// A line captured by [`MemorySink`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogLine {
    pub level: Level,
    pub instance: InstanceId,
    pub phase: Phase,
    pub message: String,
}

/// Keeps every line in memory. Used by tests and by the headless trace.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: RefCell<Vec<LogLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.borrow().clone()
    }

    pub fn count_at(&self, level: Level) -> usize {
        self.lines.borrow().iter().filter(|l| l.level == level).count()
    }
}

impl LogSink for MemorySink {
    fn log(&self, level: Level, instance: &InstanceId, phase: Phase, message: &str) {
        self.lines.borrow_mut().push(LogLine {
            level,
            instance: instance.clone(),
            phase,
            message: message.to_string(),
        });
    }
}
