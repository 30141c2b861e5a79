use serde::Serialize;
use std::fmt;

use super::phase::{Category, Phase};

/// Opaque per-instantiation identity. Never reused within a process.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct InstanceId(String);

impl InstanceId {
    pub fn new(s: impl Into<String>) -> Self {
        InstanceId(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One notable transition in a widget's existence, as delivered to the
/// registered listener.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LifecycleEvent {
    pub instance: InstanceId,
    /// Per-instance emission counter, starting at 1.
    pub seq: u64,
    pub phase: Phase,
    pub message: String,
    pub category: Category,
    /// Clock reading (milliseconds) at emission.
    pub at_ms: u64,
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}): {}",
            self.instance, self.phase, self.category, self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_instance_and_phase() {
        let ev = LifecycleEvent {
            instance: InstanceId::new("w-1"),
            seq: 1,
            phase: Phase::Initialized,
            message: "ready".into(),
            category: Category::Initialization,
            at_ms: 0,
        };
        assert_eq!(ev.to_string(), "[w-1] initialized (init): ready");
    }

    #[test]
    fn serializes_with_kebab_phase() {
        let ev = LifecycleEvent {
            instance: InstanceId::new("abc"),
            seq: 3,
            phase: Phase::ViewRecheck,
            message: "m".into(),
            category: Category::Change,
            at_ms: 42,
        };
        let v = serde_json::to_value(&ev).unwrap();
        assert_eq!(v["instance"], "abc");
        assert_eq!(v["phase"], "view-recheck");
        assert_eq!(v["category"], "change");
        assert_eq!(v["at_ms"], 42);
    }
}
