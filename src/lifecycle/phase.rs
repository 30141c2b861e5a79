use serde::Serialize;
use std::fmt;

/// A named point in a widget's lifecycle.
///
/// Declaration order is the display order of the "executed" badges and
/// matches the order in which a render host first reaches each phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Constructed,
    InputsApplied,
    Initialized,
    Recheck,
    ContentInit,
    ContentRecheck,
    ViewInit,
    ViewRecheck,
    Destroying,
}

/// Display/filter classification for a lifecycle event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Initialization,
    Change,
    Teardown,
}

impl Phase {
    pub const ALL: [Phase; 9] = [
        Phase::Constructed,
        Phase::InputsApplied,
        Phase::Initialized,
        Phase::Recheck,
        Phase::ContentInit,
        Phase::ContentRecheck,
        Phase::ViewInit,
        Phase::ViewRecheck,
        Phase::Destroying,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Phase::Constructed => "constructed",
            Phase::InputsApplied => "inputs-applied",
            Phase::Initialized => "initialized",
            Phase::Recheck => "recheck",
            Phase::ContentInit => "content-init",
            Phase::ContentRecheck => "content-recheck",
            Phase::ViewInit => "view-init",
            Phase::ViewRecheck => "view-recheck",
            Phase::Destroying => "destroying",
        }
    }

    /// Parse a kebab-case label back into a phase.
    pub fn from_label(s: &str) -> Option<Phase> {
        Phase::ALL.into_iter().find(|p| p.label() == s)
    }

    pub fn default_category(self) -> Category {
        match self {
            Phase::Constructed | Phase::Initialized | Phase::ContentInit | Phase::ViewInit => {
                Category::Initialization
            }
            Phase::InputsApplied
            | Phase::Recheck
            | Phase::ContentRecheck
            | Phase::ViewRecheck => Category::Change,
            Phase::Destroying => Category::Teardown,
        }
    }

    /// Phases a render host may fire any number of times per instance.
    pub fn is_recurring(self) -> bool {
        matches!(
            self,
            Phase::InputsApplied | Phase::Recheck | Phase::ContentRecheck | Phase::ViewRecheck
        )
    }

    /// The high-frequency phases that get a dedicated counter.
    pub fn is_recheck(self) -> bool {
        matches!(self, Phase::Recheck | Phase::ContentRecheck | Phase::ViewRecheck)
    }

    /// The phase that must already have been observed before this one is
    /// permitted. `None` means "nothing observed yet" (only `Constructed`).
    pub fn prerequisite(self) -> Option<Phase> {
        match self {
            Phase::Constructed => None,
            Phase::InputsApplied | Phase::Initialized | Phase::Destroying => {
                Some(Phase::Constructed)
            }
            Phase::Recheck | Phase::ContentInit => Some(Phase::Initialized),
            Phase::ContentRecheck | Phase::ViewInit => Some(Phase::ContentInit),
            Phase::ViewRecheck => Some(Phase::ViewInit),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::Initialization => "init",
            Category::Change => "change",
            Category::Teardown => "destroy",
        };
        f.write_str(s)
    }
}
