use std::fmt;

use super::error::LifecycleError;
use super::phase::{Category, Phase};
use super::tracker::{Collaborators, ElementRole, PhaseTracker, RecheckCounters};

/// Values a host pushes into the guest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuestInputs {
    pub input_value: String,
    pub counter: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuestStatus {
    Created,
    Initialized,
    ContentReady,
    ViewReady,
    Destroying,
}

impl fmt::Display for GuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GuestStatus::Created => "Created",
            GuestStatus::Initialized => "Initialized",
            GuestStatus::ContentReady => "Content Ready",
            GuestStatus::ViewReady => "View Ready",
            GuestStatus::Destroying => "Destroying",
        };
        f.write_str(s)
    }
}

/// The tracked inner widget of the lifecycle demo. Each `on_*` method is a
/// phase callback invoked by the render host.
pub struct LifecycleGuest {
    tracker: PhaseTracker,
    inputs: GuestInputs,
    inputs_seen: bool,
    status: GuestStatus,
    child_input_value: String,
    throttle_ms: u64,
}

impl LifecycleGuest {
    /// Create the instance. Nothing is recorded until [`on_construct`]
    /// runs, so a listener can be attached first.
    ///
    /// [`on_construct`]: Self::on_construct
    pub fn new(collab: &Collaborators, throttle_ms: u64) -> Self {
        LifecycleGuest {
            tracker: PhaseTracker::new(collab),
            inputs: GuestInputs::default(),
            inputs_seen: false,
            status: GuestStatus::Created,
            child_input_value: String::new(),
            throttle_ms,
        }
    }

    pub fn tracker(&self) -> &PhaseTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut PhaseTracker {
        &mut self.tracker
    }

    pub fn inputs(&self) -> &GuestInputs {
        &self.inputs
    }

    pub fn status(&self) -> GuestStatus {
        self.status
    }

    pub fn counters(&self) -> RecheckCounters {
        self.tracker.counters()
    }

    pub fn child_input_value(&self) -> &str {
        &self.child_input_value
    }

    /// Badge list: every phase with whether it has fired for this instance.
    pub fn badges(&self) -> Vec<(Phase, bool)> {
        Phase::ALL
            .into_iter()
            .map(|p| (p, self.tracker.has_observed(p)))
            .collect()
    }

    pub fn view_child_status(&self) -> &'static str {
        self.tracker.query_view_readiness().status_label()
    }

    pub fn content_child_status(&self) -> &'static str {
        self.tracker.query_content_readiness().status_label()
    }

    pub fn on_construct(&mut self) -> Result<(), LifecycleError> {
        self.tracker
            .record_phase(Phase::Constructed, "Component instance created", Category::Initialization)
    }

    /// Apply new input values. Only fields that differ are reported; a call
    /// with no differences after the first one records nothing.
    pub fn on_changes(&mut self, next: &GuestInputs) -> Result<(), LifecycleError> {
        let changes = self.describe_changes(next);
        if changes.is_empty() {
            return Ok(());
        }
        let msg = format!("Input properties changed: {}", changes.join(", "));
        self.tracker
            .record_phase(Phase::InputsApplied, &msg, Category::Change)?;
        self.inputs = next.clone();
        self.inputs_seen = true;
        Ok(())
    }

    pub fn on_init(&mut self) -> Result<(), LifecycleError> {
        self.tracker.record_phase(
            Phase::Initialized,
            "Component initialized, inputs are set",
            Category::Initialization,
        )?;
        self.status = GuestStatus::Initialized;
        Ok(())
    }

    pub fn on_check(&mut self) -> Result<(), LifecycleError> {
        let n = self.tracker.counters().recheck + 1;
        let msg = format!("Change detection cycle executed ({} times)", n);
        self.tracker
            .throttled_record_phase(Phase::Recheck, &msg, Category::Change, self.throttle_ms)?;
        Ok(())
    }

    pub fn on_content_init(&mut self) -> Result<(), LifecycleError> {
        let status = bound_status(&self.tracker, ElementRole::ProjectedButton);
        let msg = format!(
            "Projected content is now initialized. Content element status: {}",
            status
        );
        self.tracker
            .record_phase(Phase::ContentInit, &msg, Category::Initialization)?;
        self.status = GuestStatus::ContentReady;
        Ok(())
    }

    pub fn on_content_checked(&mut self) -> Result<(), LifecycleError> {
        let n = self.tracker.counters().content_recheck + 1;
        let msg = format!("Projected content checked ({} times)", n);
        self.tracker.throttled_record_phase(
            Phase::ContentRecheck,
            &msg,
            Category::Change,
            self.throttle_ms,
        )?;
        Ok(())
    }

    pub fn on_view_init(&mut self) -> Result<(), LifecycleError> {
        let status = bound_status(&self.tracker, ElementRole::ViewInput);
        let msg = format!("Component view initialized. View element status: {}", status);
        self.tracker
            .record_phase(Phase::ViewInit, &msg, Category::Initialization)?;
        self.status = GuestStatus::ViewReady;
        Ok(())
    }

    pub fn on_view_checked(&mut self) -> Result<(), LifecycleError> {
        let n = self.tracker.counters().view_recheck + 1;
        let msg = format!("Component view checked ({} times)", n);
        self.tracker.throttled_record_phase(
            Phase::ViewRecheck,
            &msg,
            Category::Change,
            self.throttle_ms,
        )?;
        Ok(())
    }

    pub fn on_destroy(&mut self) -> Result<(), LifecycleError> {
        self.tracker
            .record_phase(Phase::Destroying, "Component is being destroyed", Category::Teardown)?;
        self.status = GuestStatus::Destroying;
        Ok(())
    }

    /// Text typed into the guest's own view field.
    pub fn set_child_input(&mut self, value: impl Into<String>) {
        self.child_input_value = value.into();
    }

    pub fn child_input_mut(&mut self) -> &mut String {
        &mut self.child_input_value
    }

    pub fn on_child_button_click(&self) {
        tracing::info!(instance = self.tracker.id().as_str(), "child button clicked");
    }

    fn describe_changes(&self, next: &GuestInputs) -> Vec<String> {
        let prev = |s: String| if self.inputs_seen { s } else { "(unset)".to_string() };
        let mut out = Vec::new();
        if !self.inputs_seen || self.inputs.input_value != next.input_value {
            out.push(format!(
                "input_value: {} → {}",
                prev(self.inputs.input_value.clone()),
                next.input_value
            ));
        }
        if !self.inputs_seen || self.inputs.counter != next.counter {
            out.push(format!(
                "counter: {} → {}",
                prev(self.inputs.counter.to_string()),
                next.counter
            ));
        }
        out
    }
}

fn bound_status(tracker: &PhaseTracker, role: ElementRole) -> &'static str {
    if tracker.is_bound(role) {
        "Available"
    } else {
        "Not Found"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::clock::ManualClock;
    use crate::lifecycle::ids::SequentialIds;
    use crate::lifecycle::sink::MemorySink;
    use std::rc::Rc;

    fn guest() -> LifecycleGuest {
        let c = Collaborators::new(
            Rc::new(MemorySink::new()),
            Rc::new(ManualClock::new(0)),
            Rc::new(SequentialIds::new("g")),
        );
        LifecycleGuest::new(&c, 2000)
    }

    #[test]
    fn status_follows_callbacks() {
        let mut g = guest();
        assert_eq!(g.status(), GuestStatus::Created);
        g.on_construct().unwrap();
        g.on_init().unwrap();
        assert_eq!(g.status(), GuestStatus::Initialized);
        g.on_content_init().unwrap();
        assert_eq!(g.status(), GuestStatus::ContentReady);
        g.on_view_init().unwrap();
        assert_eq!(g.status().to_string(), "View Ready");
        g.on_destroy().unwrap();
        assert_eq!(g.status(), GuestStatus::Destroying);
    }

    #[test]
    fn first_changes_report_every_input() {
        let mut g = guest();
        g.on_construct().unwrap();
        let next = GuestInputs { input_value: "X".into(), counter: 0 };
        let (tx, rx) = std::sync::mpsc::channel();
        g.tracker_mut().subscribe(tx);
        g.on_changes(&next).unwrap();
        let ev = rx.try_recv().unwrap();
        assert_eq!(ev.phase, Phase::InputsApplied);
        assert_eq!(
            ev.message,
            "Input properties changed: input_value: (unset) → X, counter: (unset) → 0"
        );
        assert_eq!(g.inputs(), &next);
    }

    #[test]
    fn later_changes_report_only_differences() {
        let mut g = guest();
        g.on_construct().unwrap();
        g.on_changes(&GuestInputs { input_value: "a".into(), counter: 1 }).unwrap();
        g.on_init().unwrap();
        let (tx, rx) = std::sync::mpsc::channel();
        g.tracker_mut().subscribe(tx);
        g.on_changes(&GuestInputs { input_value: "a".into(), counter: 2 }).unwrap();
        assert_eq!(rx.try_recv().unwrap().message, "Input properties changed: counter: 1 → 2");
        g.on_changes(&GuestInputs { input_value: "a".into(), counter: 2 }).unwrap();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn element_status_reflects_bindings() {
        let mut g = guest();
        g.tracker_mut()
            .bind_element(ElementRole::ViewInput, crate::lifecycle::ElementHandle::new("#in"));
        assert_eq!(g.view_child_status(), "Not Available");
        g.on_construct().unwrap();
        g.on_init().unwrap();
        g.on_content_init().unwrap();
        assert_eq!(g.content_child_status(), "Not Found");
        g.on_view_init().unwrap();
        assert_eq!(g.view_child_status(), "Available");
    }

    #[test]
    fn badges_track_observed_phases() {
        let mut g = guest();
        g.on_construct().unwrap();
        g.on_init().unwrap();
        g.on_check().unwrap();
        let fired: Vec<Phase> = g.badges().into_iter().filter(|(_, on)| *on).map(|(p, _)| p).collect();
        assert_eq!(fired, vec![Phase::Constructed, Phase::Initialized, Phase::Recheck]);
        assert_eq!(g.counters().recheck, 1);
    }
}
