use super::error::LifecycleError;
use super::guest::{GuestInputs, LifecycleGuest};
use super::phase::{Category, Phase};
use super::relay::{HostRelay, PumpStatus};
use super::tracker::{Collaborators, ElementHandle, ElementRole, PhaseTracker};

pub const INITIAL_INPUT_VALUE: &str = "Initial value";

/// Host widget of the lifecycle demo. Owns the guest, drives its phase
/// callbacks in render order, and watches both lifecycles through a
/// [`HostRelay`].
///
/// On mount the host reaches content-ready before the guest runs any of its
/// own readiness phases, and view-ready only after the guest's view is up.
pub struct LifecycleWrapper {
    collab: Collaborators,
    tracker: PhaseTracker,
    relay: HostRelay,
    guest: Option<LifecycleGuest>,
    inputs: GuestInputs,
    throttle_ms: u64,
    mounted: bool,
    passes: u64,
}

impl LifecycleWrapper {
    pub fn new(collab: Collaborators, throttle_ms: u64, relay_capacity: usize) -> Self {
        let tracker = PhaseTracker::new(&collab);
        LifecycleWrapper {
            collab,
            tracker,
            relay: HostRelay::new(relay_capacity),
            guest: None,
            inputs: GuestInputs { input_value: INITIAL_INPUT_VALUE.to_string(), counter: 0 },
            throttle_ms,
            mounted: false,
            passes: 0,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn host_tracker(&self) -> &PhaseTracker {
        &self.tracker
    }

    pub fn guest(&self) -> Option<&LifecycleGuest> {
        self.guest.as_ref()
    }

    pub fn guest_mut(&mut self) -> Option<&mut LifecycleGuest> {
        self.guest.as_mut()
    }

    pub fn relay(&self) -> &HostRelay {
        &self.relay
    }

    pub fn relay_mut(&mut self) -> &mut HostRelay {
        &mut self.relay
    }

    pub fn inputs(&self) -> &GuestInputs {
        &self.inputs
    }

    /// Rendering passes run since mount, the initial one included.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    pub fn throttle_ms(&self) -> u64 {
        self.throttle_ms
    }

    /// Applies to guests created after the call.
    pub fn set_throttle_ms(&mut self, ms: u64) {
        self.throttle_ms = ms;
    }

    /// First render: host phases around a full guest start-up.
    pub fn mount(&mut self) {
        if self.mounted {
            tracing::warn!(instance = self.tracker.id().as_str(), "wrapper already mounted");
            return;
        }
        self.relay.attach_host(&mut self.tracker);
        self.tracker
            .bind_element(ElementRole::ViewButton, ElementHandle::new("#viewButton"));
        log_rejection(self.tracker.record_phase(
            Phase::Constructed,
            "Wrapper instance created",
            Category::Initialization,
        ));
        log_rejection(self.tracker.record_phase(
            Phase::Initialized,
            "Wrapper initialized",
            Category::Initialization,
        ));
        log_rejection(self.tracker.record_phase(
            Phase::ContentInit,
            "Wrapper content ready; the projected button belongs to the guest's content, not here",
            Category::Initialization,
        ));
        self.relay.pump_host();

        self.spawn_guest();

        // Host view readiness is reached only now, after the guest's view.
        let view_button = if self.tracker.is_bound(ElementRole::ViewButton) {
            "available"
        } else {
            "missing"
        };
        log_rejection(self.tracker.record_phase(
            Phase::ViewInit,
            &format!("Wrapper view ready; view button {}", view_button),
            Category::Initialization,
        ));
        self.relay.pump_host();
        self.mounted = true;
        self.passes = 1;
    }

    /// One change-detection pass over the guest.
    pub fn detect_changes(&mut self) {
        if !self.mounted {
            return;
        }
        if let Some(g) = self.guest.as_mut() {
            log_rejection(g.on_changes(&self.inputs));
            log_rejection(g.on_check());
            log_rejection(g.on_content_checked());
            log_rejection(g.on_view_checked());
        }
        self.relay.pump_guest();
        self.passes += 1;
    }

    pub fn set_input_value(&mut self, value: impl Into<String>) {
        self.inputs.input_value = value.into();
        self.detect_changes();
    }

    pub fn increment_counter(&mut self) {
        self.inputs.counter += 1;
        self.detect_changes();
    }

    /// Destroy the guest if present, otherwise create and start a new one.
    pub fn toggle_guest(&mut self) {
        if !self.mounted {
            return;
        }
        if self.guest.is_some() {
            self.destroy_guest();
        } else {
            self.spawn_guest();
        }
        self.passes += 1;
    }

    /// Remove the guest without running its teardown phase. The relay sees a
    /// disconnected stream and detaches without error.
    pub fn drop_guest_silently(&mut self) -> PumpStatus {
        self.guest = None;
        self.relay.pump_guest()
    }

    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.destroy_guest();
        log_rejection(self.tracker.record_phase(
            Phase::Destroying,
            "Wrapper is being destroyed",
            Category::Teardown,
        ));
        self.relay.pump_host();
        self.mounted = false;
    }

    fn spawn_guest(&mut self) {
        let mut g = LifecycleGuest::new(&self.collab, self.throttle_ms);
        self.relay.attach_guest(g.tracker_mut());
        g.tracker_mut()
            .bind_element(ElementRole::ProjectedButton, ElementHandle::new("#projectedButton"));
        g.tracker_mut()
            .bind_element(ElementRole::ViewInput, ElementHandle::new("#childInput"));
        g.tracker_mut()
            .bind_element(ElementRole::ViewButton, ElementHandle::new("#childButton"));

        log_rejection(g.on_construct());
        log_rejection(g.on_changes(&self.inputs));
        log_rejection(g.on_init());
        log_rejection(g.on_check());
        log_rejection(g.on_content_init());
        log_rejection(g.on_content_checked());
        log_rejection(g.on_view_init());
        log_rejection(g.on_view_checked());
        self.guest = Some(g);
        self.relay.pump_guest();
    }

    fn destroy_guest(&mut self) {
        if let Some(mut g) = self.guest.take() {
            log_rejection(g.on_destroy());
            drop(g);
            self.relay.pump_guest();
        }
    }
}

/// A refused transition is reported and the pass carries on.
fn log_rejection<T>(res: Result<T, LifecycleError>) {
    if let Err(e) = res {
        tracing::warn!("lifecycle transition rejected: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::clock::ManualClock;
    use crate::lifecycle::ids::SequentialIds;
    use crate::lifecycle::relay::Source;
    use crate::lifecycle::sink::MemorySink;
    use std::rc::Rc;

    fn wrapper() -> (LifecycleWrapper, Rc<ManualClock>) {
        let clock = Rc::new(ManualClock::new(0));
        let c = Collaborators::new(
            Rc::new(MemorySink::new()),
            clock.clone(),
            Rc::new(SequentialIds::new("w")),
        );
        (LifecycleWrapper::new(c, 2000, 500), clock)
    }

    #[test]
    fn host_content_ready_precedes_guest_view_ready() {
        let (mut w, _) = wrapper();
        w.mount();
        let order: Vec<(Source, Phase)> =
            w.relay().entries().map(|e| (e.source, e.event.phase)).collect();
        let pos = |s: Source, p: Phase| order.iter().position(|x| *x == (s, p)).unwrap();
        assert!(pos(Source::Host, Phase::ContentInit) < pos(Source::Guest, Phase::ViewInit));
        assert!(pos(Source::Guest, Phase::ContentInit) < pos(Source::Guest, Phase::ViewInit));
        assert!(pos(Source::Guest, Phase::ViewInit) < pos(Source::Host, Phase::ViewInit));
    }

    #[test]
    fn host_sees_its_own_view_button_only_after_view_init() {
        let (mut w, _) = wrapper();
        w.mount();
        assert!(w
            .host_tracker()
            .query_element(ElementRole::ViewButton)
            .is_available());
        // projected content is never the host's to query
        assert!(!w.host_tracker().query_content_readiness().is_available());
    }

    #[test]
    fn input_changes_reach_guest() {
        let (mut w, _) = wrapper();
        w.mount();
        w.set_input_value("Updated");
        w.increment_counter();
        let g = w.guest().unwrap();
        assert_eq!(g.inputs().input_value, "Updated");
        assert_eq!(g.inputs().counter, 1);
        let applied = w
            .relay()
            .entries()
            .filter(|e| e.source == Source::Guest && e.event.phase == Phase::InputsApplied)
            .count();
        assert_eq!(applied, 3);
    }

    #[test]
    fn rechecks_count_every_pass_but_stay_throttled() {
        let (mut w, clock) = wrapper();
        w.mount();
        for _ in 0..4 {
            clock.advance(100);
            w.detect_changes();
        }
        let g = w.guest().unwrap();
        assert_eq!(g.counters().recheck, 5);
        assert_eq!(g.counters().view_recheck, 5);
        let recheck_events = w
            .relay()
            .entries()
            .filter(|e| e.event.phase == Phase::Recheck)
            .count();
        assert_eq!(recheck_events, 1);
        assert_eq!(w.passes(), 5);
    }

    #[test]
    fn toggle_destroys_then_recreates_with_new_identity() {
        let (mut w, _) = wrapper();
        w.mount();
        let first = w.guest().unwrap().tracker().id().clone();
        w.toggle_guest();
        assert!(w.guest().is_none());
        assert!(w
            .relay()
            .entries()
            .any(|e| e.event.instance == first && e.event.phase == Phase::Destroying));
        w.toggle_guest();
        let second = w.guest().unwrap().tracker().id().clone();
        assert_ne!(first, second);
    }

    #[test]
    fn silent_removal_is_not_an_error() {
        let (mut w, _) = wrapper();
        w.mount();
        assert_eq!(w.drop_guest_silently(), PumpStatus::Detached);
        assert!(!w.relay().is_guest_attached());
        w.detect_changes();
        assert!(w.guest().is_none());
    }

    #[test]
    fn unmount_tears_down_both() {
        let (mut w, _) = wrapper();
        w.mount();
        w.unmount();
        assert!(!w.is_mounted());
        assert!(w.host_tracker().is_destroyed());
        let last = w.relay().entries().last().unwrap();
        assert_eq!(last.source, Source::Host);
        assert_eq!(last.event.phase, Phase::Destroying);
    }
}
