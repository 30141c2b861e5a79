use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use std::sync::mpsc::Sender;
use tracing::Level;

use super::clock::{Clock, SystemClock};
use super::error::LifecycleError;
use super::event::{InstanceId, LifecycleEvent};
use super::ids::{IdSource, SequentialIds};
use super::phase::{Category, Phase};
use super::sink::{LogSink, TracingSink};

/// The injected collaborators every tracker needs. Cheap to clone; all
/// trackers created from one `Collaborators` share the same clock, sink
/// and id source.
#[derive(Clone)]
pub struct Collaborators {
    pub sink: Rc<dyn LogSink>,
    pub clock: Rc<dyn Clock>,
    pub ids: Rc<dyn IdSource>,
}

impl Collaborators {
    pub fn new(sink: Rc<dyn LogSink>, clock: Rc<dyn Clock>, ids: Rc<dyn IdSource>) -> Self {
        Collaborators { sink, clock, ids }
    }
}

impl Default for Collaborators {
    /// Tracing output, wall clock, sequential ids.
    fn default() -> Self {
        Collaborators {
            sink: Rc::new(TracingSink),
            clock: Rc::new(SystemClock::new()),
            ids: Rc::new(SequentialIds::default()),
        }
    }
}

/// Elements a render host can hand to a widget once they exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementRole {
    /// Text field in the widget's own view.
    ViewInput,
    /// Button in the widget's own view.
    ViewButton,
    /// Button supplied by the caller and projected into the widget.
    ProjectedButton,
}

impl ElementRole {
    pub fn is_projected(self) -> bool {
        matches!(self, ElementRole::ProjectedButton)
    }

    /// Phase after which a handle for this role may be referenced.
    pub fn readiness_phase(self) -> Phase {
        if self.is_projected() {
            Phase::ContentInit
        } else {
            Phase::ViewInit
        }
    }
}

/// Host-provided reference to a rendered element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElementHandle(String);

impl ElementHandle {
    pub fn new(s: impl Into<String>) -> Self {
        ElementHandle(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Result of an element query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Readiness<T> {
    /// The readiness phase has not been recorded yet.
    Unavailable,
    /// Ready, but the host never bound an element for the role.
    Missing,
    Available(T),
}

impl<T> Readiness<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, Readiness::Available(_))
    }

    pub fn status_label(&self) -> &'static str {
        match self {
            Readiness::Unavailable => "Not Available",
            Readiness::Missing => "Not Found",
            Readiness::Available(_) => "Available",
        }
    }
}

/// Invocation counts for the phases that fire on every rendering pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RecheckCounters {
    pub recheck: u64,
    pub content_recheck: u64,
    pub view_recheck: u64,
}

impl RecheckCounters {
    pub fn get(&self, phase: Phase) -> Option<u64> {
        match phase {
            Phase::Recheck => Some(self.recheck),
            Phase::ContentRecheck => Some(self.content_recheck),
            Phase::ViewRecheck => Some(self.view_recheck),
            _ => None,
        }
    }

    fn bump(&mut self, phase: Phase) {
        match phase {
            Phase::Recheck => self.recheck += 1,
            Phase::ContentRecheck => self.content_recheck += 1,
            Phase::ViewRecheck => self.view_recheck += 1,
            _ => {}
        }
    }
}

/// Per-instance lifecycle record.
#[derive(Clone, Debug)]
pub struct WidgetLifecycleState {
    pub id: InstanceId,
    pub current_phase: Option<Phase>,
    /// Membership only; a recurring phase appears once.
    pub observed: BTreeSet<Phase>,
    pub counters: RecheckCounters,
}

enum Admission {
    Accept,
    RepeatedTeardown,
}

/// Records the phases one widget instance passes through and notifies an
/// optional listener of each.
pub struct PhaseTracker {
    state: WidgetLifecycleState,
    sink: Rc<dyn LogSink>,
    clock: Rc<dyn Clock>,
    listener: Option<Sender<LifecycleEvent>>,
    last_emit: HashMap<Phase, u64>,
    seq: u64,
    elements: HashMap<ElementRole, ElementHandle>,
}

impl PhaseTracker {
    pub fn new(collab: &Collaborators) -> Self {
        PhaseTracker {
            state: WidgetLifecycleState {
                id: collab.ids.next_id(),
                current_phase: None,
                observed: BTreeSet::new(),
                counters: RecheckCounters::default(),
            },
            sink: Rc::clone(&collab.sink),
            clock: Rc::clone(&collab.clock),
            listener: None,
            last_emit: HashMap::new(),
            seq: 0,
            elements: HashMap::new(),
        }
    }

    pub fn id(&self) -> &InstanceId {
        &self.state.id
    }

    pub fn state(&self) -> &WidgetLifecycleState {
        &self.state
    }

    pub fn current_phase(&self) -> Option<Phase> {
        self.state.current_phase
    }

    pub fn observed(&self) -> &BTreeSet<Phase> {
        &self.state.observed
    }

    pub fn has_observed(&self, phase: Phase) -> bool {
        self.state.observed.contains(&phase)
    }

    pub fn counters(&self) -> RecheckCounters {
        self.state.counters
    }

    pub fn is_destroyed(&self) -> bool {
        self.has_observed(Phase::Destroying)
    }

    /// Register the listener that receives every emitted event. Replaces
    /// any previous listener.
    pub fn subscribe(&mut self, tx: Sender<LifecycleEvent>) {
        self.listener = Some(tx);
    }

    pub fn unsubscribe(&mut self) {
        self.listener = None;
    }

    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    /// Record `phase`, bump its counter when it is a recheck phase, log it
    /// and notify the listener.
    ///
    /// A repeated `Destroying` is ignored with a warning and still returns
    /// `Ok`. Transitions the state machine does not permit are rejected and
    /// leave the state untouched.
    pub fn record_phase(
        &mut self,
        phase: Phase,
        message: &str,
        category: Category,
    ) -> Result<(), LifecycleError> {
        if let Admission::RepeatedTeardown = self.admit(phase)? {
            return Ok(());
        }
        self.apply(phase);
        self.emit(phase, message, category);
        Ok(())
    }

    /// Like [`record_phase`](Self::record_phase), but the log line and the
    /// notification are skipped when less than `min_interval_ms` has passed
    /// since the last emission for `phase` on this instance. Counters and
    /// the observed set are always updated.
    ///
    /// Returns whether a notification went out.
    pub fn throttled_record_phase(
        &mut self,
        phase: Phase,
        message: &str,
        category: Category,
        min_interval_ms: u64,
    ) -> Result<bool, LifecycleError> {
        if let Admission::RepeatedTeardown = self.admit(phase)? {
            return Ok(false);
        }
        self.apply(phase);
        let now = self.clock.now_ms();
        let due = match self.last_emit.get(&phase) {
            Some(&last) => now.saturating_sub(last) >= min_interval_ms,
            None => true,
        };
        if due {
            self.emit(phase, message, category);
        }
        Ok(due)
    }

    /// Hand the tracker a reference to a rendered element. Accepted at any
    /// time; only exposed once the role's readiness phase is recorded.
    pub fn bind_element(&mut self, role: ElementRole, handle: ElementHandle) {
        let msg = format!("bound {:?} -> {}", role, handle.as_str());
        self.sink.log(Level::DEBUG, &self.state.id, role.readiness_phase(), &msg);
        self.elements.insert(role, handle);
    }

    pub fn is_bound(&self, role: ElementRole) -> bool {
        self.elements.contains_key(&role)
    }

    pub fn query_element(&self, role: ElementRole) -> Readiness<&ElementHandle> {
        if !self.has_observed(role.readiness_phase()) {
            return Readiness::Unavailable;
        }
        match self.elements.get(&role) {
            Some(h) => Readiness::Available(h),
            None => Readiness::Missing,
        }
    }

    /// Readiness of the widget's own view text field.
    pub fn query_view_readiness(&self) -> Readiness<&ElementHandle> {
        self.query_element(ElementRole::ViewInput)
    }

    /// Readiness of the caller-supplied projected button.
    pub fn query_content_readiness(&self) -> Readiness<&ElementHandle> {
        self.query_element(ElementRole::ProjectedButton)
    }

    fn admit(&self, phase: Phase) -> Result<Admission, LifecycleError> {
        if self.is_destroyed() {
            if phase == Phase::Destroying {
                self.sink.log(
                    Level::WARN,
                    &self.state.id,
                    phase,
                    "already destroying; repeated teardown ignored",
                );
                return Ok(Admission::RepeatedTeardown);
            }
            let err = LifecycleError::AfterTeardown {
                instance: self.state.id.clone(),
                attempted: phase,
            };
            self.sink.log(Level::WARN, &self.state.id, phase, &err.to_string());
            return Err(err);
        }

        let missing_prereq = match phase.prerequisite() {
            Some(pre) => !self.has_observed(pre),
            None => false,
        };
        let repeated = !phase.is_recurring() && self.has_observed(phase);
        if missing_prereq || repeated {
            let err = LifecycleError::OutOfOrder {
                instance: self.state.id.clone(),
                current: self
                    .state
                    .current_phase
                    .map(|p| p.label().to_string())
                    .unwrap_or_else(|| "nothing".to_string()),
                attempted: phase,
            };
            self.sink.log(Level::WARN, &self.state.id, phase, &err.to_string());
            return Err(err);
        }
        Ok(Admission::Accept)
    }

    fn apply(&mut self, phase: Phase) {
        self.state.observed.insert(phase);
        self.state.current_phase = Some(phase);
        self.state.counters.bump(phase);
    }

    fn emit(&mut self, phase: Phase, message: &str, category: Category) {
        let now = self.clock.now_ms();
        self.last_emit.insert(phase, now);
        self.seq += 1;

        let level = if phase.is_recheck() { Level::DEBUG } else { Level::INFO };
        self.sink.log(level, &self.state.id, phase, message);

        if let Some(tx) = &self.listener {
            let ev = LifecycleEvent {
                instance: self.state.id.clone(),
                seq: self.seq,
                phase,
                message: message.to_string(),
                category,
                at_ms: now,
            };
            if tx.send(ev).is_err() {
                // Receiver dropped: the host is gone, which is a normal end of life.
                self.sink.log(
                    Level::DEBUG,
                    &self.state.id,
                    phase,
                    "listener disconnected; notifications stopped",
                );
                self.listener = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::clock::ManualClock;
    use crate::lifecycle::sink::MemorySink;
    use std::sync::mpsc::{channel, Receiver};

    struct Rig {
        tracker: PhaseTracker,
        rx: Receiver<LifecycleEvent>,
        clock: Rc<ManualClock>,
        sink: Rc<MemorySink>,
    }

    fn rig() -> Rig {
        let clock = Rc::new(ManualClock::new(0));
        let sink = Rc::new(MemorySink::new());
        let collab = Collaborators::new(
            sink.clone(),
            clock.clone(),
            Rc::new(SequentialIds::new("t")),
        );
        let mut tracker = PhaseTracker::new(&collab);
        let (tx, rx) = channel();
        tracker.subscribe(tx);
        Rig { tracker, rx, clock, sink }
    }

    fn rec(t: &mut PhaseTracker, p: Phase) -> Result<(), LifecycleError> {
        t.record_phase(p, p.label(), p.default_category())
    }

    #[test]
    fn full_ordered_run_emits_once_per_phase() {
        let mut r = rig();
        let seq = [
            Phase::Constructed,
            Phase::InputsApplied,
            Phase::Initialized,
            Phase::ContentInit,
            Phase::ViewInit,
            Phase::Destroying,
        ];
        for p in seq {
            rec(&mut r.tracker, p).unwrap();
        }
        let got: Vec<Phase> = r.rx.try_iter().map(|e| e.phase).collect();
        assert_eq!(got, seq.to_vec());
        let observed: Vec<Phase> = r.tracker.observed().iter().copied().collect();
        assert_eq!(observed, seq.to_vec());
        assert_eq!(r.tracker.counters(), RecheckCounters::default());
    }

    #[test]
    fn inputs_applied_is_optional() {
        let mut r = rig();
        rec(&mut r.tracker, Phase::Constructed).unwrap();
        rec(&mut r.tracker, Phase::Initialized).unwrap();
        assert_eq!(r.tracker.current_phase(), Some(Phase::Initialized));
        assert!(!r.tracker.has_observed(Phase::InputsApplied));
    }

    #[test]
    fn recurring_phase_added_once_but_emitted_every_time() {
        let mut r = rig();
        rec(&mut r.tracker, Phase::Constructed).unwrap();
        rec(&mut r.tracker, Phase::Initialized).unwrap();
        for _ in 0..3 {
            rec(&mut r.tracker, Phase::Recheck).unwrap();
        }
        assert_eq!(r.tracker.counters().recheck, 3);
        assert_eq!(r.tracker.observed().len(), 3);
        let rechecks = r.rx.try_iter().filter(|e| e.phase == Phase::Recheck).count();
        assert_eq!(rechecks, 3);
    }

    #[test]
    fn throttle_counts_every_call_but_notifies_once_in_window() {
        let mut r = rig();
        rec(&mut r.tracker, Phase::Constructed).unwrap();
        rec(&mut r.tracker, Phase::Initialized).unwrap();
        let _ = r.rx.try_iter().count();

        let mut emitted = 0;
        for _ in 0..5 {
            if r
                .tracker
                .throttled_record_phase(Phase::Recheck, "check", Category::Change, 2000)
                .unwrap()
            {
                emitted += 1;
            }
            r.clock.advance(100);
        }
        assert_eq!(r.tracker.counters().recheck, 5);
        assert_eq!(emitted, 1);
        assert_eq!(r.rx.try_iter().count(), 1);
    }

    #[test]
    fn throttle_window_reopens_after_interval() {
        let mut r = rig();
        rec(&mut r.tracker, Phase::Constructed).unwrap();
        rec(&mut r.tracker, Phase::Initialized).unwrap();
        let _ = r.rx.try_iter().count();

        assert!(r.tracker.throttled_record_phase(Phase::Recheck, "a", Category::Change, 2000).unwrap());
        r.clock.advance(1999);
        assert!(!r.tracker.throttled_record_phase(Phase::Recheck, "b", Category::Change, 2000).unwrap());
        r.clock.advance(1);
        assert!(r.tracker.throttled_record_phase(Phase::Recheck, "c", Category::Change, 2000).unwrap());
        let msgs: Vec<String> = r.rx.try_iter().map(|e| e.message).collect();
        assert_eq!(msgs, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn throttle_is_tracked_per_phase() {
        let mut r = rig();
        for p in [Phase::Constructed, Phase::Initialized, Phase::ContentInit] {
            rec(&mut r.tracker, p).unwrap();
        }
        assert!(r.tracker.throttled_record_phase(Phase::Recheck, "r", Category::Change, 2000).unwrap());
        assert!(r
            .tracker
            .throttled_record_phase(Phase::ContentRecheck, "c", Category::Change, 2000)
            .unwrap());
    }

    #[test]
    fn second_teardown_is_a_logged_noop() {
        let mut r = rig();
        rec(&mut r.tracker, Phase::Constructed).unwrap();
        rec(&mut r.tracker, Phase::Destroying).unwrap();
        let observed_before = r.tracker.observed().clone();
        let counters_before = r.tracker.counters();
        let warns_before = r.sink.count_at(Level::WARN);

        assert!(rec(&mut r.tracker, Phase::Destroying).is_ok());
        assert_eq!(r.tracker.observed(), &observed_before);
        assert_eq!(r.tracker.counters(), counters_before);
        assert_eq!(r.sink.count_at(Level::WARN), warns_before + 1);
        let teardowns = r.rx.try_iter().filter(|e| e.phase == Phase::Destroying).count();
        assert_eq!(teardowns, 1);
    }

    #[test]
    fn nothing_after_teardown() {
        let mut r = rig();
        rec(&mut r.tracker, Phase::Constructed).unwrap();
        rec(&mut r.tracker, Phase::Initialized).unwrap();
        rec(&mut r.tracker, Phase::Destroying).unwrap();
        let err = rec(&mut r.tracker, Phase::Recheck).unwrap_err();
        assert!(matches!(err, LifecycleError::AfterTeardown { attempted: Phase::Recheck, .. }));
        assert_eq!(r.tracker.counters().recheck, 0);
        assert_eq!(r.tracker.current_phase(), Some(Phase::Destroying));
    }

    #[test]
    fn out_of_order_is_rejected_without_state_change() {
        let mut r = rig();
        rec(&mut r.tracker, Phase::Constructed).unwrap();
        let err = rec(&mut r.tracker, Phase::ViewInit).unwrap_err();
        assert!(matches!(err, LifecycleError::OutOfOrder { attempted: Phase::ViewInit, .. }));
        assert_eq!(r.tracker.current_phase(), Some(Phase::Constructed));
        assert_eq!(r.tracker.observed().len(), 1);

        rec(&mut r.tracker, Phase::Initialized).unwrap();
        // view before content is refused too
        assert!(rec(&mut r.tracker, Phase::ViewInit).is_err());
        assert!(rec(&mut r.tracker, Phase::Initialized).is_err());
        assert!(rec(&mut r.tracker, Phase::Constructed).is_err());
    }

    #[test]
    fn nothing_before_construction() {
        let mut r = rig();
        assert!(rec(&mut r.tracker, Phase::Initialized).is_err());
        assert!(rec(&mut r.tracker, Phase::Destroying).is_err());
        assert!(r.tracker.observed().is_empty());
    }

    #[test]
    fn readiness_flips_only_after_phase() {
        let mut r = rig();
        rec(&mut r.tracker, Phase::Constructed).unwrap();
        assert_eq!(r.tracker.query_content_readiness(), Readiness::Unavailable);
        assert_eq!(r.tracker.query_view_readiness(), Readiness::Unavailable);

        r.tracker.bind_element(ElementRole::ViewInput, ElementHandle::new("#childInput"));
        r.tracker.bind_element(ElementRole::ProjectedButton, ElementHandle::new("#projected"));
        rec(&mut r.tracker, Phase::Initialized).unwrap();
        assert_eq!(r.tracker.query_view_readiness(), Readiness::Unavailable);

        rec(&mut r.tracker, Phase::ContentInit).unwrap();
        assert!(r.tracker.query_content_readiness().is_available());
        assert_eq!(r.tracker.query_view_readiness(), Readiness::Unavailable);

        rec(&mut r.tracker, Phase::ViewInit).unwrap();
        match r.tracker.query_view_readiness() {
            Readiness::Available(h) => assert_eq!(h.as_str(), "#childInput"),
            other => panic!("expected available, got {:?}", other),
        }
        for _ in 0..3 {
            rec(&mut r.tracker, Phase::ViewRecheck).unwrap();
            assert!(r.tracker.query_view_readiness().is_available());
        }
    }

    #[test]
    fn ready_without_binding_reports_missing() {
        let mut r = rig();
        for p in [Phase::Constructed, Phase::Initialized, Phase::ContentInit] {
            rec(&mut r.tracker, p).unwrap();
        }
        let q = r.tracker.query_content_readiness();
        assert_eq!(q, Readiness::Missing);
        assert_eq!(q.status_label(), "Not Found");
    }

    #[test]
    fn dropped_listener_is_not_an_error() {
        let mut r = rig();
        drop(r.rx);
        rec(&mut r.tracker, Phase::Constructed).unwrap();
        assert!(!r.tracker.has_listener());
        rec(&mut r.tracker, Phase::Initialized).unwrap();
        assert_eq!(r.tracker.current_phase(), Some(Phase::Initialized));
    }

    #[test]
    fn events_carry_sequence_and_time() {
        let mut r = rig();
        rec(&mut r.tracker, Phase::Constructed).unwrap();
        r.clock.advance(25);
        rec(&mut r.tracker, Phase::Initialized).unwrap();
        let evs: Vec<LifecycleEvent> = r.rx.try_iter().collect();
        assert_eq!(evs[0].seq, 1);
        assert_eq!(evs[1].seq, 2);
        assert_eq!(evs[1].at_ms, 25);
        assert_eq!(evs[0].instance.as_str(), "t-1");
    }
}
