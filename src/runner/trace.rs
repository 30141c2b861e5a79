//! Headless run of the lifecycle demo: mount, a number of change-detection
//! passes on a simulated clock, optional guest toggle, unmount. The relay
//! log is written as text or JSON lines.

use serde::Serialize;
use std::io::Write;
use std::rc::Rc;

use crate::lifecycle::{
    Collaborators, LifecycleEvent, LifecycleWrapper, ManualClock, RecheckCounters,
    SequentialIds, Source, TracingSink,
};

#[derive(Clone, Debug)]
pub struct TraceOptions {
    pub passes: u32,
    /// Simulated time between passes.
    pub interval_ms: u64,
    pub throttle_ms: u64,
    /// Toggle the guest off and back on halfway through.
    pub toggle: bool,
    pub json: bool,
}

impl Default for TraceOptions {
    fn default() -> Self {
        TraceOptions { passes: 5, interval_ms: 100, throttle_ms: 2000, toggle: false, json: false }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceSummary {
    pub events: u64,
    /// Counters of the last guest alive before unmount.
    pub guest_counters: RecheckCounters,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    source: &'static str,
    #[serde(flatten)]
    event: &'a LifecycleEvent,
}

fn source_label(s: Source) -> &'static str {
    match s {
        Source::Host => "host",
        Source::Guest => "guest",
    }
}

pub fn run_trace<W: Write>(opts: &TraceOptions, out: &mut W) -> anyhow::Result<TraceSummary> {
    let clock = Rc::new(ManualClock::new(0));
    let collab = Collaborators::new(
        Rc::new(TracingSink),
        clock.clone(),
        Rc::new(SequentialIds::new("w")),
    );
    // Large enough that nothing is evicted for any reasonable pass count.
    let capacity = 64 + opts.passes as usize * 8;
    let mut wrapper = LifecycleWrapper::new(collab, opts.throttle_ms, capacity);

    wrapper.mount();
    for i in 0..opts.passes {
        clock.advance(opts.interval_ms);
        if opts.toggle && i == opts.passes / 2 {
            wrapper.toggle_guest();
            wrapper.toggle_guest();
        }
        wrapper.detect_changes();
    }
    let guest_counters = wrapper
        .guest()
        .map(|g| g.counters())
        .unwrap_or_default();
    wrapper.unmount();

    for entry in wrapper.relay().entries() {
        if opts.json {
            let line = JsonLine { source: source_label(entry.source), event: &entry.event };
            writeln!(out, "{}", serde_json::to_string(&line)?)?;
        } else {
            writeln!(
                out,
                "{:>6}ms {:<5} {}",
                entry.event.at_ms,
                source_label(entry.source),
                entry.event
            )?;
        }
    }
    Ok(TraceSummary { events: wrapper.relay().received(), guest_counters })
}
