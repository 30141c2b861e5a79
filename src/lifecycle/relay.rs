use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, TryRecvError};

use super::event::LifecycleEvent;
use super::tracker::PhaseTracker;

/// Who produced a relayed event, from the host's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Host,
    Guest,
}

#[derive(Clone, Debug)]
pub struct RelayEntry {
    pub source: Source,
    pub event: LifecycleEvent,
    pub received_at: DateTime<Local>,
}

/// Outcome of draining the guest channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PumpStatus {
    /// Number of guest events moved into the log (may be zero).
    Delivered(usize),
    /// The guest's sender is gone. Expected once a guest is removed.
    Detached,
}

/// Host-side subscriber: receives the guest's lifecycle stream, and the
/// host's own, and keeps a bounded display log of both.
///
/// Events only ever flow from trackers into the relay; the relay never
/// touches a tracker's state after `attach_*`.
#[derive(Debug)]
pub struct HostRelay {
    own_rx: Option<Receiver<LifecycleEvent>>,
    guest_rx: Option<Receiver<LifecycleEvent>>,
    entries: VecDeque<RelayEntry>,
    capacity: usize,
    received: u64,
}

impl HostRelay {
    pub fn new(capacity: usize) -> Self {
        HostRelay {
            own_rx: None,
            guest_rx: None,
            entries: VecDeque::new(),
            capacity: capacity.max(1),
            received: 0,
        }
    }

    /// Subscribe to the host's own tracker.
    pub fn attach_host(&mut self, tracker: &mut PhaseTracker) {
        let (tx, rx) = channel();
        tracker.subscribe(tx);
        self.own_rx = Some(rx);
    }

    /// Subscribe to a guest's tracker, replacing any previous guest.
    pub fn attach_guest(&mut self, tracker: &mut PhaseTracker) {
        let (tx, rx) = channel();
        tracker.subscribe(tx);
        self.guest_rx = Some(rx);
    }

    pub fn is_guest_attached(&self) -> bool {
        self.guest_rx.is_some()
    }

    /// Append one event to the display log, evicting the oldest entry when
    /// full.
    pub fn on_lifecycle_event(&mut self, source: Source, event: LifecycleEvent) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.received += 1;
        self.entries.push_back(RelayEntry { source, event, received_at: Local::now() });
    }

    /// Move everything the host's own tracker has emitted into the log.
    pub fn pump_host(&mut self) -> usize {
        let pending: Vec<LifecycleEvent> = match &self.own_rx {
            Some(rx) => rx.try_iter().collect(),
            None => return 0,
        };
        let n = pending.len();
        for ev in pending {
            self.on_lifecycle_event(Source::Host, ev);
        }
        n
    }

    /// Move everything the guest has emitted into the log. A guest that
    /// went away, with or without a `destroying` event, yields `Detached`.
    pub fn pump_guest(&mut self) -> PumpStatus {
        let mut pending = Vec::new();
        let mut gone = false;
        match &self.guest_rx {
            Some(rx) => loop {
                match rx.try_recv() {
                    Ok(ev) => pending.push(ev),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        gone = true;
                        break;
                    }
                }
            },
            None => return PumpStatus::Detached,
        }
        let n = pending.len();
        for ev in pending {
            self.on_lifecycle_event(Source::Guest, ev);
        }
        if gone {
            tracing::debug!(delivered = n, "guest detached from relay");
            self.guest_rx = None;
            if n == 0 {
                return PumpStatus::Detached;
            }
        }
        PumpStatus::Delivered(n)
    }

    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &RelayEntry> + '_ {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total events received since creation, including evicted ones.
    pub fn received(&self) -> u64 {
        self.received
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
