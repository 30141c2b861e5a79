pub mod keyboard;

pub use keyboard::{is_printable_key, KeyCode, KeyEvent, KeyModifiers};

use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::Duration;

/// Terminal input reduced to what the event loop acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event. Key releases/repeats are folded into `Other` so
/// each press is handled once on every platform.
pub fn read_event() -> io::Result<InputEvent> {
    Ok(match event::read()? {
        Event::Key(k) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
        Event::Resize(w, h) => InputEvent::Resize(w, h),
        _ => InputEvent::Other,
    })
}
