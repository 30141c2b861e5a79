// Keyboard input helpers and type aliases.
pub use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Convenience: check if a `KeyEvent` is a printable character without a
/// control modifier.
pub fn is_printable_key(ev: &KeyEvent) -> bool {
    matches!(ev.code, KeyCode::Char(_)) && !ev.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn printable_keys() {
        assert!(is_printable_key(&KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE)));
        assert!(is_printable_key(&KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)));
        assert!(!is_printable_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_printable_key(&KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }
}
