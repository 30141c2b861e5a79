use unicode_segmentation::UnicodeSegmentation;

use crate::app::settings::keybinds;
use crate::app::{App, Mode};
use crate::input::{is_printable_key, KeyEvent};

/// Handle keys while a text prompt is open.
pub fn handle_input(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    let Mode::Input { buffer, target, .. } = &mut app.mode else {
        return Ok(false);
    };
    if keybinds::is_enter(&key.code) {
        let value = std::mem::take(buffer);
        let target = *target;
        app.mode = Mode::Normal;
        app.submit_input(target, value);
    } else if keybinds::is_esc(&key.code) {
        app.mode = Mode::Normal;
    } else if keybinds::is_backspace(&key.code) {
        pop_grapheme(buffer);
    } else if is_printable_key(&key) {
        if let crate::input::KeyCode::Char(c) = key.code {
            buffer.push(c);
        }
    }
    Ok(false)
}

/// Remove the last user-perceived character.
pub fn pop_grapheme(buffer: &mut String) {
    if let Some((idx, _)) = buffer.grapheme_indices(true).next_back() {
        buffer.truncate(idx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_grapheme_removes_whole_cluster() {
        let mut s = String::from("ae\u{301}");
        pop_grapheme(&mut s);
        assert_eq!(s, "a");
        pop_grapheme(&mut s);
        assert_eq!(s, "");
        pop_grapheme(&mut s);
        assert_eq!(s, "");
    }
}
