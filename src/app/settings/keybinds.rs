// Centralised keybind predicates for the application.
//
// Handlers ask `is_quit(&code)` rather than matching raw `KeyCode`s so the
// bindings live in one place.

use crate::input::KeyCode;

pub fn is_quit(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('q'))
}

pub fn is_next_route(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Tab | KeyCode::Right)
}

pub fn is_prev_route(code: &KeyCode) -> bool {
	matches!(code, KeyCode::BackTab | KeyCode::Left)
}

pub fn is_up(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Up | KeyCode::Char('k'))
}

pub fn is_down(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Down | KeyCode::Char('j'))
}

pub fn is_enter(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Enter)
}

pub fn is_backspace(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Backspace)
}

pub fn is_esc(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Esc)
}

/// Opens the "go to path" prompt.
pub fn is_goto(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char(':') | KeyCode::Char('g'))
}

pub fn is_toggle_code(code: &KeyCode) -> bool {
	matches!(code, KeyCode::Char('?'))
}

pub fn is_toggle_theme(code: &KeyCode) -> bool {
	matches!(code, KeyCode::F(2))
}

/// Number keys 1-8 jump straight to a navigation entry.
pub fn route_digit(code: &KeyCode) -> Option<usize> {
	match code {
		KeyCode::Char(c @ '1'..='8') => Some(*c as usize - '1' as usize),
		_ => None,
	}
}

pub fn is_char(code: &KeyCode, want: char) -> bool {
	matches!(code, &KeyCode::Char(c) if c == want)
}
