//! Key handling: global navigation here, per-screen and prompt handling in
//! the submodules.

pub mod input_mode;
pub mod screens;

pub use input_mode::handle_input;
pub use screens::{handle_components, handle_data_binding, handle_lifecycle};

use crate::app::settings::keybinds;
use crate::app::{App, InputTarget, Mode, Route};
use crate::input::{KeyCode, KeyEvent, KeyModifiers};

/// Top-level key handler. Returns `true` when the application should exit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }
    match &app.mode {
        Mode::Input { .. } => handle_input(app, key),
        Mode::Message { .. } => {
            if keybinds::is_enter(&key.code) || keybinds::is_esc(&key.code) {
                app.mode = Mode::Normal;
            }
            Ok(false)
        }
        Mode::Normal => handle_normal(app, key.code),
    }
}

fn handle_normal(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(true);
    }
    if keybinds::is_next_route(&code) {
        app.next_route();
    } else if keybinds::is_prev_route(&code) {
        app.prev_route();
    } else if let Some(i) = keybinds::route_digit(&code) {
        app.navigate(Route::from_nav_index(i));
    } else if keybinds::is_goto(&code) {
        let current = app.route.path().to_string();
        app.open_prompt("Go to path", current, InputTarget::Goto);
    } else if keybinds::is_toggle_code(&code) {
        app.toggle_code();
    } else if keybinds::is_toggle_theme(&code) {
        crate::ui::colors::toggle();
    } else {
        match app.route {
            Route::DataBinding => handle_data_binding(app, code),
            Route::Components => handle_components(app, code),
            Route::Lifecycle => handle_lifecycle(app, code),
            Route::Home | Route::Placeholder(_) => {}
        }
    }
    Ok(false)
}
