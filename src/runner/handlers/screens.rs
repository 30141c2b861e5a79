use crate::app::demos::components::Action as ComponentsAction;
use crate::app::demos::lifecycle::Action as LifecycleAction;
use crate::app::settings::keybinds;
use crate::app::{App, InputTarget};
use crate::input::KeyCode;

fn is_activate(code: &KeyCode) -> bool {
    keybinds::is_enter(code) || keybinds::is_char(code, ' ')
}

pub fn handle_data_binding(app: &mut App, code: KeyCode) {
    let state = &mut app.data_binding;
    if keybinds::is_up(&code) {
        state.select_prev();
    } else if keybinds::is_down(&code) {
        state.select_next();
    } else if is_activate(&code) {
        let control = state.selected_control();
        if control.is_text_field() {
            let initial = state.field_value(control);
            app.open_prompt(control.label(), initial, InputTarget::DataBinding(control));
        } else {
            state.activate(control);
        }
    }
}

pub fn handle_components(app: &mut App, code: KeyCode) {
    let state = &mut app.components;
    if keybinds::is_up(&code) {
        state.select_prev();
    } else if keybinds::is_down(&code) {
        state.select_next();
    } else if is_activate(&code) {
        match state.selected_action() {
            ComponentsAction::EditMessage => {
                let initial = state.message_to_child.clone();
                app.open_prompt("Message to child", initial, InputTarget::ComponentsMessage);
            }
            ComponentsAction::EditUserInput => {
                let initial = state.user_input.clone();
                app.open_prompt("Type something", initial, InputTarget::ComponentsUserInput);
            }
            action => state.activate(action),
        }
    }
}

pub fn handle_lifecycle(app: &mut App, code: KeyCode) {
    let demo = &mut app.lifecycle;
    if keybinds::is_up(&code) {
        demo.select_prev();
    } else if keybinds::is_down(&code) {
        demo.select_next();
    } else if keybinds::is_char(&code, 't') {
        demo.activate(LifecycleAction::ToggleGuest);
    } else if keybinds::is_char(&code, '+') {
        demo.activate(LifecycleAction::IncrementCounter);
    } else if keybinds::is_char(&code, 'p') {
        demo.activate(LifecycleAction::RunPass);
    } else if keybinds::is_char(&code, 'c') {
        demo.activate(LifecycleAction::ClearLog);
    } else if is_activate(&code) {
        match demo.selected_action() {
            LifecycleAction::EditInputValue => {
                let initial = demo.input_value();
                app.open_prompt("Input value", initial, InputTarget::LifecycleInputValue);
            }
            LifecycleAction::EditChildInput => {
                let initial = demo.child_input();
                app.open_prompt("Child input", initial, InputTarget::LifecycleChildInput);
            }
            action => demo.activate(action),
        }
    }
}
