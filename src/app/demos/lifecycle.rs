use crate::lifecycle::{Collaborators, LifecycleWrapper};

/// Interactive rows of the lifecycle screen, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleGuest,
    EditInputValue,
    IncrementCounter,
    RunPass,
    ToggleAutoDetect,
    EditChildInput,
    ClickChildButton,
    DropGuest,
    ClearLog,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::ToggleGuest,
        Action::EditInputValue,
        Action::IncrementCounter,
        Action::RunPass,
        Action::ToggleAutoDetect,
        Action::EditChildInput,
        Action::ClickChildButton,
        Action::DropGuest,
        Action::ClearLog,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::ToggleGuest => "Toggle guest",
            Action::EditInputValue => "Edit input value",
            Action::IncrementCounter => "Increment counter",
            Action::RunPass => "Run change detection",
            Action::ToggleAutoDetect => "Auto detect on tick",
            Action::EditChildInput => "Type in child input",
            Action::ClickChildButton => "Child button",
            Action::DropGuest => "Remove guest without teardown",
            Action::ClearLog => "Clear log",
        }
    }
}

/// Lifecycle screen: mounts a [`LifecycleWrapper`] while the route is
/// active and tears it down when the user navigates away.
pub struct LifecycleDemo {
    collab: Collaborators,
    throttle_ms: u64,
    relay_capacity: usize,
    wrapper: Option<LifecycleWrapper>,
    pub auto_detect: bool,
    pub selected: usize,
}

impl LifecycleDemo {
    pub fn new(collab: Collaborators, throttle_ms: u64, relay_capacity: usize) -> Self {
        LifecycleDemo {
            collab,
            throttle_ms,
            relay_capacity,
            wrapper: None,
            auto_detect: true,
            selected: 0,
        }
    }

    pub fn wrapper(&self) -> Option<&LifecycleWrapper> {
        self.wrapper.as_ref()
    }

    pub fn wrapper_mut(&mut self) -> Option<&mut LifecycleWrapper> {
        self.wrapper.as_mut()
    }

    /// Route activated.
    pub fn enter(&mut self) {
        if self.wrapper.is_none() {
            let mut w =
                LifecycleWrapper::new(self.collab.clone(), self.throttle_ms, self.relay_capacity);
            w.mount();
            self.wrapper = Some(w);
        }
    }

    /// Route deactivated.
    pub fn leave(&mut self) {
        if let Some(mut w) = self.wrapper.take() {
            w.unmount();
        }
    }

    /// One event-loop tick while the screen is visible.
    pub fn tick(&mut self) {
        if !self.auto_detect {
            return;
        }
        if let Some(w) = self.wrapper.as_mut() {
            w.detect_changes();
        }
    }

    pub fn selected_action(&self) -> Action {
        Action::ALL[self.selected.min(Action::ALL.len() - 1)]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Action::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + Action::ALL.len() - 1) % Action::ALL.len();
    }

    /// Current input value, used to seed the edit prompt.
    pub fn input_value(&self) -> String {
        self.wrapper
            .as_ref()
            .map(|w| w.inputs().input_value.clone())
            .unwrap_or_default()
    }

    pub fn child_input(&self) -> String {
        self.wrapper
            .as_ref()
            .and_then(|w| w.guest())
            .map(|g| g.child_input_value().to_string())
            .unwrap_or_default()
    }

    pub fn set_input_value(&mut self, value: String) {
        if let Some(w) = self.wrapper.as_mut() {
            w.set_input_value(value);
        }
    }

    pub fn set_child_input(&mut self, value: String) {
        if let Some(g) = self.wrapper.as_mut().and_then(|w| w.guest_mut()) {
            g.set_child_input(value);
        }
    }

    /// Run a non-editing action.
    pub fn activate(&mut self, action: Action) {
        if action == Action::ToggleAutoDetect {
            self.auto_detect = !self.auto_detect;
            return;
        }
        let Some(w) = self.wrapper.as_mut() else {
            return;
        };
        match action {
            Action::ToggleGuest => w.toggle_guest(),
            Action::IncrementCounter => w.increment_counter(),
            Action::RunPass => w.detect_changes(),
            Action::ClickChildButton => {
                if let Some(g) = w.guest() {
                    g.on_child_button_click();
                }
            }
            Action::DropGuest => {
                w.drop_guest_silently();
            }
            Action::ClearLog => w.relay_mut().clear(),
            Action::EditInputValue | Action::EditChildInput | Action::ToggleAutoDetect => {}
        }
    }
}
