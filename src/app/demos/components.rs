use chrono::{DateTime, Local};
use std::fmt;

use crate::lifecycle::{IdSource, InstanceId};

pub const STATUSES: [&str; 4] = ["Active", "Inactive", "Pending", "Complete"];
pub const BOX_COLORS: [&str; 5] = ["orange", "green", "blue", "pink", "purple"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildStatus {
    Created,
    Initialized,
    Destroyed,
}

impl fmt::Display for ChildStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChildStatus::Created => "Created",
            ChildStatus::Initialized => "Initialized",
            ChildStatus::Destroyed => "Destroyed",
        };
        f.write_str(s)
    }
}

/// Child of the parent/child communication demo.
#[derive(Clone, Debug)]
pub struct ChildWidget {
    pub parent_message: String,
    pub child_counter: u64,
    pub lifecycle_status: ChildStatus,
}

impl ChildWidget {
    fn create(parent_message: &str) -> Self {
        let mut child = ChildWidget {
            parent_message: parent_message.to_string(),
            child_counter: 0,
            lifecycle_status: ChildStatus::Created,
        };
        child.on_init();
        child
    }

    fn on_init(&mut self) {
        self.lifecycle_status = ChildStatus::Initialized;
        tracing::info!("child component initialized");
    }

    fn on_destroy(&mut self) {
        self.lifecycle_status = ChildStatus::Destroyed;
        tracing::info!("child component destroyed");
    }

    pub fn increment(&mut self) {
        self.child_counter += 1;
    }

    /// Message emitted to the parent.
    pub fn send_to_parent(&self) -> String {
        format!("Hello from child! Counter: {}", self.child_counter)
    }
}

/// Interactive rows of the components screen, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    ToggleChild,
    EditMessage,
    ChildSend,
    ChildIncrement,
    ParentIncrement,
    EditUserInput,
    ReadUserInput,
    ChangeBoxColor,
    UpdateStatus,
}

impl Action {
    pub const ALL: [Action; 9] = [
        Action::ToggleChild,
        Action::EditMessage,
        Action::ChildSend,
        Action::ChildIncrement,
        Action::ParentIncrement,
        Action::EditUserInput,
        Action::ReadUserInput,
        Action::ChangeBoxColor,
        Action::UpdateStatus,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::ToggleChild => "Toggle Child",
            Action::EditMessage => "Message to child",
            Action::ChildSend => "Child: Send Message to Parent",
            Action::ChildIncrement => "Child: Increment Counter",
            Action::ParentIncrement => "Increment Parent Counter",
            Action::EditUserInput => "Focus Input",
            Action::ReadUserInput => "Get Input Value",
            Action::ChangeBoxColor => "Change Color",
            Action::UpdateStatus => "Update Status",
        }
    }
}

/// State behind the components screen.
#[derive(Clone, Debug)]
pub struct ComponentsState {
    pub component_id: InstanceId,
    pub created_at: DateTime<Local>,
    status_idx: usize,
    pub message_to_child: String,
    pub child_message: String,
    pub parent_counter: u64,
    pub child: Option<ChildWidget>,
    /// Status of the most recently removed child.
    pub last_child_status: Option<ChildStatus>,
    pub user_input: String,
    pub read_value: String,
    box_color_idx: Option<usize>,
    pub selected: usize,
}

impl ComponentsState {
    pub fn new(ids: &dyn IdSource) -> Self {
        let state = ComponentsState {
            component_id: ids.next_id(),
            created_at: Local::now(),
            status_idx: 0,
            message_to_child: "Hello from parent!".into(),
            child_message: String::new(),
            parent_counter: 0,
            child: Some(ChildWidget::create("Hello from parent!")),
            last_child_status: None,
            user_input: String::new(),
            read_value: String::new(),
            box_color_idx: None,
            selected: 0,
        };
        tracing::info!(id = state.component_id.as_str(), "base component initialized");
        state
    }

    pub fn status(&self) -> &'static str {
        STATUSES[self.status_idx]
    }

    pub fn box_color(&self) -> Option<&'static str> {
        self.box_color_idx.map(|i| BOX_COLORS[i])
    }

    pub fn show_child(&self) -> bool {
        self.child.is_some()
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

    pub fn toggle_child(&mut self) {
        match self.child.take() {
            Some(mut c) => {
                c.on_destroy();
                self.last_child_status = Some(c.lifecycle_status);
            }
            None => {
                self.child = Some(ChildWidget::create(&self.message_to_child));
                self.last_child_status = None;
            }
        }
    }

    /// Update the message bound into the child.
    pub fn set_message_to_child(&mut self, msg: String) {
        if let Some(c) = self.child.as_mut() {
            c.parent_message = msg.clone();
        }
        self.message_to_child = msg;
    }

    pub fn on_child_message(&mut self, message: String) {
        self.child_message = message;
    }

    pub fn child_send(&mut self) {
        if let Some(msg) = self.child.as_ref().map(ChildWidget::send_to_parent) {
            self.on_child_message(msg);
        }
    }

    pub fn child_increment(&mut self) {
        if let Some(c) = self.child.as_mut() {
            c.increment();
        }
    }

    pub fn increment_parent(&mut self) {
        self.parent_counter += 1;
    }

    pub fn read_input_value(&mut self) {
        self.read_value = self.user_input.clone();
    }

    pub fn change_box_color(&mut self) {
        self.box_color_idx = Some(match self.box_color_idx {
            Some(i) => (i + 1) % BOX_COLORS.len(),
            None => 0,
        });
    }

    /// Step to the next status, wrapping around.
    pub fn update_status(&mut self) {
        self.status_idx = (self.status_idx + 1) % STATUSES.len();
    }

    /// Run a non-editing action. Editing actions are handled by the caller
    /// through a text prompt.
    pub fn activate(&mut self, action: Action) {
        match action {
            Action::ToggleChild => self.toggle_child(),
            Action::ChildSend => self.child_send(),
            Action::ChildIncrement => self.child_increment(),
            Action::ParentIncrement => self.increment_parent(),
            Action::ReadUserInput => self.read_input_value(),
            Action::ChangeBoxColor => self.change_box_color(),
            Action::UpdateStatus => self.update_status(),
            Action::EditMessage | Action::EditUserInput => {}
        }
    }
}
