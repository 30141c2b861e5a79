use super::demos::data_binding::Control;

/// Field a text prompt writes back into when submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputTarget {
    /// Router path typed by the user.
    Goto,
    DataBinding(Control),
    ComponentsMessage,
    ComponentsUserInput,
    LifecycleInputValue,
    LifecycleChildInput,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Input {
        prompt: String,
        buffer: String,
        target: InputTarget,
    },
    Message {
        title: String,
        content: String,
    },
}
