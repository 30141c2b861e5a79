use chrono::Local;

pub const TEXT_COLORS: [&str; 5] = ["red", "green", "blue", "purple", "orange"];
pub const FONT_SIZES: [u16; 5] = [14, 16, 18, 20, 22];
pub const BACKGROUNDS: [&str; 4] = ["lightblue", "lightgreen", "lightyellow", "lightpink"];

/// Interactive rows of the data-binding screen, in display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    ToggleDisabled,
    ClickMe,
    TypeText,
    Hover,
    FormName,
    FormAge,
    FormMessage,
    ToggleActive,
    ToggleHighlight,
    ChangeStyles,
}

impl Control {
    pub const ALL: [Control; 10] = [
        Control::ToggleDisabled,
        Control::ClickMe,
        Control::TypeText,
        Control::Hover,
        Control::FormName,
        Control::FormAge,
        Control::FormMessage,
        Control::ToggleActive,
        Control::ToggleHighlight,
        Control::ChangeStyles,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Control::ToggleDisabled => "Toggle disabled",
            Control::ClickMe => "Click Me!",
            Control::TypeText => "Type something",
            Control::Hover => "Hover",
            Control::FormName => "Name",
            Control::FormAge => "Age",
            Control::FormMessage => "Message",
            Control::ToggleActive => "Toggle Active",
            Control::ToggleHighlight => "Toggle Highlight",
            Control::ChangeStyles => "Change Styles",
        }
    }

    /// Rows that open a text prompt instead of acting immediately.
    pub fn is_text_field(self) -> bool {
        matches!(
            self,
            Control::TypeText | Control::FormName | Control::FormAge | Control::FormMessage
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormData {
    pub name: String,
    pub age: u32,
    pub message: String,
}

impl Default for FormData {
    fn default() -> Self {
        FormData { name: "John Doe".into(), age: 25, message: "Hello!".into() }
    }
}

/// State behind the data-binding screen.
#[derive(Clone, Debug)]
pub struct DataBindingState {
    pub user_name: String,
    pub current_date: String,
    pub button_disabled: bool,
    pub click_count: u64,
    pub typed_text: String,
    pub hovered: bool,
    pub form: FormData,
    pub is_active: bool,
    pub is_highlighted: bool,
    color_idx: usize,
    size_idx: usize,
    bg_idx: usize,
    pub selected: usize,
}

impl Default for DataBindingState {
    fn default() -> Self {
        DataBindingState {
            user_name: "Hub Learner".into(),
            current_date: Local::now().format("%Y-%m-%d").to_string(),
            button_disabled: false,
            click_count: 0,
            typed_text: String::new(),
            hovered: false,
            form: FormData::default(),
            is_active: false,
            is_highlighted: false,
            color_idx: 2,
            size_idx: 1,
            bg_idx: 0,
            selected: 0,
        }
    }
}

impl DataBindingState {
    pub fn message(&self) -> &'static str {
        "This is a method call in interpolation!"
    }

    pub fn button_text(&self) -> &'static str {
        if self.button_disabled {
            "Disabled Button"
        } else {
            "Enabled Button"
        }
    }

    pub fn hover_text(&self) -> &'static str {
        if self.hovered {
            "Mouse is over me!"
        } else {
            "Hover over me!"
        }
    }

    pub fn text_color(&self) -> &'static str {
        TEXT_COLORS[self.color_idx]
    }

    pub fn font_size(&self) -> u16 {
        FONT_SIZES[self.size_idx]
    }

    pub fn background(&self) -> &'static str {
        BACKGROUNDS[self.bg_idx]
    }

    pub fn selected_control(&self) -> Control {
        Control::ALL[self.selected.min(Control::ALL.len() - 1)]
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % Control::ALL.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + Control::ALL.len() - 1) % Control::ALL.len();
    }

    pub fn toggle_disabled(&mut self) {
        self.button_disabled = !self.button_disabled;
    }

    pub fn on_button_click(&mut self) {
        self.click_count += 1;
    }

    pub fn toggle_hover(&mut self) {
        self.hovered = !self.hovered;
    }

    pub fn toggle_active(&mut self) {
        self.is_active = !self.is_active;
    }

    pub fn toggle_highlight(&mut self) {
        self.is_highlighted = !self.is_highlighted;
    }

    /// Step each style array to its next entry.
    pub fn change_styles(&mut self) {
        self.color_idx = (self.color_idx + 1) % TEXT_COLORS.len();
        self.size_idx = (self.size_idx + 1) % FONT_SIZES.len();
        self.bg_idx = (self.bg_idx + 1) % BACKGROUNDS.len();
    }

    /// Run the selected non-text control.
    pub fn activate(&mut self, control: Control) {
        match control {
            Control::ToggleDisabled => self.toggle_disabled(),
            Control::ClickMe => self.on_button_click(),
            Control::Hover => self.toggle_hover(),
            Control::ToggleActive => self.toggle_active(),
            Control::ToggleHighlight => self.toggle_highlight(),
            Control::ChangeStyles => self.change_styles(),
            Control::TypeText | Control::FormName | Control::FormAge | Control::FormMessage => {}
        }
    }

    /// Current text of a text-field control, used to seed the prompt.
    pub fn field_value(&self, control: Control) -> String {
        match control {
            Control::TypeText => self.typed_text.clone(),
            Control::FormName => self.form.name.clone(),
            Control::FormAge => self.form.age.to_string(),
            Control::FormMessage => self.form.message.clone(),
            _ => String::new(),
        }
    }

    /// Write a prompt result back into the bound field. Returns false when
    /// the value does not parse (age).
    pub fn set_field(&mut self, control: Control, value: String) -> bool {
        match control {
            Control::TypeText => self.typed_text = value,
            Control::FormName => self.form.name = value,
            Control::FormMessage => self.form.message = value,
            Control::FormAge => match value.trim().parse::<u32>() {
                Ok(age) => self.form.age = age,
                Err(_) => return false,
            },
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_styles_cycles_fixed_arrays() {
        let mut s = DataBindingState::default();
        assert_eq!(s.text_color(), "blue");
        assert_eq!(s.font_size(), 16);
        s.change_styles();
        assert_eq!((s.text_color(), s.font_size(), s.background()), ("purple", 18, "lightgreen"));
        for _ in 0..19 {
            s.change_styles();
        }
        // 20 steps is a multiple of every array length
        assert_eq!((s.text_color(), s.font_size(), s.background()), ("blue", 16, "lightblue"));
    }

    #[test]
    fn toggles_and_counter() {
        let mut s = DataBindingState::default();
        s.activate(Control::ClickMe);
        s.activate(Control::ClickMe);
        assert_eq!(s.click_count, 2);
        s.activate(Control::Hover);
        assert_eq!(s.hover_text(), "Mouse is over me!");
        s.activate(Control::ToggleDisabled);
        assert_eq!(s.button_text(), "Disabled Button");
        s.activate(Control::ToggleActive);
        s.activate(Control::ToggleHighlight);
        assert!(s.is_active && s.is_highlighted);
    }

    #[test]
    fn two_way_fields() {
        let mut s = DataBindingState::default();
        assert!(s.set_field(Control::FormName, "Ada".into()));
        assert_eq!(s.field_value(Control::FormName), "Ada");
        assert!(s.set_field(Control::FormAge, " 41 ".into()));
        assert_eq!(s.form.age, 41);
        assert!(!s.set_field(Control::FormAge, "old".into()));
        assert_eq!(s.form.age, 41);
    }

    #[test]
    fn selection_wraps() {
        let mut s = DataBindingState::default();
        s.select_prev();
        assert_eq!(s.selected_control(), Control::ChangeStyles);
        s.select_next();
        assert_eq!(s.selected_control(), Control::ToggleDisabled);
    }
}
