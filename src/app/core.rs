use std::rc::Rc;

use super::demos::{ComponentsState, DataBindingState, LifecycleDemo};
use super::routes::Route;
use super::settings::{IdStyle, Settings};
use super::types::{InputTarget, Mode};
use crate::lifecycle::{
    Collaborators, IdSource, RandomIds, SequentialIds, SystemClock, TracingSink,
};

pub struct App {
    pub route: Route,
    pub mode: Mode,
    /// Code-sample pane visible on demo screens.
    pub show_code: bool,
    pub settings: Settings,
    pub data_binding: DataBindingState,
    pub components: ComponentsState,
    pub lifecycle: LifecycleDemo,
}

impl App {
    /// Build the application with production collaborators derived from
    /// `settings` and open the configured start route.
    pub fn new(settings: Settings) -> Self {
        let ids: Rc<dyn IdSource> = match settings.id_style {
            IdStyle::Sequential => Rc::new(SequentialIds::default()),
            IdStyle::Random => Rc::new(RandomIds::new()),
        };
        let collab = Collaborators::new(Rc::new(TracingSink), Rc::new(SystemClock::new()), ids);
        Self::with_collaborators(settings, collab)
    }

    pub fn with_collaborators(settings: Settings, collab: Collaborators) -> Self {
        let components = ComponentsState::new(collab.ids.as_ref());
        let lifecycle =
            LifecycleDemo::new(collab, settings.throttle_ms, settings.relay_capacity);
        let start = Route::resolve(&settings.start_route);
        let mut app = App {
            route: Route::Home,
            mode: Mode::Normal,
            show_code: false,
            settings,
            data_binding: DataBindingState::default(),
            components,
            lifecycle,
        };
        app.navigate(start);
        app
    }

    /// Switch screens. Leaving the lifecycle screen destroys its widgets;
    /// entering it mounts fresh ones.
    pub fn navigate(&mut self, route: Route) {
        if self.route == route && route != Route::Lifecycle {
            return;
        }
        if self.route == Route::Lifecycle && route != Route::Lifecycle {
            self.lifecycle.leave();
        }
        tracing::info!(from = %self.route, to = %route, "navigate");
        self.route = route;
        if self.route == Route::Lifecycle {
            self.lifecycle.enter();
        }
    }

    pub fn navigate_path(&mut self, path: &str) {
        self.navigate(Route::resolve(path));
    }

    pub fn next_route(&mut self) {
        self.navigate(self.route.next());
    }

    pub fn prev_route(&mut self) {
        self.navigate(self.route.prev());
    }

    /// Called once per event-loop tick.
    pub fn tick(&mut self) {
        if self.route == Route::Lifecycle {
            self.lifecycle.tick();
        }
    }

    pub fn toggle_code(&mut self) {
        self.show_code = !self.show_code;
    }

    /// Open a text prompt seeded with `initial`.
    pub fn open_prompt(&mut self, prompt: impl Into<String>, initial: String, target: InputTarget) {
        self.mode = Mode::Input { prompt: prompt.into(), buffer: initial, target };
    }

    /// Write a submitted prompt value back into its target.
    pub fn submit_input(&mut self, target: InputTarget, value: String) {
        match target {
            InputTarget::Goto => self.navigate_path(&value),
            InputTarget::DataBinding(control) => {
                if !self.data_binding.set_field(control, value.clone()) {
                    self.mode = Mode::Message {
                        title: "Error".to_string(),
                        content: format!("`{}` is not a valid value for {}", value, control.label()),
                    };
                }
            }
            InputTarget::ComponentsMessage => self.components.set_message_to_child(value),
            InputTarget::ComponentsUserInput => self.components.user_input = value,
            InputTarget::LifecycleInputValue => self.lifecycle.set_input_value(value),
            InputTarget::LifecycleChildInput => self.lifecycle.set_child_input(value),
        }
    }
}
