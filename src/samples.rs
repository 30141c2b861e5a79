//! Code shown in the sample pane of each demo screen.

use crate::app::Route;

pub const LIFECYCLE: &str = r#"// Guest: one callback per phase, each records into its tracker
let mut guest = LifecycleGuest::new(&collab, 2000);
relay.attach_guest(guest.tracker_mut());

guest.on_construct()?;
guest.on_changes(&inputs)?;      // only when inputs are bound
guest.on_init()?;
guest.on_check()?;               // throttled, counted every pass
guest.on_content_init()?;        // projected elements now queryable
guest.on_view_init()?;           // own view elements now queryable
// ... more passes ...
guest.on_destroy()?;             // terminal; a second call is a no-op

// Host side: drain without touching the guest
relay.pump_guest();
for entry in relay.entries() {
    println!("{}", entry.event);
}"#;

pub const COMMUNICATION: &str = r#"// Parent -> child: plain field assignment
child.parent_message = parent.message_to_child.clone();

// Child -> parent: the child returns a value, the parent stores it
impl ChildWidget {
    pub fn send_to_parent(&self) -> String {
        format!("Hello from child! Counter: {}", self.child_counter)
    }
}
parent.on_child_message(child.send_to_parent());

// Show/hide: dropping the child ends its life
match parent.child.take() {
    Some(mut c) => c.on_destroy(),
    None => parent.child = Some(ChildWidget::create(&msg)),
}"#;

pub const DATA_BINDING: &str = r#"// Interpolation: format the state straight into the view
Line::from(format!("Welcome, {}!", state.user_name));
Line::from(format!("2 + 3 = {}", 2 + 3));

// Event binding: key press -> state mutation
KeyCode::Enter => state.on_button_click(),

// Two-way binding: the prompt is seeded from the field
// and writes back into it on submit
let initial = state.field_value(Control::FormName);
app.open_prompt("Name", initial, InputTarget::DataBinding(Control::FormName));

// Style binding: step through fixed arrays
self.color_idx = (self.color_idx + 1) % TEXT_COLORS.len();"#;

pub const ROUTING: &str = r#"match path.trim_matches('/') {
    "" => Route::Home,
    "components" => Route::Components,
    "components/lifecycle" => Route::Lifecycle,
    "data-binding" => Route::DataBinding,
    s if PLACEHOLDER_SECTIONS.contains(&s) => Route::Placeholder(s.into()),
    _ => Route::Home, // wildcard redirect
}"#;

/// Sample for the given screen.
pub fn for_route(route: &Route) -> &'static str {
    match route {
        Route::Lifecycle => LIFECYCLE,
        Route::Components => COMMUNICATION,
        Route::DataBinding => DATA_BINDING,
        Route::Home | Route::Placeholder(_) => ROUTING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_has_a_sample() {
        for r in [Route::Home, Route::Components, Route::Lifecycle, Route::DataBinding] {
            assert!(!for_route(&r).is_empty());
        }
        assert_eq!(for_route(&Route::Placeholder("http".into())), ROUTING);
    }
}
