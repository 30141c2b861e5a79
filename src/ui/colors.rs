use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use std::sync::Mutex;

use crate::ui::themes::Theme;

/// Concrete styles used by the renderers.
#[derive(Clone, Debug)]
pub struct Colors {
	pub theme_name: &'static str,
	pub base_style: Style,
	pub title_style: Style,
	pub nav_style: Style,
	pub nav_active_style: Style,
	pub selected_style: Style,
	pub muted_style: Style,
	pub badge_on_style: Style,
	pub badge_off_style: Style,
	pub host_event_style: Style,
	pub guest_event_style: Style,
	pub warn_style: Style,
	pub code_style: Style,
	pub help_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(derive(&Theme::dark())));

fn derive(theme: &Theme) -> Colors {
	let base = Style::default().fg(theme.fg).bg(theme.bg);
	Colors {
		theme_name: theme.name,
		base_style: base,
		title_style: base.fg(theme.accent).add_modifier(Modifier::BOLD),
		nav_style: base,
		nav_active_style: Style::default().fg(theme.bg).bg(theme.accent).add_modifier(Modifier::BOLD),
		selected_style: base.add_modifier(Modifier::REVERSED),
		muted_style: base.fg(theme.muted),
		badge_on_style: Style::default().fg(Color::Black).bg(theme.good),
		badge_off_style: base.fg(theme.muted),
		host_event_style: base.fg(Color::Yellow),
		guest_event_style: base.fg(theme.accent),
		warn_style: base.fg(Color::Red),
		code_style: base.fg(theme.good),
		help_style: base.fg(theme.muted),
	}
}

/// Select a theme by name, or load one from a `.toml` palette file.
/// Unknown names and unreadable files are logged and ignored.
pub fn set_theme(name: &str) {
	if name.ends_with(".toml") {
		let loaded = std::fs::read_to_string(name)
			.map_err(|e| e.to_string())
			.and_then(|s| Theme::from_toml(&s).map_err(|e| e.to_string()));
		match loaded {
			Ok(t) => set_from_theme(&t),
			Err(e) => tracing::warn!("theme file `{}` not loaded: {}", name, e),
		}
		return;
	}
	match Theme::by_name(name) {
		Some(t) => set_from_theme(&t),
		None => tracing::warn!("unknown theme `{}`, keeping current", name),
	}
}

/// Derive concrete runtime Styles from the provided Theme and store them.
pub fn set_from_theme(theme: &Theme) {
	let colors = derive(theme);
	match CURRENT.lock() {
		Ok(mut g) => *g = colors,
		Err(poisoned) => *poisoned.into_inner() = colors,
	}
}

pub fn current() -> Colors {
	match CURRENT.lock() {
		Ok(g) => g.clone(),
		Err(poisoned) => poisoned.into_inner().clone(),
	}
}

pub fn toggle() {
	if current().theme_name == "light" {
		set_from_theme(&Theme::dark())
	} else {
		set_from_theme(&Theme::light())
	}
}

/// Terminal color for the CSS-style color names used by the demos.
pub fn named_color(name: &str) -> Color {
	match name {
		"red" => Color::Red,
		"green" => Color::Green,
		"blue" => Color::Blue,
		"purple" => Color::Magenta,
		"orange" => Color::Rgb(255, 152, 0),
		"pink" => Color::Rgb(233, 30, 99),
		"lightblue" => Color::LightBlue,
		"lightgreen" => Color::LightGreen,
		"lightyellow" => Color::LightYellow,
		"lightpink" => Color::LightMagenta,
		_ => Color::Reset,
	}
}
