use ratatui::style::Color;
use serde::Deserialize;

/// Base palette a [`Colors`](super::colors::Colors) set is derived from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub bg: Color,
    pub fg: Color,
    pub accent: Color,
    pub muted: Color,
    pub good: Color,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            bg: Color::Rgb(11, 12, 13),
            fg: Color::Gray,
            accent: Color::Cyan,
            muted: Color::DarkGray,
            good: Color::Green,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            bg: Color::White,
            fg: Color::Black,
            accent: Color::Blue,
            muted: Color::Gray,
            good: Color::Green,
        }
    }

    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Override the dark palette from a `[palette]` TOML table with hex
    /// colors. Missing table → dark theme.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let v: toml::Value = toml::from_str(s)?;
        let mut theme = Self::dark();
        if let Some(p) = v.get("palette") {
            let p: Pal = p.clone().try_into()?;
            theme.name = "custom";
            theme.bg = parse_hex(&p.bg);
            theme.fg = parse_hex(&p.fg);
            theme.accent = parse_hex(&p.accent);
        }
        Ok(theme)
    }
}

fn parse_hex(s: &str) -> Color {
    let s = s.trim_start_matches('#');
    if s.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&s[0..2], 16),
            u8::from_str_radix(&s[2..4], 16),
            u8::from_str_radix(&s[4..6], 16),
        ) {
            return Color::Rgb(r, g, b);
        }
    }
    Color::Reset
}
