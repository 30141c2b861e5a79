use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::routes::section_name;

pub fn draw(f: &mut Frame, area: Rect, path: &str) {
    let colors = crate::ui::colors::current();
    let name = section_name(path);
    let lines = vec![
        Line::styled(format!("{} Section", name), colors.title_style),
        Line::from(""),
        Line::from(format!(
            "This section is coming soon! We'll implement {} concepts here.",
            name.to_lowercase()
        )),
        Line::from(""),
        Line::styled("What we'll cover:", colors.title_style),
        Line::from("  • Basic concepts and theory"),
        Line::from("  • Practical examples"),
        Line::from("  • Best practices"),
        Line::from("  • Interactive demos"),
    ];
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .style(colors.base_style);
    f.render_widget(p, area);
}
