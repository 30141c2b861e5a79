use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub const SECTIONS: [(&str, &str); 4] = [
    ("Components", "Widget creation, lifecycle, and parent/child communication"),
    ("Data Binding", "Interpolation, property, event, and two-way binding"),
    ("Directives", "Built-in and custom directives"),
    ("Services", "Dependency injection and shared services"),
];

pub fn draw(f: &mut Frame, area: Rect) {
    let colors = crate::ui::colors::current();
    let [intro, cards] = Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

    let p = Paragraph::new(vec![
        Line::styled("Welcome to the Learning Hub", colors.title_style).centered(),
        Line::from("This project demonstrates widget concepts with interactive examples.").centered(),
        Line::styled("Tab/1-8: switch screens  ?: code sample  :: go to path", colors.help_style).centered(),
    ])
    .style(colors.base_style);
    f.render_widget(p, intro);

    let cols = Layout::horizontal([Constraint::Ratio(1, 4); 4]).split(cards);
    for (i, (title, text)) in SECTIONS.iter().enumerate() {
        let card = Paragraph::new(*text)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Line::styled(*title, colors.title_style)),
            )
            .style(colors.base_style);
        f.render_widget(card, cols[i]);
    }
}
