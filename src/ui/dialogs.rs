use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Centered rectangle of `width` x `height`, clamped to `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    cell
}

/// Single-line text prompt with a trailing cursor marker.
pub fn draw_prompt(f: &mut Frame, area: Rect, prompt: &str, buffer: &str) {
    let colors = crate::ui::colors::current();
    let rect = centered(area, 60, 5);
    f.render_widget(Clear, rect);
    let lines = vec![
        Line::from(format!("{}_", buffer)),
        Line::styled("Enter: accept  Esc: cancel", colors.help_style),
    ];
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(prompt.to_string()))
        .style(colors.base_style);
    f.render_widget(p, rect);
}

/// Informational or error message box. Titles containing "error" use the
/// warning style.
pub fn draw_message(f: &mut Frame, area: Rect, title: &str, content: &str) {
    let colors = crate::ui::colors::current();
    let rect = centered(area, 60, 7);
    f.render_widget(Clear, rect);
    let style = if title.to_lowercase().contains("error") {
        colors.warn_style
    } else {
        colors.base_style
    };
    let p = Paragraph::new(vec![
        Line::from(content.to_string()),
        Line::from(""),
        Line::styled("[ OK ]", colors.selected_style),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title(title.to_string()))
    .style(style);
    f.render_widget(p, rect);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_is_clamped() {
        let r = centered(Rect::new(0, 0, 40, 4), 60, 5);
        assert_eq!((r.width, r.height), (40, 4));
        let r = centered(Rect::new(0, 0, 100, 20), 60, 5);
        assert_eq!((r.x, r.width, r.height), (20, 60, 5));
    }
}
