use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::routes::NAV_ENTRIES;

/// Brand shown at the left of the navigation bar.
pub const BRAND: &str = "Learning Hub";

/// Render the navigation bar. The active entry is bracketed and highlighted;
/// each entry is prefixed with its number key.
pub fn render(f: &mut Frame, area: Rect, active_index: usize) {
    let colors = crate::ui::colors::current();
    let mut spans = vec![Span::styled(format!(" {} ", BRAND), colors.title_style), Span::raw(" ")];
    for (i, (label, _)) in NAV_ENTRIES.iter().enumerate() {
        if i == active_index {
            spans.push(Span::styled(format!("[{} {}]", i + 1, label), colors.nav_active_style));
        } else {
            spans.push(Span::styled(format!(" {} {} ", i + 1, label), colors.nav_style));
        }
        spans.push(Span::raw(" "));
    }
    // If the allocated vertical height is too small to show the bordered
    // block, render the content without borders so the active label remains
    // visible.
    let p = if area.height >= 3 {
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL))
    } else {
        Paragraph::new(Line::from(spans))
    };
    f.render_widget(p.style(colors.nav_style), area);
}
