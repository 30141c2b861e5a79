use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::demos::components::{Action, ComponentsState};
use crate::ui::colors::named_color;

pub fn draw(f: &mut Frame, area: Rect, s: &ComponentsState) {
    let colors = crate::ui::colors::current();
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(40), Constraint::Percentage(60)]).areas(area);

    let actions: Vec<Line> = Action::ALL
        .iter()
        .enumerate()
        .map(|(i, a)| crate::ui::action_line(a.label(), i == s.selected))
        .collect();
    f.render_widget(
        Paragraph::new(actions)
            .block(Block::default().borders(Borders::ALL).title("Actions (↑/↓, Enter)"))
            .style(colors.base_style),
        left,
    );

    let [parent_area, child_area, query_area] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(6),
        Constraint::Min(4),
    ])
    .areas(right);

    let parent = vec![
        Line::from(format!("Component ID: {}", s.component_id)),
        Line::from(format!("Created: {}", s.created_at.format("%H:%M:%S"))),
        Line::from(format!("Status: {}", s.status())),
        Line::from(format!("Parent counter: {}", s.parent_counter)),
        Line::from(format!("Message from child: {}", s.child_message)),
    ];
    f.render_widget(
        Paragraph::new(parent)
            .block(Block::default().borders(Borders::ALL).title("Parent"))
            .style(colors.base_style),
        parent_area,
    );

    let child = match &s.child {
        Some(c) => vec![
            Line::from(format!("Received from parent: {}", c.parent_message)),
            Line::from(format!("Child counter: {}", c.child_counter)),
            Line::from(format!("Lifecycle Status: {}", c.lifecycle_status)),
        ],
        None => vec![Line::styled(
            match s.last_child_status {
                Some(st) => format!("(child hidden, last status: {})", st),
                None => "(child hidden)".to_string(),
            },
            colors.muted_style,
        )],
    };
    f.render_widget(
        Paragraph::new(child)
            .block(Block::default().borders(Borders::ALL).title("Child"))
            .style(colors.base_style),
        child_area,
    );

    let box_line = match s.box_color() {
        Some(c) => Line::from(vec![
            Span::raw("Color box: "),
            Span::styled("        ", Style::default().bg(named_color(c))),
            Span::raw(format!(" {}", c)),
        ]),
        None => Line::from("Color box: (default)"),
    };
    let query = vec![
        Line::from(format!("Input: {}", s.user_input)),
        Line::from(format!("Read value: {}", s.read_value)),
        box_line,
    ];
    f.render_widget(
        Paragraph::new(query)
            .block(Block::default().borders(Borders::ALL).title("Element queries"))
            .style(colors.base_style),
        query_area,
    );
}
