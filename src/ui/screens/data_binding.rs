use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::demos::data_binding::{Control, DataBindingState};
use crate::ui::colors::named_color;

pub fn draw(f: &mut Frame, area: Rect, s: &DataBindingState) {
    let colors = crate::ui::colors::current();
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(area);

    let controls: Vec<Line> = Control::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| crate::ui::action_line(c.label(), i == s.selected))
        .collect();
    f.render_widget(
        Paragraph::new(controls)
            .block(Block::default().borders(Borders::ALL).title("Controls (↑/↓, Enter)"))
            .style(colors.base_style),
        left,
    );

    let heading = |t: &str| Line::styled(t.to_string(), colors.title_style);
    let mut class_spans = vec![Span::raw("Conditional classes: ")];
    let mut class_style = colors.base_style;
    if s.is_active {
        class_style = class_style.patch(colors.badge_on_style);
    }
    if s.is_highlighted {
        class_style = class_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    class_spans.push(Span::styled(
        format!("[active={} highlight={}]", s.is_active, s.is_highlighted),
        class_style,
    ));
    let styled = Style::default()
        .fg(named_color(s.text_color()))
        .bg(named_color(s.background()));

    let lines = vec![
        heading("Interpolation"),
        Line::from(format!("Welcome, {}! Today is {}", s.user_name, s.current_date)),
        Line::from(format!("2 + 3 = {}  |  Message: {}", 2 + 3, s.message())),
        heading("Property binding"),
        Line::from(format!("Button: {} (disabled={})", s.button_text(), s.button_disabled)),
        heading("Event binding"),
        Line::from(format!("Button clicked {} times", s.click_count)),
        Line::from(format!("You typed: {}", s.typed_text)),
        Line::from(format!("Hover target: {}", s.hover_text())),
        heading("Two-way binding"),
        Line::from(format!("Hello, {}! You are {} years old", s.form.name, s.form.age)),
        Line::from(format!("Your message: {}", s.form.message)),
        heading("Class binding"),
        Line::from(class_spans),
        heading("Style binding"),
        Line::from(Span::styled(
            format!("Styled text: {} at {}px on {}", s.text_color(), s.font_size(), s.background()),
            styled,
        )),
    ];
    f.render_widget(
        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Data Binding"))
            .style(colors.base_style),
        right,
    );
}
