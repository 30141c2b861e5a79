use ratatui::layout::{Constraint, Layout};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{App, Mode, Route};

pub mod colors;
pub mod dialogs;
pub mod screens;
pub mod themes;
pub mod widgets;

fn help_text(route: &Route) -> &'static str {
    match route {
        Route::Lifecycle => {
            "↑/↓:select  Enter:run  t:toggle guest  +:counter  p:pass  c:clear log  ?:code  Tab:next  q:quit"
        }
        Route::Components | Route::DataBinding => {
            "↑/↓:select  Enter:run  ?:code  Tab/1-8:screens  g:go to path  F2:theme  q:quit"
        }
        Route::Home | Route::Placeholder(_) => {
            "Tab/1-8:screens  g:go to path  ?:code  F2:theme  q:quit"
        }
    }
}

/// One row of an action list; the selected row is reversed and marked.
pub fn action_line(label: &str, selected: bool) -> Line<'static> {
    let colors = colors::current();
    if selected {
        Line::styled(format!("> {}", label), colors.selected_style)
    } else {
        Line::styled(format!("  {}", label), colors.base_style)
    }
}

pub fn ui(f: &mut Frame, app: &App) {
    let colors = colors::current();
    let [nav, main, help] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(f.area());

    widgets::nav_bar::render(f, nav, app.route.nav_index());

    let screen_area = if app.show_code {
        let [screen, code] =
            Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                .areas(main);
        let sample = Paragraph::new(crate::samples::for_route(&app.route))
            .block(Block::default().borders(Borders::ALL).title("Code"))
            .style(colors.code_style);
        f.render_widget(sample, code);
        screen
    } else {
        main
    };

    match &app.route {
        Route::Home => screens::home::draw(f, screen_area),
        Route::Components => screens::components::draw(f, screen_area, &app.components),
        Route::Lifecycle => screens::lifecycle::draw(f, screen_area, &app.lifecycle),
        Route::DataBinding => screens::data_binding::draw(f, screen_area, &app.data_binding),
        Route::Placeholder(path) => screens::placeholder::draw(f, screen_area, path),
    }

    f.render_widget(
        Paragraph::new(help_text(&app.route)).style(colors.help_style),
        help,
    );

    match &app.mode {
        Mode::Normal => {}
        Mode::Input { prompt, buffer, .. } => dialogs::draw_prompt(f, f.area(), prompt, buffer),
        Mode::Message { title, content } => dialogs::draw_message(f, f.area(), title, content),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_help_lists_shortcuts() {
        let h = help_text(&Route::Lifecycle);
        assert!(h.contains("t:toggle guest"));
        assert!(h.contains("p:pass"));
    }
}
