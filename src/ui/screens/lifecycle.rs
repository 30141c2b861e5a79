use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::demos::lifecycle::{Action, LifecycleDemo};
use crate::lifecycle::{ElementRole, LifecycleGuest, LifecycleWrapper, Source};
use crate::ui::colors::Colors;

pub fn draw(f: &mut Frame, area: Rect, demo: &LifecycleDemo) {
    let colors = crate::ui::colors::current();
    let [top, log_area] =
        Layout::vertical([Constraint::Length(14), Constraint::Min(3)]).areas(area);
    let [actions_area, host_area, guest_area] = Layout::horizontal([
        Constraint::Length(36),
        Constraint::Percentage(30),
        Constraint::Min(30),
    ])
    .areas(top);

    let actions: Vec<Line> = Action::ALL
        .iter()
        .enumerate()
        .map(|(i, a)| {
            let label = if *a == Action::ToggleAutoDetect {
                format!("{} [{}]", a.label(), if demo.auto_detect { "on" } else { "off" })
            } else {
                a.label().to_string()
            };
            crate::ui::action_line(&label, i == demo.selected)
        })
        .collect();
    f.render_widget(
        Paragraph::new(actions)
            .block(Block::default().borders(Borders::ALL).title("Actions (↑/↓, Enter)"))
            .style(colors.base_style),
        actions_area,
    );

    let Some(w) = demo.wrapper() else {
        f.render_widget(
            Paragraph::new(Line::styled("(not mounted)", colors.muted_style))
                .block(Block::default().borders(Borders::ALL)),
            host_area,
        );
        return;
    };

    f.render_widget(
        Paragraph::new(host_lines(w, &colors))
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Host"))
            .style(colors.base_style),
        host_area,
    );

    let guest_lines = match w.guest() {
        Some(g) => guest_lines(g, &colors),
        None => vec![Line::styled("Guest hidden (press t to show)", colors.muted_style)],
    };
    f.render_widget(
        Paragraph::new(guest_lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Guest"))
            .style(colors.base_style),
        guest_area,
    );

    // newest entries that fit, oldest first
    let rows = log_area.height.saturating_sub(2) as usize;
    let mut tail: Vec<Line> = w
        .relay()
        .entries()
        .rev()
        .take(rows)
        .map(|e| {
            let style = match e.source {
                Source::Host => colors.host_event_style,
                Source::Guest => colors.guest_event_style,
            };
            Line::from(vec![
                Span::styled(format!("{} ", e.received_at.format("%H:%M:%S")), colors.muted_style),
                Span::styled(e.event.to_string(), style),
            ])
        })
        .collect();
    tail.reverse();
    let title = format!("Lifecycle log ({} received)", w.relay().received());
    f.render_widget(
        Paragraph::new(tail)
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(colors.base_style),
        log_area,
    );
}

fn host_lines(w: &LifecycleWrapper, colors: &Colors) -> Vec<Line<'static>> {
    let t = w.host_tracker();
    vec![
        Line::from(format!("Wrapper: {}", t.id())),
        Line::from(format!("Input value: {}", w.inputs().input_value)),
        Line::from(format!("Counter: {}", w.inputs().counter)),
        Line::from(format!("Passes: {}", w.passes())),
        Line::from(format!("Throttle: {}ms", w.throttle_ms())),
        Line::from(format!(
            "View button: {}",
            t.query_element(ElementRole::ViewButton).status_label()
        )),
        Line::styled(
            format!("Projected button: {}", t.query_content_readiness().status_label()),
            colors.muted_style,
        ),
    ]
}

fn guest_lines(g: &LifecycleGuest, colors: &Colors) -> Vec<Line<'static>> {
    let badges: Vec<Span> = g
        .badges()
        .into_iter()
        .flat_map(|(phase, fired)| {
            let style = if fired { colors.badge_on_style } else { colors.badge_off_style };
            [Span::styled(format!(" {} ", phase.label()), style), Span::raw(" ")]
        })
        .collect();
    let c = g.counters();
    vec![
        Line::from(format!("Component ID: {}", g.tracker().id())),
        Line::from(format!("Input value: {}", g.inputs().input_value)),
        Line::from(format!("Counter: {}", g.inputs().counter)),
        Line::from(format!("Status: {}", g.status())),
        Line::from(badges),
        Line::from(format!(
            "Recheck: {} | ViewRecheck: {} | ContentRecheck: {}",
            c.recheck, c.view_recheck, c.content_recheck
        )),
        Line::from(format!("View child: {}", g.view_child_status())),
        Line::from(format!("Content child: {}", g.content_child_status())),
        Line::from(format!("Child input: {}", g.child_input_value())),
    ]
}
