use crate::app::AppState;
use crate::domain::Mode;
use crate::ui::styles::{
    accent_border_style, clock_style, default_style, gauge_style, running_style, stopped_style,
    title_style,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Pane headline, the counterpart of the original page title
fn headline(mode: Mode) -> &'static str {
    if mode == Mode::Pomodoro {
        "Get back to work!"
    } else {
        "Take a break!"
    }
}

/// Render the countdown pane: clock, progress gauge, status and session info
pub fn render_timer_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let mode = app.controller.mode();
    let accent = mode.accent();
    let remaining = app.controller.remaining();

    let title = format!(" {} — {} ", mode.name(), headline(mode));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(accent_border_style(accent))
        .title(Span::styled(title, title_style()));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Gauge
            Constraint::Length(1), // Spacing
            Constraint::Min(3),    // Status lines
        ])
        .split(block.inner(area));

    f.render_widget(block, area);

    // Clock
    let clock = Paragraph::new(Line::from(Span::styled(
        remaining.display(),
        clock_style(accent),
    )))
    .alignment(Alignment::Center);
    f.render_widget(clock, chunks[1]);

    // Progress gauge: elapsed share of the configured duration
    let total = app.controller.config().total_seconds(mode);
    let percent = if total > 0 {
        (app.controller.elapsed_seconds() * 100 / total).min(100) as u16
    } else {
        0
    };
    let gauge = Gauge::default()
        .block(Block::default())
        .gauge_style(gauge_style(accent))
        .percent(percent)
        .label("");
    f.render_widget(gauge, chunks[3]);

    // Status lines
    let status = if app.controller.is_running() {
        Span::styled("RUNNING", running_style())
    } else {
        Span::styled("STOPPED", stopped_style())
    };

    let mut lines = vec![
        Line::from(vec![Span::styled("Status: ", title_style()), status]),
        Line::from(vec![
            Span::styled("Sessions: ", title_style()),
            Span::raw(app.controller.sessions().to_string()),
        ]),
    ];

    if mode == Mode::Pomodoro {
        lines.push(Line::from(vec![
            Span::styled("Task: ", title_style()),
            Span::raw(app.effective_task_name()),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .style(default_style())
        .alignment(Alignment::Center);
    f.render_widget(paragraph, chunks[5]);
}
