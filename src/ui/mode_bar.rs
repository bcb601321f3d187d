use crate::app::AppState;
use crate::ui::styles::{active_tab_style, border_style, default_style, title_style};
use ratatui::{
    layout::Rect,
    text::Span,
    widgets::{Block, Borders, Tabs},
    Frame,
};

/// Render the mode tab bar (pomodoro / short break / long break)
pub fn render_mode_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let mode = app.controller.mode();
    let titles: Vec<_> = crate::domain::Mode::all()
        .iter()
        .map(|m| format!(" {} ", m.name()))
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" Mode ", title_style())),
        )
        .style(default_style())
        .highlight_style(active_tab_style(mode.accent()))
        .select(mode.index());

    f.render_widget(tabs, area);
}
