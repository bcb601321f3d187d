use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" 1/p pomodoro   "),
        Span::raw("2/s short break   "),
        Span::raw("3/l long break   "),
        Span::raw("Space start/stop   "),
        Span::raw("a task name   "),
        Span::raw("t tasks   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
