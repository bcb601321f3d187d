use crate::app::AppState;
use crate::domain::Task;
use crate::ui::styles::{border_style, default_style, done_style, hint_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Create a single line for a completed session
/// Format: ✔ Write proposal — 25 minutes (14:05)
fn create_task_line(task: &Task) -> Line<'static> {
    Line::from(vec![
        Span::styled("✔ ".to_string(), done_style()),
        Span::raw(task.name.clone()),
        Span::styled(
            format!(
                " — {} minutes ({})",
                task.minutes,
                task.started_at.format("%H:%M")
            ),
            hint_style(),
        ),
    ])
}

/// Render the completed-tasks panel
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let completed: Vec<&Task> = app.task_log.completed().collect();

    let title = format!(" Completed Tasks ({}) ", completed.len());
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));

    if completed.is_empty() {
        let paragraph = Paragraph::new("No completed sessions yet.")
            .style(hint_style())
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = completed
        .iter()
        .map(|task| ListItem::new(create_task_line(task)).style(default_style()))
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}
