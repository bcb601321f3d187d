use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub mode_area: Rect,
    pub timer_area: Rect,
    pub tasks_area: Option<Rect>,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Mode tab bar (3 rows)
/// - Countdown pane (remaining space)
/// - Completed-tasks panel at the bottom when toggled on
pub fn create_layout(area: Rect, show_tasks: bool) -> MainLayout {
    if show_tasks {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),      // Keybindings bar
                Constraint::Length(3),      // Mode tabs
                Constraint::Min(9),         // Countdown pane
                Constraint::Percentage(40), // Tasks panel
            ])
            .split(area);

        MainLayout {
            keybindings_area: chunks[0],
            mode_area: chunks[1],
            timer_area: chunks[2],
            tasks_area: Some(chunks[3]),
        }
    } else {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Keybindings bar
                Constraint::Length(3), // Mode tabs
                Constraint::Min(9),    // Countdown pane
            ])
            .split(area);

        MainLayout {
            keybindings_area: chunks[0],
            mode_area: chunks[1],
            timer_area: chunks[2],
            tasks_area: None,
        }
    }
}

/// Create centered modal area (for the task-name form)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(8),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 50);

        let layout = create_layout(area, false);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.mode_area.height, 3);
        assert!(layout.timer_area.height >= 9);
        assert!(layout.tasks_area.is_none());

        let layout_with_tasks = create_layout(area, true);
        assert!(layout_with_tasks.tasks_area.is_some());
        assert!(layout_with_tasks.timer_area.height >= 9);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 50);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 8);
    }
}
