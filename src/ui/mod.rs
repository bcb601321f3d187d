pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod mode_bar;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use mode_bar::render_mode_bar;
use ratatui::Frame;
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size, app.show_tasks);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_mode_bar(f, app, layout.mode_area);
    render_timer_pane(f, app, layout.timer_area);

    // Render tasks panel if showing
    if let Some(tasks_area) = layout.tasks_area {
        render_task_pane(f, app, tasks_area);
    }

    // Render input form if active
    if app.input_form.is_some() {
        render_input_form(f, app, size);
    }
}
