use crate::app::AppState;
use crate::domain::{Mode, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::EditingTaskName => handle_input_form_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Mode buttons
        KeyCode::Char('1') | KeyCode::Char('p') | KeyCode::Char('P') => {
            app.switch_mode(Mode::Pomodoro);
            Ok(false)
        }
        KeyCode::Char('2') | KeyCode::Char('s') | KeyCode::Char('S') => {
            app.switch_mode(Mode::ShortBreak);
            Ok(false)
        }
        KeyCode::Char('3') | KeyCode::Char('l') | KeyCode::Char('L') => {
            app.switch_mode(Mode::LongBreak);
            Ok(false)
        }

        // Start/stop toggle
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_timer(Instant::now());
            Ok(false)
        }

        // Name the next work session
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_edit_task_name();
            Ok(false)
        }

        // Toggle completed-tasks panel
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_show_tasks();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in the task-name form
fn handle_input_form_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Submit form
        KeyCode::Enter => {
            app.submit_input_form();
            Ok(false)
        }

        // Cancel form
        KeyCode::Esc => {
            app.cancel_input_form();
            Ok(false)
        }

        // Backspace
        KeyCode::Backspace => {
            app.input_form_backspace();
            Ok(false)
        }

        // Add character
        KeyCode::Char(c) => {
            app.input_form_add_char(c);
            Ok(false)
        }

        _ => Ok(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimerConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    fn create_test_app() -> AppState {
        AppState::new(TimerConfig::default(), true)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    #[test]
    fn test_handle_mode_keys_switch_and_stop() {
        let mut app = create_test_app();
        handle_key(&mut app, key(KeyCode::Char(' '))).unwrap();
        assert!(app.controller.is_running());

        handle_key(&mut app, key(KeyCode::Char('2'))).unwrap();
        assert_eq!(app.controller.mode(), Mode::ShortBreak);
        assert!(!app.controller.is_running());

        handle_key(&mut app, key(KeyCode::Char('l'))).unwrap();
        assert_eq!(app.controller.mode(), Mode::LongBreak);

        handle_key(&mut app, key(KeyCode::Char('p'))).unwrap();
        assert_eq!(app.controller.mode(), Mode::Pomodoro);
    }

    #[test]
    fn test_handle_toggle() {
        let mut app = create_test_app();

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(app.controller.is_running());

        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!app.controller.is_running());
    }

    #[test]
    fn test_handle_quit() {
        let mut app = create_test_app();
        let should_quit = handle_key(&mut app, key(KeyCode::Char('q'))).unwrap();
        assert!(should_quit);
    }

    #[test]
    fn test_handle_task_name_form() {
        let mut app = create_test_app();

        // Press 'a' to open form
        handle_key(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::EditingTaskName);
        assert!(app.input_form.is_some());

        // Type a name; form keys must not trigger normal-mode bindings
        for c in "plan sprint".chars() {
            handle_key(&mut app, key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.controller.mode(), Mode::Pomodoro);
        assert!(!app.controller.is_running());

        // Submit with Enter
        handle_key(&mut app, key(KeyCode::Enter)).unwrap();
        assert_eq!(app.task_name, "plan sprint");
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_handle_toggle_tasks_panel() {
        let mut app = create_test_app();
        assert!(!app.show_tasks);

        handle_key(&mut app, key(KeyCode::Char('t'))).unwrap();
        assert!(app.show_tasks);

        handle_key(&mut app, key(KeyCode::Char('t'))).unwrap();
        assert!(!app.show_tasks);
    }
}
