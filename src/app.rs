use crate::domain::{CountdownController, Mode, TaskLog, TimerConfig, UiMode};
use crate::notifications;
use std::time::Instant;

/// Name given to sessions started without typing anything in the form
pub const DEFAULT_TASK_NAME: &str = "No task name";

/// Input form state for naming the next work session
#[derive(Debug, Clone, Default)]
pub struct InputFormState {
    pub name: String,
}

/// Main application state
pub struct AppState {
    pub controller: CountdownController,
    pub task_log: TaskLog,
    /// Name applied to the next pomodoro start
    pub task_name: String,
    pub ui_mode: UiMode,
    pub input_form: Option<InputFormState>,
    pub show_tasks: bool,
    /// Suppress the notification and bell on completion
    pub silent: bool,
}

impl AppState {
    pub fn new(config: TimerConfig, silent: bool) -> Self {
        Self {
            controller: CountdownController::new(config),
            task_log: TaskLog::new(),
            task_name: String::new(),
            ui_mode: UiMode::Normal,
            input_form: None,
            show_tasks: false,
            silent,
        }
    }

    /// Switch timer mode; any running countdown stops
    pub fn switch_mode(&mut self, mode: Mode) {
        self.controller.switch_mode(mode);
    }

    /// Start when stopped, stop when running
    pub fn toggle_timer(&mut self, now: Instant) {
        if self.controller.is_running() {
            self.controller.stop();
        } else {
            self.start_timer(now);
        }
    }

    /// Begin the countdown; a pomodoro start also records a task
    pub fn start_timer(&mut self, now: Instant) {
        let mode = self.controller.mode();
        if self.controller.start(now) && mode == Mode::Pomodoro {
            let minutes = self.controller.config().minutes(mode);
            self.task_log.append(self.effective_task_name(), minutes);
        }
    }

    /// Advance the countdown and run completion side effects
    pub fn tick(&mut self, now: Instant) {
        if let Some(completion) = self.controller.tick(now) {
            if completion.finished == Mode::Pomodoro {
                self.task_log.complete_last();
            }
            if !self.silent {
                notifications::notify_mode_change(completion.next);
                notifications::ring_bell();
            }
        }
    }

    /// Task name for the next session, falling back to the default
    pub fn effective_task_name(&self) -> String {
        let trimmed = self.task_name.trim();
        if trimmed.is_empty() {
            DEFAULT_TASK_NAME.to_string()
        } else {
            trimmed.to_string()
        }
    }

    /// Toggle the completed-tasks panel
    pub fn toggle_show_tasks(&mut self) {
        self.show_tasks = !self.show_tasks;
    }

    // ── Task-name input form ──────────────────────────────────────────

    /// Open the input form, pre-filled with the current name
    pub fn start_edit_task_name(&mut self) {
        self.input_form = Some(InputFormState {
            name: self.task_name.clone(),
        });
        self.ui_mode = UiMode::EditingTaskName;
    }

    pub fn input_form_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.input_form {
            form.name.push(c);
        }
    }

    pub fn input_form_backspace(&mut self) {
        if let Some(form) = &mut self.input_form {
            form.name.pop();
        }
    }

    pub fn submit_input_form(&mut self) {
        if let Some(form) = self.input_form.take() {
            self.task_name = form.name;
        }
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_input_form(&mut self) {
        self.input_form = None;
        self.ui_mode = UiMode::Normal;
    }
}
