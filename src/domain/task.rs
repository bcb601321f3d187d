use chrono::{DateTime, Local};

/// One work session recorded in the task log
#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    /// Length of the session that was started for this task, in minutes
    pub minutes: u32,
    pub started_at: DateTime<Local>,
    pub completed: bool,
}

impl Task {
    pub fn new(name: String, minutes: u32) -> Self {
        Self {
            name,
            minutes,
            started_at: Local::now(),
            completed: false,
        }
    }
}

/// Log of work sessions: one entry per pomodoro start, flipped to
/// completed when that session's countdown finishes
#[derive(Debug, Default)]
pub struct TaskLog {
    tasks: Vec<Task>,
}

impl TaskLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new session at the end of the log
    pub fn append(&mut self, name: String, minutes: u32) {
        self.tasks.push(Task::new(name, minutes));
    }

    /// Mark the most recently recorded session as completed
    pub fn complete_last(&mut self) {
        if let Some(task) = self.tasks.last_mut() {
            task.completed = true;
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Sessions whose countdown finished, oldest first
    pub fn completed(&self) -> impl Iterator<Item = &Task> {
        self.tasks.iter().filter(|t| t.completed)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
