pub mod enums;
pub mod task;
pub mod timer;

pub use enums::{Mode, UiMode};
pub use task::{Task, TaskLog};
pub use timer::{Completion, CountdownController, RemainingTime, TimerConfig};
