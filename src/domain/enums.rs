use ratatui::style::Color;

/// Timer mode: one focused work interval or one of the two break lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// Get the display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            Mode::Pomodoro => "Pomodoro",
            Mode::ShortBreak => "Short Break",
            Mode::LongBreak => "Long Break",
        }
    }

    /// Accent color used by the UI while this mode is active
    pub fn accent(&self) -> Color {
        match self {
            Mode::Pomodoro => Color::Red,
            Mode::ShortBreak => Color::Cyan,
            Mode::LongBreak => Color::Blue,
        }
    }

    /// Check if this mode is a break
    pub fn is_break(&self) -> bool {
        !matches!(self, Mode::Pomodoro)
    }

    /// Get all modes in tab-bar order
    pub fn all() -> &'static [Mode] {
        &[Mode::Pomodoro, Mode::ShortBreak, Mode::LongBreak]
    }

    /// Position of this mode in the tab bar
    pub fn index(&self) -> usize {
        match self {
            Mode::Pomodoro => 0,
            Mode::ShortBreak => 1,
            Mode::LongBreak => 2,
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    EditingTaskName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_is_break() {
        assert!(!Mode::Pomodoro.is_break());
        assert!(Mode::ShortBreak.is_break());
        assert!(Mode::LongBreak.is_break());
    }

    #[test]
    fn test_mode_index_matches_all_order() {
        for (idx, mode) in Mode::all().iter().enumerate() {
            assert_eq!(mode.index(), idx);
        }
    }
}
