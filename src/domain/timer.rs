use super::enums::Mode;
use std::time::{Duration, Instant};

/// Fixed per-mode durations and the long-break cadence
#[derive(Debug, Clone, Copy)]
pub struct TimerConfig {
    pub pomodoro_minutes: u32,
    pub short_break_minutes: u32,
    pub long_break_minutes: u32,
    /// Every Nth pomodoro is followed by a long break
    pub long_break_interval: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            pomodoro_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            long_break_interval: 4,
        }
    }
}

impl TimerConfig {
    /// Configured minutes for a mode
    pub fn minutes(&self, mode: Mode) -> u32 {
        match mode {
            Mode::Pomodoro => self.pomodoro_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    /// Configured duration for a mode, in whole seconds
    pub fn total_seconds(&self, mode: Mode) -> u64 {
        u64::from(self.minutes(mode)) * 60
    }
}

/// Remaining countdown time, derived from the end instant on every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemainingTime {
    pub total: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl RemainingTime {
    /// Build from a whole number of seconds
    pub fn from_seconds(total: u64) -> Self {
        Self {
            total,
            minutes: total / 60,
            seconds: total % 60,
        }
    }

    /// Derive remaining time from the captured end instant and the current
    /// wall clock. Never negative: a late tick clamps to zero.
    pub fn until(end: Instant, now: Instant) -> Self {
        let total = end.saturating_duration_since(now).as_secs();
        Self::from_seconds(total)
    }

    /// Clock-face string, e.g. "25:00"
    pub fn display(&self) -> String {
        format!("{:02}:{:02}", self.minutes, self.seconds)
    }
}

/// Reported once per finished countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    pub finished: Mode,
    pub next: Mode,
}

/// Timer state controller.
///
/// Owns the current mode, session counter, and derived remaining time.
/// Drift-free: starting captures an absolute end instant and every tick
/// recomputes remaining time from it, so a delayed tick still reflects
/// true elapsed wall time. No internal thread; the caller drives `tick`.
#[derive(Debug, Clone)]
pub struct CountdownController {
    config: TimerConfig,
    mode: Mode,
    sessions: u32,
    remaining: RemainingTime,
    end_time: Option<Instant>,
}

impl CountdownController {
    pub fn new(config: TimerConfig) -> Self {
        let mode = Mode::Pomodoro;
        Self {
            config,
            mode,
            sessions: 0,
            remaining: RemainingTime::from_seconds(config.total_seconds(mode)),
            end_time: None,
        }
    }

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of pomodoro sessions started so far
    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    pub fn remaining(&self) -> RemainingTime {
        self.remaining
    }

    pub fn is_running(&self) -> bool {
        self.end_time.is_some()
    }

    /// Seconds elapsed within the current countdown (for the progress gauge)
    pub fn elapsed_seconds(&self) -> u64 {
        self.config
            .total_seconds(self.mode)
            .saturating_sub(self.remaining.total)
    }

    /// Switch to a mode: stops any running countdown and resets the
    /// remaining time to that mode's configured duration
    pub fn switch_mode(&mut self, mode: Mode) {
        self.stop();
        self.mode = mode;
        self.remaining = RemainingTime::from_seconds(self.config.total_seconds(mode));
    }

    /// Begin the countdown. Only valid when stopped; a no-op otherwise.
    /// Captures the absolute end instant and counts the session when the
    /// mode is a pomodoro. Returns true when a countdown actually began.
    pub fn start(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        if self.mode == Mode::Pomodoro {
            self.sessions += 1;
        }
        self.end_time = Some(now + Duration::from_secs(self.remaining.total));
        true
    }

    /// Cancel the countdown. Idempotent.
    pub fn stop(&mut self) {
        self.end_time = None;
    }

    /// Recompute remaining time from the end instant. When the countdown
    /// reaches zero, the end instant is cleared before anything else so a
    /// completion fires exactly once; the controller then auto-switches to
    /// the next mode and reports the transition.
    pub fn tick(&mut self, now: Instant) -> Option<Completion> {
        let end = self.end_time?;
        self.remaining = RemainingTime::until(end, now);
        if self.remaining.total > 0 {
            return None;
        }

        self.end_time = None;
        let finished = self.mode;
        let next = self.next_mode();
        self.switch_mode(next);
        Some(Completion { finished, next })
    }

    /// Mode to enter once the current countdown finishes: pomodoros
    /// alternate with breaks, and every Nth pomodoro earns the long one
    fn next_mode(&self) -> Mode {
        match self.mode {
            Mode::Pomodoro => {
                if self.sessions % self.config.long_break_interval == 0 {
                    Mode::LongBreak
                } else {
                    Mode::ShortBreak
                }
            }
            Mode::ShortBreak | Mode::LongBreak => Mode::Pomodoro,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn controller() -> CountdownController {
        CountdownController::new(TimerConfig::default())
    }

    /// Run a started controller to completion by jumping past the end
    fn complete(ctrl: &mut CountdownController, start: Instant) -> Completion {
        let total = ctrl.remaining().total;
        assert!(ctrl.start(start));
        ctrl.tick(start + Duration::from_secs(total))
            .expect("countdown should complete")
    }

    #[test]
    fn test_switch_mode_resets_remaining() {
        let mut ctrl = controller();
        for &mode in Mode::all() {
            ctrl.switch_mode(mode);
            assert_eq!(
                ctrl.remaining().total,
                u64::from(ctrl.config().minutes(mode)) * 60
            );
            assert!(!ctrl.is_running());
        }
    }

    #[test]
    fn test_switch_mode_stops_running_countdown() {
        let mut ctrl = controller();
        ctrl.start(Instant::now());
        assert!(ctrl.is_running());

        ctrl.switch_mode(Mode::ShortBreak);
        assert!(!ctrl.is_running());
        assert_eq!(ctrl.remaining(), RemainingTime::from_seconds(5 * 60));
    }

    #[test]
    fn test_tick_derives_remaining_from_wall_clock() {
        let mut ctrl = controller();
        let start = Instant::now();
        ctrl.start(start);

        // A single late tick reflects the full elapsed time, not one step
        assert_eq!(ctrl.tick(start + Duration::from_secs(90)), None);
        assert_eq!(ctrl.remaining().total, 25 * 60 - 90);
        assert_eq!(ctrl.remaining().minutes, 23);
        assert_eq!(ctrl.remaining().seconds, 30);
    }

    #[test]
    fn test_completion_fires_exactly_once() {
        let mut ctrl = controller();
        let start = Instant::now();
        ctrl.start(start);

        let after_end = start + Duration::from_secs(25 * 60 + 7);
        let completion = ctrl.tick(after_end).expect("first tick past end completes");
        assert_eq!(completion.finished, Mode::Pomodoro);
        assert_eq!(completion.next, Mode::ShortBreak);
        assert_eq!(ctrl.mode(), Mode::ShortBreak);
        assert!(!ctrl.is_running());

        // Stopped: further ticks neither complete again nor touch remaining
        assert_eq!(ctrl.tick(after_end + Duration::from_secs(5)), None);
        assert_eq!(ctrl.remaining(), RemainingTime::from_seconds(5 * 60));
    }

    #[test]
    fn test_start_is_noop_while_running() {
        let mut ctrl = controller();
        let start = Instant::now();
        assert!(ctrl.start(start));
        assert!(!ctrl.start(start + Duration::from_secs(1)));
        assert_eq!(ctrl.sessions(), 1);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut ctrl = controller();
        ctrl.start(Instant::now());
        ctrl.stop();
        ctrl.stop();
        assert!(!ctrl.is_running());
    }

    #[test]
    fn test_sessions_count_only_pomodoro_starts() {
        let mut ctrl = controller();
        let now = Instant::now();

        ctrl.switch_mode(Mode::ShortBreak);
        ctrl.start(now);
        assert_eq!(ctrl.sessions(), 0);

        ctrl.switch_mode(Mode::Pomodoro);
        ctrl.start(now);
        assert_eq!(ctrl.sessions(), 1);
    }

    #[test]
    fn test_every_fourth_pomodoro_routes_to_long_break() {
        let mut ctrl = controller();
        let now = Instant::now();

        for round in 1..=8u32 {
            ctrl.switch_mode(Mode::Pomodoro);
            let completion = complete(&mut ctrl, now);
            let expected = if round % 4 == 0 {
                Mode::LongBreak
            } else {
                Mode::ShortBreak
            };
            assert_eq!(completion.next, expected, "after pomodoro #{round}");
        }
    }

    #[test]
    fn test_breaks_route_back_to_pomodoro() {
        let mut ctrl = controller();
        let now = Instant::now();

        for &mode in &[Mode::ShortBreak, Mode::LongBreak] {
            ctrl.switch_mode(mode);
            let completion = complete(&mut ctrl, now);
            assert_eq!(completion.finished, mode);
            assert_eq!(completion.next, Mode::Pomodoro);
        }
    }

    #[test]
    fn test_remaining_never_negative_on_late_tick() {
        let mut ctrl = controller();
        let start = Instant::now();
        ctrl.start(start);

        // Way past the end: remaining clamps at zero and completes cleanly
        let completion = ctrl.tick(start + Duration::from_secs(60 * 60));
        assert!(completion.is_some());
    }

    #[test]
    fn test_remaining_display() {
        assert_eq!(RemainingTime::from_seconds(25 * 60).display(), "25:00");
        assert_eq!(RemainingTime::from_seconds(65).display(), "01:05");
        assert_eq!(RemainingTime::from_seconds(0).display(), "00:00");
    }

    #[test]
    fn test_elapsed_seconds_tracks_progress() {
        let mut ctrl = controller();
        let start = Instant::now();
        assert_eq!(ctrl.elapsed_seconds(), 0);

        ctrl.start(start);
        ctrl.tick(start + Duration::from_secs(120));
        assert_eq!(ctrl.elapsed_seconds(), 120);
    }
}
