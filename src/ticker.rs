use std::time::Duration;

/// Poll/tick interval in milliseconds. Remaining time is derived from the
/// captured end instant, so the interval only bounds display latency.
pub const DEFAULT_TICK_MS: u64 = 250;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}
