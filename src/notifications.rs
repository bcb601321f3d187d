//! Completion cues: desktop notification plus a terminal bell.
//! Both are fire-and-forget; a denied permission or missing notification
//! daemon must never take the timer down.

use crate::domain::Mode;
use notify_rust::Notification;
use std::io::Write;

/// Send a desktop notification for the mode that just became active
pub fn notify_mode_change(next: Mode) {
    let body = if next.is_break() {
        "Time for a break!"
    } else {
        "Time to work!"
    };

    let _ = Notification::new()
        .summary("Tomata")
        .body(body)
        .appname("tomata")
        .show();
}

/// Ring the terminal bell as the audible completion cue
pub fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}
