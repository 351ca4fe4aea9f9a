//! Terminal feedback cues for task mutations.
//!
//! # Responsibility
//! - Emit audible bell cues and notification lines after mutations.
//!
//! # Invariants
//! - Feedback is stateless and never touches the task list.
//! - All output is suppressed in quiet mode.

use std::io::Write;

/// Stateless feedback emitter.
pub struct Feedback {
    enabled: bool,
}

impl Feedback {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Short audible cue after create/toggle/edit.
    pub fn cue(&self) {
        if self.enabled {
            let mut out = std::io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }
    }

    /// Delete feedback: audible cue plus a notification line.
    pub fn deleted(&self) {
        if self.enabled {
            println!("\x07Task deleted.");
        }
    }
}
