//! On-page activity log.

#[cfg(test)]
#[path = "log_test.rs"]
mod log_test;

use leptos::prelude::RwSignal;

/// User-visible event lines, newest first.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    pub entries: Vec<String>,
}

impl ActivityLog {
    /// Prepend a line so the latest message reads first.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.insert(0, line.into());
    }
}

/// Shared handle to the activity log, provided from the app root.
pub type ActivitySignal = RwSignal<ActivityLog>;
