//! Daily and weekly task records.
//!
//! # Invariants
//! - `id` is stable and never reused for another entry.
//! - `last_completed` is a `YYYY-MM-DD` calendar date when set; staleness
//!   is always derived at read time, never stored as a countdown.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for every entity owned by the dashboard.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Serializes as an opaque string on the wire.
pub type EntryId = Uuid;

/// A single daily task (or a subtask inside a project).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntryId,
    pub text: String,
    pub done: bool,
    /// Set on copies held by the Deleted archive; active entries keep it
    /// `false`. Older backups may omit the field entirely.
    #[serde(default)]
    pub deleted: bool,
}

impl Task {
    /// Creates an active, not-done task with a generated id.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            done: false,
            deleted: false,
        }
    }

    /// Flips the done flag.
    pub fn toggle(&mut self) {
        self.done = !self.done;
    }
}

/// A recurring weekly task.
///
/// Completion never removes a weekly task from the active list; it only
/// stamps `last_completed` and leaves a copy in the Completed archive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyTask {
    pub id: EntryId,
    pub text: String,
    /// `YYYY-MM-DD` of the most recent completion, or `None` for never.
    pub last_completed: Option<String>,
    #[serde(default)]
    pub deleted: bool,
}

impl WeeklyTask {
    /// Creates a weekly task that has never been completed.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            last_completed: None,
            deleted: false,
        }
    }
}
