//! Daily task operations.
//!
//! # Invariants
//! - Deleting moves the task out of the active list and into the Deleted
//!   archive in one logical step; an id never lives in both.
//! - Unknown ids are safe no-ops.

use crate::model::task::{EntryId, Task};
use crate::repo::slot_repo::SlotKey;
use crate::service::dashboard::Dashboard;
use log::debug;

impl Dashboard {
    /// Appends a new daily task. Blank input (after trimming) is ignored;
    /// the view layer validates, the store stays defensive.
    pub fn add_daily(&mut self, text: &str) -> Option<EntryId> {
        let text = text.trim();
        if text.is_empty() {
            debug!("event=daily_add module=service status=ignored reason=blank");
            return None;
        }
        let task = Task::new(text);
        let id = task.id;
        self.daily.push(task);
        self.mark_dirty(SlotKey::Daily);
        Some(id)
    }

    /// Flips a daily task's done flag. No-op for unknown ids.
    pub fn toggle_daily(&mut self, id: EntryId) {
        if let Some(task) = self.daily.iter_mut().find(|t| t.id == id) {
            task.toggle();
            self.mark_dirty(SlotKey::Daily);
        }
    }

    /// Moves a daily task into the Deleted archive. No-op for unknown ids.
    pub fn delete_daily(&mut self, id: EntryId) {
        let Some(index) = self.daily.iter().position(|t| t.id == id) else {
            return;
        };
        let mut task = self.daily.remove(index);
        task.deleted = true;
        self.deleted.daily.insert(0, task);
        self.mark_dirty(SlotKey::Daily);
        self.mark_dirty(SlotKey::Deleted);
        debug!("event=daily_delete module=service status=ok id={id}");
    }
}
