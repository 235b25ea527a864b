//! Weekly (recurring) task operations.
//!
//! # Invariants
//! - Completion never removes a weekly task from the active list; it
//!   stamps `last_completed` and leaves a copy in Completed. This is the
//!   one lifecycle where an id legitimately exists in both the active
//!   collection and an archive.
//! - Completed keeps at most one copy per weekly id; re-completing
//!   replaces the previous archive entry.

use crate::clock;
use crate::model::task::{EntryId, WeeklyTask};
use crate::repo::slot_repo::SlotKey;
use crate::service::dashboard::Dashboard;
use log::debug;

impl Dashboard {
    /// Appends a new weekly task that has never been completed.
    pub fn add_weekly(&mut self, text: &str) -> Option<EntryId> {
        let text = text.trim();
        if text.is_empty() {
            debug!("event=weekly_add module=service status=ignored reason=blank");
            return None;
        }
        let task = WeeklyTask::new(text);
        let id = task.id;
        self.weekly.push(task);
        self.mark_dirty(SlotKey::Weekly);
        Some(id)
    }

    /// Marks a weekly task done for this week.
    ///
    /// Sets `last_completed = today()` on the active entry and records a
    /// copy in the Completed archive. No-op for unknown ids.
    pub fn complete_weekly(&mut self, id: EntryId) {
        let Some(task) = self.weekly.iter_mut().find(|t| t.id == id) else {
            return;
        };
        task.last_completed = Some(clock::today());
        let copy = task.clone();
        self.completed.weekly.retain(|t| t.id != id);
        self.completed.weekly.insert(0, copy);
        self.mark_dirty(SlotKey::Weekly);
        self.mark_dirty(SlotKey::Completed);
        debug!("event=weekly_complete module=service status=ok id={id}");
    }

    /// Moves a weekly task into the Deleted archive. No-op for unknown
    /// ids.
    pub fn delete_weekly(&mut self, id: EntryId) {
        let Some(index) = self.weekly.iter().position(|t| t.id == id) else {
            return;
        };
        let mut task = self.weekly.remove(index);
        task.deleted = true;
        self.deleted.weekly.insert(0, task);
        self.mark_dirty(SlotKey::Weekly);
        self.mark_dirty(SlotKey::Deleted);
        debug!("event=weekly_delete module=service status=ok id={id}");
    }
}
