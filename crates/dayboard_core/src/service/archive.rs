//! Archive moves: undo, restore, purge.
//!
//! # Invariants
//! - `undo` resets the completion marker of the entity it brings back and
//!   always redirects the view to the projects list.
//! - `restore` resets only the `deleted` flag; completion state survives
//!   the round trip through the trash, and the view is left alone.
//! - `purge` is reachable from the Deleted archive only; Completed
//!   entries leave exclusively via `undo`.

use crate::model::archive::ArchiveKind;
use crate::model::task::EntryId;
use crate::model::view::View;
use crate::repo::slot_repo::SlotKey;
use crate::service::dashboard::Dashboard;
use log::debug;

fn take_by_id<T>(entries: &mut Vec<T>, id: EntryId, entry_id: impl Fn(&T) -> EntryId) -> Option<T> {
    let index = entries.iter().position(|entry| entry_id(entry) == id)?;
    Some(entries.remove(index))
}

impl Dashboard {
    /// Moves an entry from Completed back to its active collection,
    /// clearing its completion marker. Forces the view back to the
    /// projects list on success, regardless of entity type. Returns
    /// whether anything moved.
    pub fn undo(&mut self, kind: ArchiveKind, id: EntryId) -> bool {
        let moved = match kind {
            ArchiveKind::Daily => {
                match take_by_id(&mut self.completed.daily, id, |t| t.id) {
                    Some(mut task) => {
                        task.done = false;
                        task.deleted = false;
                        self.daily.push(task);
                        self.mark_dirty(SlotKey::Daily);
                        true
                    }
                    None => false,
                }
            }
            ArchiveKind::Weekly => {
                match take_by_id(&mut self.completed.weekly, id, |t| t.id) {
                    Some(mut task) => {
                        // The recurring original usually still sits in the
                        // active list; reset it in place instead of
                        // inserting a duplicate id.
                        if let Some(index) = self.weekly.iter().position(|t| t.id == id) {
                            self.weekly[index].last_completed = None;
                        } else {
                            task.last_completed = None;
                            task.deleted = false;
                            self.weekly.push(task);
                        }
                        self.mark_dirty(SlotKey::Weekly);
                        true
                    }
                    None => false,
                }
            }
            ArchiveKind::Projects => {
                match take_by_id(&mut self.completed.projects, id, |p| p.id) {
                    Some(mut project) => {
                        project.completed = false;
                        self.projects.insert(0, project);
                        self.mark_dirty(SlotKey::Projects);
                        true
                    }
                    None => false,
                }
            }
        };
        if moved {
            self.view = View::Projects;
            self.mark_dirty(SlotKey::Completed);
            debug!("event=archive_undo module=service status=ok kind={kind} id={id}");
        }
        moved
    }

    /// Moves an entry from Deleted back to its active collection,
    /// clearing its `deleted` flag. Returns whether anything moved.
    pub fn restore(&mut self, kind: ArchiveKind, id: EntryId) -> bool {
        let moved = match kind {
            ArchiveKind::Daily => match take_by_id(&mut self.deleted.daily, id, |t| t.id) {
                Some(mut task) => {
                    task.deleted = false;
                    self.daily.push(task);
                    self.mark_dirty(SlotKey::Daily);
                    true
                }
                None => false,
            },
            ArchiveKind::Weekly => match take_by_id(&mut self.deleted.weekly, id, |t| t.id) {
                Some(mut task) => {
                    task.deleted = false;
                    self.weekly.push(task);
                    self.mark_dirty(SlotKey::Weekly);
                    true
                }
                None => false,
            },
            ArchiveKind::Projects => {
                match take_by_id(&mut self.deleted.projects, id, |p| p.id) {
                    Some(mut project) => {
                        project.deleted = false;
                        self.projects.insert(0, project);
                        self.mark_dirty(SlotKey::Projects);
                        true
                    }
                    None => false,
                }
            }
        };
        if moved {
            self.mark_dirty(SlotKey::Deleted);
            debug!("event=archive_restore module=service status=ok kind={kind} id={id}");
        }
        moved
    }

    /// Permanently removes an entry from the Deleted archive. Returns
    /// whether anything was removed.
    pub fn purge(&mut self, kind: ArchiveKind, id: EntryId) -> bool {
        let removed = match kind {
            ArchiveKind::Daily => take_by_id(&mut self.deleted.daily, id, |t| t.id).is_some(),
            ArchiveKind::Weekly => take_by_id(&mut self.deleted.weekly, id, |t| t.id).is_some(),
            ArchiveKind::Projects => {
                take_by_id(&mut self.deleted.projects, id, |p| p.id).is_some()
            }
        };
        if removed {
            self.mark_dirty(SlotKey::Deleted);
            debug!("event=archive_purge module=service status=ok kind={kind} id={id}");
        }
        removed
    }
}
