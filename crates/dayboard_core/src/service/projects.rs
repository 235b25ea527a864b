//! Project and subtask operations.
//!
//! # Invariants
//! - The active list holds only projects that are neither completed nor
//!   deleted; both lifecycle exits move the project into its archive.
//! - A lifecycle exit never leaves the view selector pointing at the
//!   removed project's detail view.
//! - Subtasks live and die with their parent project.

use crate::model::project::Project;
use crate::model::task::{EntryId, Task};
use crate::model::view::View;
use crate::repo::slot_repo::SlotKey;
use crate::service::dashboard::Dashboard;
use log::debug;

/// Canonical subtask template applied by `add_suggested_subtasks`.
pub const SUGGESTED_SUBTASKS: [&str; 5] = ["Research", "Outline", "Draft", "Review", "Finalize"];

impl Dashboard {
    /// Creates a new project at the top of the list (newest first).
    pub fn add_project(&mut self, title: &str) -> Option<EntryId> {
        let title = title.trim();
        if title.is_empty() {
            debug!("event=project_add module=service status=ignored reason=blank");
            return None;
        }
        let project = Project::new(title);
        let id = project.id;
        self.projects.insert(0, project);
        self.mark_dirty(SlotKey::Projects);
        Some(id)
    }

    /// Moves a project into the Deleted archive. No-op for unknown ids.
    pub fn delete_project(&mut self, id: EntryId) {
        let Some(index) = self.projects.iter().position(|p| p.id == id) else {
            return;
        };
        let mut project = self.projects.remove(index);
        project.deleted = true;
        self.deleted.projects.insert(0, project);
        if self.view.is_project_detail(id) {
            self.view = View::Projects;
        }
        self.mark_dirty(SlotKey::Projects);
        self.mark_dirty(SlotKey::Deleted);
        debug!("event=project_delete module=service status=ok id={id}");
    }

    /// Moves a project into the Completed archive. No-op for unknown ids.
    pub fn complete_project(&mut self, id: EntryId) {
        let Some(index) = self.projects.iter().position(|p| p.id == id) else {
            return;
        };
        let mut project = self.projects.remove(index);
        project.completed = true;
        self.completed.projects.insert(0, project);
        if self.view.is_project_detail(id) {
            self.view = View::Projects;
        }
        self.mark_dirty(SlotKey::Projects);
        self.mark_dirty(SlotKey::Completed);
        debug!("event=project_complete module=service status=ok id={id}");
    }

    /// Appends a subtask to a project. No-op when the project is unknown
    /// or the text is blank.
    pub fn add_subtask(&mut self, project_id: EntryId, text: &str) -> Option<EntryId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let project = self.project_mut(project_id)?;
        let subtask = Task::new(text);
        let id = subtask.id;
        project.subtasks.push(subtask);
        self.mark_dirty(SlotKey::Projects);
        Some(id)
    }

    /// Flips one subtask's done flag. No-op when either id is unknown.
    pub fn toggle_subtask(&mut self, project_id: EntryId, subtask_id: EntryId) {
        let Some(project) = self.project_mut(project_id) else {
            return;
        };
        if project.toggle_subtask(subtask_id) {
            self.mark_dirty(SlotKey::Projects);
        }
    }

    /// Removes one subtask outright; subtasks have no archive of their
    /// own. No-op when either id is unknown.
    pub fn delete_subtask(&mut self, project_id: EntryId, subtask_id: EntryId) {
        let Some(project) = self.project_mut(project_id) else {
            return;
        };
        if project.remove_subtask(subtask_id) {
            self.mark_dirty(SlotKey::Projects);
        }
    }

    /// Expands the canonical subtask template into the project, skipping
    /// names already present (case-sensitive exact match). Returns how
    /// many subtasks were added; 0 for an unknown project.
    pub fn add_suggested_subtasks(&mut self, project_id: EntryId) -> usize {
        let Some(project) = self.project_mut(project_id) else {
            return 0;
        };
        let mut added = 0;
        for name in SUGGESTED_SUBTASKS {
            if project.subtasks.iter().any(|s| s.text == name) {
                continue;
            }
            project.subtasks.push(Task::new(name));
            added += 1;
        }
        if added > 0 {
            self.mark_dirty(SlotKey::Projects);
        }
        debug!(
            "event=project_suggest module=service status=ok id={project_id} added={added}"
        );
        added
    }

    /// Overwrites a project's notes verbatim. No trimming, no length cap.
    pub fn set_notes(&mut self, project_id: EntryId, notes: &str) {
        let Some(project) = self.project_mut(project_id) else {
            return;
        };
        project.notes = notes.to_string();
        self.mark_dirty(SlotKey::Projects);
    }

    /// Looks up an active project by id.
    pub fn project(&self, project_id: EntryId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == project_id)
    }

    fn project_mut(&mut self, project_id: EntryId) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == project_id)
    }
}
