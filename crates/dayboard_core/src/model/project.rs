//! Project records with exclusively-owned subtasks.
//!
//! # Invariants
//! - Subtasks have no lifecycle outside their parent project; archiving a
//!   project deep-copies its subtasks with it.
//! - `notes` is stored verbatim, no trimming and no length cap.

use crate::model::task::{EntryId, Task};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A project with ordered subtasks and free-text notes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: EntryId,
    pub title: String,
    pub completed: bool,
    pub deleted: bool,
    pub subtasks: Vec<Task>,
    #[serde(default)]
    pub notes: String,
}

impl Project {
    /// Creates an active project with no subtasks and empty notes.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            completed: false,
            deleted: false,
            subtasks: Vec::new(),
            notes: String::new(),
        }
    }

    /// Finds a subtask by id.
    pub fn subtask(&self, subtask_id: EntryId) -> Option<&Task> {
        self.subtasks.iter().find(|s| s.id == subtask_id)
    }

    fn subtask_mut(&mut self, subtask_id: EntryId) -> Option<&mut Task> {
        self.subtasks.iter_mut().find(|s| s.id == subtask_id)
    }

    /// Flips one subtask's done flag. Returns `false` when the id is
    /// unknown.
    pub fn toggle_subtask(&mut self, subtask_id: EntryId) -> bool {
        match self.subtask_mut(subtask_id) {
            Some(subtask) => {
                subtask.toggle();
                true
            }
            None => false,
        }
    }

    /// Removes one subtask. Returns `false` when the id is unknown.
    pub fn remove_subtask(&mut self, subtask_id: EntryId) -> bool {
        match self.subtasks.iter().position(|s| s.id == subtask_id) {
            Some(index) => {
                self.subtasks.remove(index);
                true
            }
            None => false,
        }
    }
}
