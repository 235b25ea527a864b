//! View selection state.
//!
//! # Responsibility
//! - Model the single "current view" value as a proper sum type so every
//!   consumer matches exhaustively instead of comparing strings.
//!
//! # Invariants
//! - Never persisted; a reload always lands on `View::Projects`.
//! - Lifecycle operations must not leave the selector pointing at an
//!   entity that is no longer in an active collection.

use crate::model::task::EntryId;

/// The read-only projection currently displayed by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Project list overview.
    #[default]
    Projects,
    /// Completed archive.
    Completed,
    /// Deleted archive (trash).
    Deleted,
    /// Daily history review.
    Review,
    /// Detail view of a single project.
    ProjectDetail(EntryId),
}

impl View {
    /// Returns whether this view points at the given project's detail page.
    pub fn is_project_detail(&self, project_id: EntryId) -> bool {
        matches!(self, Self::ProjectDetail(id) if *id == project_id)
    }
}
