//! Completed/Deleted archive buckets.
//!
//! # Responsibility
//! - Hold value copies of entities moved out of the active collections.
//!
//! # Invariants
//! - Entries carry no back-reference to their prior container; copies are
//!   deep (project subtasks included).
//! - An entity id appears in at most one of {active, Completed, Deleted}
//!   for its type; the service layer performs the move as one logical
//!   remove-and-insert step.

use crate::model::project::Project;
use crate::model::task::{Task, WeeklyTask};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Which entity family an archive operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArchiveKind {
    Daily,
    Weekly,
    Projects,
}

impl Display for ArchiveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Projects => write!(f, "projects"),
        }
    }
}

/// One side archive (Completed or Deleted), newest entries first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Archive {
    #[serde(default)]
    pub daily: Vec<Task>,
    #[serde(default)]
    pub weekly: Vec<WeeklyTask>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Archive {
    /// Returns whether all three buckets are empty.
    pub fn is_empty(&self) -> bool {
        self.daily.is_empty() && self.weekly.is_empty() && self.projects.is_empty()
    }
}
