//! Core state management and persistence for the Dayboard dashboard.
//! This crate is the single source of truth for lifecycle invariants;
//! view layers consume it as thin read/mutate clients.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{days_since, today, DaysSince};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::archive::{Archive, ArchiveKind};
pub use model::history::DailyHistoryEntry;
pub use model::project::Project;
pub use model::task::{EntryId, Task, WeeklyTask};
pub use model::view::View;
pub use repo::backup::{backup_file_name, BackupError};
pub use repo::debounce::{WriteScheduler, DEBOUNCE_QUIET_PERIOD};
pub use repo::slot_repo::{SlotError, SlotKey, SlotRepo};
pub use service::dashboard::Dashboard;
pub use service::projects::SUGGESTED_SUBTASKS;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
