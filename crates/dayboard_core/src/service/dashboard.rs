//! The dashboard state container.
//!
//! # Responsibility
//! - Own every in-memory collection plus the view selector and the write
//!   scheduler; load them from slots at startup and flush them back on a
//!   debounced schedule.
//!
//! # Invariants
//! - In-memory state is the source of truth for the session; a failed
//!   durable write is logged and never rolls a mutation back.
//! - `reload` discards pending writes before re-reading slots, so a stale
//!   debounced write can never clobber freshly imported data.
//! - The view selector is not persisted and resets to `Projects` on
//!   reload.

use crate::db::{open_store, open_store_in_memory, DbResult};
use crate::model::archive::Archive;
use crate::model::history::DailyHistoryEntry;
use crate::model::project::Project;
use crate::model::task::{Task, WeeklyTask};
use crate::model::view::View;
use crate::repo::backup::{export_json, import_document, BackupError};
use crate::repo::debounce::WriteScheduler;
use crate::repo::slot_repo::{SlotKey, SlotRepo};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Instant;

/// Explicit, constructor-injected state container for the whole dashboard.
///
/// There are no ambient singletons; the application owns one `Dashboard`
/// and hands it (or a narrowed borrow) to each consumer.
pub struct Dashboard {
    conn: Connection,
    scheduler: WriteScheduler,
    pub(crate) daily: Vec<Task>,
    pub(crate) weekly: Vec<WeeklyTask>,
    pub(crate) projects: Vec<Project>,
    pub(crate) scratch: String,
    pub(crate) completed: Archive,
    pub(crate) deleted: Archive,
    pub(crate) history: Vec<DailyHistoryEntry>,
    pub(crate) view: View,
}

impl Dashboard {
    /// Opens the store file and loads all collections.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self::from_connection(open_store(path)?))
    }

    /// Opens an in-memory store; used by tests and throwaway sessions.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self::from_connection(open_store_in_memory()?))
    }

    /// Builds a dashboard over an already-bootstrapped connection.
    pub fn from_connection(conn: Connection) -> Self {
        let mut board = Self {
            conn,
            scheduler: WriteScheduler::new(),
            daily: Vec::new(),
            weekly: Vec::new(),
            projects: Vec::new(),
            scratch: String::new(),
            completed: Archive::default(),
            deleted: Archive::default(),
            history: Vec::new(),
            view: View::Projects,
        };
        board.reload();
        board
    }

    /// Re-reads every collection from storage, replacing in-memory state.
    ///
    /// Full restart semantics: pending debounced writes are discarded
    /// first and the view selector resets to `Projects`.
    pub fn reload(&mut self) {
        self.scheduler.drain_all();
        let repo = SlotRepo::new(&self.conn);
        self.daily = repo.load(SlotKey::Daily, Vec::new());
        self.weekly = repo.load(SlotKey::Weekly, starter_weekly_tasks());
        self.projects = repo.load(SlotKey::Projects, Vec::new());
        self.scratch = repo.load(SlotKey::Scratch, String::new());
        self.completed = repo.load(SlotKey::Completed, Archive::default());
        self.deleted = repo.load(SlotKey::Deleted, Archive::default());
        self.history = repo.load(SlotKey::History, Vec::new());
        self.view = View::Projects;
        info!(
            "event=state_load module=service status=ok daily={} weekly={} projects={} history={}",
            self.daily.len(),
            self.weekly.len(),
            self.projects.len(),
            self.history.len()
        );
    }

    // Read surface consumed by the view layer.

    pub fn daily_tasks(&self) -> &[Task] {
        &self.daily
    }

    pub fn weekly_tasks(&self) -> &[WeeklyTask] {
        &self.weekly
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn scratchpad(&self) -> &str {
        &self.scratch
    }

    pub fn completed(&self) -> &Archive {
        &self.completed
    }

    pub fn deleted(&self) -> &Archive {
        &self.deleted
    }

    pub fn history(&self) -> &[DailyHistoryEntry] {
        &self.history
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Overwrites the scratchpad wholesale. No history, no structure.
    pub fn set_scratch(&mut self, text: &str) {
        self.scratch = text.to_string();
        self.mark_dirty(SlotKey::Scratch);
    }

    // Persistence plumbing.

    pub(crate) fn mark_dirty(&mut self, key: SlotKey) {
        self.scheduler.mark_dirty(key, Instant::now());
    }

    /// Writes every slot whose quiet period has elapsed as of now.
    ///
    /// The host event loop calls this on its tick; returns the number of
    /// slots written.
    pub fn flush_due(&mut self) -> usize {
        self.flush_due_at(Instant::now())
    }

    /// Deterministic variant of [`flush_due`](Self::flush_due) for callers
    /// that manage their own clock.
    pub fn flush_due_at(&mut self, now: Instant) -> usize {
        let due = self.scheduler.due_keys(now);
        self.write_slots(&due)
    }

    /// Writes every pending slot immediately, ignoring deadlines.
    pub fn flush_all(&mut self) -> usize {
        let pending = self.scheduler.drain_all();
        self.write_slots(&pending)
    }

    pub fn has_pending_writes(&self) -> bool {
        !self.scheduler.is_idle()
    }

    fn write_slots(&self, keys: &[SlotKey]) -> usize {
        let repo = SlotRepo::new(&self.conn);
        let mut written = 0;
        for key in keys {
            // A failed write keeps the in-memory state authoritative for
            // the rest of the session.
            match self.write_slot(&repo, *key) {
                Ok(()) => written += 1,
                Err(err) => error!(
                    "event=slot_flush module=service status=error slot={} error={}",
                    key, err
                ),
            }
        }
        written
    }

    fn write_slot(
        &self,
        repo: &SlotRepo<'_>,
        key: SlotKey,
    ) -> crate::repo::slot_repo::SlotResult<()> {
        match key {
            SlotKey::Daily => repo.save(key, &self.daily),
            SlotKey::Weekly => repo.save(key, &self.weekly),
            SlotKey::Projects => repo.save(key, &self.projects),
            SlotKey::Scratch => repo.save(key, &self.scratch),
            SlotKey::Completed => repo.save(key, &self.completed),
            SlotKey::Deleted => repo.save(key, &self.deleted),
            SlotKey::History => repo.save(key, &self.history),
        }
    }

    // Backup surface.

    /// Exports the whole store as a pretty-printed JSON document.
    ///
    /// Pending writes are flushed first so the artifact reflects the
    /// latest in-memory state.
    pub fn export_backup(&mut self) -> String {
        self.flush_all();
        export_json(&SlotRepo::new(&self.conn))
    }

    /// Imports a backup document and fully reloads state from storage.
    ///
    /// A malformed document aborts with zero slots modified and leaves the
    /// in-memory state untouched.
    pub fn import_backup(&mut self, document: &str) -> Result<usize, BackupError> {
        let written = import_document(&SlotRepo::new(&self.conn), document)?;
        self.reload();
        Ok(written)
    }
}

impl Drop for Dashboard {
    fn drop(&mut self) {
        let flushed = self.flush_all();
        if flushed > 0 {
            info!(
                "event=state_flush module=service status=ok trigger=drop slots={}",
                flushed
            );
        }
    }
}

/// Seed collection for a brand-new store with no weekly slot yet.
fn starter_weekly_tasks() -> Vec<WeeklyTask> {
    vec![WeeklyTask::new("do laundry"), WeeklyTask::new("vacuum")]
}
