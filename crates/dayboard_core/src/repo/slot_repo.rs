//! Key-value slot persistence over SQLite.
//!
//! # Responsibility
//! - Bind logical collection names to versioned physical slot names.
//! - Load slots with swallow-and-fallback semantics; save slots with
//!   upsert semantics.
//!
//! # Invariants
//! - `load` never returns an error to the caller; absent or unparsable
//!   slots yield the fallback and a log line.
//! - Renaming a physical slot (bumping its version suffix) orphans the old
//!   data; there is no in-place migration of slot contents.

use crate::db::DbError;
use log::{debug, warn};
use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Logical names of the persisted collections.
///
/// The physical slot names carry a version suffix; bumping the suffix is
/// how a breaking shape change is expressed (old data is orphaned, not
/// migrated).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SlotKey {
    Daily,
    Weekly,
    Projects,
    Scratch,
    Completed,
    Deleted,
    History,
}

impl SlotKey {
    pub const ALL: [SlotKey; 7] = [
        SlotKey::Daily,
        SlotKey::Weekly,
        SlotKey::Projects,
        SlotKey::Scratch,
        SlotKey::Completed,
        SlotKey::Deleted,
        SlotKey::History,
    ];

    /// Physical slot name in storage and in backup documents.
    pub fn slot_name(self) -> &'static str {
        match self {
            Self::Daily => "daily-tasks-v1",
            Self::Weekly => "weekly-tasks-v1",
            Self::Projects => "projects-v1",
            Self::Scratch => "scratchpad-v1",
            Self::Completed => "completed-v1",
            Self::Deleted => "deleted-v1",
            Self::History => "daily-history-v1",
        }
    }

    /// Maps a physical slot name back to its logical key.
    ///
    /// Returns `None` for names this binary does not recognize (unknown
    /// backup keys are ignored, not errors).
    pub fn from_slot_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.slot_name() == name)
    }
}

impl Display for SlotKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slot_name())
    }
}

pub type SlotResult<T> = Result<T, SlotError>;

/// Error for slot write paths. Read paths never surface it.
#[derive(Debug)]
pub enum SlotError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for SlotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize slot value: {err}"),
        }
    }
}

impl Error for SlotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for SlotError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for SlotError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for SlotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// SQLite-backed slot repository.
pub struct SlotRepo<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SlotRepo<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Loads a slot, falling back on absence or any read/parse failure.
    ///
    /// Failures are logged and swallowed; the fallback is returned
    /// unchanged so state loading can never fail.
    pub fn load<T: DeserializeOwned>(&self, key: SlotKey, fallback: T) -> T {
        let raw = match self.read_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return fallback,
            Err(err) => {
                warn!(
                    "event=slot_load module=repo status=error slot={} error={}",
                    key, err
                );
                return fallback;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    "event=slot_load module=repo status=corrupt slot={} error={}",
                    key, err
                );
                fallback
            }
        }
    }

    /// Serializes a value and upserts it into its slot.
    pub fn save<T: Serialize>(&self, key: SlotKey, value: &T) -> SlotResult<()> {
        let raw = serde_json::to_string(value)?;
        self.write_raw(key, &raw)
    }

    /// Reads the raw JSON text of a slot, `None` when absent.
    pub fn read_raw(&self, key: SlotKey) -> SlotResult<Option<String>> {
        let raw = self
            .conn
            .query_row(
                "SELECT value FROM slots WHERE slot = ?1;",
                params![key.slot_name()],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(raw)
    }

    /// Overwrites a slot with raw JSON text.
    pub fn write_raw(&self, key: SlotKey, raw: &str) -> SlotResult<()> {
        self.conn.execute(
            "INSERT INTO slots (slot, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(slot) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key.slot_name(), raw],
        )?;
        debug!(
            "event=slot_write module=repo status=ok slot={} bytes={}",
            key,
            raw.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::SlotKey;

    #[test]
    fn slot_names_round_trip() {
        for key in SlotKey::ALL {
            assert_eq!(SlotKey::from_slot_name(key.slot_name()), Some(key));
        }
    }

    #[test]
    fn unknown_slot_name_is_rejected() {
        assert_eq!(SlotKey::from_slot_name("daily-tasks-v0"), None);
        assert_eq!(SlotKey::from_slot_name(""), None);
    }
}
