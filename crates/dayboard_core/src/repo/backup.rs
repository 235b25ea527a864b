//! Whole-store backup export and import.
//!
//! # Responsibility
//! - Assemble all known slots into one JSON document and write them back
//!   from such a document.
//!
//! # Invariants
//! - Export skips (and logs) slots that are absent or fail to parse;
//!   a bad slot is never fatal to the export.
//! - Import is all-or-nothing on parse: a malformed document modifies
//!   zero slots. Unknown top-level keys are ignored.

use crate::clock;
use crate::repo::slot_repo::{SlotError, SlotKey, SlotRepo};
use log::{debug, info, warn};
use serde_json::{Map, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Import failures surfaced to the user.
#[derive(Debug)]
pub enum BackupError {
    /// The document is not valid JSON.
    Malformed(serde_json::Error),
    /// The document parsed but is not a top-level object.
    NotAnObject,
    /// A slot write failed mid-import.
    Write(SlotError),
}

impl Display for BackupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(err) => write!(f, "invalid backup file: {err}"),
            Self::NotAnObject => write!(f, "invalid backup file: expected a JSON object"),
            Self::Write(err) => write!(f, "failed to write imported slot: {err}"),
        }
    }
}

impl Error for BackupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Malformed(err) => Some(err),
            Self::NotAnObject => None,
            Self::Write(err) => Some(err),
        }
    }
}

impl From<SlotError> for BackupError {
    fn from(value: SlotError) -> Self {
        Self::Write(value)
    }
}

/// Suggested artifact name for an export taken today.
pub fn backup_file_name() -> String {
    format!("dashboard-backup-{}.json", clock::today())
}

/// Reads every known slot into one JSON object keyed by physical slot
/// name. Absent slots are omitted; unparsable slots are skipped and
/// logged.
pub fn export_document(repo: &SlotRepo<'_>) -> Value {
    let mut dump = Map::new();
    for key in SlotKey::ALL {
        let raw = match repo.read_raw(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => continue,
            Err(err) => {
                warn!(
                    "event=backup_export module=repo status=skip slot={} error={}",
                    key, err
                );
                continue;
            }
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(value) => {
                dump.insert(key.slot_name().to_string(), value);
            }
            Err(err) => {
                warn!(
                    "event=backup_export module=repo status=skip slot={} error={}",
                    key, err
                );
            }
        }
    }
    info!(
        "event=backup_export module=repo status=ok slots={}",
        dump.len()
    );
    Value::Object(dump)
}

/// Pretty-printed export document, ready to be written to a file.
pub fn export_json(repo: &SlotRepo<'_>) -> String {
    // Value-to-string serialization cannot fail for plain JSON trees.
    serde_json::to_string_pretty(&export_document(repo)).unwrap_or_else(|_| "{}".to_string())
}

/// Imports a backup document, overwriting every recognized slot verbatim.
///
/// Returns the number of slots written. The caller is expected to fully
/// reload its in-memory state afterwards (restart semantics, not a merge).
///
/// # Errors
/// - `Malformed`/`NotAnObject` before any slot is touched.
/// - `Write` if storage rejects a slot mid-import.
pub fn import_document(repo: &SlotRepo<'_>, document: &str) -> Result<usize, BackupError> {
    let parsed: Value = serde_json::from_str(document).map_err(BackupError::Malformed)?;
    let Value::Object(entries) = parsed else {
        return Err(BackupError::NotAnObject);
    };

    let mut written = 0;
    for (name, value) in &entries {
        let Some(key) = SlotKey::from_slot_name(name) else {
            debug!(
                "event=backup_import module=repo status=ignored slot={}",
                name
            );
            continue;
        };
        let raw = serde_json::to_string(value).map_err(|err| SlotError::Serialize(err))?;
        repo.write_raw(key, &raw)?;
        written += 1;
    }

    info!(
        "event=backup_import module=repo status=ok slots={}",
        written
    );
    Ok(written)
}
