//! Daily history log entries.
//!
//! # Invariants
//! - Entries snapshot task *text*, never task identity; later edits or
//!   deletion of the originating task cannot change history.
//! - At most one entry exists per calendar date.

use serde::{Deserialize, Serialize};

/// Write-once summary of the tasks finished on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyHistoryEntry {
    /// `YYYY-MM-DD`, day granularity.
    pub date: String,
    /// Text snapshots of the tasks that were done when the day advanced.
    pub tasks: Vec<String>,
}
