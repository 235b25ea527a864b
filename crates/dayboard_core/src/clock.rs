//! Calendar date helpers.
//!
//! # Responsibility
//! - Produce today's date in the stable `YYYY-MM-DD` slot format.
//! - Derive wall-clock staleness ("days since") from stored dates.
//!
//! # Invariants
//! - `days_since` counts whole elapsed 24h periods from the stored date's
//!   UTC midnight, so a partial day reports as 0 rather than 1.
//! - A missing or unparsable date reports as `DaysSince::Never`.

use chrono::{NaiveDate, Utc};
use std::fmt::{Display, Formatter};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole-day staleness of a recurring task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysSince {
    /// The task has never been completed.
    Never,
    /// Whole 24h periods elapsed since the stored date.
    Days(u64),
}

impl Display for DaysSince {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Never => write!(f, "never"),
            Self::Days(days) => write!(f, "{days}"),
        }
    }
}

/// Returns today's UTC calendar date as `YYYY-MM-DD`.
pub fn today() -> String {
    Utc::now().format(DATE_FORMAT).to_string()
}

/// Counts whole days elapsed since a stored `YYYY-MM-DD` date.
///
/// Wall-clock based, not calendar-boundary based: the count increments a
/// full 24h after the stored date's midnight, so results near midnight can
/// differ from a naive calendar diff. Future-dated input clamps to 0.
pub fn days_since(date: Option<&str>) -> DaysSince {
    let Some(raw) = date else {
        return DaysSince::Never;
    };
    let Ok(parsed) = NaiveDate::parse_from_str(raw, DATE_FORMAT) else {
        return DaysSince::Never;
    };
    let Some(midnight) = parsed.and_hms_opt(0, 0, 0) else {
        return DaysSince::Never;
    };
    let elapsed = Utc::now().signed_duration_since(midnight.and_utc());
    let days = elapsed.num_seconds() / SECONDS_PER_DAY;
    DaysSince::Days(days.max(0) as u64)
}
