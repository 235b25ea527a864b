//! Debounced write scheduling keyed by slot.
//!
//! # Responsibility
//! - Coalesce rapid repeated dirty-marks for one slot into a single
//!   durable write of the latest value.
//!
//! # Invariants
//! - Re-marking a pending slot supersedes its deadline; a superseded
//!   deadline never fires.
//! - Slots debounce independently; one slot's pending write never delays
//!   another's.
//! - No wall clock inside: callers inject `Instant` values, so tests are
//!   deterministic without sleeping.

use crate::repo::slot_repo::SlotKey;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Quiet period before a dirty slot becomes due for writing.
pub const DEBOUNCE_QUIET_PERIOD: Duration = Duration::from_millis(300);

/// Deadline registry for pending slot writes.
///
/// The scheduler tracks *which* slots are dirty and *when* they fall due;
/// it never captures values. The flush site always serializes the current
/// in-memory state, so a superseded mark can never resurrect stale data.
#[derive(Debug)]
pub struct WriteScheduler {
    quiet_period: Duration,
    pending: BTreeMap<SlotKey, Instant>,
}

impl WriteScheduler {
    pub fn new() -> Self {
        Self::with_quiet_period(DEBOUNCE_QUIET_PERIOD)
    }

    pub fn with_quiet_period(quiet_period: Duration) -> Self {
        Self {
            quiet_period,
            pending: BTreeMap::new(),
        }
    }

    /// Marks a slot dirty as of `now`, superseding any pending deadline.
    pub fn mark_dirty(&mut self, key: SlotKey, now: Instant) {
        self.pending.insert(key, now + self.quiet_period);
    }

    /// Removes and returns every slot whose quiet period has elapsed.
    pub fn due_keys(&mut self, now: Instant) -> Vec<SlotKey> {
        let due: Vec<SlotKey> = self
            .pending
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(key, _)| *key)
            .collect();
        for key in &due {
            self.pending.remove(key);
        }
        due
    }

    /// Removes and returns every pending slot regardless of deadline.
    pub fn drain_all(&mut self) -> Vec<SlotKey> {
        let keys: Vec<SlotKey> = self.pending.keys().copied().collect();
        self.pending.clear();
        keys
    }

    /// Cancels one pending write. Returns whether anything was pending.
    pub fn cancel(&mut self, key: SlotKey) -> bool {
        self.pending.remove(&key).is_some()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Default for WriteScheduler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::{WriteScheduler, DEBOUNCE_QUIET_PERIOD};
    use crate::repo::slot_repo::SlotKey;
    use std::time::{Duration, Instant};

    #[test]
    fn nothing_is_due_inside_the_quiet_period() {
        let mut scheduler = WriteScheduler::new();
        let start = Instant::now();
        scheduler.mark_dirty(SlotKey::Daily, start);
        assert!(scheduler
            .due_keys(start + Duration::from_millis(299))
            .is_empty());
        assert_eq!(scheduler.pending_count(), 1);
    }

    #[test]
    fn rapid_marks_coalesce_into_one_due_key() {
        let mut scheduler = WriteScheduler::new();
        let start = Instant::now();
        scheduler.mark_dirty(SlotKey::Daily, start);
        scheduler.mark_dirty(SlotKey::Daily, start + Duration::from_millis(100));
        scheduler.mark_dirty(SlotKey::Daily, start + Duration::from_millis(200));

        // Quiet period restarts from the last mark.
        assert!(scheduler
            .due_keys(start + DEBOUNCE_QUIET_PERIOD)
            .is_empty());
        let due = scheduler.due_keys(start + Duration::from_millis(200) + DEBOUNCE_QUIET_PERIOD);
        assert_eq!(due, vec![SlotKey::Daily]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn slots_debounce_independently() {
        let mut scheduler = WriteScheduler::new();
        let start = Instant::now();
        scheduler.mark_dirty(SlotKey::Daily, start);
        scheduler.mark_dirty(SlotKey::Projects, start + Duration::from_millis(250));

        let due = scheduler.due_keys(start + DEBOUNCE_QUIET_PERIOD);
        assert_eq!(due, vec![SlotKey::Daily]);
        assert_eq!(scheduler.pending_count(), 1);

        let due = scheduler.due_keys(start + Duration::from_millis(250) + DEBOUNCE_QUIET_PERIOD);
        assert_eq!(due, vec![SlotKey::Projects]);
    }

    #[test]
    fn cancel_drops_a_pending_write() {
        let mut scheduler = WriteScheduler::new();
        let start = Instant::now();
        scheduler.mark_dirty(SlotKey::Scratch, start);
        assert!(scheduler.cancel(SlotKey::Scratch));
        assert!(!scheduler.cancel(SlotKey::Scratch));
        assert!(scheduler.due_keys(start + DEBOUNCE_QUIET_PERIOD).is_empty());
    }

    #[test]
    fn drain_all_ignores_deadlines() {
        let mut scheduler = WriteScheduler::new();
        let start = Instant::now();
        scheduler.mark_dirty(SlotKey::Daily, start);
        scheduler.mark_dirty(SlotKey::History, start);
        let mut drained = scheduler.drain_all();
        drained.sort();
        assert_eq!(drained, vec![SlotKey::Daily, SlotKey::History]);
        assert!(scheduler.is_idle());
    }
}
