//! Day rollover: snapshot finished tasks into history, reset the board.
//!
//! # Invariants
//! - The history snapshot observes the pre-reset done flags; the order is
//!   snapshot first, reset second.
//! - At most one history entry exists per calendar date; advancing twice
//!   on the same date overwrites, never duplicates.
//! - An empty done-set writes no history entry but still resets.

use crate::clock;
use crate::model::history::DailyHistoryEntry;
use crate::repo::slot_repo::SlotKey;
use crate::service::dashboard::Dashboard;
use log::info;

impl Dashboard {
    /// Advances the daily board to a new day.
    ///
    /// Snapshots the text of every `done` daily task into today's history
    /// entry (replacing an earlier entry for the same date), then resets
    /// every task's done flag. Returns the number of tasks snapshotted.
    pub fn advance_day(&mut self) -> usize {
        let snapshot: Vec<String> = self
            .daily
            .iter()
            .filter(|t| t.done)
            .map(|t| t.text.clone())
            .collect();
        let archived = snapshot.len();

        if !snapshot.is_empty() {
            let date = clock::today();
            self.history.retain(|entry| entry.date != date);
            self.history.insert(
                0,
                DailyHistoryEntry {
                    date,
                    tasks: snapshot,
                },
            );
            self.mark_dirty(SlotKey::History);
        }

        let mut reset = false;
        for task in &mut self.daily {
            if task.done {
                task.done = false;
                reset = true;
            }
        }
        if reset {
            self.mark_dirty(SlotKey::Daily);
        }

        info!("event=day_advance module=service status=ok archived={archived}");
        archived
    }
}
