use dayboard_core::db::open_store_in_memory;
use dayboard_core::{Dashboard, SlotKey, SlotRepo, Task};
use std::time::{Duration, Instant};
use tempfile::TempDir;

#[test]
fn absent_slots_load_their_fallback() {
    let conn = open_store_in_memory().unwrap();
    let repo = SlotRepo::new(&conn);

    let tasks: Vec<Task> = repo.load(SlotKey::Daily, Vec::new());
    assert!(tasks.is_empty());

    let scratch: String = repo.load(SlotKey::Scratch, "fallback".to_string());
    assert_eq!(scratch, "fallback");
}

#[test]
fn save_then_load_round_trips() {
    let conn = open_store_in_memory().unwrap();
    let repo = SlotRepo::new(&conn);

    let tasks = vec![Task::new("persisted")];
    repo.save(SlotKey::Daily, &tasks).unwrap();

    let loaded: Vec<Task> = repo.load(SlotKey::Daily, Vec::new());
    assert_eq!(loaded, tasks);
}

#[test]
fn a_corrupt_slot_degrades_to_the_fallback() {
    let conn = open_store_in_memory().unwrap();
    let repo = SlotRepo::new(&conn);
    repo.write_raw(SlotKey::Daily, "{this is not json").unwrap();

    let loaded: Vec<Task> = repo.load(SlotKey::Daily, Vec::new());
    assert!(loaded.is_empty());
}

#[test]
fn a_corrupt_slot_never_breaks_dashboard_startup() {
    let conn = open_store_in_memory().unwrap();
    SlotRepo::new(&conn)
        .write_raw(SlotKey::Projects, "[[[[")
        .unwrap();

    let board = Dashboard::from_connection(conn);
    assert!(board.projects().is_empty());
}

#[test]
fn mutations_become_durable_after_the_quiet_period() {
    let mut board = Dashboard::open_in_memory().unwrap();
    board.add_daily("debounced").unwrap();
    assert!(board.has_pending_writes());

    // Inside the quiet period nothing is written yet.
    assert_eq!(board.flush_due_at(Instant::now()), 0);
    assert!(board.has_pending_writes());

    let later = Instant::now() + Duration::from_millis(400);
    assert!(board.flush_due_at(later) >= 1);
    assert!(!board.has_pending_writes());
}

#[test]
fn flush_all_writes_immediately() {
    let mut board = Dashboard::open_in_memory().unwrap();
    board.add_daily("now").unwrap();
    board.set_scratch("notes");

    assert_eq!(board.flush_all(), 2);
    assert!(!board.has_pending_writes());
}

#[test]
fn state_survives_close_and_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dayboard.db");

    {
        let mut board = Dashboard::open(&path).unwrap();
        let id = board.add_daily("across sessions").unwrap();
        board.toggle_daily(id);
        board.add_project("persisted project").unwrap();
        board.set_scratch("scratch survives");
        // Dropping the dashboard flushes pending writes.
    }

    let board = Dashboard::open(&path).unwrap();
    assert_eq!(board.daily_tasks().len(), 1);
    assert_eq!(board.daily_tasks()[0].text, "across sessions");
    assert!(board.daily_tasks()[0].done);
    assert_eq!(board.projects()[0].title, "persisted project");
    assert_eq!(board.scratchpad(), "scratch survives");
}

#[test]
fn reload_discards_unflushed_mutations() {
    let mut board = Dashboard::open_in_memory().unwrap();
    board.add_daily("flushed").unwrap();
    board.flush_all();

    board.add_daily("never flushed").unwrap();
    board.reload();

    assert_eq!(board.daily_tasks().len(), 1);
    assert_eq!(board.daily_tasks()[0].text, "flushed");
    assert!(!board.has_pending_writes());
}
