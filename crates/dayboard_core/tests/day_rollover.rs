use dayboard_core::{today, Dashboard};

#[test]
fn snapshot_observes_done_tasks_then_resets_everything() {
    let mut board = Dashboard::open_in_memory().unwrap();
    board.add_daily("A").unwrap();
    let b = board.add_daily("B").unwrap();
    board.toggle_daily(b);

    let archived = board.advance_day();

    assert_eq!(archived, 1);
    assert_eq!(board.history().len(), 1);
    let entry = &board.history()[0];
    assert_eq!(entry.date, today());
    assert_eq!(entry.tasks, vec!["B".to_string()]);
    assert!(board.daily_tasks().iter().all(|t| !t.done));
    assert_eq!(board.daily_tasks().len(), 2);
}

#[test]
fn advancing_twice_on_one_date_writes_one_entry() {
    let mut board = Dashboard::open_in_memory().unwrap();
    let a = board.add_daily("A").unwrap();
    board.toggle_daily(a);

    board.advance_day();
    let after_first: Vec<_> = board.daily_tasks().to_vec();

    // No intervening done changes: nothing to snapshot, nothing to reset.
    assert_eq!(board.advance_day(), 0);
    assert_eq!(board.history().len(), 1);
    assert_eq!(board.daily_tasks(), &after_first[..]);
}

#[test]
fn a_same_day_rerun_overwrites_todays_entry() {
    let mut board = Dashboard::open_in_memory().unwrap();
    let a = board.add_daily("A").unwrap();
    let b = board.add_daily("B").unwrap();
    board.toggle_daily(a);
    board.advance_day();

    board.toggle_daily(b);
    board.advance_day();

    // Still one entry for today, now reflecting the later run.
    assert_eq!(board.history().len(), 1);
    assert_eq!(board.history()[0].date, today());
    assert_eq!(board.history()[0].tasks, vec!["B".to_string()]);
}

#[test]
fn no_done_tasks_means_no_history_entry() {
    let mut board = Dashboard::open_in_memory().unwrap();
    board.add_daily("untouched").unwrap();

    assert_eq!(board.advance_day(), 0);

    assert!(board.history().is_empty());
    assert!(!board.daily_tasks()[0].done);
}

#[test]
fn history_snapshots_text_not_identity() {
    let mut board = Dashboard::open_in_memory().unwrap();
    let id = board.add_daily("original text").unwrap();
    board.toggle_daily(id);
    board.advance_day();

    // Deleting the originating task cannot retroactively change history.
    board.delete_daily(id);

    assert_eq!(board.history()[0].tasks, vec!["original text".to_string()]);
}
