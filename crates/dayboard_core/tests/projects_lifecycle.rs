use dayboard_core::{ArchiveKind, Dashboard, View, SUGGESTED_SUBTASKS};
use uuid::Uuid;

#[test]
fn add_prepends_newest_first() {
    let mut board = Dashboard::open_in_memory().unwrap();

    let first = board.add_project("Garden").unwrap();
    let second = board.add_project("Launch").unwrap();

    let ids: Vec<_> = board.projects().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![second, first]);

    let newest = &board.projects()[0];
    assert!(!newest.completed);
    assert!(!newest.deleted);
    assert!(newest.subtasks.is_empty());
    assert_eq!(newest.notes, "");
}

#[test]
fn subtask_add_toggle_delete() {
    let mut board = Dashboard::open_in_memory().unwrap();
    let project = board.add_project("Move house").unwrap();

    let subtask = board.add_subtask(project, "book movers").unwrap();
    board.toggle_subtask(project, subtask);
    assert!(board.project(project).unwrap().subtask(subtask).unwrap().done);

    board.delete_subtask(project, subtask);
    assert!(board.project(project).unwrap().subtasks.is_empty());

    // Unknown project/subtask ids are safe no-ops.
    assert!(board.add_subtask(Uuid::new_v4(), "nowhere").is_none());
    board.toggle_subtask(project, Uuid::new_v4());
    board.delete_subtask(Uuid::new_v4(), subtask);
}

#[test]
fn suggested_subtasks_expand_once() {
    let mut board = Dashboard::open_in_memory().unwrap();
    let project = board.add_project("Launch").unwrap();

    assert_eq!(board.add_suggested_subtasks(project), 5);
    let texts: Vec<&str> = board
        .project(project)
        .unwrap()
        .subtasks
        .iter()
        .map(|s| s.text.as_str())
        .collect();
    assert_eq!(texts, SUGGESTED_SUBTASKS.to_vec());

    // Second expansion finds every canonical name already present.
    assert_eq!(board.add_suggested_subtasks(project), 0);
    assert_eq!(board.project(project).unwrap().subtasks.len(), 5);
}

#[test]
fn suggested_subtasks_skip_only_exact_matches() {
    let mut board = Dashboard::open_in_memory().unwrap();
    let project = board.add_project("Essay").unwrap();
    board.add_subtask(project, "Draft").unwrap();
    board.add_subtask(project, "review").unwrap(); // case differs, no match

    assert_eq!(board.add_suggested_subtasks(project), 4);
    assert_eq!(board.project(project).unwrap().subtasks.len(), 6);
}

#[test]
fn notes_are_stored_verbatim() {
    let mut board = Dashboard::open_in_memory().unwrap();
    let project = board.add_project("Reading list").unwrap();

    board.set_notes(project, "  spaces kept \n and newlines too ");
    assert_eq!(
        board.project(project).unwrap().notes,
        "  spaces kept \n and newlines too "
    );

    board.set_notes(project, "");
    assert_eq!(board.project(project).unwrap().notes, "");
}

#[test]
fn complete_moves_the_project_into_the_completed_archive() {
    let mut board = Dashboard::open_in_memory().unwrap();
    let project = board.add_project("Ship v1").unwrap();
    board.add_subtask(project, "write changelog").unwrap();

    board.complete_project(project);

    assert!(board.projects().is_empty());
    let archived = &board.completed().projects;
    assert_eq!(archived.len(), 1);
    assert_eq!(archived[0].id, project);
    assert!(archived[0].completed);
    // The copy is deep; subtasks travel with the project.
    assert_eq!(archived[0].subtasks.len(), 1);
}

#[test]
fn delete_redirects_an_open_detail_view() {
    let mut board = Dashboard::open_in_memory().unwrap();
    let open = board.add_project("Open").unwrap();
    let other = board.add_project("Other").unwrap();

    board.set_view(View::ProjectDetail(open));
    board.delete_project(other);
    assert_eq!(board.view(), View::ProjectDetail(open));

    board.delete_project(open);
    assert_eq!(board.view(), View::Projects);
    assert_eq!(board.deleted().projects.len(), 2);
}

#[test]
fn undo_reactivates_a_completed_project_and_shows_the_list() {
    let mut board = Dashboard::open_in_memory().unwrap();
    let project = board.add_project("Comeback").unwrap();
    board.complete_project(project);
    board.set_view(View::Completed);

    assert!(board.undo(ArchiveKind::Projects, project));

    assert_eq!(board.view(), View::Projects);
    assert_eq!(board.projects()[0].id, project);
    assert!(!board.projects()[0].completed);
    assert!(board.completed().projects.is_empty());
}

#[test]
fn undo_of_an_unknown_id_changes_nothing() {
    let mut board = Dashboard::open_in_memory().unwrap();
    board.set_view(View::Completed);

    assert!(!board.undo(ArchiveKind::Projects, Uuid::new_v4()));

    // Failed undo must not touch the view either.
    assert_eq!(board.view(), View::Completed);
}

#[test]
fn restore_keeps_the_current_view() {
    let mut board = Dashboard::open_in_memory().unwrap();
    let project = board.add_project("Back from trash").unwrap();
    board.delete_project(project);
    board.set_view(View::Deleted);

    assert!(board.restore(ArchiveKind::Projects, project));

    assert_eq!(board.view(), View::Deleted);
    assert_eq!(board.projects()[0].id, project);
    assert!(!board.projects()[0].deleted);
}
