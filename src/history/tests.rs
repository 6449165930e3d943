use super::*;

fn snapshot(titles: &[&str]) -> Snapshot {
    titles.iter().map(|s| s.to_string()).collect()
}

fn add(state: &HistoryState, title: &str) -> HistoryState {
    transition(state, Action::AddTrack(title.to_string()))
}

#[test]
fn add_track_pushes_present_and_clears_future() {
    let state = add(&HistoryState::default(), "Song A");

    assert_eq!(state.present, snapshot(&["Song A"]));
    assert_eq!(state.past, vec![Snapshot::new()]);
    assert!(state.future.is_empty());
}

#[test]
fn add_then_undo_moves_present_into_future() {
    let a = add(&HistoryState::default(), "Song A");
    let ab = add(&a, "Song B");
    let undone = transition(&ab, Action::Undo);

    assert_eq!(undone.present, snapshot(&["Song A"]));
    assert_eq!(undone.past, vec![Snapshot::new()]);
    assert_eq!(undone.future, vec![snapshot(&["Song A", "Song B"])]);
}

#[test]
fn undo_then_redo_restores_the_previous_state() {
    let mut state = HistoryState::default();
    for title in ["One", "Two", "Three"] {
        state = add(&state, title);
    }

    let undone = transition(&state, Action::Undo);
    let redone = transition(&undone, Action::Redo);
    assert_eq!(redone, state);
}

#[test]
fn undo_with_empty_past_is_a_noop() {
    let state = HistoryState::default();
    assert_eq!(transition(&state, Action::Undo), state);
}

#[test]
fn redo_with_empty_future_is_a_noop() {
    let state = add(&HistoryState::default(), "Song A");
    assert_eq!(transition(&state, Action::Redo), state);
}

#[test]
fn remove_track_out_of_range_is_a_noop() {
    let mut state = HistoryState::default();
    state = add(&state, "Song A");
    state = add(&state, "Song B");

    assert_eq!(transition(&state, Action::RemoveTrack(5)), state);
}

#[test]
fn remove_track_drops_the_indexed_title() {
    let mut state = HistoryState::default();
    state = add(&state, "Song A");
    state = add(&state, "Song B");
    state = add(&state, "Song C");

    let removed = transition(&state, Action::RemoveTrack(1));
    assert_eq!(removed.present, snapshot(&["Song A", "Song C"]));
    assert_eq!(removed.past.len(), 4);
    assert!(removed.future.is_empty());
}

#[test]
fn clear_on_empty_playlist_is_a_noop() {
    let state = HistoryState::default();
    let cleared = transition(&state, Action::ClearPlaylist);

    assert_eq!(cleared, state);
    assert!(cleared.past.is_empty());
}

#[test]
fn clear_records_a_history_entry_when_nonempty() {
    let state = add(&HistoryState::default(), "Song A");
    let cleared = transition(&state, Action::ClearPlaylist);

    assert!(cleared.present.is_empty());
    assert_eq!(cleared.past.len(), 2);
}

#[test]
fn every_mutating_action_grows_past_and_empties_future() {
    let mut state = HistoryState::default();
    state = add(&state, "One");
    state = add(&state, "Two");
    state = transition(&state, Action::RemoveTrack(0));
    state = transition(&state, Action::ClearPlaylist);

    // Four history-affecting actions applied.
    assert_eq!(state.past.len(), 4);
    assert!(state.future.is_empty());
}

#[test]
fn mutating_after_undo_discards_the_redo_stack() {
    let a = add(&HistoryState::default(), "Song A");
    let ab = add(&a, "Song B");
    let undone = transition(&ab, Action::Undo);
    assert!(undone.can_redo());

    let diverged = add(&undone, "Song C");
    assert!(!diverged.can_redo());
    assert_eq!(diverged.present, snapshot(&["Song A", "Song C"]));
}

#[test]
fn load_state_replaces_the_whole_history() {
    let current = add(&HistoryState::default(), "Song A");
    let incoming = HistoryState {
        past: vec![snapshot(&["Old"])],
        present: snapshot(&["Restored"]),
        future: vec![snapshot(&["Undone"])],
    };

    let loaded = transition(&current, Action::LoadState(incoming.clone()));
    assert_eq!(loaded, incoming);
}

#[test]
fn can_undo_and_can_redo_track_stack_contents() {
    let state = HistoryState::default();
    assert!(!state.can_undo());
    assert!(!state.can_redo());

    let edited = add(&state, "Song A");
    assert!(edited.can_undo());

    let undone = transition(&edited, Action::Undo);
    assert!(undone.can_redo());
}
