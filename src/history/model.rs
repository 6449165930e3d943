//! History model types and the transition function.
//!
//! The playlist's editing history is a linear undo/redo structure:
//! `past` holds older snapshots (oldest first), `present` is the live
//! track list and `future` holds undone snapshots (nearest undo
//! first). Every edit pushes the old `present` onto `past` and clears
//! `future` — branching history is not supported; a new edit always
//! invalidates the redo stack.

use serde::{Deserialize, Serialize};

/// One snapshot of the playlist: the track titles in order.
pub type Snapshot = Vec<String>;

/// The full undo/redo history around the current playlist contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    /// Older snapshots, oldest first.
    pub past: Vec<Snapshot>,
    /// The currently active track list.
    pub present: Snapshot,
    /// Undone snapshots, nearest undo first.
    pub future: Vec<Snapshot>,
}

impl HistoryState {
    /// True when there is a snapshot to undo to.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// True when there is an undone snapshot to redo.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }
}

/// An edit or navigation step applied to a `HistoryState`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a track title to the playlist.
    AddTrack(String),
    /// Remove the track at the given index; out-of-range is a no-op.
    RemoveTrack(usize),
    /// Empty the playlist; a no-op when it is already empty.
    ClearPlaylist,
    /// Step back to the previous snapshot.
    Undo,
    /// Re-apply the most recently undone snapshot.
    Redo,
    /// Replace the whole history, used when hydrating from storage.
    LoadState(HistoryState),
}

/// Apply `action` to `state` and return the resulting state.
///
/// Pure and total: actions that do not apply (removing an out-of-range
/// index, clearing an empty list, undoing with nothing to undo) return
/// the input unchanged. Callers are expected to pre-validate track
/// titles; the history itself stores whatever it is given.
pub fn transition(state: &HistoryState, action: Action) -> HistoryState {
    match action {
        Action::AddTrack(title) => {
            let mut present = state.present.clone();
            present.push(title);
            push_edit(state, present)
        }
        Action::RemoveTrack(index) => {
            if index >= state.present.len() {
                return state.clone();
            }
            let mut present = state.present.clone();
            present.remove(index);
            push_edit(state, present)
        }
        Action::ClearPlaylist => {
            if state.present.is_empty() {
                return state.clone();
            }
            push_edit(state, Vec::new())
        }
        Action::Undo => {
            let mut past = state.past.clone();
            let Some(previous) = past.pop() else {
                return state.clone();
            };
            let mut future = Vec::with_capacity(state.future.len() + 1);
            future.push(state.present.clone());
            future.extend(state.future.iter().cloned());
            HistoryState {
                past,
                present: previous,
                future,
            }
        }
        Action::Redo => {
            if state.future.is_empty() {
                return state.clone();
            }
            let mut future = state.future.clone();
            let next = future.remove(0);
            let mut past = state.past.clone();
            past.push(state.present.clone());
            HistoryState {
                past,
                present: next,
                future,
            }
        }
        Action::LoadState(snapshot) => snapshot,
    }
}

// Shared shape of every mutating edit: the old present moves into
// past and the redo stack is dropped.
fn push_edit(state: &HistoryState, present: Snapshot) -> HistoryState {
    let mut past = state.past.clone();
    past.push(state.present.clone());
    HistoryState {
        past,
        present,
        future: Vec::new(),
    }
}
