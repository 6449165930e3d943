//! The playlist session model.

use crate::history::{Action, HistoryState, transition};
use crate::storage::{FileStore, PersistedRecord, StoreWriter, WriteCmd};

/// A live playlist edit session.
///
/// The session serializes all edits by construction: every command
/// takes `&mut self`, runs the history transition to completion and
/// only then queues a save. Saves are fire-and-forget; a failed write
/// is logged by the writer thread and the in-memory state stays
/// authoritative.
pub struct PlaylistSession {
    state: HistoryState,
    name: String,
    writer: StoreWriter,
}

impl PlaylistSession {
    /// Open a session over `store`, hydrating from the playlist slot.
    ///
    /// An absent or invalid slot yields an empty playlist named
    /// `default_name`; a failed read is logged and treated the same.
    pub fn open(store: FileStore, default_name: &str) -> Self {
        let (state, name) = match store.load_playlist() {
            Ok(Some(record)) => {
                let (snapshot, name) = record.into_parts();
                let state = transition(&HistoryState::default(), Action::LoadState(snapshot));
                (state, name)
            }
            Ok(None) => (HistoryState::default(), default_name.to_string()),
            Err(e) => {
                log::warn!("failed to load playlist slot, starting empty: {e}");
                (HistoryState::default(), default_name.to_string())
            }
        };

        Self {
            state,
            name,
            writer: StoreWriter::new(store),
        }
    }

    /// Add a song by title. Leading/trailing whitespace is trimmed;
    /// input that is empty after trimming is ignored entirely.
    pub fn add_song(&mut self, raw: &str) {
        let title = raw.trim();
        if title.is_empty() {
            return;
        }
        self.dispatch(Action::AddTrack(title.to_string()));
    }

    /// Remove the song at `index`; out-of-range indices are ignored.
    pub fn remove_song(&mut self, index: usize) {
        self.dispatch(Action::RemoveTrack(index));
    }

    /// Remove every song from the playlist.
    pub fn clear(&mut self) {
        self.dispatch(Action::ClearPlaylist);
    }

    /// Step back one edit.
    pub fn undo(&mut self) {
        self.dispatch(Action::Undo);
    }

    /// Re-apply the most recently undone edit.
    pub fn redo(&mut self) {
        self.dispatch(Action::Redo);
    }

    /// Rename the playlist. Independent of undo/redo: renames are not
    /// history entries and cannot be undone.
    pub fn rename(&mut self, new_name: &str) {
        if new_name == self.name {
            return;
        }
        self.name = new_name.to_string();
        self.persist();
    }

    /// The current track titles, in playlist order.
    pub fn tracks(&self) -> &[String] {
        &self.state.present
    }

    /// The playlist name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of tracks in the playlist.
    pub fn len(&self) -> usize {
        self.state.present.len()
    }

    /// True when the playlist holds no tracks.
    pub fn is_empty(&self) -> bool {
        self.state.present.is_empty()
    }

    /// True when there is an edit to undo.
    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    /// True when there is an undone edit to redo.
    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    /// The full history, for callers that render undo/redo depth.
    pub fn history(&self) -> &HistoryState {
        &self.state
    }

    /// Snapshot of the current durable record.
    pub fn record(&self) -> PersistedRecord {
        PersistedRecord::new(&self.state, &self.name)
    }

    /// Drain pending saves and release the writer thread.
    pub fn close(self) {
        self.writer.shutdown();
    }

    fn dispatch(&mut self, action: Action) {
        let next = transition(&self.state, action);
        // No-op transitions change nothing and are not persisted.
        if next == self.state {
            return;
        }
        self.state = next;
        self.persist();
    }

    fn persist(&self) {
        let _ = self.writer.send(WriteCmd::Playlist(self.record()));
    }
}
