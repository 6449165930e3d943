//! On-disk record shapes.

use serde::{Deserialize, Serialize};

use crate::history::{HistoryState, Snapshot};

/// The durable form of a playlist: the full undo/redo history plus
/// the playlist name. Round-trips exactly through JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub past: Vec<Snapshot>,
    pub present: Snapshot,
    pub future: Vec<Snapshot>,
    pub name: String,
}

impl PersistedRecord {
    /// Combine a history state and playlist name into one record.
    pub fn new(state: &HistoryState, name: &str) -> Self {
        Self {
            past: state.past.clone(),
            present: state.present.clone(),
            future: state.future.clone(),
            name: name.to_string(),
        }
    }

    /// Split the record back into a history state and the name.
    pub fn into_parts(self) -> (HistoryState, String) {
        (
            HistoryState {
                past: self.past,
                present: self.present,
                future: self.future,
            },
            self.name,
        )
    }
}

/// The cached profile form: whatever the user has typed so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub username: String,
    pub email: String,
    pub genre: String,
}
