//! Playlist edit history: the undo/redo state machine.
//!
//! `HistoryState` and the pure `transition` function live in
//! `history::model`. No I/O happens here; persistence is layered on
//! top by `session` and `storage`.

mod model;

pub use model::*;

#[cfg(test)]
mod tests;
