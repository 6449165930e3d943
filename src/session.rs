//! Playlist session: the command surface the UI calls into.
//!
//! A `PlaylistSession` owns the history state and playlist name,
//! validates raw input, and queues a durable save after every change.

mod model;

pub use model::*;
