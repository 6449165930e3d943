//! Setlist: a playlist-builder engine.
//!
//! The crate is the headless core behind a playlist-building UI: an
//! undo/redo history over the playlist contents (`history`), durable
//! JSON slot storage with a single-writer queue (`storage`), the
//! command surface the UI calls into (`session`), a cached profile
//! form (`profile`) and a geofence evaluator for location-based
//! discovery zones (`geofence`).
//!
//! Rendering, permissions and location delivery are left to the
//! embedding application; this crate only holds state and returns
//! events.

pub mod config;
pub mod geofence;
pub mod history;
pub mod profile;
pub mod session;
pub mod storage;
