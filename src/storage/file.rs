//! File-backed slot storage.
//!
//! Slots are plain JSON files under a data directory. A slot that is
//! missing or fails shape validation reads back as absent so callers
//! can fall back to their initial state; only real I/O failures
//! surface as `StorageError`.

use std::io;
use std::path::{Path, PathBuf};
use std::{env, fs};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::record::{PersistedRecord, ProfileRecord};

/// Slot holding the playlist history and name.
const PLAYLIST_SLOT: &str = "playlist_builder_state";
/// Slot holding the cached profile form.
const PROFILE_SLOT: &str = "profile_form_cache";

/// An I/O or encoding failure while touching a slot.
///
/// Persistence is best-effort: callers log these and keep their
/// in-memory state authoritative.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Handle to the data directory holding the JSON slots.
///
/// Passed in explicitly wherever storage is needed; there is no
/// process-global store.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`. The directory is created lazily
    /// on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Open a store at the resolved default data directory, when one
    /// can be determined from the environment.
    pub fn open_default() -> Option<Self> {
        resolve_data_dir().map(Self::new)
    }

    /// The directory this store writes into.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }

    /// Overwrite the playlist slot with `record`.
    pub fn save_playlist(&self, record: &PersistedRecord) -> Result<(), StorageError> {
        self.write_slot(PLAYLIST_SLOT, record)
    }

    /// Read the playlist slot. `None` when nothing has been stored yet
    /// or the stored value no longer matches the expected shape.
    pub fn load_playlist(&self) -> Result<Option<PersistedRecord>, StorageError> {
        self.read_slot(PLAYLIST_SLOT)
    }

    /// Overwrite the profile slot with `record`.
    pub fn save_profile(&self, record: &ProfileRecord) -> Result<(), StorageError> {
        self.write_slot(PROFILE_SLOT, record)
    }

    /// Read the profile slot, with the same absent/invalid fallback as
    /// `load_playlist`.
    pub fn load_profile(&self) -> Result<Option<ProfileRecord>, StorageError> {
        self.read_slot(PROFILE_SLOT)
    }

    /// Delete the profile slot. Deleting an absent slot succeeds.
    pub fn clear_profile(&self) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(PROFILE_SLOT)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn write_slot<T: Serialize>(&self, slot: &str, value: &T) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir)?;
        let bytes = serde_json::to_vec(value)?;
        fs::write(self.slot_path(slot), bytes)?;
        Ok(())
    }

    fn read_slot<T: DeserializeOwned>(&self, slot: &str) -> Result<Option<T>, StorageError> {
        let path = self.slot_path(slot);
        let bytes = match fs::read(&path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e)),
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                // A stale or malformed slot reads as absent; the caller
                // starts from its initial state instead of failing.
                log::warn!("discarding malformed slot {}: {e}", path.display());
                Ok(None)
            }
        }
    }
}

/// Resolve the data directory from `SETLIST_DATA_DIR` or XDG defaults.
pub fn resolve_data_dir() -> Option<PathBuf> {
    if let Some(p) = env::var_os("SETLIST_DATA_DIR") {
        return Some(PathBuf::from(p));
    }
    default_data_dir()
}

/// Compute the default data directory under `$XDG_DATA_HOME/setlist`
/// or `~/.local/share/setlist` when `XDG_DATA_HOME` is not set.
pub fn default_data_dir() -> Option<PathBuf> {
    let data_home = if let Some(xdg) = env::var_os("XDG_DATA_HOME") {
        Some(PathBuf::from(xdg))
    } else if let Some(home) = env::var_os("HOME") {
        Some(PathBuf::from(home).join(".local").join("share"))
    } else {
        None
    };

    data_home.map(|d| d.join("setlist"))
}
