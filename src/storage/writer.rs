//! Single-writer persistence queue.
//!
//! All slot writes funnel through one worker thread fed by an mpsc
//! channel, so a caller can fire-and-forget a save without blocking
//! and two saves for the same slot can never race: channel order is
//! call order, and the thread applies one write at a time. Failed
//! writes are logged and dropped; in-memory state stays authoritative.

use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::thread::JoinHandle;

use super::file::FileStore;
use super::record::{PersistedRecord, ProfileRecord};

/// A queued storage operation.
#[derive(Debug)]
pub enum WriteCmd {
    /// Overwrite the playlist slot.
    Playlist(PersistedRecord),
    /// Overwrite the profile slot.
    Profile(ProfileRecord),
    /// Delete the profile slot.
    ClearProfile,
    /// Drain and stop the writer thread.
    Shutdown,
}

/// Handle to the writer thread.
pub struct StoreWriter {
    tx: Sender<WriteCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl StoreWriter {
    /// Spawn a writer thread over `store`.
    pub fn new(store: FileStore) -> Self {
        let (tx, rx) = mpsc::channel::<WriteCmd>();
        let join = spawn_writer_thread(store, rx);

        Self {
            tx,
            join: Mutex::new(Some(join)),
        }
    }

    /// Queue a write. Fails only when the writer thread is gone.
    pub fn send(&self, cmd: WriteCmd) -> Result<(), mpsc::SendError<WriteCmd>> {
        self.tx.send(cmd)
    }

    /// Drain every queued write and join the writer thread.
    pub fn shutdown(&self) {
        let _ = self.send(WriteCmd::Shutdown);

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

fn spawn_writer_thread(store: FileStore, rx: Receiver<WriteCmd>) -> JoinHandle<()> {
    thread::spawn(move || {
        while let Ok(cmd) = rx.recv() {
            match cmd {
                WriteCmd::Playlist(record) => {
                    if let Err(e) = store.save_playlist(&record) {
                        log::warn!("playlist save failed: {e}");
                    } else {
                        log::debug!("saved playlist slot ({} tracks)", record.present.len());
                    }
                }
                WriteCmd::Profile(record) => {
                    if let Err(e) = store.save_profile(&record) {
                        log::warn!("profile save failed: {e}");
                    }
                }
                WriteCmd::ClearProfile => {
                    if let Err(e) = store.clear_profile() {
                        log::warn!("profile clear failed: {e}");
                    }
                }
                WriteCmd::Shutdown => break,
            }
        }
    })
}
