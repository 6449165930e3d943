//! Durable slot storage.
//!
//! Each concern gets one fixed JSON slot under the data directory:
//! the playlist history plus its name, and the cached profile form.
//! `FileStore` does the synchronous reads and writes; `StoreWriter`
//! wraps it in a single worker thread so callers can fire-and-forget
//! saves while writes still land in call order.

mod file;
mod record;
mod writer;

pub use file::*;
pub use record::*;
pub use writer::*;
