//! # Record Store
//!
//! The record store is the authoritative copy of every note. The [`DataStore`]
//! trait lets the rest of the library work against different backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage in a single redb database file
//!   - One table, `notes`
//!   - Keys are note ids encoded as 8-byte big-endian integers (see [`keys`])
//!   - Values are JSON `{"body": "..."}`
//!   - The id sequence counter lives in the same table under a sentinel key
//!
//! - [`memory::InMemoryStore`]: the same key/value layout in a `BTreeMap`, for tests
//!
//! ## Ordering
//!
//! Because keys sort numerically, "latest N notes" is a reverse key scan. There is
//! no separate timestamp or recency index: id allocation order *is* recency.
//!
//! ## Storage Format
//!
//! ```text
//! ~/.sumb/
//! ├── sumb.db        # redb record store
//! ├── sumb.index/    # full-text index (see `search`)
//! └── config.json    # settings
//! ```

use crate::error::Result;
use crate::model::{Note, NoteRecord};

pub mod fs;
pub mod keys;
pub mod memory;

/// Abstract interface for note storage.
///
/// Every call is atomic on its own. Nothing here spans the store and the
/// search index; that coordination is the command layer's job.
pub trait DataStore {
    /// Insert or overwrite the record at `id`.
    fn put(&mut self, id: &str, record: &NoteRecord) -> Result<()>;

    /// Point lookup. Fails with `NotFound` when absent.
    fn get(&self, id: &str) -> Result<NoteRecord>;

    /// Remove the record at `id`. Removing a missing record is not an error.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Up to `limit` notes in descending id order, sentinel excluded.
    fn scan_latest(&self, limit: usize) -> Result<Vec<Note>>;

    /// Every note in ascending id order, sentinel excluded.
    fn all(&self) -> Result<Vec<Note>>;

    /// Atomically increment the id sequence counter and return the new value.
    fn bump_sequence(&mut self) -> Result<u64>;
}
