//! # Search Index
//!
//! A full-text index over note bodies, keyed by the decimal note id. It is a
//! derived structure: the record store is the source of truth, and the index can
//! be thrown away and rebuilt from it at any time (see `commands::reindex`).
//!
//! - [`fs::FileIndex`]: tantivy index in a directory next to the record store
//! - [`memory::InMemoryIndex`]: term matching over a `BTreeMap`, for tests

use crate::error::Result;
use crate::model::Note;

pub mod fs;
pub mod memory;

pub trait SearchIndex {
    /// Insert or replace the document for `id`.
    fn index(&mut self, id: &str, body: &str) -> Result<()>;

    /// Remove the document for `id`. Removing a missing document is not an error.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Free-text query. Returns at most `limit` matching ids, in the index's
    /// own relevance order.
    fn query(&self, text: &str, limit: usize) -> Result<Vec<String>>;

    /// Every indexed document as (id, body), ascending by id.
    fn documents(&self) -> Result<Vec<Note>>;

    /// Replace the whole index content with `notes`.
    fn rebuild(&mut self, notes: &[Note]) -> Result<()>;
}

/// Sorts decimal ids numerically; anything unparsable sorts last.
pub(crate) fn sort_ids_numeric(notes: &mut [Note]) {
    notes.sort_by_key(|n| n.id.parse::<u64>().unwrap_or(u64::MAX));
}
