//! # Identifier Allocator
//!
//! Note ids come from a counter persisted in the notes keyspace under
//! [`SEQUENCE_KEY`]. The counter holds the last id handed out, stored in the
//! same JSON shape as a note (`{"body": "41"}`), and is created lazily the first
//! time an id is requested.
//!
//! Ids are strictly increasing and never reused. A failed create may leave a
//! gap in the sequence; that is fine, duplicates are not.
//!
//! The store backends own the transaction: they call [`decode_counter`],
//! [`increment`] and [`encode_counter`] inside a single write so the
//! read-increment-write is atomic with respect to the store.

use crate::error::{Result, SumbError};
use crate::model::NoteRecord;
use crate::store::DataStore;

/// Reserved key holding the allocator state. It is 10 bytes long, so it can
/// never collide with an 8-byte note key.
pub const SEQUENCE_KEY: &[u8] = b"__id_seq__";

/// Hands out the next note id as a decimal string.
pub fn next_id<S: DataStore>(store: &mut S) -> Result<String> {
    let id = store.bump_sequence()?;
    tracing::debug!(id, "allocated note id");
    Ok(id.to_string())
}

pub fn decode_counter(raw: &[u8]) -> Result<u64> {
    let record: NoteRecord = serde_json::from_slice(raw)?;
    record.body.trim().parse::<u64>().map_err(|_| {
        SumbError::StorageUnavailable(format!(
            "sequence counter is corrupt: {:?}",
            record.body
        ))
    })
}

pub fn encode_counter(value: u64) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&NoteRecord::new(value.to_string()))?)
}

pub fn increment(current: u64) -> Result<u64> {
    current
        .checked_add(1)
        .ok_or_else(|| SumbError::StorageUnavailable("note id space exhausted".to_string()))
}
