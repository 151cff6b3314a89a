use super::DataStore;
use super::keys::{decode_id, encode_id};
use crate::error::{Result, SumbError};
use crate::model::{Note, NoteRecord};
use crate::sequence;
use std::collections::BTreeMap;

/// In-memory record store with the same key/value layout as [`super::fs::FileStore`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn decode(raw: &[u8]) -> Result<NoteRecord> {
        serde_json::from_slice(raw).map_err(SumbError::Serialization)
    }
}

impl DataStore for InMemoryStore {
    fn put(&mut self, id: &str, record: &NoteRecord) -> Result<()> {
        let key = encode_id(id)?;
        self.entries.insert(key.to_vec(), serde_json::to_vec(record)?);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<NoteRecord> {
        let key = encode_id(id)?;
        let raw = self
            .entries
            .get(key.as_slice())
            .ok_or_else(|| SumbError::NotFound(id.to_string()))?;
        Self::decode(raw)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let key = encode_id(id)?;
        self.entries.remove(key.as_slice());
        Ok(())
    }

    fn scan_latest(&self, limit: usize) -> Result<Vec<Note>> {
        self.entries
            .iter()
            .rev()
            .filter_map(|(key, raw)| decode_id(key).map(|id| (id, raw)))
            .take(limit)
            .map(|(id, raw)| Ok(Note::new(id, Self::decode(raw)?.body)))
            .collect()
    }

    fn all(&self) -> Result<Vec<Note>> {
        self.entries
            .iter()
            .filter_map(|(key, raw)| decode_id(key).map(|id| (id, raw)))
            .map(|(id, raw)| Ok(Note::new(id, Self::decode(raw)?.body)))
            .collect()
    }

    fn bump_sequence(&mut self) -> Result<u64> {
        let current = match self.entries.get(sequence::SEQUENCE_KEY) {
            Some(raw) => sequence::decode_counter(raw)?,
            None => 0,
        };
        let next = sequence::increment(current)?;
        self.entries
            .insert(sequence::SEQUENCE_KEY.to_vec(), sequence::encode_counter(next)?);
        Ok(next)
    }
}
