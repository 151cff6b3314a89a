use super::DataStore;
use super::keys::{decode_id, encode_id};
use crate::error::{Result, SumbError};
use crate::model::{Note, NoteRecord};
use crate::sequence;
use redb::{Database, ReadableTable, TableDefinition};
use std::fs;
use std::path::Path;

const NOTES: TableDefinition<&[u8], &[u8]> = TableDefinition::new("notes");

/// redb-backed record store.
///
/// redb takes an exclusive lock on the database file for as long as the
/// [`Database`] is open, so a second process opening the same file fails with
/// `StorageUnavailable` instead of racing. The lock is released on drop.
pub struct FileStore {
    db: Database,
}

impl FileStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(SumbError::Io)?;
        }

        let db = Database::create(path)?;

        // Create the table up front so read transactions never see it missing.
        let txn = db.begin_write()?;
        txn.open_table(NOTES)?;
        txn.commit()?;

        tracing::debug!(path = %path.display(), "opened record store");
        Ok(Self { db })
    }
}

fn decode_record(raw: &[u8]) -> Result<NoteRecord> {
    serde_json::from_slice(raw).map_err(SumbError::Serialization)
}

impl DataStore for FileStore {
    fn put(&mut self, id: &str, record: &NoteRecord) -> Result<()> {
        let key = encode_id(id)?;
        let value = serde_json::to_vec(record)?;

        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(NOTES)?;
            table.insert(key.as_slice(), value.as_slice())?;
        }
        txn.commit()?;

        tracing::debug!(id, "record written");
        Ok(())
    }

    fn get(&self, id: &str) -> Result<NoteRecord> {
        let key = encode_id(id)?;

        let txn = self.db.begin_read()?;
        let table = txn.open_table(NOTES)?;
        let value = table
            .get(key.as_slice())?
            .ok_or_else(|| SumbError::NotFound(id.to_string()))?;
        decode_record(value.value())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let key = encode_id(id)?;

        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(NOTES)?;
            table.remove(key.as_slice())?;
        }
        txn.commit()?;

        tracing::debug!(id, "record removed");
        Ok(())
    }

    fn scan_latest(&self, limit: usize) -> Result<Vec<Note>> {
        let mut notes = Vec::new();
        if limit == 0 {
            return Ok(notes);
        }

        let txn = self.db.begin_read()?;
        let table = txn.open_table(NOTES)?;
        for entry in table.iter()?.rev() {
            let (key, value) = entry?;
            let Some(id) = decode_id(key.value()) else {
                continue;
            };
            let record = decode_record(value.value())?;
            notes.push(Note::new(id, record.body));
            if notes.len() >= limit {
                break;
            }
        }

        Ok(notes)
    }

    fn all(&self) -> Result<Vec<Note>> {
        let txn = self.db.begin_read()?;
        let table = txn.open_table(NOTES)?;

        let mut notes = Vec::new();
        for entry in table.iter()? {
            let (key, value) = entry?;
            if let Some(id) = decode_id(key.value()) {
                let record = decode_record(value.value())?;
                notes.push(Note::new(id, record.body));
            }
        }
        Ok(notes)
    }

    fn bump_sequence(&mut self) -> Result<u64> {
        let txn = self.db.begin_write()?;
        let next = {
            let mut table = txn.open_table(NOTES)?;
            let current = match table.get(sequence::SEQUENCE_KEY)? {
                Some(raw) => sequence::decode_counter(raw.value())?,
                None => 0,
            };
            let next = sequence::increment(current)?;
            let encoded = sequence::encode_counter(next)?;
            table.insert(sequence::SEQUENCE_KEY, encoded.as_slice())?;
            next
        };
        txn.commit()?;
        Ok(next)
    }
}
