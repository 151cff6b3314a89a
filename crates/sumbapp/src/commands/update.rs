use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Note, NoteRecord};
use crate::search::SearchIndex;
use crate::store::DataStore;

use super::get::fetch;

/// Replaces the body of an existing note and re-indexes it.
///
/// The store itself happily overwrites missing keys, so the existence check
/// happens here: updating an unknown id fails with `NotFound`.
pub fn run<S: DataStore, I: SearchIndex>(
    store: &mut S,
    index: &mut I,
    id: &str,
    body: String,
) -> Result<CmdResult> {
    let existing = fetch(store, id)?;

    store.put(&existing.id, &NoteRecord::new(body.as_str()))?;
    if let Err(err) = index.index(&existing.id, &body) {
        tracing::warn!(id = %existing.id, error = %err, "record updated but index is stale; `sumb reindex` will repair it");
        return Err(err);
    }
    tracing::info!(id = %existing.id, "note updated");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note {} updated.", existing.id)));
    result.affected_notes.push(Note::new(existing.id, body));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, doctor, get};
    use crate::error::SumbError;
    use crate::search::memory::InMemoryIndex;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn replaces_body_and_index_entry() {
        let mut store = InMemoryStore::new();
        let mut index = InMemoryIndex::new();
        create::run(&mut store, &mut index, "old apples".into()).unwrap();

        run(&mut store, &mut index, "1", "new oranges".into()).unwrap();

        assert_eq!(get::fetch(&store, "1").unwrap().body, "new oranges");
        assert_eq!(index.query("oranges", 10).unwrap(), vec!["1"]);
        assert!(index.query("apples", 10).unwrap().is_empty());
    }

    #[test]
    fn missing_note_is_not_created() {
        let mut store = InMemoryStore::new();
        let mut index = InMemoryIndex::new();

        let err = run(&mut store, &mut index, "4", "ghost".into()).unwrap_err();
        assert!(matches!(err, SumbError::NotFound(_)));
        assert!(store.all().unwrap().is_empty());
        assert!(index.documents().unwrap().is_empty());
    }

    #[test]
    fn index_failure_keeps_new_body_and_leaves_index_outdated() {
        let mut store = InMemoryStore::new();
        let mut index = InMemoryIndex::new();
        create::run(&mut store, &mut index, "draft".into()).unwrap();

        index.fail_writes = true;
        let err = run(&mut store, &mut index, "1", "final".into()).unwrap_err();
        assert!(matches!(err, SumbError::StorageUnavailable(_)));

        assert_eq!(get::fetch(&store, "1").unwrap().body, "final");
        let report = doctor::check(&store, &index).unwrap();
        assert_eq!(report.outdated, vec!["1"]);
        assert!(report.missing_from_index.is_empty());
    }
}
