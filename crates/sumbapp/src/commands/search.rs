use crate::commands::CmdResult;
use crate::error::{Result, SumbError};
use crate::model::Note;
use crate::search::SearchIndex;
use crate::store::DataStore;

/// Queries the index and resolves every hit through the record store.
///
/// A hit whose record is gone means the index and store have diverged. That
/// fails the whole call with `IndexInconsistency` rather than dropping the hit.
pub fn run<S: DataStore, I: SearchIndex>(
    store: &S,
    index: &I,
    query: &str,
    limit: usize,
) -> Result<CmdResult> {
    if query.trim().is_empty() {
        return Ok(CmdResult::default());
    }

    let ids = index.query(query, limit)?;
    tracing::debug!(query, hits = ids.len(), "index queried");

    let mut notes = Vec::with_capacity(ids.len());
    for id in ids {
        match store.get(&id) {
            Ok(record) => notes.push(Note::new(id, record.body)),
            // An index id the store cannot even parse is index corruption, not bad input.
            Err(SumbError::NotFound(_) | SumbError::MalformedIdentifier(_)) => {
                return Err(SumbError::IndexInconsistency(id));
            }
            Err(err) => return Err(err),
        }
    }

    Ok(CmdResult::default().with_listed_notes(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, update};
    use crate::search::memory::InMemoryIndex;
    use crate::store::memory::InMemoryStore;

    fn sorted_ids(result: &CmdResult) -> Vec<String> {
        let mut ids: Vec<String> = result.listed_notes.iter().map(|n| n.id.clone()).collect();
        ids.sort();
        ids
    }

    #[test]
    fn finds_matching_notes() {
        let mut store = InMemoryStore::new();
        let mut index = InMemoryIndex::new();
        for body in ["buy milk", "write report", "buy bread"] {
            create::run(&mut store, &mut index, body.into()).unwrap();
        }

        let result = run(&store, &index, "buy", 10).unwrap();
        assert_eq!(sorted_ids(&result), vec!["1", "3"]);
        assert!(result.listed_notes.iter().all(|n| n.body.starts_with("buy")));
    }

    #[test]
    fn returns_current_bodies() {
        let mut store = InMemoryStore::new();
        let mut index = InMemoryIndex::new();
        create::run(&mut store, &mut index, "draft memo".into()).unwrap();
        update::run(&mut store, &mut index, "1", "final memo".into()).unwrap();

        let result = run(&store, &index, "memo", 10).unwrap();
        assert_eq!(result.listed_notes, vec![Note::new("1", "final memo")]);
    }

    #[test]
    fn empty_query_is_empty_result() {
        let mut store = InMemoryStore::new();
        let mut index = InMemoryIndex::new();
        create::run(&mut store, &mut index, "anything".into()).unwrap();

        assert!(run(&store, &index, "", 10).unwrap().listed_notes.is_empty());
        assert!(run(&store, &index, "  \t", 10).unwrap().listed_notes.is_empty());
    }

    #[test]
    fn stale_index_entry_is_reported() {
        let mut store = InMemoryStore::new();
        let mut index = InMemoryIndex::new();
        create::run(&mut store, &mut index, "orphan entry".into()).unwrap();
        store.delete("1").unwrap();

        let err = run(&store, &index, "orphan", 10).unwrap_err();
        assert!(matches!(err, SumbError::IndexInconsistency(id) if id == "1"));
    }

    #[test]
    fn unparsable_index_id_is_an_inconsistency() {
        let store = InMemoryStore::new();
        let mut index = InMemoryIndex::new();
        index.index("not-a-number", "corrupt entry").unwrap();

        let err = run(&store, &index, "corrupt", 10).unwrap_err();
        assert!(matches!(err, SumbError::IndexInconsistency(id) if id == "not-a-number"));
    }

    #[test]
    fn respects_limit() {
        let mut store = InMemoryStore::new();
        let mut index = InMemoryIndex::new();
        for i in 0..5 {
            create::run(&mut store, &mut index, format!("todo {i}")).unwrap();
        }
        assert_eq!(run(&store, &index, "todo", 2).unwrap().listed_notes.len(), 2);
    }
}
