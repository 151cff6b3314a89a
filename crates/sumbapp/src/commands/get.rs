use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::Note;
use crate::store::DataStore;
use crate::store::keys::parse_id;

/// Point lookup through the record store. The search index is never consulted.
pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let note = fetch(store, id)?;
    Ok(CmdResult::default().with_listed_notes(vec![note]))
}

/// Fetches a note, normalizing its id (`"007"` → `"7"`).
pub fn fetch<S: DataStore>(store: &S, id: &str) -> Result<Note> {
    let canonical = parse_id(id)?.to_string();
    let record = store.get(&canonical)?;
    Ok(Note::new(canonical, record.body))
}
