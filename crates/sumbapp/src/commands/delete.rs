use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::SearchIndex;
use crate::store::DataStore;

use super::get::fetch;

/// Removes a note from the record store, then from the search index.
pub fn run<S: DataStore, I: SearchIndex>(store: &mut S, index: &mut I, id: &str) -> Result<CmdResult> {
    let note = fetch(store, id)?;

    store.delete(&note.id)?;
    if let Err(err) = index.delete(&note.id) {
        tracing::warn!(id = %note.id, error = %err, "record deleted but still indexed; `sumb reindex` will repair it");
        return Err(err);
    }
    tracing::info!(id = %note.id, "note deleted");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Note with ID {} deleted successfully.",
        note.id
    )));
    result.affected_notes.push(note);
    Ok(result)
}
