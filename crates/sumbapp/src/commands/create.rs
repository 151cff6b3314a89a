use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::{Note, NoteRecord};
use crate::search::SearchIndex;
use crate::sequence;
use crate::store::DataStore;

/// Allocates an id, writes the record, then indexes it.
///
/// The two writes are not atomic. If indexing fails the record stays in the
/// store without an index entry and the error is returned; `reindex` repairs it.
pub fn run<S: DataStore, I: SearchIndex>(store: &mut S, index: &mut I, body: String) -> Result<CmdResult> {
    let id = sequence::next_id(store)?;
    store.put(&id, &NoteRecord::new(body.as_str()))?;

    if let Err(err) = index.index(&id, &body) {
        tracing::warn!(id = %id, error = %err, "note stored but not indexed; `sumb reindex` will repair it");
        return Err(err);
    }
    tracing::info!(id = %id, "note created");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Note created with ID: {}", id)));
    result.affected_notes.push(Note::new(id, body));
    Ok(result)
}
