use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::search::SearchIndex;
use crate::store::DataStore;

/// Throws the index away and rebuilds it from the record store.
pub fn run<S: DataStore, I: SearchIndex>(store: &S, index: &mut I) -> Result<CmdResult> {
    let count = rebuild(store, index)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Reindexed {} note(s).", count)));
    Ok(result)
}

pub(super) fn rebuild<S: DataStore, I: SearchIndex>(store: &S, index: &mut I) -> Result<usize> {
    let notes = store.all()?;
    index.rebuild(&notes)?;
    tracing::info!(count = notes.len(), "search index rebuilt from record store");
    Ok(notes.len())
}
