use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// The `n` most recent notes, newest first. `n <= 0` is an empty listing.
pub fn run<S: DataStore>(store: &S, n: i64) -> Result<CmdResult> {
    if n <= 0 {
        return Ok(CmdResult::default());
    }
    let limit = usize::try_from(n).unwrap_or(usize::MAX);
    let notes = store.scan_latest(limit)?;
    Ok(CmdResult::default().with_listed_notes(notes))
}
