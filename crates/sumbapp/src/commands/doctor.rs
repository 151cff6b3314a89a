use crate::commands::{CmdMessage, CmdResult, DoctorReport};
use crate::error::Result;
use crate::search::SearchIndex;
use crate::store::DataStore;
use std::collections::BTreeMap;

/// Compares the record store with the search index. With `fix`, rebuilds the
/// index from the store when they disagree.
pub fn run<S: DataStore, I: SearchIndex>(store: &S, index: &mut I, fix: bool) -> Result<CmdResult> {
    let mut report = check(store, index)?;
    let mut result = CmdResult::default();

    if report.is_consistent() {
        result.add_message(CmdMessage::success("No inconsistencies found."));
        result.doctor = Some(report);
        return Ok(result);
    }

    result.add_message(CmdMessage::warning("Inconsistencies found:"));
    if !report.missing_from_index.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "  - {} note(s) missing from the search index: {}",
            report.missing_from_index.len(),
            report.missing_from_index.join(", ")
        )));
    }
    if !report.missing_from_store.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "  - {} index entr(ies) without a note: {}",
            report.missing_from_store.len(),
            report.missing_from_store.join(", ")
        )));
    }
    if !report.outdated.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "  - {} index entr(ies) out of date: {}",
            report.outdated.len(),
            report.outdated.join(", ")
        )));
    }

    if fix {
        let count = super::reindex::rebuild(store, index)?;
        report.reindexed = Some(count);
        result.add_message(CmdMessage::success(format!(
            "Rebuilt the search index from {} note(s).",
            count
        )));
    } else {
        result.add_message(CmdMessage::info("Run `sumb doctor --fix` to rebuild the index."));
    }

    result.doctor = Some(report);
    Ok(result)
}

pub fn check<S: DataStore, I: SearchIndex>(store: &S, index: &I) -> Result<DoctorReport> {
    let records: BTreeMap<String, String> = store.all()?.into_iter().map(|n| (n.id, n.body)).collect();
    let indexed: BTreeMap<String, String> =
        index.documents()?.into_iter().map(|n| (n.id, n.body)).collect();

    let mut report = DoctorReport::default();
    for (id, body) in &records {
        match indexed.get(id) {
            None => report.missing_from_index.push(id.clone()),
            Some(text) if text != body => report.outdated.push(id.clone()),
            Some(_) => {}
        }
    }
    report.missing_from_store = indexed
        .keys()
        .filter(|id| !records.contains_key(*id))
        .cloned()
        .collect();

    tracing::debug!(
        records = records.len(),
        indexed = indexed.len(),
        consistent = report.is_consistent(),
        "consistency check"
    );
    Ok(report)
}
