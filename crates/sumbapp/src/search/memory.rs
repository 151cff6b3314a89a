use super::{SearchIndex, sort_ids_numeric};
use crate::error::{Result, SumbError};
use crate::model::Note;
use std::collections::{BTreeMap, BTreeSet};

/// In-memory search index for tests.
///
/// Matches any query term against the lowercased words of each body and ranks
/// by the number of distinct terms matched. Setting `fail_writes` makes every
/// mutation fail, which is how tests reach the record-written/index-failed path.
#[derive(Debug, Default)]
pub struct InMemoryIndex {
    docs: BTreeMap<String, String>,
    pub fail_writes: bool,
}

impl InMemoryIndex {
    pub fn new() -> Self {
        Self::default()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(SumbError::StorageUnavailable(
                "index is not writable".to_string(),
            ));
        }
        Ok(())
    }
}

fn terms(text: &str) -> BTreeSet<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

impl SearchIndex for InMemoryIndex {
    fn index(&mut self, id: &str, body: &str) -> Result<()> {
        self.check_writable()?;
        self.docs.insert(id.to_string(), body.to_string());
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        self.check_writable()?;
        self.docs.remove(id);
        Ok(())
    }

    fn query(&self, text: &str, limit: usize) -> Result<Vec<String>> {
        let wanted = terms(text);
        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        let mut hits: Vec<(usize, &String)> = self
            .docs
            .iter()
            .filter_map(|(id, body)| {
                let matched = terms(body).intersection(&wanted).count();
                (matched > 0).then_some((matched, id))
            })
            .collect();
        hits.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(hits
            .into_iter()
            .take(limit)
            .map(|(_, id)| id.clone())
            .collect())
    }

    fn documents(&self) -> Result<Vec<Note>> {
        let mut notes: Vec<Note> = self
            .docs
            .iter()
            .map(|(id, body)| Note::new(id.clone(), body.clone()))
            .collect();
        sort_ids_numeric(&mut notes);
        Ok(notes)
    }

    fn rebuild(&mut self, notes: &[Note]) -> Result<()> {
        self.check_writable()?;
        self.docs = notes
            .iter()
            .map(|n| (n.id.clone(), n.body.clone()))
            .collect();
        Ok(())
    }
}
