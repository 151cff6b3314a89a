use super::{SearchIndex, sort_ids_numeric};
use crate::error::{Result, SumbError};
use crate::model::Note;
use std::fs;
use std::path::Path;
use tantivy::collector::{DocSetCollector, TopDocs};
use tantivy::directory::MmapDirectory;
use tantivy::query::{AllQuery, QueryParser};
use tantivy::schema::document::Value;
use tantivy::schema::{Field, STORED, STRING, Schema, TEXT};
use tantivy::{Index, IndexReader, IndexWriter, ReloadPolicy, TantivyDocument, Term, doc};

/// Writer heap for a single indexing thread. tantivy rejects budgets below 15 MB.
const WRITER_HEAP_SIZE: usize = 20_000_000;

const ID_FIELD: &str = "id";
const BODY_FIELD: &str = "body";

/// tantivy-backed search index.
///
/// A writer is created per mutation and dropped after its commit, so the
/// directory's writer lock is only held for the duration of one write.
pub struct FileIndex {
    index: Index,
    id: Field,
    body: Field,
}

impl FileIndex {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(SumbError::Io)?;

        let directory = MmapDirectory::open(path)?;
        let index = Index::open_or_create(directory, build_schema())?;

        let schema = index.schema();
        let id = schema.get_field(ID_FIELD)?;
        let body = schema.get_field(BODY_FIELD)?;

        tracing::debug!(path = %path.display(), "opened search index");
        Ok(Self { index, id, body })
    }

    fn writer(&self) -> Result<IndexWriter> {
        Ok(self.index.writer_with_num_threads(1, WRITER_HEAP_SIZE)?)
    }

    fn reader(&self) -> Result<IndexReader> {
        Ok(self
            .index
            .reader_builder()
            .reload_policy(ReloadPolicy::Manual)
            .try_into()?)
    }

    fn commit(mut writer: IndexWriter) -> Result<()> {
        writer.commit()?;
        writer.wait_merging_threads()?;
        Ok(())
    }

    fn id_of(&self, doc: &TantivyDocument) -> Result<String> {
        doc.get_first(self.id)
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| SumbError::StorageUnavailable("indexed document has no id".into()))
    }
}

fn build_schema() -> Schema {
    let mut builder = Schema::builder();
    // Raw, untokenized id so it can be used as a delete term.
    builder.add_text_field(ID_FIELD, STRING | STORED);
    builder.add_text_field(BODY_FIELD, TEXT | STORED);
    builder.build()
}

impl SearchIndex for FileIndex {
    fn index(&mut self, id: &str, body: &str) -> Result<()> {
        let writer = self.writer()?;
        writer.delete_term(Term::from_field_text(self.id, id));
        writer.add_document(doc!(self.id => id, self.body => body))?;
        Self::commit(writer)?;

        tracing::debug!(id, "document indexed");
        Ok(())
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let writer = self.writer()?;
        writer.delete_term(Term::from_field_text(self.id, id));
        Self::commit(writer)?;

        tracing::debug!(id, "document removed from index");
        Ok(())
    }

    fn query(&self, text: &str, limit: usize) -> Result<Vec<String>> {
        if text.trim().is_empty() || limit == 0 {
            return Ok(Vec::new());
        }

        let searcher = self.reader()?.searcher();
        let parser = QueryParser::for_index(&self.index, vec![self.body]);
        let (query, errors) = parser.parse_query_lenient(text);
        if !errors.is_empty() {
            tracing::warn!(query = text, ?errors, "parts of the query were ignored");
        }

        let hits = searcher.search(query.as_ref(), &TopDocs::with_limit(limit))?;
        let mut ids = Vec::with_capacity(hits.len());
        for (score, address) in hits {
            let doc: TantivyDocument = searcher.doc(address)?;
            let id = self.id_of(&doc)?;
            tracing::debug!(id = %id, score, "search hit");
            ids.push(id);
        }
        Ok(ids)
    }

    fn documents(&self) -> Result<Vec<Note>> {
        let searcher = self.reader()?.searcher();
        let addresses = searcher.search(&AllQuery, &DocSetCollector)?;

        let mut notes = Vec::with_capacity(addresses.len());
        for address in addresses {
            let doc: TantivyDocument = searcher.doc(address)?;
            let body = doc
                .get_first(self.body)
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            notes.push(Note::new(self.id_of(&doc)?, body));
        }
        sort_ids_numeric(&mut notes);
        Ok(notes)
    }

    fn rebuild(&mut self, notes: &[Note]) -> Result<()> {
        let writer = self.writer()?;
        writer.delete_all_documents()?;
        for note in notes {
            writer.add_document(doc!(self.id => note.id.as_str(), self.body => note.body.as_str()))?;
        }
        Self::commit(writer)?;

        tracing::debug!(count = notes.len(), "index rebuilt");
        Ok(())
    }
}
