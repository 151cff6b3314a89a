use serde::{Deserialize, Serialize};

/// A note as seen by callers: decimal id plus body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub body: String,
}

impl Note {
    pub fn new(id: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            body: body.into(),
        }
    }
}

/// The value persisted in the record store. The sequence counter shares this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub body: String,
}

impl NoteRecord {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}
