//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every sumb operation, whatever UI drives it.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Owns** the open record store and search index for one logical operation
//! - **Dispatches** to the matching `commands::*::run`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own and no formatting. Settings and path reporting
//! (`commands::config`, `commands::paths`) need neither store, so callers run
//! them directly without opening the API.
//!
//! ## Resource Scope
//!
//! [`SumbApi::open`] opens both stores. Dropping the API closes them, which
//! releases redb's file lock and tantivy's directory handles on every exit path,
//! errors included. The CLI opens one API per process and performs one operation.
//!
//! ## Generic Over Backends
//!
//! `SumbApi<S: DataStore, I: SearchIndex>`:
//! - Production: `SumbApi<FileStore, FileIndex>`
//! - Testing: `SumbApi<InMemoryStore, InMemoryIndex>`

use crate::commands;
use crate::config::SumbConfig;
use crate::error::Result;
use crate::search::SearchIndex;
use crate::search::fs::FileIndex;
use crate::store::DataStore;
use crate::store::fs::FileStore;

/// The main API facade for sumb operations.
pub struct SumbApi<S: DataStore, I: SearchIndex> {
    store: S,
    index: I,
    search_limit: usize,
}

impl SumbApi<FileStore, FileIndex> {
    /// Opens the on-disk record store and search index under `paths`.
    pub fn open(paths: &commands::SumbPaths, config: &SumbConfig) -> Result<Self> {
        let store = FileStore::open(paths.db_file())?;
        let index = FileIndex::open(paths.index_dir())?;
        Ok(Self::new(store, index).with_search_limit(config.search_limit))
    }
}

impl<S: DataStore, I: SearchIndex> SumbApi<S, I> {
    pub fn new(store: S, index: I) -> Self {
        Self {
            store,
            index,
            search_limit: SumbConfig::default().search_limit,
        }
    }

    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit;
        self
    }

    pub fn create(&mut self, body: String) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, &mut self.index, body)
    }

    pub fn update(&mut self, id: &str, body: String) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, &mut self.index, id, body)
    }

    pub fn delete(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, &mut self.index, id)
    }

    pub fn get_by_id(&self, id: &str) -> Result<commands::CmdResult> {
        commands::get::run(&self.store, id)
    }

    pub fn list_latest(&self, n: i64) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, n)
    }

    pub fn search(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, &self.index, query, self.search_limit)
    }

    pub fn reindex(&mut self) -> Result<commands::CmdResult> {
        commands::reindex::run(&self.store, &mut self.index)
    }

    pub fn doctor(&mut self, fix: bool) -> Result<commands::CmdResult> {
        commands::doctor::run(&self.store, &mut self.index, fix)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, DoctorReport, MessageLevel, SumbPaths};
