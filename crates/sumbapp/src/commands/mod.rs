use crate::config::SumbConfig;
use crate::error::{Result, SumbError};
use crate::model::Note;
use directories::BaseDirs;
use std::path::{Path, PathBuf};

pub mod config;
pub mod create;
pub mod delete;
pub mod doctor;
pub mod get;
pub mod list;
pub mod paths;
pub mod reindex;
pub mod search;
pub mod update;

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "SUMB_HOME";

const DATA_DIR_NAME: &str = ".sumb";
const DB_FILENAME: &str = "sumb.db";
const INDEX_DIRNAME: &str = "sumb.index";

/// On-disk locations of everything sumb persists.
#[derive(Debug, Clone)]
pub struct SumbPaths {
    pub root: PathBuf,
}

impl SumbPaths {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    /// `$SUMB_HOME` when set, otherwise `~/.sumb`.
    pub fn resolve() -> Result<Self> {
        if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::new(home));
        }
        let dirs = BaseDirs::new().ok_or_else(|| {
            SumbError::StorageUnavailable("could not determine the home directory".to_string())
        })?;
        Ok(Self::new(dirs.home_dir().join(DATA_DIR_NAME)))
    }

    pub fn db_file(&self) -> PathBuf {
        self.root.join(DB_FILENAME)
    }

    pub fn index_dir(&self) -> PathBuf {
        self.root.join(INDEX_DIRNAME)
    }

    pub fn config_dir(&self) -> &Path {
        &self.root
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Differences between the record store and the search index.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DoctorReport {
    /// Records with no index entry (e.g. a create whose index write failed).
    pub missing_from_index: Vec<String>,
    /// Index entries whose record no longer exists.
    pub missing_from_store: Vec<String>,
    /// Index entries whose text differs from the record body.
    pub outdated: Vec<String>,
    /// Set when the index was rebuilt as part of the check.
    pub reindexed: Option<usize>,
}

impl DoctorReport {
    pub fn is_consistent(&self) -> bool {
        self.missing_from_index.is_empty()
            && self.missing_from_store.is_empty()
            && self.outdated.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_notes: Vec<Note>,
    pub listed_notes: Vec<Note>,
    pub paths: Vec<(String, PathBuf)>,
    pub config: Option<SumbConfig>,
    pub doctor: Option<DoctorReport>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_notes(mut self, notes: Vec<Note>) -> Self {
        self.affected_notes = notes;
        self
    }

    pub fn with_listed_notes(mut self, notes: Vec<Note>) -> Self {
        self.listed_notes = notes;
        self
    }

    pub fn with_config(mut self, config: SumbConfig) -> Self {
        self.config = Some(config);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_live_under_root() {
        let paths = SumbPaths::new("/tmp/sumb-test");
        assert_eq!(paths.db_file(), PathBuf::from("/tmp/sumb-test/sumb.db"));
        assert_eq!(paths.index_dir(), PathBuf::from("/tmp/sumb-test/sumb.index"));
        assert_eq!(paths.config_dir(), Path::new("/tmp/sumb-test"));
    }
}
