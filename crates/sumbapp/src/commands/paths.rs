use crate::commands::{CmdResult, SumbPaths};

/// Where the record store, search index and config live.
pub fn run(paths: &SumbPaths) -> CmdResult {
    CmdResult {
        paths: vec![
            ("store".to_string(), paths.db_file()),
            ("index".to_string(), paths.index_dir()),
            ("config".to_string(), paths.config_dir().join("config.json")),
        ],
        ..Default::default()
    }
}
