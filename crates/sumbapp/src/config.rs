use crate::error::{Result, SumbError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_LIST_LIMIT: i64 = 10;
const DEFAULT_SEARCH_LIMIT: usize = 100;
const DEFAULT_PREVIEW_CHARS: usize = 200;
const DEFAULT_WRAP_WIDTH: usize = 50;

/// Configuration for sumb, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SumbConfig {
    /// Notes shown by `list` when no count is given
    #[serde(default = "default_list_limit")]
    pub list_limit: i64,

    /// Maximum number of hits requested from the search index
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Body characters shown per note in list and search output
    #[serde(default = "default_preview_chars")]
    pub preview_chars: usize,

    /// Wrap column for note previews
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

fn default_list_limit() -> i64 {
    DEFAULT_LIST_LIMIT
}

fn default_search_limit() -> usize {
    DEFAULT_SEARCH_LIMIT
}

fn default_preview_chars() -> usize {
    DEFAULT_PREVIEW_CHARS
}

fn default_wrap_width() -> usize {
    DEFAULT_WRAP_WIDTH
}

impl Default for SumbConfig {
    fn default() -> Self {
        Self {
            list_limit: DEFAULT_LIST_LIMIT,
            search_limit: DEFAULT_SEARCH_LIMIT,
            preview_chars: DEFAULT_PREVIEW_CHARS,
            wrap_width: DEFAULT_WRAP_WIDTH,
        }
    }
}

impl SumbConfig {
    pub const KEYS: [&'static str; 4] = ["list-limit", "search-limit", "preview-chars", "wrap-width"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(SumbError::Io)?;
        let config: SumbConfig =
            serde_json::from_str(&content).map_err(SumbError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(SumbError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(SumbError::Serialization)?;
        fs::write(config_path, content).map_err(SumbError::Io)?;
        Ok(())
    }

    /// Look up a value by its CLI key (`list-limit`, `wrap-width`, ...)
    pub fn get(&self, key: &str) -> Result<String> {
        match key {
            "list-limit" => Ok(self.list_limit.to_string()),
            "search-limit" => Ok(self.search_limit.to_string()),
            "preview-chars" => Ok(self.preview_chars.to_string()),
            "wrap-width" => Ok(self.wrap_width.to_string()),
            other => Err(unknown_key(other)),
        }
    }

    /// Set a value by its CLI key, validating the number
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "list-limit" => self.list_limit = parse_value(key, value)?,
            "search-limit" => self.search_limit = parse_positive(key, value)?,
            "preview-chars" => self.preview_chars = parse_positive(key, value)?,
            "wrap-width" => self.wrap_width = parse_positive(key, value)?,
            other => return Err(unknown_key(other)),
        }
        Ok(())
    }
}

fn unknown_key(key: &str) -> SumbError {
    SumbError::Config(format!(
        "Unknown config key: {} (expected one of: {})",
        key,
        SumbConfig::KEYS.join(", ")
    ))
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| SumbError::Config(format!("Invalid value for {}: {}", key, value)))
}

fn parse_positive(key: &str, value: &str) -> Result<usize> {
    match parse_value::<usize>(key, value)? {
        0 => Err(SumbError::Config(format!("{} must be greater than zero", key))),
        n => Ok(n),
    }
}
