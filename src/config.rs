//! Runtime configuration
//!
//! Resolves where data is stored and which word list is used. The CLI fills a
//! `GameConfig` from flags and environment; everything here is plain data so
//! it can be built directly in tests.

use crate::storage::{
    FileStore, KeyValueStore, SESSION_KEY, SETTINGS_KEY, STATISTICS_KEY, Store,
};
use crate::wordlists::loader::load_from_file;
use crate::wordlists::{Dictionary, DictionaryError};
use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Fallback data directory when the platform has no home directory
const FALLBACK_DATA_DIR: &str = "./save_data";

/// Name of the log file written into the data directory
pub const LOG_FILE_NAME: &str = "wordle.log";

/// Where the word list comes from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum WordlistSource {
    /// The list compiled into the binary
    #[default]
    Embedded,
    /// One word per line
    File(PathBuf),
}

impl FromStr for WordlistSource {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "embedded" | "" => Self::Embedded,
            path => Self::File(PathBuf::from(path)),
        })
    }
}

/// Errors preparing the game from configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read word list {}: {source}", path.display())]
    Wordlist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub data_dir: PathBuf,
    pub wordlist: WordlistSource,
    /// Fraction of the answer list secrets are drawn from
    pub difficulty: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            wordlist: WordlistSource::Embedded,
            difficulty: 1.0,
        }
    }
}

impl GameConfig {
    /// Build the dictionary for the configured word list
    ///
    /// # Errors
    /// Returns `ConfigError` if the file cannot be read or holds no valid
    /// words.
    pub fn load_dictionary(&self) -> Result<Dictionary, ConfigError> {
        match &self.wordlist {
            WordlistSource::Embedded => Ok(Dictionary::embedded()?),
            WordlistSource::File(path) => {
                let words = load_from_file(path).map_err(|source| ConfigError::Wordlist {
                    path: path.clone(),
                    source,
                })?;
                Ok(Dictionary::new(words)?)
            }
        }
    }

    /// File-backed store in the data directory
    #[must_use]
    pub fn store(&self) -> Store<FileStore> {
        Store::new(FileStore::new(&self.data_dir))
    }

    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }
}

/// Platform data directory for saved games
///
/// - Linux: `~/.local/share/wordle` (or `$XDG_DATA_HOME/wordle`)
/// - macOS: `~/Library/Application Support/wordle`
/// - Windows: `%APPDATA%\wordle`
/// - Fallback: `./save_data`
#[must_use]
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "wordle")
        .map_or_else(|| PathBuf::from(FALLBACK_DATA_DIR), |dirs| dirs.data_dir().to_path_buf())
}

/// Whether `dir` already holds any saved record
#[must_use]
pub fn has_saved_data(dir: &Path) -> bool {
    let store = FileStore::new(dir);
    [SESSION_KEY, STATISTICS_KEY, SETTINGS_KEY]
        .iter()
        .any(|key| store.get(key).is_ok_and(|value| value.is_some()))
}
