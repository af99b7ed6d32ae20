//! Persistence store
//!
//! Saves and loads the session, statistics and settings records through a
//! key-value backend. The store fails open: any backend or decoding failure
//! is logged and turned into "absent" (loads) or a no-op (saves), so the game
//! keeps running as an unpersisted in-memory session.

mod file;
mod memory;
pub mod records;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use records::{RecordStatus, SCHEMA_VERSION, SessionRecord, SettingsRecord, StatisticsRecord};

use crate::game::GameSession;
use crate::settings::Settings;
use crate::stats::Statistics;
use records::Versioned;
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Key of the session record
pub const SESSION_KEY: &str = "wordle-state";
/// Key of the statistics record
pub const STATISTICS_KEY: &str = "wordle-stats";
/// Key of the settings record
pub const SETTINGS_KEY: &str = "wordle-settings";

/// Errors surfaced by storage backends and record decoding
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported schema version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },
}

/// Durable string key-value storage
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value under `key`; deleting a missing key is not an error
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// Typed, fail-open access to the three persisted records
#[derive(Debug)]
pub struct Store<S> {
    backend: S,
}

impl<S: KeyValueStore> Store<S> {
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the session record; `None` if absent or unreadable
    #[must_use]
    pub fn load_session(&self) -> Option<SessionRecord> {
        self.load_or_warn(SESSION_KEY)
    }

    pub fn save_session(&mut self, session: &GameSession) {
        self.save_or_warn(SESSION_KEY, &SessionRecord::from(session));
    }

    /// Load the statistics ledger; a zeroed ledger if absent or unreadable
    #[must_use]
    pub fn load_statistics(&self) -> Statistics {
        self.load_or_warn::<StatisticsRecord>(STATISTICS_KEY)
            .and_then(StatisticsRecord::into_statistics)
            .unwrap_or_default()
    }

    pub fn save_statistics(&mut self, statistics: &Statistics) {
        self.save_or_warn(STATISTICS_KEY, &StatisticsRecord::from(statistics));
    }

    /// Load settings; defaults if absent or unreadable
    #[must_use]
    pub fn load_settings(&self) -> Settings {
        self.load_or_warn::<SettingsRecord>(SETTINGS_KEY)
            .map(|record| record.settings)
            .unwrap_or_default()
    }

    pub fn save_settings(&mut self, settings: Settings) {
        self.save_or_warn(SETTINGS_KEY, &SettingsRecord::from(settings));
    }

    /// Load and decode a record, checking its schema version
    ///
    /// # Errors
    /// Returns `StorageError` on backend failure, malformed JSON, or a
    /// schema version this build does not understand.
    pub fn try_load<T>(&self, key: &str) -> Result<Option<T>, StorageError>
    where
        T: DeserializeOwned + Versioned,
    {
        let Some(raw) = self.backend.get(key)? else {
            return Ok(None);
        };

        let record: T = serde_json::from_str(&raw)?;
        if record.version() != SCHEMA_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: record.version(),
                expected: SCHEMA_VERSION,
            });
        }

        Ok(Some(record))
    }

    /// Encode and store a record
    ///
    /// # Errors
    /// Returns `StorageError` on encoding or backend failure.
    pub fn try_save<T: Serialize>(&mut self, key: &str, record: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(record)?;
        self.backend.set(key, &raw)
    }

    fn load_or_warn<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned + Versioned,
    {
        match self.try_load(key) {
            Ok(record) => {
                let found = if record.is_some() { "found" } else { "absent" };
                tracing::debug!("Loaded {key}: {found}");
                record
            }
            Err(e) => {
                tracing::warn!("Persistence unavailable for {key}, using defaults: {e}");
                None
            }
        }
    }

    fn save_or_warn<T: Serialize>(&mut self, key: &str, record: &T) {
        match self.try_save(key, record) {
            Ok(()) => tracing::debug!("Saved {key}"),
            Err(e) => tracing::warn!("Persistence unavailable, {key} not saved: {e}"),
        }
    }
}
