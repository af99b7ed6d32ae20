//! Persisted record schemas
//!
//! JSON layouts for the session, statistics and settings records. Field names
//! follow the browser game's local-storage format, so blobs written by it load
//! unchanged. Every record carries a `version`; blobs without one are treated
//! as version 1. Missing fields take their defaults.

use crate::core::{Evaluation, Word, WordError};
use crate::game::{GameSession, GameStatus, MAX_ATTEMPTS};
use crate::settings::Settings;
use crate::stats::Statistics;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current schema version of every record
pub const SCHEMA_VERSION: u32 = 1;

const fn schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Records that carry a schema version
pub trait Versioned {
    fn version(&self) -> u32;
}

/// Persisted game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RecordStatus {
    /// No game has been started yet
    #[default]
    #[serde(rename = "")]
    NotStarted,
    #[serde(rename = "IN_PROGRESS")]
    InProgress,
    #[serde(rename = "WIN")]
    Won,
    #[serde(rename = "LOST")]
    Lost,
}

impl From<GameStatus> for RecordStatus {
    fn from(status: GameStatus) -> Self {
        match status {
            GameStatus::InProgress => Self::InProgress,
            GameStatus::Won => Self::Won,
            GameStatus::Lost => Self::Lost,
        }
    }
}

/// Errors decoding a session record into words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("invalid word in record: {0}")]
    InvalidWord(#[from] WordError),

    #[error("row index {0} is out of range")]
    RowIndexOutOfRange(usize),
}

/// Persisted game session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionRecord {
    #[serde(default = "schema_version")]
    pub version: u32,
    pub board_state: [String; MAX_ATTEMPTS],
    pub evaluations: [Option<Evaluation>; MAX_ATTEMPTS],
    pub game_status: RecordStatus,
    /// Number of committed rows
    pub row_index: usize,
    pub solution: String,
}

impl Default for SessionRecord {
    fn default() -> Self {
        Self {
            version: SCHEMA_VERSION,
            board_state: Default::default(),
            evaluations: [None; MAX_ATTEMPTS],
            game_status: RecordStatus::NotStarted,
            row_index: 0,
            solution: String::new(),
        }
    }
}

impl From<&GameSession> for SessionRecord {
    fn from(session: &GameSession) -> Self {
        let mut record = Self {
            game_status: session.status().into(),
            row_index: session.row_index(),
            solution: session.secret().text().to_string(),
            ..Self::default()
        };

        for (i, row) in session.rows().iter().enumerate() {
            record.board_state[i] = row.guess().text().to_string();
            record.evaluations[i] = Some(*row.evaluation());
        }

        record
    }
}

impl SessionRecord {
    /// Decode the solution and the first `row_index` guesses
    ///
    /// # Errors
    /// Returns `RecordError` if the row index is out of range or any word is
    /// malformed.
    pub fn decode(&self) -> Result<(Word, Vec<Word>), RecordError> {
        if self.row_index > MAX_ATTEMPTS {
            return Err(RecordError::RowIndexOutOfRange(self.row_index));
        }

        let solution = Word::new(self.solution.as_str())?;
        let guesses = self.board_state[..self.row_index]
            .iter()
            .map(|text| Word::new(text.as_str()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok((solution, guesses))
    }
}

impl Versioned for SessionRecord {
    fn version(&self) -> u32 {
        self.version
    }
}

/// Per-row win counts plus the failed bucket, keyed `"1"`..`"6"` and `"fail"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuessCounts {
    #[serde(rename = "1")]
    pub one: u32,
    #[serde(rename = "2")]
    pub two: u32,
    #[serde(rename = "3")]
    pub three: u32,
    #[serde(rename = "4")]
    pub four: u32,
    #[serde(rename = "5")]
    pub five: u32,
    #[serde(rename = "6")]
    pub six: u32,
    pub fail: u32,
}

impl GuessCounts {
    const fn wins(&self) -> [u32; MAX_ATTEMPTS] {
        [self.one, self.two, self.three, self.four, self.five, self.six]
    }
}

/// Persisted statistics ledger
///
/// `gamesPlayed`, `gamesWon`, `averageGuesses` and `winPercentage` are written
/// for readers of the blob but ignored on load; they are recomputed from the
/// histogram.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StatisticsRecord {
    #[serde(default = "schema_version")]
    pub version: u32,
    pub games_played: u32,
    pub games_won: u32,
    pub guesses: GuessCounts,
    pub average_guesses: f64,
    pub current_streak: u32,
    pub max_streak: u32,
    pub win_percentage: f64,
    /// Row of the last win, 0 when none
    pub highlight: usize,
}

impl Default for StatisticsRecord {
    fn default() -> Self {
        Self::from(&Statistics::default())
    }
}

impl From<&Statistics> for StatisticsRecord {
    fn from(stats: &Statistics) -> Self {
        let [one, two, three, four, five, six] = *stats.wins_by_row();
        Self {
            version: SCHEMA_VERSION,
            games_played: stats.games_played(),
            games_won: stats.games_won(),
            guesses: GuessCounts {
                one,
                two,
                three,
                four,
                five,
                six,
                fail: stats.failed(),
            },
            average_guesses: stats.average_guesses(),
            current_streak: stats.current_streak(),
            max_streak: stats.max_streak(),
            win_percentage: stats.win_percentage(),
            highlight: stats.last_win_row().unwrap_or(0),
        }
    }
}

impl StatisticsRecord {
    /// Rebuild the ledger from the stored counters
    ///
    /// `None` when the histogram totals do not fit the ledger's counters.
    #[must_use]
    pub fn into_statistics(self) -> Option<Statistics> {
        let Some(played) = self
            .guesses
            .wins()
            .iter()
            .try_fold(self.guesses.fail, |total, &count| total.checked_add(count))
        else {
            tracing::warn!("Stored guess histogram overflows the games counter; ignoring it");
            return None;
        };

        if self.games_played != played {
            tracing::warn!(
                "Stored gamesPlayed {} disagrees with guess histogram; using histogram",
                self.games_played
            );
        }

        Some(Statistics::restore(
            self.guesses.wins(),
            self.guesses.fail,
            self.current_streak,
            self.max_streak,
            (self.highlight > 0).then_some(self.highlight),
        ))
    }
}

impl Versioned for StatisticsRecord {
    fn version(&self) -> u32 {
        self.version
    }
}

/// Persisted settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsRecord {
    #[serde(default = "schema_version")]
    pub version: u32,
    #[serde(flatten)]
    pub settings: Settings,
}

impl Default for SettingsRecord {
    fn default() -> Self {
        Self::from(Settings::default())
    }
}

impl From<Settings> for SettingsRecord {
    fn from(settings: Settings) -> Self {
        Self {
            version: SCHEMA_VERSION,
            settings,
        }
    }
}

impl Versioned for SettingsRecord {
    fn version(&self) -> u32 {
        self.version
    }
}
