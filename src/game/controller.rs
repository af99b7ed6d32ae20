//! Game controller
//!
//! Wires input events to the active session, updates the statistics ledger
//! when a game ends and persists every change through the store.

use super::rules::GuessError;
use super::session::{GameSession, GameStatus, Outcome, Submission};
use crate::core::WORD_LENGTH;
use crate::settings::{Settings, SettingsError};
use crate::stats::Statistics;
use crate::storage::records::{RecordStatus, SessionRecord};
use crate::storage::{KeyValueStore, Store};
use crate::wordlists::{Dictionary, DictionaryError};
use rand::Rng;

/// Player input, independent of the front end that produced it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Letter(char),
    Delete,
    Submit,
}

impl InputEvent {
    /// Map a key name as reported by a keyboard or on-screen key
    ///
    /// `Enter` submits, `Backspace`/`Delete`/`Del` deletes, and a single
    /// ASCII letter types it. Anything else is `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Self::Submit),
            "Backspace" | "Delete" | "Del" => Some(Self::Delete),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(Self::Letter(c.to_ascii_lowercase()))
                    }
                    _ => None,
                }
            }
        }
    }
}

/// What an input event did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    LetterAdded(char),
    LetterRemoved,
    /// The event had no effect (full or empty buffer, finished game)
    Ignored,
    /// The guess was refused; nothing changed
    Rejected(GuessError),
    /// A guess was committed
    Scored(Submission),
}

/// Active session plus everything that outlives it
#[derive(Debug)]
pub struct Game<S> {
    dictionary: Dictionary,
    store: Store<S>,
    session: GameSession,
    statistics: Statistics,
    settings: Settings,
    difficulty: f64,
}

impl<S: KeyValueStore> Game<S> {
    /// Load persisted state and resume or start a session
    ///
    /// An in-progress session is resumed if its solution is still in the
    /// dictionary and its rows form a legal game. Otherwise a new secret is
    /// drawn and the fresh session is saved right away.
    ///
    /// # Errors
    /// Returns `DictionaryError::InvalidDifficulty` for a difficulty outside
    /// `(0, 1]`.
    pub fn start<R: Rng + ?Sized>(
        dictionary: Dictionary,
        store: Store<S>,
        difficulty: f64,
        rng: &mut R,
    ) -> Result<Self, DictionaryError> {
        dictionary.secret_pool(difficulty)?;

        let settings = store.load_settings();
        let statistics = store.load_statistics();
        let resumed = store
            .load_session()
            .and_then(|record| resume(&dictionary, &record));

        let mut game = match resumed {
            Some(session) => {
                tracing::info!(
                    "Resumed game at row {} of {}",
                    session.row_index(),
                    super::MAX_ATTEMPTS
                );
                Self {
                    dictionary,
                    store,
                    session,
                    statistics,
                    settings,
                    difficulty,
                }
            }
            None => {
                let secret = dictionary.choose_secret(rng, difficulty)?.clone();
                tracing::info!("Started new game");
                Self {
                    session: GameSession::new(secret),
                    dictionary,
                    store,
                    statistics,
                    settings,
                    difficulty,
                }
            }
        };

        if game.session.row_index() == 0 {
            game.store.save_session(&game.session);
        }

        Ok(game)
    }

    /// Apply one input event
    pub fn handle(&mut self, event: InputEvent) -> GameEvent {
        match event {
            InputEvent::Letter(letter) => {
                if self.session.append_letter(letter) {
                    GameEvent::LetterAdded(letter.to_ascii_lowercase())
                } else {
                    GameEvent::Ignored
                }
            }
            InputEvent::Delete => {
                if self.session.status().is_terminal() || !self.session.delete_letter() {
                    GameEvent::Ignored
                } else {
                    GameEvent::LetterRemoved
                }
            }
            InputEvent::Submit => self.submit(),
        }
    }

    fn submit(&mut self) -> GameEvent {
        if self.session.status().is_terminal() {
            return GameEvent::Ignored;
        }

        let submission = match self
            .session
            .submit_guess(&self.dictionary, self.settings.hard_mode)
        {
            Ok(submission) => submission,
            Err(e) => {
                tracing::debug!("Guess rejected: {e}");
                return GameEvent::Rejected(e);
            }
        };

        match &submission.outcome {
            Outcome::Continue { .. } => {}
            Outcome::Won { attempts } => {
                self.statistics.record_win(*attempts);
                self.store.save_statistics(&self.statistics);
            }
            Outcome::Lost { solution } => {
                tracing::info!("Game lost; the word was {solution}");
                self.statistics.record_loss();
                self.store.save_statistics(&self.statistics);
            }
        }
        self.store.save_session(&self.session);

        GameEvent::Scored(submission)
    }

    /// Type a whole word and submit it
    ///
    /// Anything but exactly five ASCII letters is rejected as incomplete
    /// without touching the session. Otherwise any partially composed guess is
    /// cleared first.
    pub fn play_word(&mut self, word: &str) -> GameEvent {
        if self.session.status().is_terminal() {
            return GameEvent::Ignored;
        }
        if word.len() != WORD_LENGTH || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return GameEvent::Rejected(GuessError::IncompleteGuess);
        }

        while self.session.delete_letter() {}
        for letter in word.chars() {
            self.session.append_letter(letter);
        }
        self.submit()
    }

    /// Start the next game; only allowed once the current one has ended
    ///
    /// Returns `false` and leaves the session alone while a game is running.
    pub fn new_game<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.session.status().is_terminal() {
            return false;
        }

        // Difficulty was validated in `start`
        let Ok(secret) = self.dictionary.choose_secret(rng, self.difficulty) else {
            return false;
        };

        self.session = GameSession::new(secret.clone());
        self.store.save_session(&self.session);
        tracing::info!("Started new game");
        true
    }

    /// Replace the settings and persist them
    ///
    /// # Errors
    /// Returns `SettingsError::HardModeLocked` when turning hard mode on
    /// after the first guess of a running game.
    pub fn set_settings(&mut self, settings: Settings) -> Result<(), SettingsError> {
        if settings.hard_mode
            && !self.settings.hard_mode
            && self.session.status() == GameStatus::InProgress
            && self.session.row_index() > 0
        {
            return Err(SettingsError::HardModeLocked);
        }

        self.settings = settings;
        self.store.save_settings(settings);
        Ok(())
    }

    #[must_use]
    pub const fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub const fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    #[must_use]
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    #[must_use]
    pub const fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    #[must_use]
    pub const fn store(&self) -> &Store<S> {
        &self.store
    }
}

/// Turn a stored record back into a live session, if it is usable
fn resume(dictionary: &Dictionary, record: &SessionRecord) -> Option<GameSession> {
    if record.game_status != RecordStatus::InProgress {
        return None;
    }

    let (solution, guesses) = record
        .decode()
        .inspect_err(|e| tracing::warn!("Discarding saved game: {e}"))
        .ok()?;

    if !dictionary.contains(&solution) {
        tracing::warn!("Discarding saved game: solution is not in the word list");
        return None;
    }

    let session = GameSession::restore(solution, guesses)
        .inspect_err(|e| tracing::warn!("Discarding saved game: {e}"))
        .ok()?;

    if session.status() != GameStatus::InProgress {
        tracing::warn!("Discarding saved game: rows already finish the game");
        return None;
    }

    for (i, row) in session.rows().iter().enumerate() {
        if record.evaluations[i].is_some_and(|stored| stored != *row.evaluation()) {
            tracing::warn!("Stored verdicts for row {} were stale; rescored", i + 1);
        }
    }

    Some(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Evaluation, Word};
    use crate::storage::{MemoryStore, SESSION_KEY};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: &[&str] = &[
        "crane", "trace", "slate", "audio", "robot", "floor", "speed", "empty", "llama", "allow",
    ];

    fn dictionary() -> Dictionary {
        Dictionary::new(words_from_slice(WORDS)).unwrap()
    }

    /// Dictionary whose only secret is `secret`, with the rest as guesses
    fn rigged(secret: &str) -> Dictionary {
        Dictionary::with_answers(words_from_slice(&[secret]), words_from_slice(WORDS)).unwrap()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn game(secret: &str) -> Game<MemoryStore> {
        Game::start(rigged(secret), Store::new(MemoryStore::new()), 1.0, &mut rng()).unwrap()
    }

    #[test]
    fn key_names_map_to_events() {
        assert_eq!(InputEvent::from_key("Enter"), Some(InputEvent::Submit));
        assert_eq!(InputEvent::from_key("Backspace"), Some(InputEvent::Delete));
        assert_eq!(InputEvent::from_key("Del"), Some(InputEvent::Delete));
        assert_eq!(InputEvent::from_key("Q"), Some(InputEvent::Letter('q')));
        assert_eq!(InputEvent::from_key("1"), None);
        assert_eq!(InputEvent::from_key("Tab"), None);
        assert_eq!(InputEvent::from_key(""), None);
    }

    #[test]
    fn invalid_difficulty_rejected() {
        let result = Game::start(dictionary(), Store::new(MemoryStore::new()), 0.0, &mut rng());
        assert!(matches!(result, Err(DictionaryError::InvalidDifficulty(_))));
    }

    #[test]
    fn fresh_game_is_saved_immediately() {
        let game = game("crane");
        let record = game.store().load_session().unwrap();
        assert_eq!(record.game_status, RecordStatus::InProgress);
        assert_eq!(record.solution, "crane");
        assert_eq!(record.row_index, 0);
    }

    #[test]
    fn typing_and_deleting() {
        let mut game = game("crane");
        assert_eq!(game.handle(InputEvent::Delete), GameEvent::Ignored);
        for c in "slatex".chars() {
            game.handle(InputEvent::Letter(c));
        }
        assert_eq!(game.session().buffer(), "slate");
        assert_eq!(game.handle(InputEvent::Letter('x')), GameEvent::Ignored);
        assert_eq!(game.handle(InputEvent::Delete), GameEvent::LetterRemoved);
        assert_eq!(game.session().buffer(), "slat");
        assert_eq!(
            game.handle(InputEvent::Submit),
            GameEvent::Rejected(GuessError::IncompleteGuess)
        );
    }

    #[test]
    fn unknown_word_rejected_without_change() {
        let mut game = game("crane");
        let event = game.play_word("zzzzz");
        assert_eq!(event, GameEvent::Rejected(GuessError::UnknownWord("zzzzz".to_string())));
        assert_eq!(game.session().row_index(), 0);
        assert_eq!(game.session().buffer(), "zzzzz");
    }

    #[test]
    fn malformed_words_rejected_without_using_a_row() {
        let mut game = game("crane");
        for word in ["cranes", "c-r-a-n-e", "cran", "", "crané"] {
            assert_eq!(
                game.play_word(word),
                GameEvent::Rejected(GuessError::IncompleteGuess),
                "{word}"
            );
        }
        assert_eq!(game.session().row_index(), 0);
        assert_eq!(game.statistics().games_played(), 0);

        assert!(matches!(game.play_word("CRANE"), GameEvent::Scored(_)));
        assert_eq!(game.session().row_index(), 1);
    }

    #[test]
    fn six_misses_lose_and_record_failure() {
        let mut game = game("crane");
        for word in ["audio", "robot", "floor", "speed", "empty", "llama"] {
            assert!(matches!(game.play_word(word), GameEvent::Scored(_)));
        }

        assert_eq!(game.session().status(), GameStatus::Lost);
        assert_eq!(game.session().row_index(), 6);
        assert_eq!(game.statistics().failed(), 1);
        assert_eq!(game.statistics().current_streak(), 0);
        assert_eq!(game.store().load_statistics().failed(), 1);

        // Further input is ignored and does not count twice
        assert_eq!(game.play_word("crane"), GameEvent::Ignored);
        assert_eq!(game.statistics().games_played(), 1);
    }

    #[test]
    fn win_on_third_row_updates_histogram() {
        let mut game = game("crane");
        game.play_word("audio");
        game.play_word("trace");
        let event = game.play_word("crane");

        let GameEvent::Scored(submission) = event else {
            panic!("expected a scored row, got {event:?}");
        };
        assert_eq!(submission.outcome, Outcome::Won { attempts: 3 });
        assert_eq!(game.session().status(), GameStatus::Won);
        assert_eq!(game.session().row_index(), 3);
        assert_eq!(game.statistics().wins_on_row(3), 1);
        assert_eq!(game.statistics().current_streak(), 1);
        assert_eq!(game.statistics().last_win_row(), Some(3));

        let saved = game.store().load_session().unwrap();
        assert_eq!(saved.game_status, RecordStatus::Won);
        assert_eq!(game.store().load_statistics(), *game.statistics());
    }

    #[test]
    fn hard_mode_enforced_and_locked_after_first_guess() {
        let mut game = game("crane");
        game.set_settings(Settings {
            hard_mode: true,
            ..Settings::default()
        })
        .unwrap();

        game.play_word("trace");
        assert!(matches!(
            game.play_word("audio"),
            GameEvent::Rejected(GuessError::HardModeViolation { .. })
        ));

        // Turning it off is always allowed, turning it back on is not
        game.set_settings(Settings::default()).unwrap();
        assert_eq!(
            game.set_settings(Settings {
                hard_mode: true,
                ..Settings::default()
            }),
            Err(SettingsError::HardModeLocked)
        );
        assert!(!game.store().load_settings().hard_mode);
    }

    #[test]
    fn new_game_only_after_finish() {
        let mut game = game("crane");
        assert!(!game.new_game(&mut rng()));

        game.play_word("crane");
        assert!(game.new_game(&mut rng()));
        assert_eq!(game.session().status(), GameStatus::InProgress);
        assert_eq!(game.session().row_index(), 0);
        assert_eq!(game.statistics().games_won(), 1);
    }

    #[test]
    fn resume_restores_rows_and_keyboard() {
        let mut first = game("allow");
        first.play_word("llama");
        first.play_word("audio");
        first.handle(InputEvent::Letter('s'));

        let store = Store::new(first.store().backend().clone());
        let resumed = Game::start(rigged("allow"), store, 1.0, &mut rng()).unwrap();

        assert_eq!(resumed.session().secret(), &Word::new("allow").unwrap());
        assert_eq!(resumed.session().rows(), first.session().rows());
        assert_eq!(resumed.session().keyboard(), first.session().keyboard());
        // The composing buffer is not persisted
        assert_eq!(resumed.session().buffer(), "");
    }

    #[test]
    fn finished_game_is_not_resumed() {
        let mut first = game("crane");
        first.play_word("crane");

        let store = Store::new(first.store().backend().clone());
        let next = Game::start(dictionary(), store, 1.0, &mut rng()).unwrap();
        assert_eq!(next.session().row_index(), 0);
        assert_eq!(next.statistics().games_won(), 1);
    }

    #[test]
    fn corrupt_session_starts_fresh() {
        for blob in [
            "{not json",
            r#"{"gameStatus":"IN_PROGRESS","rowIndex":1,"solution":"zzzzz","boardState":["crane","","","","",""]}"#,
            r#"{"gameStatus":"IN_PROGRESS","rowIndex":9,"solution":"crane"}"#,
            r#"{"gameStatus":"IN_PROGRESS","rowIndex":2,"solution":"crane","boardState":["crane","slate","","","",""]}"#,
        ] {
            let mut backend = MemoryStore::new();
            backend.set(SESSION_KEY, blob).unwrap();

            let game = Game::start(dictionary(), Store::new(backend), 1.0, &mut rng()).unwrap();
            assert_eq!(game.session().row_index(), 0, "{blob}");
            assert_eq!(game.session().status(), GameStatus::InProgress);
        }
    }

    #[test]
    fn stale_verdicts_are_rescored() {
        let blob = r#"{
            "boardState": ["trace", "", "", "", "", ""],
            "evaluations": [["correct","correct","correct","correct","absent"], null, null, null, null, null],
            "gameStatus": "IN_PROGRESS",
            "rowIndex": 1,
            "solution": "crane"
        }"#;
        let mut backend = MemoryStore::new();
        backend.set(SESSION_KEY, blob).unwrap();

        let game = Game::start(dictionary(), Store::new(backend), 1.0, &mut rng()).unwrap();
        assert_eq!(game.session().row_index(), 1);
        assert_eq!(
            game.session().rows()[0].evaluation(),
            &Evaluation::parse("-GGYG").unwrap()
        );
    }
}
