//! Single game session
//!
//! A session moves from `InProgress` to exactly one of `Won` or `Lost` and
//! never leaves a terminal state. The row index always equals the number of
//! committed rows; it is not advanced past the row that ended the game.

use super::rules::{GuessError, validate_guess};
use crate::core::{Evaluation, WORD_LENGTH, Word};
use crate::keyboard::KeyboardState;
use crate::wordlists::Dictionary;
use thiserror::Error;

/// Number of guesses allowed per game
pub const MAX_ATTEMPTS: usize = 6;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// A submitted guess and its verdicts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    guess: Word,
    evaluation: Evaluation,
}

impl Row {
    /// Score `guess` against `secret`
    #[must_use]
    pub fn score(guess: Word, secret: &Word) -> Self {
        let evaluation = Evaluation::calculate(&guess, secret);
        Self { guess, evaluation }
    }

    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    #[must_use]
    pub const fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }
}

/// What happened to the session after an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Game continues with this many attempts left
    Continue { remaining: usize },
    /// Secret found on row `attempts` (1-based)
    Won { attempts: usize },
    /// Attempts exhausted; the secret is revealed
    Lost { solution: Word },
}

impl Outcome {
    /// Whether the guess ended the game
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Continue { .. })
    }
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub row: Row,
    pub outcome: Outcome,
}

/// Reasons persisted rows cannot be turned back into a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResumeError {
    #[error("{0} rows exceed the six allowed")]
    TooManyRows(usize),

    #[error("row {0} was played after the secret had been found")]
    PlayedPastWin(usize),
}

/// State of one game: secret, committed rows, composing buffer and status
#[derive(Debug, Clone)]
pub struct GameSession {
    secret: Word,
    rows: Vec<Row>,
    buffer: String,
    keyboard: KeyboardState,
    status: GameStatus,
}

impl GameSession {
    /// Start a fresh session for `secret`
    #[must_use]
    pub fn new(secret: Word) -> Self {
        Self {
            secret,
            rows: Vec::with_capacity(MAX_ATTEMPTS),
            buffer: String::with_capacity(WORD_LENGTH),
            keyboard: KeyboardState::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Rebuild a session from previously submitted guesses
    ///
    /// Rows are re-scored against `secret` and replayed into the keyboard
    /// state, so the result is identical to having played them live. The
    /// status is derived from the rows.
    ///
    /// # Errors
    /// Returns `ResumeError` if the guesses could not have come from a legal
    /// game.
    pub fn restore(secret: Word, guesses: Vec<Word>) -> Result<Self, ResumeError> {
        if guesses.len() > MAX_ATTEMPTS {
            return Err(ResumeError::TooManyRows(guesses.len()));
        }

        let rows: Vec<Row> = guesses
            .into_iter()
            .map(|guess| Row::score(guess, &secret))
            .collect();

        if let Some(position) = rows.iter().position(|row| row.evaluation.is_solved())
            && position + 1 < rows.len()
        {
            return Err(ResumeError::PlayedPastWin(position + 2));
        }

        let keyboard = KeyboardState::replay(rows.iter().map(|row| (&row.guess, &row.evaluation)));
        let status = match rows.last() {
            Some(row) if row.evaluation.is_solved() => GameStatus::Won,
            _ if rows.len() == MAX_ATTEMPTS => GameStatus::Lost,
            _ => GameStatus::InProgress,
        };

        Ok(Self {
            secret,
            rows,
            buffer: String::with_capacity(WORD_LENGTH),
            keyboard,
            status,
        })
    }

    /// Append a letter to the guess being composed
    ///
    /// No-op (returns `false`) when the buffer is full, the session is over,
    /// or `letter` is not an ASCII letter.
    pub fn append_letter(&mut self, letter: char) -> bool {
        if self.status.is_terminal()
            || self.buffer.len() >= WORD_LENGTH
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }
        self.buffer.push(letter.to_ascii_lowercase());
        true
    }

    /// Remove the last composed letter; no-op (returns `false`) when empty
    pub fn delete_letter(&mut self) -> bool {
        self.buffer.pop().is_some()
    }

    /// Score the composed guess and commit it as a new row
    ///
    /// # Errors
    /// Returns `GuessError` if the guess is rejected; the session is left
    /// unchanged, including the buffer.
    pub fn submit_guess(
        &mut self,
        dictionary: &Dictionary,
        hard_mode: bool,
    ) -> Result<Submission, GuessError> {
        if self.status.is_terminal() {
            return Err(GuessError::IncompleteGuess);
        }

        let guess = validate_guess(&self.buffer, dictionary, &self.keyboard, hard_mode)?;
        let row = Row::score(guess, &self.secret);

        self.keyboard.record(&row.guess, &row.evaluation);
        self.rows.push(row.clone());
        self.buffer.clear();

        let outcome = if row.evaluation.is_solved() {
            self.status = GameStatus::Won;
            Outcome::Won {
                attempts: self.rows.len(),
            }
        } else if self.remaining_attempts() == 0 {
            self.status = GameStatus::Lost;
            Outcome::Lost {
                solution: self.secret.clone(),
            }
        } else {
            Outcome::Continue {
                remaining: self.remaining_attempts(),
            }
        };

        tracing::debug!(
            "Row {}: {} {} -> {:?}",
            self.rows.len(),
            row.guess,
            row.evaluation.to_emoji(),
            self.status
        );

        Ok(Submission { row, outcome })
    }

    #[must_use]
    pub const fn secret(&self) -> &Word {
        &self.secret
    }

    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Letters composed so far for the next guess
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    #[must_use]
    pub const fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of committed rows
    #[must_use]
    pub fn row_index(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        MAX_ATTEMPTS - self.rows.len()
    }
}
