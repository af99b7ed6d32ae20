//! Dictionary provider
//!
//! Holds the ordered list of possible secrets and the set of accepted
//! guesses, and picks a secret for each new session.

use super::loader::words_from_slice;
use super::WORDS;
use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Errors building a dictionary or selecting a secret
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DictionaryError {
    #[error("word list contains no valid five-letter words")]
    Empty,

    #[error("difficulty must be in (0, 1], got {0}")]
    InvalidDifficulty(f64),
}

/// Valid guesses plus the ordered list secrets are drawn from
#[derive(Debug, Clone)]
pub struct Dictionary {
    answers: Vec<Word>,
    allowed: FxHashSet<[u8; WORD_LENGTH]>,
}

impl Dictionary {
    /// Build a dictionary where every word is both a guess and a possible secret
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `words` is empty.
    pub fn new(words: Vec<Word>) -> Result<Self, DictionaryError> {
        Self::with_answers(words, std::iter::empty())
    }

    /// Build a dictionary with a separate list of extra accepted guesses
    ///
    /// Answers are always accepted as guesses too.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if `answers` is empty.
    pub fn with_answers(
        answers: Vec<Word>,
        extra_allowed: impl IntoIterator<Item = Word>,
    ) -> Result<Self, DictionaryError> {
        if answers.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let allowed = answers
            .iter()
            .map(|w| *w.chars())
            .chain(extra_allowed.into_iter().map(|w| *w.chars()))
            .collect();

        Ok(Self { answers, allowed })
    }

    /// Dictionary backed by the word list embedded at build time
    ///
    /// # Errors
    /// Only fails if the embedded list is empty.
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(words_from_slice(WORDS))
    }

    /// Possible secrets, in list order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Whether `word` is an accepted guess
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.allowed.contains(word.chars())
    }

    /// Whether `text` (any case) is an accepted guess
    #[must_use]
    pub fn contains_str(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|w| self.contains(&w))
    }

    /// Choose a secret uniformly at random
    ///
    /// `difficulty` restricts the pool to the first `ceil(len × difficulty)`
    /// answers; `1.0` uses the whole list.
    ///
    /// # Errors
    /// Returns `DictionaryError::InvalidDifficulty` unless `0 < difficulty <= 1`.
    pub fn choose_secret<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        difficulty: f64,
    ) -> Result<&Word, DictionaryError> {
        let pool = self.secret_pool(difficulty)?;
        Ok(&pool[rng.random_range(0..pool.len())])
    }

    /// Answers eligible as secrets at the given difficulty
    ///
    /// # Errors
    /// Returns `DictionaryError::InvalidDifficulty` unless `0 < difficulty <= 1`.
    pub fn secret_pool(&self, difficulty: f64) -> Result<&[Word], DictionaryError> {
        if !(difficulty > 0.0 && difficulty <= 1.0) {
            return Err(DictionaryError::InvalidDifficulty(difficulty));
        }

        let size = ((self.answers.len() as f64) * difficulty).ceil() as usize;
        Ok(&self.answers[..size.clamp(1, self.answers.len())])
    }
}
