//! Guess evaluation against the secret word
//!
//! An `Evaluation` holds one verdict per letter position. Scoring follows
//! Wordle's exact rules, including duplicate letters: exact matches are
//! consumed first, then each remaining guess letter may consume at most one
//! unmatched occurrence in the secret.

use super::Verdict;
use super::word::{WORD_LENGTH, Word};
use serde::{Deserialize, Serialize};

/// Verdicts for the five letters of a submitted guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Evaluation([Verdict; WORD_LENGTH]);

impl Evaluation {
    /// All greens (perfect match)
    pub const SOLVED: Self = Self([Verdict::Correct; WORD_LENGTH]);

    /// Wrap raw verdicts
    #[inline]
    #[must_use]
    pub const fn new(verdicts: [Verdict; WORD_LENGTH]) -> Self {
        Self(verdicts)
    }

    /// Score `guess` against `secret`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches as correct and consume
    ///    those secret positions
    /// 2. Second pass: for every other position, consume one unmatched
    ///    occurrence of the letter in the secret (present), or mark absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Evaluation, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let secret = Word::new("slate").unwrap();
    ///
    /// // C(gray) R(gray) A(green) N(gray) E(green)
    /// let evaluation = Evaluation::calculate(&guess, &secret);
    /// assert_eq!(evaluation.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut result = [Verdict::Absent; WORD_LENGTH];
        // `None` marks a consumed secret position
        let mut unmatched: [Option<u8>; WORD_LENGTH] = (*secret.chars()).map(Some);

        for (i, &letter) in guess.chars().iter().enumerate() {
            if unmatched[i] == Some(letter) {
                result[i] = Verdict::Correct;
                unmatched[i] = None;
            }
        }

        for (i, &letter) in guess.chars().iter().enumerate() {
            if result[i] == Verdict::Correct {
                continue;
            }
            if let Some(slot) = unmatched.iter_mut().find(|slot| **slot == Some(letter)) {
                result[i] = Verdict::Present;
                *slot = None;
            }
        }

        Self(result)
    }

    /// The verdicts in letter order
    #[inline]
    #[must_use]
    pub const fn verdicts(&self) -> &[Verdict; WORD_LENGTH] {
        &self.0
    }

    /// Check if every letter is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Correct).count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_present(&self) -> usize {
        self.0.iter().filter(|&&v| v == Verdict::Present).count()
    }

    /// Parse an evaluation from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut verdicts = [Verdict::Absent; WORD_LENGTH];
        let mut count = 0;

        for ch in s.chars() {
            let slot = verdicts.get_mut(count)?;
            *slot = match ch {
                'G' | 'g' | '🟩' => Verdict::Correct,
                'Y' | 'y' | '🟨' => Verdict::Present,
                '-' | '_' | '⬜' => Verdict::Absent,
                _ => return None,
            };
            count += 1;
        }

        (count == WORD_LENGTH).then_some(Self(verdicts))
    }

    /// Convert the evaluation to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|v| v.emoji()).collect()
    }
}

impl std::str::FromStr for Evaluation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid evaluation string: {s}"))
    }
}
