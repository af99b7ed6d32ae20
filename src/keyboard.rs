//! Keyboard feedback tracking
//!
//! Aggregates per-letter verdicts across all submitted rows into the
//! strongest verdict ever observed for each letter.

use crate::core::{Evaluation, Verdict, Word};
use rustc_hash::FxHashMap;

/// Letter → strongest observed verdict
///
/// A letter's state can only move up the `absent < present < correct`
/// ordering. Because the state is a pure function of the submitted rows, it
/// can always be rebuilt by replaying them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    letters: FxHashMap<u8, Verdict>,
}

impl KeyboardState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild keyboard state by replaying rows in submission order
    pub fn replay<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a Word, &'a Evaluation)>,
    {
        let mut state = Self::new();
        for (guess, evaluation) in rows {
            state.record(guess, evaluation);
        }
        state
    }

    /// Set or raise the stored verdict for `letter`; never downgrades
    ///
    /// Returns `true` if the stored state changed.
    pub fn upgrade(&mut self, letter: u8, verdict: Verdict) -> bool {
        let letter = letter.to_ascii_lowercase();
        match self.letters.get_mut(&letter) {
            Some(current) if *current >= verdict => false,
            Some(current) => {
                *current = verdict;
                true
            }
            None => {
                self.letters.insert(letter, verdict);
                true
            }
        }
    }

    /// Apply every letter verdict of one submitted row
    pub fn record(&mut self, guess: &Word, evaluation: &Evaluation) {
        for (&letter, &verdict) in guess.chars().iter().zip(evaluation.verdicts()) {
            self.upgrade(letter, verdict);
        }
    }

    /// Strongest verdict observed for `letter`, if any
    #[inline]
    #[must_use]
    pub fn state_of(&self, letter: u8) -> Option<Verdict> {
        self.letters.get(&letter.to_ascii_lowercase()).copied()
    }

    /// Letters revealed as part of the secret (present or correct), sorted
    #[must_use]
    pub fn hinted_letters(&self) -> Vec<u8> {
        let mut hinted: Vec<u8> = self
            .letters
            .iter()
            .filter(|&(_, verdict)| verdict.is_hint())
            .map(|(&letter, _)| letter)
            .collect();
        hinted.sort_unstable();
        hinted
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Verdict::{Absent, Correct, Present};

    #[test]
    fn unset_letters_have_no_state() {
        let keyboard = KeyboardState::new();
        assert_eq!(keyboard.state_of(b'a'), None);
        assert!(keyboard.is_empty());
    }

    #[test]
    fn correct_is_never_overridden() {
        let mut keyboard = KeyboardState::new();
        assert!(keyboard.upgrade(b'e', Correct));
        assert!(!keyboard.upgrade(b'e', Present));
        assert!(!keyboard.upgrade(b'e', Absent));
        assert_eq!(keyboard.state_of(b'e'), Some(Correct));
    }

    #[test]
    fn present_only_overridden_by_correct() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(b'r', Present);
        keyboard.upgrade(b'r', Absent);
        assert_eq!(keyboard.state_of(b'r'), Some(Present));

        keyboard.upgrade(b'r', Correct);
        assert_eq!(keyboard.state_of(b'r'), Some(Correct));
    }

    #[test]
    fn absent_is_upgraded() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(b'l', Absent);
        assert_eq!(keyboard.state_of(b'l'), Some(Absent));
        keyboard.upgrade(b'l', Present);
        assert_eq!(keyboard.state_of(b'l'), Some(Present));
    }

    #[test]
    fn uppercase_letters_share_state() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(b'A', Present);
        assert_eq!(keyboard.state_of(b'a'), Some(Present));
    }

    #[test]
    fn duplicate_letter_in_one_row_keeps_strongest() {
        // "geese" vs "crane": last e correct, the other two absent
        let guess = Word::new("geese").unwrap();
        let secret = Word::new("crane").unwrap();
        let evaluation = Evaluation::calculate(&guess, &secret);

        let mut keyboard = KeyboardState::new();
        keyboard.record(&guess, &evaluation);

        assert_eq!(keyboard.state_of(b'e'), Some(Correct));
        assert_eq!(keyboard.state_of(b'g'), Some(Absent));
    }

    #[test]
    fn replay_matches_incremental() {
        let secret = Word::new("crane").unwrap();
        let rows: Vec<(Word, Evaluation)> = ["audio", "trace", "grate", "crate"]
            .iter()
            .map(|g| {
                let guess = Word::new(*g).unwrap();
                let evaluation = Evaluation::calculate(&guess, &secret);
                (guess, evaluation)
            })
            .collect();

        let mut incremental = KeyboardState::new();
        for (guess, evaluation) in &rows {
            incremental.record(guess, evaluation);
        }

        let replayed = KeyboardState::replay(rows.iter().map(|(g, e)| (g, e)));
        assert_eq!(incremental, replayed);
    }

    #[test]
    fn hinted_letters_sorted() {
        let mut keyboard = KeyboardState::new();
        keyboard.upgrade(b'r', Present);
        keyboard.upgrade(b'a', Correct);
        keyboard.upgrade(b't', Absent);

        assert_eq!(keyboard.hinted_letters(), vec![b'a', b'r']);
    }
}
